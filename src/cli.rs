use crate::huffman::{SingleSymbolPolicy, TableOrder};
use crate::Arguments;
use clap::{
    arg, crate_description, crate_name, crate_version, value_parser, Arg, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_files_argument(command);
        let command = Self::register_output_directory_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_table_order_argument(command);
        Self::register_single_symbol_policy_argument(command)
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_table_order_argument(command: Command) -> Command {
        command.arg(Self::create_table_order_argument())
    }

    fn register_single_symbol_policy_argument(command: Command) -> Command {
        command.arg(Self::create_single_symbol_policy_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .about(crate_description!())
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Paths of the files whose byte frequencies are encoded")
            .value_name("INPUT_FILE")
            .num_args(1..)
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_directory <DIR> "Directory receiving one <INPUT_FILE>.codes per input")
            .default_value(".")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_table_order_argument() -> Arg {
        arg!(table_order: -s --sort <ORDER> "Order of the code table entries")
            .default_value("Traversal")
            .value_parser(value_parser!(TableOrder))
    }

    fn create_single_symbol_policy_argument() -> Arg {
        arg!(single_symbol_policy: -p --single_symbol_policy <POLICY> "Code of an input consisting of a single distinct byte")
            .default_value("OneBit")
            .value_parser(value_parser!(SingleSymbolPolicy))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_files: Self::extract_input_files_argument(matches),
            output_directory: Self::extract_output_directory_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            table_order: Self::extract_table_order_argument(matches),
            single_symbol_policy: Self::extract_single_symbol_policy_argument(matches),
        }
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .expect("Required argument input_files not provided")
            .cloned()
            .collect()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_directory")
            .expect("Output directory must be provided, but was unset.")
            .clone()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_table_order_argument(matches: &ArgMatches) -> TableOrder {
        matches
            .get_one::<TableOrder>("table_order")
            .expect("Table order must be provided, but was unset.")
            .to_owned()
    }

    fn extract_single_symbol_policy_argument(matches: &ArgMatches) -> SingleSymbolPolicy {
        matches
            .get_one::<SingleSymbolPolicy>("single_symbol_policy")
            .expect("Single symbol policy must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, SingleSymbolPolicy, TableOrder};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_single_input_file_argument() {
        let input_file_name = "testfile.txt";
        let command = Command::new("test");
        let command = CLIParser::register_input_files_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_files = CLIParser::extract_input_files_argument(&matches);
        assert_eq!(input_files.len(), 1);
        assert_eq!(input_files[0].file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_multiple_input_files_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_files_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "one.txt", "two.bin", "three"]);
        let input_files = CLIParser::extract_input_files_argument(&matches);
        let names: Vec<&str> = input_files.iter().map(|p| p.to_str().unwrap()).collect();
        assert_eq!(names, vec!["one.txt", "two.bin", "three"]);
    }

    #[test]
    fn parse_missing_input_file_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_files_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        } else {
            panic!("Missing input file not detected");
        }
    }

    #[test]
    fn parse_output_directory_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_output_directory_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--output_directory", "/tmp/out"]);
        let output_directory = CLIParser::extract_output_directory_argument(&matches);
        assert_eq!(output_directory.to_str().unwrap(), "/tmp/out");
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        let expected = 5;
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_table_order_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_table_order_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--sort", "Symbol"]);
        let actual = CLIParser::extract_table_order_argument(&matches);
        assert_eq!(actual, TableOrder::Symbol);
    }

    #[test]
    fn parse_table_order_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_table_order_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-s", "Frequency"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for table order not detected");
        }
    }

    #[test]
    fn parse_single_symbol_policy_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_single_symbol_policy_argument(command);
        let matches = command.get_matches_from(vec![
            PROGRAM_NAME_ARGUMENT,
            "--single_symbol_policy",
            "ZeroLength",
        ]);
        let actual = CLIParser::extract_single_symbol_policy_argument(&matches);
        assert_eq!(actual, SingleSymbolPolicy::ZeroLength);
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.txt";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, &input_file_path, "-t", "8"]);
        assert_eq!(
            arguments.input_files[0].file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.output_directory.to_str().unwrap(),
            ".",
            "output_directory does not match"
        );
        assert_eq!(
            arguments.number_of_threads, 8,
            "number_of_threads does not match"
        );
        assert_eq!(
            arguments.table_order,
            TableOrder::Traversal,
            "table_order does not match"
        );
        assert_eq!(
            arguments.single_symbol_policy,
            SingleSymbolPolicy::OneBit,
            "single_symbol_policy does not match"
        );
    }
}
