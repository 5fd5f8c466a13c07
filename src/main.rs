use std::env::args_os;
use std::process::ExitCode;

use huffman_code_table::{generate_code_tables, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match generate_code_tables(&arguments) {
        Ok(reports) => {
            for report in reports {
                println!(
                    "{} -> {}",
                    report.input_file.display(),
                    report.output_file.display()
                );
            }
            println!("Code tables generated");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Code table generation failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
