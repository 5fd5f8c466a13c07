use std::{
    collections::HashSet,
    fs::{File, OpenOptions},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    sync::mpsc,
};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{CodeTable, HuffmanTree, SingleSymbolPolicy, SymbolFrequency, TableOrder};
use tally::ByteFrequencyCounter;
use threadpool::ThreadPool;

mod cli;
pub mod error;
pub mod huffman;
mod logger;
pub mod tally;

pub type Result<T> = std::result::Result<T, error::Error>;

const OUTPUT_FILE_EXTENSION: &str = "codes";

pub struct Arguments {
    input_files: Vec<PathBuf>,
    output_directory: PathBuf,
    number_of_threads: usize,
    table_order: TableOrder,
    single_symbol_policy: SingleSymbolPolicy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub table_order: TableOrder,
    pub single_symbol_policy: SingleSymbolPolicy,
}

impl From<&Arguments> for TableOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            table_order: value.table_order,
            single_symbol_policy: value.single_symbol_policy,
        }
    }
}

#[derive(Debug)]
pub struct CodeTableReport {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub symbol_count: usize,
    pub max_code_length: usize,
    pub average_code_length: f64,
}

fn path_to_string(file_path: &Path) -> String {
    file_path.to_string_lossy().into_owned()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_to_string(file_path), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(path_to_string(file_path), e))
}

fn output_file_path(input_file: &Path, output_directory: &Path) -> Result<PathBuf> {
    let mut file_name = input_file
        .file_name()
        .ok_or_else(|| Error::InvalidInputFileName(path_to_string(input_file)))?
        .to_owned();
    file_name.push(".");
    file_name.push(OUTPUT_FILE_EXTENSION);
    Ok(output_directory.join(file_name))
}

fn ensure_distinct_output_files(
    input_files: &[PathBuf],
    output_directory: &Path,
) -> Result<()> {
    let mut output_files = HashSet::with_capacity(input_files.len());
    for input_file in input_files {
        let output_file = output_file_path(input_file, output_directory)?;
        if !output_files.insert(output_file.clone()) {
            return Err(Error::DuplicateOutputFile(path_to_string(&output_file)));
        }
    }
    Ok(())
}

fn count_symbols(input_file: &Path) -> Result<Vec<SymbolFrequency>> {
    let file = open_input_file(input_file)?;
    let mut counter = ByteFrequencyCounter::new();
    io::copy(&mut BufReader::new(file), &mut counter)
        .map_err(|e| Error::FailedToReadInputFile(path_to_string(input_file), e))?;
    Ok(counter.to_symbol_frequencies())
}

fn write_code_table(table: &CodeTable, output_file: &Path) -> Result<()> {
    let file = open_output_file(output_file)?;
    let mut writer = BufWriter::new(file);
    table
        .write_to(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::FailedToWriteCodeTable(path_to_string(output_file), e))
}

/// Builds the Huffman tree of the given alphabet and derives its code table.
pub fn build_code_table(
    symbols_and_frequencies: &[SymbolFrequency],
    options: &TableOptions,
) -> Result<CodeTable> {
    let tree = HuffmanTree::new(symbols_and_frequencies)?;
    log::debug!(
        "huffman tree over {} symbols with depth {}\n{}",
        tree.leaf_count(),
        tree.max_depth(),
        tree
    );
    let mut table = CodeTable::new(&tree, options.single_symbol_policy);
    if options.table_order == TableOrder::Symbol {
        table.sort_by_symbol();
    }
    Ok(table)
}

/// Tallies the bytes of `input_file` and writes their code table to
/// `<output_directory>/<file name>.codes`.
pub fn generate_code_table(
    input_file: &Path,
    output_directory: &Path,
    options: &TableOptions,
) -> Result<CodeTableReport> {
    let output_file = output_file_path(input_file, output_directory)?;
    let symbols_and_frequencies = count_symbols(input_file)?;
    if symbols_and_frequencies.is_empty() {
        return Err(Error::InputFileIsEmpty(path_to_string(input_file)));
    }
    let table = build_code_table(&symbols_and_frequencies, options)?;
    logger::log_code_table(&path_to_string(input_file), &table);
    write_code_table(&table, &output_file)?;

    let report = CodeTableReport {
        input_file: input_file.to_owned(),
        output_file,
        symbol_count: table.len(),
        max_code_length: table.max_code_length(),
        average_code_length: table.average_code_length(&symbols_and_frequencies),
    };
    log::info!(
        "{}: {} symbols, longest code {} bits, {:.3} bits per byte on average",
        path_to_string(&report.input_file),
        report.symbol_count,
        report.max_code_length,
        report.average_code_length
    );
    Ok(report)
}

/// Processes every input file as an independent job on a thread pool. Reports
/// come back in input order; the first failure is returned after all jobs ran.
/// Input files sharing a file name are rejected before any job starts, since
/// their code tables would land in the same output file.
pub fn generate_code_tables(arguments: &Arguments) -> Result<Vec<CodeTableReport>> {
    ensure_distinct_output_files(&arguments.input_files, &arguments.output_directory)?;
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let options = TableOptions::from(arguments);
    let (sender, receiver) = mpsc::channel();

    for (position, input_file) in arguments.input_files.iter().enumerate() {
        let sender = sender.clone();
        let input_file = input_file.clone();
        let output_directory = arguments.output_directory.clone();
        threadpool.execute(move || {
            let result = generate_code_table(&input_file, &output_directory, &options);
            let _ = sender.send((position, result));
        });
    }
    drop(sender);

    let mut results: Vec<Option<Result<CodeTableReport>>> =
        arguments.input_files.iter().map(|_| None).collect();
    for (position, result) in receiver {
        results[position] = Some(result);
    }

    let results: Vec<Result<CodeTableReport>> = results
        .into_iter()
        .zip(&arguments.input_files)
        .map(|(result, input_file)| {
            let result = result.unwrap_or(Err(Error::WorkerDisconnected));
            if let Err(e) = &result {
                log::error!("{}: {}", path_to_string(input_file), e);
            }
            result
        })
        .collect();
    results.into_iter().collect()
}
