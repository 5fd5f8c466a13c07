use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyAlphabet,
    ZeroFrequency(u8),
    DuplicateSymbol(u8),
    FrequencyOverflow,
    InvalidInputFileName(String),
    InputFileIsEmpty(String),
    DuplicateOutputFile(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteCodeTable(String, std::io::Error),
    WorkerDisconnected,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAlphabet => {
                write!(f, "Can't build a Huffman tree without any symbols")
            }
            Self::ZeroFrequency(symbol) => {
                write!(f, "Symbol '{}' has a frequency of zero", symbol)
            }
            Self::DuplicateSymbol(symbol) => {
                write!(f, "Symbol '{}' occurs more than once in the alphabet", symbol)
            }
            Self::FrequencyOverflow => {
                write!(f, "Sum of all symbol frequencies exceeds the supported range")
            }
            Self::InvalidInputFileName(path) => {
                write!(f, "Input path '{}' does not name a file", path)
            }
            Self::InputFileIsEmpty(path) => {
                write!(f, "Input file '{}' is empty", path)
            }
            Self::DuplicateOutputFile(path) => {
                write!(
                    f,
                    "Several input files would write their code table to '{}'",
                    path
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteCodeTable(path, error) => {
                write!(f, "Failed to write code table to '{}': {}", path, error)
            }
            Self::WorkerDisconnected => {
                write!(f, "A worker thread terminated without reporting its result")
            }
        }
    }
}

impl std::error::Error for Error {}
