//! Error types for locating and parsing performance CSV files.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PerfError>;

#[derive(Error, Debug)]
pub enum PerfError {
    #[error("directory '{name}' not found under {}", .root.display())]
    DirectoryNotFound { root: PathBuf, name: String },

    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{source_name}: missing header row")]
    MissingHeader { source_name: String },

    #[error("{source_name}:{line}: column {column} is not an integer: {value:?}")]
    MalformedField {
        source_name: String,
        line: u64,
        column: usize,
        value: String,
    },

    #[error("{source_name}:{line}: missing column {column}")]
    MissingField {
        source_name: String,
        line: u64,
        column: usize,
    },

    #[error("{source_name}:{line}: row has {found} values but the header has {expected}")]
    RowLengthMismatch {
        source_name: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
