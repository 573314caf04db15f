use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or decode a city dataset. Fatal for the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open dataset {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("dataset {} row {row}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {} row {row}: cannot parse {column} '{value}'", path.display())]
    Timestamp {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Failure while talking to the console.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before an answer was given")]
    InputClosed,
}
