//! Error types for the comparison pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Why a column produced no values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// The header row has no field with the requested name
    HeaderNotFound,
    /// The header row is present but no records follow it
    NoDataRows,
    /// Every record left the requested field empty
    AllValuesBlank,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseFailure::HeaderNotFound => write!(f, "header not found"),
            ParseFailure::NoDataRows => write!(f, "no data rows"),
            ParseFailure::AllValuesBlank => write!(f, "all values blank"),
        }
    }
}

/// Errors raised while reading, parsing or comparing sources
#[derive(Debug, Error)]
pub enum DiffError {
    /// One or more invocation inputs were missing or empty
    #[error("invalid arguments provided: missing {missing}, got: {dump}")]
    InvalidArguments { missing: String, dump: String },

    /// A path argument was empty or malformed
    #[error("could not read source: an invalid file path was provided ({reason})")]
    InvalidPath { reason: String },

    /// The canonical path does not exist
    #[error("the file at path {name} does not exist or cannot be found")]
    NotFound { name: String, path: PathBuf },

    /// Any other filesystem failure
    #[error("failed to read {name}")]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but contained no bytes
    #[error("could not read any valid data from {name}")]
    EmptyContent { name: String },

    /// Extraction preconditions failed
    #[error("unable to parse! Message: {0}")]
    InvalidInput(String),

    /// The target column yielded an empty value set
    #[error("failed to parse {name}: no values for header '{header}' ({cause})")]
    Parse {
        name: String,
        header: String,
        cause: ParseFailure,
    },

    /// The delimited text itself could not be read
    #[error("failed to parse {name}: malformed delimited text")]
    Malformed {
        name: String,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, DiffError>;
