//! Error types for record parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while reading or parsing delimited text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No lines were supplied, so there is no header to take field names from.
    #[error("input is empty: a header line is required")]
    EmptyInput,

    /// The separator must contain at least one character.
    #[error("separator must not be empty")]
    EmptySeparator,

    /// Reading lines from a reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Opening or reading a file failed.
    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A `Result` alias using [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
