//! Error types shared by the encoder and the line driver.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building code words or processing word files.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation was called with arguments outside its domain
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A data word contained something other than '0' or '1'
    #[error("invalid bit {found:?} at column {column}, expected '0' or '1'")]
    InvalidBit { column: usize, found: char },

    /// Failure while processing a specific input line
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    /// The input file could not be opened
    #[error("cannot open input file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created
    #[error("cannot create output file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read or write failure mid-stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Attaches a 1-based input line number to an error.
    pub fn at_line(self, line: usize) -> Self {
        Error::Line {
            line,
            source: Box::new(self),
        }
    }
}
