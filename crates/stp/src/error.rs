//! Error types for stp CLI operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for stp CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying IO failure.
        source: io::Error,
    },

    /// An input file is not valid STP.
    #[error("{}{}: {source}", .path.display(), line_suffix(.source.line_number()))]
    Input {
        /// The offending file.
        path: PathBuf,
        /// The parser failure.
        source: steinlib::Error,
    },
}

fn line_suffix(line_number: Option<usize>) -> String {
    line_number.map(|n| format!(":{n}")).unwrap_or_default()
}

/// A specialized Result type for stp operations.
pub type Result<T> = std::result::Result<T, Error>;
