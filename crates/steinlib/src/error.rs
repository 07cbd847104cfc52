//! Error types for STP parsing.
//!
//! There are two parsing failure kinds. [`Error::Parsing`] is the general
//! one; [`Error::UnrecognizedSection`] refines it for a well-formed
//! `SECTION <name>` line naming a section the grammar does not know. Both
//! report `true` from [`Error::is_parsing_failure`], so callers that only care
//! about "the input is bad" can treat them alike while still being able to
//! special-case the unknown section.

use std::io;
use thiserror::Error;

/// The error type for STP parsing operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A line did not match the grammar expected in the current state, or the
    /// input ended before the `EOF` marker.
    #[error("{message}")]
    Parsing {
        /// Human-readable description, including the offending line when there is one.
        message: String,
        /// 1-based line number of the offending line, when known.
        line_number: Option<usize>,
    },

    /// A `SECTION` line named a section that is not part of the STP grammar.
    #[error("Invalid section identifier \"{name}\". Known sections: {}.", .known.join(", "))]
    UnrecognizedSection {
        /// The section name as written in the file.
        name: String,
        /// Every section name the grammar recognizes.
        known: Vec<&'static str>,
        /// 1-based line number of the `SECTION` line, when known.
        line_number: Option<usize>,
    },

    /// IO error while reading the input.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// A root construct was required but the line matched none.
    pub(crate) fn unexpected_line(line: &str) -> Self {
        Self::parsing(format!("Unexpected line: {line}"))
    }

    /// No token of the active section grammar matched the line.
    pub(crate) fn invalid_token(line: &str) -> Self {
        Self::parsing(format!("Error parsing the following line: {line}"))
    }

    /// Content was found after the `EOF` marker.
    pub(crate) fn unexpected_eof() -> Self {
        Self::parsing("Unexpected \"EOF\".".to_string())
    }

    /// The input ended while the parser was not in its terminal state.
    pub(crate) fn illegal_state() -> Self {
        Self::parsing("Illegal state.".to_string())
    }

    pub(crate) fn unrecognized_section(name: &str, known: Vec<&'static str>) -> Self {
        Self::UnrecognizedSection {
            name: name.to_string(),
            known,
            line_number: None,
        }
    }

    fn parsing(message: String) -> Self {
        Self::Parsing {
            message,
            line_number: None,
        }
    }

    /// Attaches a line number to a parsing failure that does not carry one yet.
    #[must_use]
    pub fn with_line_number(mut self, number: usize) -> Self {
        match &mut self {
            Self::Parsing { line_number, .. } | Self::UnrecognizedSection { line_number, .. } => {
                line_number.get_or_insert(number);
            }
            Self::Io(_) => {}
        }
        self
    }

    /// Returns the 1-based line number the failure refers to, if any.
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Parsing { line_number, .. } | Self::UnrecognizedSection { line_number, .. } => {
                *line_number
            }
            Self::Io(_) => None,
        }
    }

    /// Returns true for every grammar failure, including unknown sections.
    #[must_use]
    pub fn is_parsing_failure(&self) -> bool {
        matches!(self, Self::Parsing { .. } | Self::UnrecognizedSection { .. })
    }

    /// Returns true only for the unknown-section refinement.
    #[must_use]
    pub fn is_unrecognized_section(&self) -> bool {
        matches!(self, Self::UnrecognizedSection { .. })
    }
}

/// A specialized Result type for STP parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
