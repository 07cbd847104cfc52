//! Visitors that back the CLI commands, and the helpers that run them over
//! files.

pub mod summary;
pub mod trace;

pub use summary::{Declared, Metadata, Observed, Summary};
pub use trace::{Trace, TraceEntry, TraceValue};

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use steinlib::Visitor;

/// Open an input file for buffered, line-by-line parsing.
///
/// # Errors
///
/// Returns [`Error::Open`] when the file cannot be opened.
pub fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse `path` with `visitor` and hand the visitor back.
///
/// # Errors
///
/// Returns [`Error::Open`] when the file cannot be opened and
/// [`Error::Input`] when it is not valid STP.
pub fn run<V: Visitor>(path: &Path, visitor: V) -> Result<V> {
    let reader = open(path)?;
    tracing::debug!(path = %path.display(), "parsing");
    steinlib::parse_reader(reader, visitor).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheck {
    /// The file as given on the command line.
    pub file: String,
    /// Whether the file parsed to completion.
    pub ok: bool,
    /// Line of the failure, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    /// The failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parse `path` with a visitor that ignores everything.
pub fn check(path: &Path) -> FileCheck {
    let file = path.display().to_string();
    match run(path, ()) {
        Ok(()) => FileCheck {
            file,
            ok: true,
            line_number: None,
            error: None,
        },
        Err(Error::Input { source, .. }) => FileCheck {
            file,
            ok: false,
            line_number: source.line_number(),
            error: Some(source.to_string()),
        },
        Err(other) => FileCheck {
            file,
            ok: false,
            line_number: None,
            error: Some(other.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn check_valid_file() {
        let file = write_temp("33D32945 STP File\nSECTION Graph\nNodes 2\nEND\nEOF\n");
        let result = check(file.path());
        assert!(result.ok);
        assert_eq!(result.error, None);
    }

    #[test]
    fn check_reports_line_of_failure() {
        let file = write_temp("33D32945 STP File\nSECTION Graph\nNodes two\nEND\nEOF\n");
        let result = check(file.path());
        assert!(!result.ok);
        assert_eq!(result.line_number, Some(3));
        assert_eq!(
            result.error.as_deref(),
            Some("Error parsing the following line: Nodes two")
        );
    }

    #[test]
    fn check_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = check(&dir.path().join("missing.stp"));
        assert!(!result.ok);
        assert!(result.error.unwrap().starts_with("cannot open"));
    }

    #[test]
    fn run_wraps_parse_failures_with_the_path() {
        let file = write_temp("33D32945 STP File\n");
        let err = run(file.path(), ()).unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
    }
}
