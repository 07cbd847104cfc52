//! Line-by-line reading of STP input.
//!
//! STP files can be large, so input is never buffered whole: [`LineReader`]
//! yields one line at a time from any [`BufRead`] and keeps a 1-based line
//! counter for diagnostics.

use std::io::{self, BufRead};

/// Iterator over the lines of a buffered reader.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Invalid UTF-8 surfaces as
/// an [`io::ErrorKind::InvalidData`] error.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use steinlib::reader::LineReader;
///
/// let mut lines = LineReader::new(Cursor::new("EOF\r\n# done\n"));
/// assert_eq!(lines.next().unwrap().unwrap(), "EOF");
/// assert_eq!(lines.next().unwrap().unwrap(), "# done");
/// assert!(lines.next().is_none());
/// assert_eq!(lines.line_number(), 2);
/// ```
pub struct LineReader<R> {
    /// The underlying buffered reader.
    reader: R,
    /// Current line number (1-based counting, 0 before any lines are read).
    line_number: usize,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a new `LineReader` over the given buffered reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buf: String::new(),
        }
    }

    /// Returns the current line number.
    ///
    /// Returns 0 before any lines have been read, then the 1-based number of
    /// the last line read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Consumes the reader, returning the underlying reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                let line = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
                let line = line.strip_suffix('\r').unwrap_or(line);
                Some(Ok(line.to_string()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn new_reader_starts_at_line_zero() {
        let reader = LineReader::new(Cursor::new(""));
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn strips_line_terminators() {
        let lines: Vec<String> = LineReader::new(Cursor::new("a\nb\r\n\nc"))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, ["a", "b", "", "c"]);
    }

    #[test]
    fn counts_every_line() {
        let mut reader = LineReader::new(Cursor::new("a\n\n# c\n"));
        while reader.next().is_some() {}
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut reader = LineReader::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn into_inner_returns_reader() {
        let reader = LineReader::new(Cursor::new("test"));
        let _inner = reader.into_inner();
    }
}
