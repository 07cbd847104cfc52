//! The parsing state machine.
//!
//! [`step`] is the transition function: given the current state and one
//! meaningful line, it runs the right recognizer, which reports to the
//! visitor, and returns the next state. [`Parser`] owns the single mutable
//! state cell, filters blank and comment lines, numbers lines for
//! diagnostics and enforces the completion contract.
//!
//! | State              | Line                     | Next state                        |
//! |--------------------|--------------------------|-----------------------------------|
//! | `WaitForHeader`    | header                   | `WaitForSection`                  |
//! | `WaitForSection`   | `SECTION <name>`         | `InsideSection(name)`             |
//! | `WaitForSection`   | `EOF`                    | `End`                             |
//! | `InsideSection(s)` | token of `s`             | `InsideSection(s)`                |
//! | `InsideSection(s)` | `END`                    | `WaitForSection`                  |
//! | `End`              | anything                 | failure                           |

use crate::error::{Error, Result};
use crate::reader::LineReader;
use crate::root;
use crate::section;
use crate::state::State;
use crate::visitor::Visitor;
use std::io::BufRead;

/// Lines starting with this marker (after trimming) are comments.
pub const COMMENT_MARKER: char = '#';

/// Returns true for lines that are skipped in every state: empty after
/// trimming, or comments.
#[must_use]
pub fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with(COMMENT_MARKER)
}

/// Applies one trimmed, non-ignorable line to `state`.
///
/// While waiting for a section, a line that is not a `SECTION` opening is
/// probed as `EOF`; if that fails too, the section failure is returned. An
/// unknown section name is reported as is, without probing.
///
/// # Errors
///
/// Returns the recognizer's failure when the line does not fit the state, and
/// a parsing failure for any line after `EOF`.
pub fn step<V: Visitor + ?Sized>(state: State, line: &str, visitor: &mut V) -> Result<State> {
    match state {
        State::WaitForHeader => {
            root::match_header(line, visitor)?;
            Ok(State::WaitForSection)
        }
        State::WaitForSection => match root::match_section(line, visitor) {
            Ok(kind) => Ok(State::InsideSection(kind)),
            Err(err) if err.is_unrecognized_section() => Err(err),
            Err(err) => match root::match_eof(line, visitor) {
                Ok(()) => Ok(State::End),
                Err(_) => Err(err),
            },
        },
        State::InsideSection(kind) => section::parse_token(kind.grammar(), line, visitor),
        State::End => Err(Error::unexpected_eof()),
    }
}

/// Drives the state machine over a sequence of lines.
///
/// A parser is meant for a single input. On failure its state is left where
/// the failing line found it.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    state: State,
    line_number: usize,
}

impl Parser {
    /// Creates a parser waiting for the header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the number of lines fed so far, including skipped ones.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Feeds one raw line.
    ///
    /// Blank and comment lines are skipped without touching the state or the
    /// visitor. Any other line is trimmed and passed to [`step`].
    ///
    /// # Errors
    ///
    /// Returns the failure of [`step`], tagged with the 1-based line number.
    pub fn feed<V: Visitor + ?Sized>(&mut self, raw_line: &str, visitor: &mut V) -> Result<State> {
        self.line_number += 1;
        if is_ignorable(raw_line) {
            return Ok(self.state);
        }

        let next = step(self.state, raw_line.trim(), visitor)
            .map_err(|err| err.with_line_number(self.line_number))?;
        if next != self.state {
            tracing::trace!(
                line_number = self.line_number,
                from = %self.state,
                to = %next,
                "state transition"
            );
        }
        self.state = next;
        Ok(next)
    }

    /// Checks the completion contract: the input must have ended with `EOF`.
    ///
    /// # Errors
    ///
    /// Returns an "illegal state" parsing failure when the parser is not in
    /// its terminal state.
    pub fn finish(&self) -> Result<()> {
        if self.state.is_terminal() {
            tracing::debug!(lines = self.line_number, "parse complete");
            Ok(())
        } else {
            tracing::debug!(state = %self.state, lines = self.line_number, "input ended early");
            Err(Error::illegal_state())
        }
    }

    /// Feeds every line, checks completion and returns the visitor.
    ///
    /// # Errors
    ///
    /// Stops at the first failing line; see [`Parser::feed`] and
    /// [`Parser::finish`].
    pub fn parse<I, S, V>(&mut self, lines: I, mut visitor: V) -> Result<V>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        V: Visitor,
    {
        for line in lines {
            self.feed(line.as_ref(), &mut visitor)?;
        }
        self.finish()?;
        Ok(visitor)
    }

    /// Like [`Parser::parse`], reading lines lazily from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when reading fails, otherwise as [`Parser::parse`].
    pub fn parse_reader<R, V>(&mut self, reader: R, mut visitor: V) -> Result<V>
    where
        R: BufRead,
        V: Visitor,
    {
        for line in LineReader::new(reader) {
            self.feed(&line?, &mut visitor)?;
        }
        self.finish()?;
        Ok(visitor)
    }
}

/// Parses a whole sequence of lines and returns the visitor.
///
/// # Errors
///
/// Returns the first parsing failure, or an "illegal state" failure when the
/// input does not end with `EOF`.
pub fn parse<I, S, V>(lines: I, visitor: V) -> Result<V>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    V: Visitor,
{
    Parser::new().parse(lines, visitor)
}

/// Parses everything `reader` yields and returns the visitor.
///
/// # Errors
///
/// As [`parse`], plus [`Error::Io`] when reading fails.
pub fn parse_reader<R, V>(reader: R, visitor: V) -> Result<V>
where
    R: BufRead,
    V: Visitor,
{
    Parser::new().parse_reader(reader, visitor)
}
