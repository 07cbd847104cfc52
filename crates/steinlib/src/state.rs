//! States of the parsing process.

use crate::grammar::SectionKind;
use std::fmt;

/// Where the parser is in the file.
///
/// The active section travels inside [`State::InsideSection`], so the parser
/// is inside a section exactly when it has a section grammar to match
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Nothing but blank and comment lines seen so far; the header comes next.
    #[default]
    WaitForHeader,
    /// Between sections: a `SECTION` line or `EOF` comes next.
    WaitForSection,
    /// Inside a section, matching lines against its grammar.
    InsideSection(SectionKind),
    /// `EOF` was seen. Terminal.
    End,
}

impl State {
    /// The active section, if any.
    #[must_use]
    pub fn section(self) -> Option<SectionKind> {
        match self {
            Self::InsideSection(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns true once `EOF` has been seen.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::End
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WaitForHeader => f.write_str("wait_for_header"),
            Self::WaitForSection => f.write_str("wait_for_section"),
            Self::InsideSection(kind) => write!(f, "inside_section({kind})"),
            Self::End => f.write_str("end"),
        }
    }
}
