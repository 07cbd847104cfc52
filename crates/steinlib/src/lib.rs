//! A streaming parser for the SteinLib STP format.
//!
//! STP files describe Steiner tree problem instances as a header, a series
//! of sections (`Comment`, `Graph`, `Terminals`, ...) and an `EOF` marker.
//! This crate recognizes that line grammar and reports every recognized line
//! to a [`Visitor`], which implements only the callbacks it needs. Nothing is
//! kept in memory beyond the current line.
//!
//! ```
//! use steinlib::{Field, Visitor};
//!
//! #[derive(Default)]
//! struct Terminals(Vec<u64>);
//!
//! impl Visitor for Terminals {
//!     fn terminals_t(&mut self, _raw: &str, fields: &[Field]) {
//!         self.0.extend(fields.iter().filter_map(Field::as_int));
//!     }
//! }
//!
//! let input = "33D32945 STP File, STP Format Version 1.0\n\
//!              SECTION Terminals\n\
//!              Terminals 2\n\
//!              T 1\n\
//!              T 4\n\
//!              END\n\
//!              EOF\n";
//! let terminals = steinlib::parse_reader(input.as_bytes(), Terminals::default()).unwrap();
//! assert_eq!(terminals.0, [1, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod field;
pub mod grammar;
pub mod parser;
pub mod reader;
pub mod root;
pub mod section;
pub mod state;
pub mod visitor;

pub use error::{Error, Result};
pub use field::Field;
pub use grammar::{SectionKind, TokenKind};
pub use parser::{Parser, parse, parse_reader};
pub use state::State;
pub use visitor::{Capability, Event, Visitor};
