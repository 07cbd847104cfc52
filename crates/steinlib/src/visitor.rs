//! The visitor capability contract.
//!
//! A [`Visitor`] receives one callback per recognized line. Every callback has
//! a default no-op body, so an implementation only writes the ones it cares
//! about and everything else is absorbed.
//!
//! The core never calls the per-capability methods directly. It builds an
//! [`Event`] and hands it to [`Visitor::visit`], whose default body is
//! [`dispatch`]. A visitor that wants to see every event generically (a
//! tracer, a recorder in tests) overrides `visit` instead.
//!
//! Every callback receives the trimmed raw line and the converted fields in
//! capture order. The field count always matches the pattern; any stricter
//! policy is up to the visitor.
//!
//! ```
//! use steinlib::{Field, Visitor};
//!
//! #[derive(Default)]
//! struct EdgeCounter {
//!     edges: usize,
//! }
//!
//! impl Visitor for EdgeCounter {
//!     fn graph_e(&mut self, _raw: &str, _fields: &[Field]) {
//!         self.edges += 1;
//!     }
//! }
//!
//! let lines = [
//!     "33D32945 STP File, STP Format Version 1.0",
//!     "SECTION Graph",
//!     "E 1 2 10",
//!     "E 2 3 5",
//!     "END",
//!     "EOF",
//! ];
//! let counter = steinlib::parse(lines, EdgeCounter::default()).unwrap();
//! assert_eq!(counter.edges, 2);
//! ```

use crate::field::Field;
use crate::grammar::{SectionKind, TokenKind};
use std::fmt;

/// Which callback an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The file header.
    Header,
    /// Any `SECTION` line, before the section-specific callback.
    Section,
    /// The section-specific callback of a `SECTION` line.
    SectionOpen(SectionKind),
    /// A line inside a section.
    Token(TokenKind),
    /// The `EOF` marker.
    Eof,
}

impl Capability {
    /// The capability name, e.g. `header`, `maximumdegrees` or `graph__e`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Section => "section",
            Self::SectionOpen(kind) => kind.open_capability(),
            Self::Token(token) => token.capability(),
            Self::Eof => "eof",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One callback invocation: the capability, the raw line and its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event<'a> {
    /// Which callback this is.
    pub capability: Capability,
    /// The trimmed line that produced the event.
    pub raw: &'a str,
    /// Converted capture groups, in order.
    pub fields: &'a [Field],
}

/// Callbacks invoked while parsing an STP file.
///
/// Method names follow the capability names: section-open callbacks are named
/// after the section, token callbacks are `<section>_<token>`.
#[allow(unused_variables)]
pub trait Visitor {
    /// Entry point for every event. Routes to the specific callback by default.
    fn visit(&mut self, event: &Event<'_>) {
        dispatch(self, event);
    }

    // Root constructs.

    /// `33D32945 <remainder>`; the remainder is the only field.
    fn header(&mut self, raw: &str, fields: &[Field]) {}
    /// Any `SECTION <name>` line; the name is the only field.
    fn section(&mut self, raw: &str, fields: &[Field]) {}
    /// `EOF`; no fields.
    fn eof(&mut self, raw: &str, fields: &[Field]) {}

    // Section openings.

    /// `SECTION Comment`
    fn comment(&mut self, raw: &str, fields: &[Field]) {}
    /// `SECTION Coordinates`
    fn coordinates(&mut self, raw: &str, fields: &[Field]) {}
    /// `SECTION Graph`
    fn graph(&mut self, raw: &str, fields: &[Field]) {}
    /// `SECTION MaximumDegrees` (capability `maximumdegrees`)
    fn maximum_degrees(&mut self, raw: &str, fields: &[Field]) {}
    /// `SECTION Obstacles`
    fn obstacles(&mut self, raw: &str, fields: &[Field]) {}
    /// `SECTION Presolve`
    fn presolve(&mut self, raw: &str, fields: &[Field]) {}
    /// `SECTION Terminals`
    fn terminals(&mut self, raw: &str, fields: &[Field]) {}

    // Comment section.

    /// `Name "<text>"`
    fn comment_name(&mut self, raw: &str, fields: &[Field]) {}
    /// `Creator "<text>"`
    fn comment_creator(&mut self, raw: &str, fields: &[Field]) {}
    /// `Remark "<text>"`
    fn comment_remark(&mut self, raw: &str, fields: &[Field]) {}
    /// `Problem "<text>"`
    fn comment_problem(&mut self, raw: &str, fields: &[Field]) {}
    /// `END` of the Comment section.
    fn comment_end(&mut self, raw: &str, fields: &[Field]) {}

    // Coordinates section.

    /// `DD <n>...`, with as many integers as the line carries.
    fn coordinates_dd(&mut self, raw: &str, fields: &[Field]) {}
    /// `END` of the Coordinates section.
    fn coordinates_end(&mut self, raw: &str, fields: &[Field]) {}

    // Graph section.

    /// `Obstacles <text>`
    fn graph_obstacles(&mut self, raw: &str, fields: &[Field]) {}
    /// `Nodes <n>`
    fn graph_nodes(&mut self, raw: &str, fields: &[Field]) {}
    /// `Edges <n>`
    fn graph_edges(&mut self, raw: &str, fields: &[Field]) {}
    /// `Arcs <n>`
    fn graph_arcs(&mut self, raw: &str, fields: &[Field]) {}
    /// `E <from> <to> <weight>`
    fn graph_e(&mut self, raw: &str, fields: &[Field]) {}
    /// `A <from> <to> <weight>`
    fn graph_a(&mut self, raw: &str, fields: &[Field]) {}
    /// `END` of the Graph section.
    fn graph_end(&mut self, raw: &str, fields: &[Field]) {}

    // MaximumDegrees section.

    /// `MD <n>`
    fn maximum_degrees_md(&mut self, raw: &str, fields: &[Field]) {}
    /// `END` of the MaximumDegrees section.
    fn maximum_degrees_end(&mut self, raw: &str, fields: &[Field]) {}

    // Obstacles section.

    /// `RR <x1> <y1> <x2> <y2>`
    fn obstacles_rr(&mut self, raw: &str, fields: &[Field]) {}
    /// `END` of the Obstacles section.
    fn obstacles_end(&mut self, raw: &str, fields: &[Field]) {}

    // Presolve section.

    /// `FIXED <n>`
    fn presolve_fixed(&mut self, raw: &str, fields: &[Field]) {}
    /// `LOWER <n>`
    fn presolve_lower(&mut self, raw: &str, fields: &[Field]) {}
    /// `UPPER <n>`
    fn presolve_upper(&mut self, raw: &str, fields: &[Field]) {}
    /// `TIME <n>`
    fn presolve_time(&mut self, raw: &str, fields: &[Field]) {}
    /// `ORGNODES <n>`
    fn presolve_orgnodes(&mut self, raw: &str, fields: &[Field]) {}
    /// `ORGEDGES <n>`
    fn presolve_orgedges(&mut self, raw: &str, fields: &[Field]) {}
    /// `EA <n> <n> <n> <n>`
    fn presolve_ea(&mut self, raw: &str, fields: &[Field]) {}
    /// `EC <n> <n> <n>`
    fn presolve_ec(&mut self, raw: &str, fields: &[Field]) {}
    /// `ED <n> <n> <n>`
    fn presolve_ed(&mut self, raw: &str, fields: &[Field]) {}
    /// `ES <n> <n>`
    fn presolve_es(&mut self, raw: &str, fields: &[Field]) {}
    /// `END` of the Presolve section.
    fn presolve_end(&mut self, raw: &str, fields: &[Field]) {}

    // Terminals section.

    /// `Terminals <n>`
    fn terminals_terminals(&mut self, raw: &str, fields: &[Field]) {}
    /// `RootP <n>`
    fn terminals_rootp(&mut self, raw: &str, fields: &[Field]) {}
    /// `T <n>`
    fn terminals_t(&mut self, raw: &str, fields: &[Field]) {}
    /// `TP <n>`
    fn terminals_tp(&mut self, raw: &str, fields: &[Field]) {}
    /// `END` of the Terminals section.
    fn terminals_end(&mut self, raw: &str, fields: &[Field]) {}
}

/// The visitor that implements nothing; every event is absorbed.
impl Visitor for () {}

/// Routes an event to the matching callback of `visitor`.
pub fn dispatch<V: Visitor + ?Sized>(visitor: &mut V, event: &Event<'_>) {
    let Event { raw, fields, .. } = *event;
    match event.capability {
        Capability::Header => visitor.header(raw, fields),
        Capability::Section => visitor.section(raw, fields),
        Capability::Eof => visitor.eof(raw, fields),
        Capability::SectionOpen(kind) => match kind {
            SectionKind::Comment => visitor.comment(raw, fields),
            SectionKind::Coordinates => visitor.coordinates(raw, fields),
            SectionKind::Graph => visitor.graph(raw, fields),
            SectionKind::MaximumDegrees => visitor.maximum_degrees(raw, fields),
            SectionKind::Obstacles => visitor.obstacles(raw, fields),
            SectionKind::Presolve => visitor.presolve(raw, fields),
            SectionKind::Terminals => visitor.terminals(raw, fields),
        },
        Capability::Token(token) => dispatch_token(visitor, token, raw, fields),
    }
}

fn dispatch_token<V: Visitor + ?Sized>(
    visitor: &mut V,
    token: TokenKind,
    raw: &str,
    fields: &[Field],
) {
    match token {
        TokenKind::CommentName => visitor.comment_name(raw, fields),
        TokenKind::CommentCreator => visitor.comment_creator(raw, fields),
        TokenKind::CommentRemark => visitor.comment_remark(raw, fields),
        TokenKind::CommentProblem => visitor.comment_problem(raw, fields),
        TokenKind::CommentEnd => visitor.comment_end(raw, fields),
        TokenKind::CoordinatesDd => visitor.coordinates_dd(raw, fields),
        TokenKind::CoordinatesEnd => visitor.coordinates_end(raw, fields),
        TokenKind::GraphObstacles => visitor.graph_obstacles(raw, fields),
        TokenKind::GraphNodes => visitor.graph_nodes(raw, fields),
        TokenKind::GraphEdges => visitor.graph_edges(raw, fields),
        TokenKind::GraphArcs => visitor.graph_arcs(raw, fields),
        TokenKind::GraphE => visitor.graph_e(raw, fields),
        TokenKind::GraphA => visitor.graph_a(raw, fields),
        TokenKind::GraphEnd => visitor.graph_end(raw, fields),
        TokenKind::MaximumDegreesMd => visitor.maximum_degrees_md(raw, fields),
        TokenKind::MaximumDegreesEnd => visitor.maximum_degrees_end(raw, fields),
        TokenKind::ObstaclesRr => visitor.obstacles_rr(raw, fields),
        TokenKind::ObstaclesEnd => visitor.obstacles_end(raw, fields),
        TokenKind::PresolveFixed => visitor.presolve_fixed(raw, fields),
        TokenKind::PresolveLower => visitor.presolve_lower(raw, fields),
        TokenKind::PresolveUpper => visitor.presolve_upper(raw, fields),
        TokenKind::PresolveTime => visitor.presolve_time(raw, fields),
        TokenKind::PresolveOrgnodes => visitor.presolve_orgnodes(raw, fields),
        TokenKind::PresolveOrgedges => visitor.presolve_orgedges(raw, fields),
        TokenKind::PresolveEa => visitor.presolve_ea(raw, fields),
        TokenKind::PresolveEc => visitor.presolve_ec(raw, fields),
        TokenKind::PresolveEd => visitor.presolve_ed(raw, fields),
        TokenKind::PresolveEs => visitor.presolve_es(raw, fields),
        TokenKind::PresolveEnd => visitor.presolve_end(raw, fields),
        TokenKind::TerminalsTerminals => visitor.terminals_terminals(raw, fields),
        TokenKind::TerminalsRootp => visitor.terminals_rootp(raw, fields),
        TokenKind::TerminalsT => visitor.terminals_t(raw, fields),
        TokenKind::TerminalsTp => visitor.terminals_tp(raw, fields),
        TokenKind::TerminalsEnd => visitor.terminals_end(raw, fields),
    }
}
