//! Section grammar tables.
//!
//! Every STP section has a small line grammar: a keyword followed by a fixed
//! number of fields, and an `END` line closing the section. The grammar is
//! data, not code: each section owns a table of `(token, pattern)` pairs that
//! are compiled once into a [`SectionGrammar`] the first time the section is
//! used.
//!
//! Keywords are matched case-insensitively, since mixed case shows up in real
//! benchmark files.
//!
//! The one exception to fixed shapes is the `DD` line of the Coordinates
//! section, whose arity depends on the line itself. It is described by
//! [`TokenShape::VariableArity`] and never goes through a regex.

use crate::field::is_decimal;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The sections the STP grammar knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    /// `SECTION Comment`
    Comment,
    /// `SECTION Coordinates`
    Coordinates,
    /// `SECTION Graph`
    Graph,
    /// `SECTION MaximumDegrees`
    MaximumDegrees,
    /// `SECTION Obstacles`
    Obstacles,
    /// `SECTION Presolve`
    Presolve,
    /// `SECTION Terminals`
    Terminals,
}

impl SectionKind {
    /// All sections, in the order used for diagnostics.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Comment,
        SectionKind::Coordinates,
        SectionKind::Graph,
        SectionKind::MaximumDegrees,
        SectionKind::Obstacles,
        SectionKind::Presolve,
        SectionKind::Terminals,
    ];

    /// The section name exactly as it appears after `SECTION`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Comment => "Comment",
            Self::Coordinates => "Coordinates",
            Self::Graph => "Graph",
            Self::MaximumDegrees => "MaximumDegrees",
            Self::Obstacles => "Obstacles",
            Self::Presolve => "Presolve",
            Self::Terminals => "Terminals",
        }
    }

    /// Capability name of the section-open callback (the lower-cased section name).
    #[must_use]
    pub fn open_capability(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Coordinates => "coordinates",
            Self::Graph => "graph",
            Self::MaximumDegrees => "maximumdegrees",
            Self::Obstacles => "obstacles",
            Self::Presolve => "presolve",
            Self::Terminals => "terminals",
        }
    }

    /// Prefix of the capability names of this section's tokens.
    #[must_use]
    pub fn token_prefix(self) -> &'static str {
        match self {
            Self::MaximumDegrees => "maximum_degrees",
            other => other.open_capability(),
        }
    }

    /// Looks up a section by name. The lookup is case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Names of every known section.
    #[must_use]
    pub fn known_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// The compiled grammar table of this section.
    #[must_use]
    pub fn grammar(self) -> &'static SectionGrammar {
        match self {
            Self::Comment => &COMMENT,
            Self::Coordinates => &COORDINATES,
            Self::Graph => &GRAPH,
            Self::MaximumDegrees => &MAXIMUM_DEGREES,
            Self::Obstacles => &OBSTACLES,
            Self::Presolve => &PRESOLVE,
            Self::Terminals => &TERMINALS,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declares [`TokenKind`] together with its section, token name and
/// capability name, so the three can never drift apart.
macro_rules! token_kinds {
    ($( $section:ident / $prefix:literal => { $( $variant:ident = $name:literal ),+ $(,)? } )+) => {
        /// Every line shape recognized inside a section.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TokenKind {
            $( $(
                #[doc = concat!("`", $prefix, "__", $name, "`")]
                $variant,
            )+ )+
        }

        impl TokenKind {
            /// All tokens of all sections.
            pub const ALL: &'static [TokenKind] = &[ $( $( TokenKind::$variant, )+ )+ ];

            /// The section this token belongs to.
            #[must_use]
            pub fn section(self) -> SectionKind {
                match self {
                    $( $( TokenKind::$variant => SectionKind::$section, )+ )+
                }
            }

            /// The token name inside its section table, e.g. `e` or `end`.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $( $( TokenKind::$variant => $name, )+ )+
                }
            }

            /// The capability name, `<section prefix>__<token name>`.
            #[must_use]
            pub fn capability(self) -> &'static str {
                match self {
                    $( $( TokenKind::$variant => concat!($prefix, "__", $name), )+ )+
                }
            }
        }
    };
}

token_kinds! {
    Comment / "comment" => {
        CommentName = "name",
        CommentCreator = "creator",
        CommentRemark = "remark",
        CommentProblem = "problem",
        CommentEnd = "end",
    }
    Coordinates / "coordinates" => {
        CoordinatesDd = "dd",
        CoordinatesEnd = "end",
    }
    Graph / "graph" => {
        GraphObstacles = "obstacles",
        GraphNodes = "nodes",
        GraphEdges = "edges",
        GraphArcs = "arcs",
        GraphE = "e",
        GraphA = "a",
        GraphEnd = "end",
    }
    MaximumDegrees / "maximum_degrees" => {
        MaximumDegreesMd = "md",
        MaximumDegreesEnd = "end",
    }
    Obstacles / "obstacles" => {
        ObstaclesRr = "rr",
        ObstaclesEnd = "end",
    }
    Presolve / "presolve" => {
        PresolveFixed = "fixed",
        PresolveLower = "lower",
        PresolveUpper = "upper",
        PresolveTime = "time",
        PresolveOrgnodes = "orgnodes",
        PresolveOrgedges = "orgedges",
        PresolveEa = "ea",
        PresolveEc = "ec",
        PresolveEd = "ed",
        PresolveEs = "es",
        PresolveEnd = "end",
    }
    Terminals / "terminals" => {
        TerminalsTerminals = "terminals",
        TerminalsRootp = "rootp",
        TerminalsT = "t",
        TerminalsTp = "tp",
        TerminalsEnd = "end",
    }
}

impl TokenKind {
    /// Returns true for the `END` token that closes a section.
    #[must_use]
    pub fn is_terminator(self) -> bool {
        self.name() == "end"
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.capability())
    }
}

/// The kind of value a variable-arity token accepts in each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A non-negative decimal integer.
    Integer,
}

impl FieldKind {
    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Integer => is_decimal(value),
        }
    }
}

/// How a token's line is matched.
#[derive(Debug, Clone)]
pub enum TokenShape {
    /// A static pattern; every capture group is one field.
    Fixed(Regex),
    /// A keyword followed by as many fields as the line carries, each of the
    /// same kind. The arity is decided per line.
    VariableArity {
        /// Leading keyword, matched case-insensitively.
        keyword: &'static str,
        /// Kind every field must have.
        field: FieldKind,
    },
}

impl TokenShape {
    /// Matches a trimmed line, returning the captured fields in order.
    #[must_use]
    pub fn captures<'l>(&self, line: &'l str) -> Option<Vec<&'l str>> {
        match self {
            Self::Fixed(regex) => {
                let caps = regex.captures(line)?;
                Some(
                    caps.iter()
                        .skip(1)
                        .map(|group| group.map_or("", |m| m.as_str()))
                        .collect(),
                )
            }
            Self::VariableArity { keyword, field } => {
                let mut parts = line.split_whitespace();
                if !parts.next()?.eq_ignore_ascii_case(keyword) {
                    return None;
                }
                let values: Vec<&str> = parts.collect();
                values
                    .iter()
                    .all(|value| field.accepts(value))
                    .then_some(values)
            }
        }
    }

    /// Number of fields the shape captures, or `None` when it depends on the line.
    #[must_use]
    pub fn field_count(&self) -> Option<usize> {
        match self {
            Self::Fixed(regex) => Some(regex.captures_len() - 1),
            Self::VariableArity { .. } => None,
        }
    }
}

/// One entry of a section grammar table.
#[derive(Debug, Clone)]
pub struct TokenDef {
    /// Which token this is.
    pub kind: TokenKind,
    /// How its lines are matched.
    pub shape: TokenShape,
}

impl TokenDef {
    fn fixed(kind: TokenKind, pattern: &str) -> Self {
        let regex = Regex::new(&format!("(?i){pattern}"))
            .unwrap_or_else(|e| panic!("invalid pattern for {kind}: {e}"));
        Self {
            kind,
            shape: TokenShape::Fixed(regex),
        }
    }

    /// Returns true for the section terminator.
    #[must_use]
    pub fn is_terminator(&self) -> bool {
        self.kind.is_terminator()
    }
}

/// The compiled grammar of one section.
#[derive(Debug)]
pub struct SectionGrammar {
    section: SectionKind,
    tokens: Vec<TokenDef>,
}

impl SectionGrammar {
    fn compile(section: SectionKind, patterns: &[(TokenKind, &str)]) -> Self {
        let mut tokens: Vec<TokenDef> = patterns
            .iter()
            .map(|(kind, pattern)| TokenDef::fixed(*kind, pattern))
            .collect();
        tokens.push(TokenDef::fixed(terminator_of(section), END_PATTERN));
        Self { section, tokens }
    }

    /// The section this grammar belongs to.
    #[must_use]
    pub fn section(&self) -> SectionKind {
        self.section
    }

    /// The token definitions, in matching order.
    #[must_use]
    pub fn tokens(&self) -> &[TokenDef] {
        &self.tokens
    }
}

fn terminator_of(section: SectionKind) -> TokenKind {
    match section {
        SectionKind::Comment => TokenKind::CommentEnd,
        SectionKind::Coordinates => TokenKind::CoordinatesEnd,
        SectionKind::Graph => TokenKind::GraphEnd,
        SectionKind::MaximumDegrees => TokenKind::MaximumDegreesEnd,
        SectionKind::Obstacles => TokenKind::ObstaclesEnd,
        SectionKind::Presolve => TokenKind::PresolveEnd,
        SectionKind::Terminals => TokenKind::TerminalsEnd,
    }
}

const END_PATTERN: &str = r"^END$";

const COMMENT_PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::CommentName, r#"^Name\s+"(.+)"$"#),
    (TokenKind::CommentCreator, r#"^Creator\s+"(.+)"$"#),
    (TokenKind::CommentRemark, r#"^Remark\s+"(.+)"$"#),
    (TokenKind::CommentProblem, r#"^Problem\s+"(.+)"$"#),
];

const GRAPH_PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::GraphObstacles, r"^Obstacles\s+(.+)$"),
    (TokenKind::GraphNodes, r"^Nodes\s+([0-9]+)$"),
    (TokenKind::GraphEdges, r"^Edges\s+([0-9]+)$"),
    (TokenKind::GraphArcs, r"^Arcs\s+([0-9]+)$"),
    (TokenKind::GraphE, r"^E\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)$"),
    (TokenKind::GraphA, r"^A\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)$"),
];

const MAXIMUM_DEGREES_PATTERNS: &[(TokenKind, &str)] =
    &[(TokenKind::MaximumDegreesMd, r"^MD\s+([0-9]+)$")];

const OBSTACLES_PATTERNS: &[(TokenKind, &str)] = &[(
    TokenKind::ObstaclesRr,
    r"^RR\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)$",
)];

const PRESOLVE_PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::PresolveFixed, r"^FIXED\s+([0-9]+)$"),
    (TokenKind::PresolveLower, r"^LOWER\s+([0-9]+)$"),
    (TokenKind::PresolveUpper, r"^UPPER\s+([0-9]+)$"),
    (TokenKind::PresolveTime, r"^TIME\s+([0-9]+)$"),
    (TokenKind::PresolveOrgnodes, r"^ORGNODES\s+([0-9]+)$"),
    (TokenKind::PresolveOrgedges, r"^ORGEDGES\s+([0-9]+)$"),
    (
        TokenKind::PresolveEa,
        r"^EA\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)$",
    ),
    (TokenKind::PresolveEc, r"^EC\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)$"),
    (TokenKind::PresolveEd, r"^ED\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)$"),
    (TokenKind::PresolveEs, r"^ES\s+([0-9]+)\s+([0-9]+)$"),
];

const TERMINALS_PATTERNS: &[(TokenKind, &str)] = &[
    (TokenKind::TerminalsTerminals, r"^Terminals\s+([0-9]+)$"),
    (TokenKind::TerminalsRootp, r"^RootP\s+([0-9]+)$"),
    (TokenKind::TerminalsT, r"^T\s+([0-9]+)$"),
    (TokenKind::TerminalsTp, r"^TP\s+([0-9]+)$"),
];

static COMMENT: Lazy<SectionGrammar> =
    Lazy::new(|| SectionGrammar::compile(SectionKind::Comment, COMMENT_PATTERNS));

static COORDINATES: Lazy<SectionGrammar> = Lazy::new(|| {
    let mut grammar = SectionGrammar::compile(SectionKind::Coordinates, &[]);
    grammar.tokens.insert(
        0,
        TokenDef {
            kind: TokenKind::CoordinatesDd,
            shape: TokenShape::VariableArity {
                keyword: "DD",
                field: FieldKind::Integer,
            },
        },
    );
    grammar
});

static GRAPH: Lazy<SectionGrammar> =
    Lazy::new(|| SectionGrammar::compile(SectionKind::Graph, GRAPH_PATTERNS));

static MAXIMUM_DEGREES: Lazy<SectionGrammar> = Lazy::new(|| {
    SectionGrammar::compile(SectionKind::MaximumDegrees, MAXIMUM_DEGREES_PATTERNS)
});

static OBSTACLES: Lazy<SectionGrammar> =
    Lazy::new(|| SectionGrammar::compile(SectionKind::Obstacles, OBSTACLES_PATTERNS));

static PRESOLVE: Lazy<SectionGrammar> =
    Lazy::new(|| SectionGrammar::compile(SectionKind::Presolve, PRESOLVE_PATTERNS));

static TERMINALS: Lazy<SectionGrammar> =
    Lazy::new(|| SectionGrammar::compile(SectionKind::Terminals, TERMINALS_PATTERNS));

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_table_has_exactly_one_terminator() {
        for kind in SectionKind::ALL {
            let terminators = kind
                .grammar()
                .tokens()
                .iter()
                .filter(|token| token.is_terminator())
                .count();
            assert_eq!(terminators, 1, "{kind} should have one END token");
        }
    }

    #[test]
    fn every_token_lives_in_its_own_section_table() {
        for token in TokenKind::ALL {
            let table = token.section().grammar();
            assert_eq!(table.section(), token.section());
            assert!(
                table.tokens().iter().any(|def| def.kind == *token),
                "{token} missing from the {} table",
                token.section()
            );
        }
    }

    #[rstest]
    #[case("Comment", Some(SectionKind::Comment))]
    #[case("MaximumDegrees", Some(SectionKind::MaximumDegrees))]
    #[case("comment", None)]
    #[case("Bogus", None)]
    fn section_lookup_is_case_sensitive(#[case] name: &str, #[case] expected: Option<SectionKind>) {
        assert_eq!(SectionKind::from_name(name), expected);
    }

    #[test]
    fn capability_names() {
        assert_eq!(TokenKind::GraphE.capability(), "graph__e");
        assert_eq!(TokenKind::MaximumDegreesMd.capability(), "maximum_degrees__md");
        assert_eq!(TokenKind::CommentEnd.capability(), "comment__end");
        assert_eq!(SectionKind::MaximumDegrees.open_capability(), "maximumdegrees");
    }

    #[test]
    fn fixed_field_counts_follow_the_patterns() {
        let count = |kind: TokenKind| {
            kind.section()
                .grammar()
                .tokens()
                .iter()
                .find(|def| def.kind == kind)
                .and_then(|def| def.shape.field_count())
        };
        assert_eq!(count(TokenKind::GraphE), Some(3));
        assert_eq!(count(TokenKind::PresolveEa), Some(4));
        assert_eq!(count(TokenKind::CommentName), Some(1));
        assert_eq!(count(TokenKind::TerminalsEnd), Some(0));
        assert_eq!(count(TokenKind::CoordinatesDd), None);
    }

    #[rstest]
    #[case("DD 222 333", Some(vec!["222", "333"]))]
    #[case("dd 1 2 3 4", Some(vec!["1", "2", "3", "4"]))]
    #[case("DD", Some(vec![]))]
    #[case("DD 777 abc 999", None)]
    #[case("DDX 1 2", None)]
    #[case("E 1 2 3", None)]
    fn variable_arity_shape(#[case] line: &str, #[case] expected: Option<Vec<&str>>) {
        let shape = TokenShape::VariableArity {
            keyword: "DD",
            field: FieldKind::Integer,
        };
        assert_eq!(shape.captures(line), expected);
    }
}
