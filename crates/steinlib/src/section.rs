//! Section recognizer: matches lines inside a section against its grammar.

use crate::error::{Error, Result};
use crate::field::Field;
use crate::grammar::{SectionGrammar, TokenKind};
use crate::state::State;
use crate::visitor::{Capability, Event, Visitor};

/// A line matched against a section grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognized {
    /// The token whose shape matched.
    pub token: TokenKind,
    /// Converted capture groups, in order.
    pub fields: Vec<Field>,
    /// State the parser moves to after this line.
    pub next: State,
}

/// Matches a trimmed line against `grammar` without invoking any callback.
///
/// The first token whose shape matches wins; section tables are built so that
/// at most one can. The terminator moves the parser back to
/// [`State::WaitForSection`], every other token keeps it inside the section.
///
/// # Errors
///
/// Returns a parsing failure naming the line when no token matches.
pub fn recognize(grammar: &SectionGrammar, line: &str) -> Result<Recognized> {
    grammar
        .tokens()
        .iter()
        .find_map(|def| {
            def.shape.captures(line).map(|captures| Recognized {
                token: def.kind,
                fields: captures.into_iter().map(Field::from_capture).collect(),
                next: if def.is_terminator() {
                    State::WaitForSection
                } else {
                    State::InsideSection(grammar.section())
                },
            })
        })
        .ok_or_else(|| Error::invalid_token(line))
}

/// Matches a line inside a section and reports it to `visitor`.
///
/// On a match the token's capability is invoked with the line and its
/// converted fields, and the next state is returned.
///
/// # Errors
///
/// Returns a parsing failure naming the line when no token matches. The
/// visitor is not called in that case.
pub fn parse_token<V: Visitor + ?Sized>(
    grammar: &SectionGrammar,
    line: &str,
    visitor: &mut V,
) -> Result<State> {
    let recognized = recognize(grammar, line)?;
    tracing::trace!(
        capability = recognized.token.capability(),
        fields = recognized.fields.len(),
        "section token"
    );
    visitor.visit(&Event {
        capability: Capability::Token(recognized.token),
        raw: line,
        fields: &recognized.fields,
    });
    if recognized.token.is_terminator() {
        tracing::debug!(section = %grammar.section(), "section closed");
    }
    Ok(recognized.next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::SectionKind;
    use rstest::rstest;

    fn ints(values: &[u64]) -> Vec<Field> {
        values.iter().copied().map(Field::Int).collect()
    }

    #[derive(Default)]
    struct LastCall(Option<(String, String, Vec<Field>)>);

    impl Visitor for LastCall {
        fn visit(&mut self, event: &Event<'_>) {
            self.0 = Some((
                event.capability.to_string(),
                event.raw.to_string(),
                event.fields.to_vec(),
            ));
        }
    }

    #[rstest]
    #[case(
        SectionKind::Comment,
        r#"Name "Foo bar""#,
        "comment__name",
        vec![Field::from("Foo bar")],
    )]
    #[case(
        SectionKind::Comment,
        r#"Creator "Foo bar""#,
        "comment__creator",
        vec![Field::from("Foo bar")],
    )]
    #[case(
        SectionKind::Comment,
        r#"Remark "Foo bar""#,
        "comment__remark",
        vec![Field::from("Foo bar")],
    )]
    #[case(
        SectionKind::Comment,
        r#"Problem "Foo bar""#,
        "comment__problem",
        vec![Field::from("Foo bar")],
    )]
    #[case(SectionKind::Comment, r#"Name "42""#, "comment__name", ints(&[42]))]
    #[case(SectionKind::Coordinates, "DD 222 333", "coordinates__dd", ints(&[222, 333]))]
    #[case(SectionKind::Coordinates, "DD 777 888 999", "coordinates__dd", ints(&[777, 888, 999]))]
    #[case(
        SectionKind::Coordinates,
        "DD 777 888 999 222",
        "coordinates__dd",
        ints(&[777, 888, 999, 222]),
    )]
    #[case(SectionKind::Graph, "Obstacles 555", "graph__obstacles", ints(&[555]))]
    #[case(SectionKind::Graph, "Nodes 777", "graph__nodes", ints(&[777]))]
    #[case(SectionKind::Graph, "Edges 234", "graph__edges", ints(&[234]))]
    #[case(SectionKind::Graph, "Arcs 321", "graph__arcs", ints(&[321]))]
    #[case(SectionKind::Graph, "e 234 789 123", "graph__e", ints(&[234, 789, 123]))]
    #[case(SectionKind::Graph, "a 234 654 321", "graph__a", ints(&[234, 654, 321]))]
    #[case(SectionKind::MaximumDegrees, "md 555", "maximum_degrees__md", ints(&[555]))]
    #[case(SectionKind::Presolve, "fixed 555", "presolve__fixed", ints(&[555]))]
    #[case(SectionKind::Presolve, "lower 444", "presolve__lower", ints(&[444]))]
    #[case(SectionKind::Presolve, "upper 999", "presolve__upper", ints(&[999]))]
    #[case(SectionKind::Presolve, "time 555", "presolve__time", ints(&[555]))]
    #[case(SectionKind::Presolve, "orgnodes 555", "presolve__orgnodes", ints(&[555]))]
    #[case(SectionKind::Presolve, "orgedges 555", "presolve__orgedges", ints(&[555]))]
    #[case(
        SectionKind::Presolve,
        "ea 111 222 333 444",
        "presolve__ea",
        ints(&[111, 222, 333, 444]),
    )]
    #[case(SectionKind::Presolve, "ec 555 666 777", "presolve__ec", ints(&[555, 666, 777]))]
    #[case(SectionKind::Presolve, "ed 555 888 999", "presolve__ed", ints(&[555, 888, 999]))]
    #[case(SectionKind::Presolve, "es 555 666", "presolve__es", ints(&[555, 666]))]
    #[case(
        SectionKind::Obstacles,
        "rr 555 444 333 222",
        "obstacles__rr",
        ints(&[555, 444, 333, 222]),
    )]
    #[case(SectionKind::Terminals, "terminals 444", "terminals__terminals", ints(&[444]))]
    #[case(SectionKind::Terminals, "rootp 555", "terminals__rootp", ints(&[555]))]
    #[case(SectionKind::Terminals, "t 333", "terminals__t", ints(&[333]))]
    #[case(SectionKind::Terminals, "tp 888", "terminals__tp", ints(&[888]))]
    fn token_callbacks(
        #[case] section: SectionKind,
        #[case] line: &str,
        #[case] capability: &str,
        #[case] fields: Vec<Field>,
    ) {
        let mut visitor = LastCall::default();
        let next = parse_token(section.grammar(), line, &mut visitor).unwrap();

        assert_eq!(next, State::InsideSection(section));
        assert_eq!(
            visitor.0,
            Some((capability.to_string(), line.to_string(), fields))
        );
    }

    #[rstest]
    fn end_returns_to_wait_for_section(
        #[values(
            SectionKind::Comment,
            SectionKind::Coordinates,
            SectionKind::Graph,
            SectionKind::MaximumDegrees,
            SectionKind::Obstacles,
            SectionKind::Presolve,
            SectionKind::Terminals
        )]
        section: SectionKind,
        #[values("END", "end", "End")] line: &str,
    ) {
        let mut visitor = LastCall::default();
        let next = parse_token(section.grammar(), line, &mut visitor).unwrap();

        assert_eq!(next, State::WaitForSection);
        let (capability, _, fields) = visitor.0.unwrap();
        assert_eq!(capability, format!("{}__end", section.token_prefix()));
        assert!(fields.is_empty());
    }

    #[rstest]
    #[case(SectionKind::Comment, "FOO 1 2 3")]
    #[case(SectionKind::Comment, r#"Remark "Foo bar" MORE STUFF"#)]
    #[case(SectionKind::Coordinates, "DD 777 abc 999 222")]
    #[case(SectionKind::Graph, "E 1 2")]
    #[case(SectionKind::Graph, "E 1 2 x")]
    #[case(SectionKind::Terminals, "T -1")]
    #[case(SectionKind::Presolve, "END 1")]
    fn rejects_lines_outside_the_grammar(#[case] section: SectionKind, #[case] line: &str) {
        let mut visitor = LastCall::default();
        let err = parse_token(section.grammar(), line, &mut visitor).unwrap_err();

        assert!(err.is_parsing_failure());
        assert!(!err.is_unrecognized_section());
        assert!(err.to_string().contains(line));
        assert_eq!(visitor.0, None);
    }

    #[test]
    fn tokens_of_other_sections_are_rejected() {
        assert!(recognize(SectionKind::Terminals.grammar(), "E 1 2 3").is_err());
        assert!(recognize(SectionKind::Graph.grammar(), "T 1").is_err());
    }

    #[test]
    fn graph_obstacles_keeps_non_numeric_text() {
        let recognized = recognize(SectionKind::Graph.grammar(), "Obstacles many").unwrap();
        assert_eq!(recognized.token, TokenKind::GraphObstacles);
        assert_eq!(recognized.fields, vec![Field::from("many")]);
    }

    #[test]
    fn every_sample_line_matches_exactly_one_token() {
        let samples = [
            (SectionKind::Comment, r#"Name "x""#),
            (SectionKind::Comment, r#"Creator "x""#),
            (SectionKind::Comment, r#"Remark "x""#),
            (SectionKind::Comment, r#"Problem "x""#),
            (SectionKind::Coordinates, "DD 1 2"),
            (SectionKind::Graph, "Obstacles 3"),
            (SectionKind::Graph, "Nodes 3"),
            (SectionKind::Graph, "Edges 3"),
            (SectionKind::Graph, "Arcs 3"),
            (SectionKind::Graph, "E 1 2 3"),
            (SectionKind::Graph, "A 1 2 3"),
            (SectionKind::MaximumDegrees, "MD 3"),
            (SectionKind::Obstacles, "RR 1 2 3 4"),
            (SectionKind::Presolve, "FIXED 3"),
            (SectionKind::Presolve, "LOWER 3"),
            (SectionKind::Presolve, "UPPER 3"),
            (SectionKind::Presolve, "TIME 3"),
            (SectionKind::Presolve, "ORGNODES 3"),
            (SectionKind::Presolve, "ORGEDGES 3"),
            (SectionKind::Presolve, "EA 1 2 3 4"),
            (SectionKind::Presolve, "EC 1 2 3"),
            (SectionKind::Presolve, "ED 1 2 3"),
            (SectionKind::Presolve, "ES 1 2"),
            (SectionKind::Terminals, "Terminals 3"),
            (SectionKind::Terminals, "RootP 3"),
            (SectionKind::Terminals, "T 3"),
            (SectionKind::Terminals, "TP 3"),
        ];
        for kind in SectionKind::ALL {
            let end_matches = kind
                .grammar()
                .tokens()
                .iter()
                .filter(|def| def.shape.captures("END").is_some())
                .count();
            assert_eq!(end_matches, 1, "END is ambiguous in {kind}");
        }
        for (section, line) in samples {
            let matches = section
                .grammar()
                .tokens()
                .iter()
                .filter(|def| def.shape.captures(line).is_some())
                .count();
            assert_eq!(matches, 1, "{line:?} is ambiguous in {section}");
        }
    }
}
