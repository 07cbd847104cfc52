//! Root recognizer: the file header, section openings and the `EOF` marker.
//!
//! These are the only constructs allowed outside a section body. The magic
//! number and keywords are matched case-insensitively; section names are
//! looked up case-sensitively.

use crate::error::{Error, Result};
use crate::field::Field;
use crate::grammar::SectionKind;
use crate::visitor::{Capability, Event, Visitor};
use once_cell::sync::Lazy;
use regex::Regex;

/// `33D32945` magic number followed by free text.
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^33D32945\s+(.+)$").unwrap());

/// `SECTION` followed by a single word of ASCII letters, digits or `_`.
static SECTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^SECTION\s+([A-Za-z0-9_]+)$").unwrap());

static EOF_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^EOF$").unwrap());

/// Matches `regex` against the line and returns the capture groups as text
/// fields. Root constructs never convert digits.
fn root_fields(regex: &Regex, line: &str) -> Result<Vec<Field>> {
    let caps = regex
        .captures(line)
        .ok_or_else(|| Error::unexpected_line(line))?;
    Ok(caps
        .iter()
        .skip(1)
        .map(|group| Field::Text(group.map_or("", |m| m.as_str()).to_string()))
        .collect())
}

fn emit<V: Visitor + ?Sized>(
    visitor: &mut V,
    capability: Capability,
    line: &str,
    fields: &[Field],
) {
    tracing::trace!(capability = capability.name(), "root construct");
    visitor.visit(&Event {
        capability,
        raw: line,
        fields,
    });
}

/// Matches the file header and invokes `header`.
///
/// # Errors
///
/// Returns a parsing failure when the line is not a header.
pub fn match_header<V: Visitor + ?Sized>(line: &str, visitor: &mut V) -> Result<()> {
    let fields = root_fields(&HEADER_REGEX, line)?;
    emit(visitor, Capability::Header, line, &fields);
    Ok(())
}

/// Matches the `EOF` marker and invokes `eof`.
///
/// # Errors
///
/// Returns a parsing failure when the line is not `EOF`.
pub fn match_eof<V: Visitor + ?Sized>(line: &str, visitor: &mut V) -> Result<()> {
    let fields = root_fields(&EOF_REGEX, line)?;
    emit(visitor, Capability::Eof, line, &fields);
    Ok(())
}

/// Matches a `SECTION <name>` line and resolves the name to a section.
///
/// A syntactically valid line always invokes `section` first. When the name
/// is known, the section-specific callback follows with the same arguments
/// and the section is returned.
///
/// # Errors
///
/// Returns a parsing failure when the line is not a section opening, and
/// [`Error::UnrecognizedSection`] when the name is not a known section.
pub fn match_section<V: Visitor + ?Sized>(line: &str, visitor: &mut V) -> Result<SectionKind> {
    let caps = SECTION_REGEX
        .captures(line)
        .ok_or_else(|| Error::unexpected_line(line))?;
    let name = caps.get(1).map_or("", |m| m.as_str());
    let fields = [Field::Text(name.to_string())];
    emit(visitor, Capability::Section, line, &fields);

    let kind = SectionKind::from_name(name)
        .ok_or_else(|| Error::unrecognized_section(name, SectionKind::known_names()))?;
    emit(visitor, Capability::SectionOpen(kind), line, &fields);
    tracing::debug!(section = %kind, "section opened");
    Ok(kind)
}
