//! Output formatting for CLI commands.
//!
//! Every command prints either human-readable text or JSON. Text output is
//! written through a `Write` handle so it can be tested without a terminal.
//!
//! Submodules:
//! - [`color`]: semantic color helpers

pub mod color;

use crate::config::StpConfig;
use crate::inspect::{FileCheck, Summary, TraceEntry};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{error, info, success};

use color::{bold, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

/// Settings that control how text output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Build the output settings from the configuration and the environment.
    ///
    /// Colors are off when the config disables them or `NO_COLOR` is set.
    pub fn from_config(config: &StpConfig) -> Self {
        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = config.color && env::var_os("NO_COLOR").is_none();
        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// JSON
// ============================================================================

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

/// Write a value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

/// Write a value as a single line of JSON.
pub fn write_json_line<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(value).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

/// Write the outcome of checking one file.
pub fn write_check_text<W: Write>(
    w: &mut W,
    check: &FileCheck,
    config: &OutputConfig,
) -> io::Result<()> {
    let path = info(&check.file, config);
    match &check.error {
        None => writeln!(w, "{path}: {}", success("ok", config)),
        Some(message) => {
            let location = check
                .line_number
                .map(|n| format!(":{n}"))
                .unwrap_or_default();
            writeln!(w, "{path}{location}: {} {message}", error("error:", config))
        }
    }
}

/// Write one trace entry as `capability [fields]`.
pub fn write_trace_text<W: Write>(
    w: &mut W,
    entry: &TraceEntry,
    config: &OutputConfig,
) -> io::Result<()> {
    let fields: Vec<String> = entry.fields.iter().map(ToString::to_string).collect();
    writeln!(
        w,
        "{} [{}]",
        info(&entry.capability, config),
        fields.join(", ")
    )
}

fn write_optional<W: Write, T: std::fmt::Display>(
    w: &mut W,
    label: &str,
    value: Option<T>,
    config: &OutputConfig,
) -> io::Result<()> {
    match value {
        Some(value) => writeln!(w, "  {} {value}", dimmed(&format!("{label:<12}"), config)),
        None => writeln!(w, "  {} -", dimmed(&format!("{label:<12}"), config)),
    }
}

/// Write a summary as an indented report.
pub fn write_summary_text<W: Write>(
    w: &mut W,
    summary: &Summary,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", bold("Comment", config))?;
    let meta = &summary.metadata;
    write_optional(w, "name", meta.name.as_deref(), config)?;
    write_optional(w, "creator", meta.creator.as_deref(), config)?;
    write_optional(w, "problem", meta.problem.as_deref(), config)?;
    write_optional(w, "remark", meta.remark.as_deref(), config)?;

    writeln!(w)?;
    writeln!(w, "{}", bold("Declared", config))?;
    let declared = &summary.declared;
    write_optional(w, "nodes", declared.nodes, config)?;
    write_optional(w, "edges", declared.edges, config)?;
    write_optional(w, "arcs", declared.arcs, config)?;
    write_optional(w, "terminals", declared.terminals, config)?;
    write_optional(w, "obstacles", declared.obstacles, config)?;

    writeln!(w)?;
    writeln!(w, "{}", bold("Observed", config))?;
    let observed = &summary.observed;
    write_optional(w, "edges", Some(observed.edges), config)?;
    write_optional(w, "arcs", Some(observed.arcs), config)?;
    write_optional(w, "terminals", Some(observed.terminals), config)?;
    write_optional(w, "coordinates", Some(observed.coordinates), config)?;
    write_optional(w, "obstacles", Some(observed.obstacles), config)?;
    write_optional(w, "degrees", Some(observed.maximum_degrees), config)?;
    write_optional(w, "presolve", Some(observed.presolve), config)?;

    writeln!(w)?;
    write_optional(w, "sections", Some(summary.sections.join(", ")), config)?;
    write_optional(w, "dimension", summary.coordinate_dimension, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use steinlib::Field;

    const PLAIN: OutputConfig = OutputConfig { use_colors: false };

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn no_color_config_disables_colors() {
        let config = StpConfig {
            color: false,
            ..StpConfig::default()
        };
        assert!(!OutputConfig::from_config(&config).use_colors);
    }

    #[test]
    fn check_ok_line() {
        let check = FileCheck {
            file: "a.stp".to_string(),
            ok: true,
            line_number: None,
            error: None,
        };
        let out = render(|w| write_check_text(w, &check, &PLAIN));
        assert_eq!(out, "a.stp: ok\n");
    }

    #[test]
    fn check_failure_line() {
        let check = FileCheck {
            file: "a.stp".to_string(),
            ok: false,
            line_number: Some(7),
            error: Some("Unexpected line: x".to_string()),
        };
        let out = render(|w| write_check_text(w, &check, &PLAIN));
        assert_eq!(out, "a.stp:7: error: Unexpected line: x\n");
    }

    #[test]
    fn trace_line_lists_fields() {
        let fields = [Field::Int(1), Field::Int(2), Field::Int(10)];
        let entry = TraceEntry::new("graph__e", "E 1 2 10", &fields);
        let out = render(|w| write_trace_text(w, &entry, &PLAIN));
        assert_eq!(out, "graph__e [1, 2, 10]\n");
    }

    #[test]
    fn trace_line_quotes_text() {
        let entry = TraceEntry::new("section", "SECTION Graph", &[Field::from("Graph")]);
        let out = render(|w| write_trace_text(w, &entry, &PLAIN));
        assert_eq!(out, "section [\"Graph\"]\n");
    }

    #[test]
    fn summary_text_marks_missing_values() {
        let out = render(|w| write_summary_text(w, &Summary::default(), &PLAIN));
        assert!(out.contains("Comment\n"));
        assert!(out.contains("  name         -\n"));
        assert!(out.contains("  edges        0\n"));
    }

    #[test]
    fn json_line_is_compact() {
        let out = render(|w| write_json_line(w, &serde_json::json!({"a": 1})));
        assert_eq!(out, "{\"a\":1}\n");
    }
}
