//! A visitor that reports every callback as it happens.

use serde::Serialize;
use std::fmt;
use std::io;
use steinlib::{Event, Field, Visitor};

/// A field as it appears in trace output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TraceValue {
    /// A converted integer.
    Int(u64),
    /// Text, printed quoted.
    Text(String),
}

impl From<&Field> for TraceValue {
    fn from(field: &Field) -> Self {
        match field {
            Field::Int(n) => Self::Int(*n),
            Field::Text(s) => Self::Text(s.clone()),
        }
    }
}

impl fmt::Display for TraceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// One callback invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    /// Capability name, e.g. `graph__e`.
    pub capability: String,
    /// The trimmed source line.
    pub line: String,
    /// Converted fields, in order.
    pub fields: Vec<TraceValue>,
}

impl TraceEntry {
    /// Build an entry from the parts of an event.
    pub fn new(capability: &str, line: &str, fields: &[Field]) -> Self {
        Self {
            capability: capability.to_string(),
            line: line.to_string(),
            fields: fields.iter().map(TraceValue::from).collect(),
        }
    }
}

impl From<&Event<'_>> for TraceEntry {
    fn from(event: &Event<'_>) -> Self {
        Self::new(event.capability.name(), event.raw, event.fields)
    }
}

/// Hands every event to `sink` as a [`TraceEntry`].
///
/// Visitor callbacks cannot fail, so the first sink error is kept and later
/// events are dropped. Check it with [`Trace::finish`].
pub struct Trace<F> {
    sink: F,
    count: usize,
    error: Option<io::Error>,
}

impl<F> Trace<F>
where
    F: FnMut(&TraceEntry) -> io::Result<()>,
{
    /// Create a trace that writes through `sink`.
    pub fn new(sink: F) -> Self {
        Self {
            sink,
            count: 0,
            error: None,
        }
    }

    /// Number of events delivered to the sink.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Return the event count, or the first sink error.
    ///
    /// # Errors
    ///
    /// Returns the error the sink reported, if any.
    pub fn finish(self) -> io::Result<usize> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.count),
        }
    }
}

impl<F> Visitor for Trace<F>
where
    F: FnMut(&TraceEntry) -> io::Result<()>,
{
    fn visit(&mut self, event: &Event<'_>) {
        if self.error.is_some() {
            return;
        }
        match (self.sink)(&TraceEntry::from(event)) {
            Ok(()) => self.count += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_callback_order() {
        let mut entries = Vec::new();
        let trace = steinlib::parse(
            ["33D32945 STP File", "SECTION Graph", "E 1 2 10", "END", "EOF"],
            Trace::new(|entry: &TraceEntry| {
                entries.push(entry.clone());
                Ok(())
            }),
        )
        .unwrap();
        assert_eq!(trace.finish().unwrap(), 6);

        let names: Vec<&str> = entries.iter().map(|e| e.capability.as_str()).collect();
        assert_eq!(names, ["header", "section", "graph", "graph__e", "graph__end", "eof"]);
        assert_eq!(
            entries[3].fields,
            [TraceValue::Int(1), TraceValue::Int(2), TraceValue::Int(10)]
        );
    }

    #[test]
    fn first_sink_error_is_kept() {
        let trace = steinlib::parse(
            ["33D32945 STP File", "EOF"],
            Trace::new(|_: &TraceEntry| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))),
        )
        .unwrap();
        assert_eq!(trace.count(), 0);
        assert_eq!(trace.finish().unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn json_shape() {
        let entry = TraceEntry::new("graph__e", "E 1 2 10", &[Field::Int(1), Field::from("x")]);
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({"capability": "graph__e", "line": "E 1 2 10", "fields": [1, "x"]})
        );
    }
}
