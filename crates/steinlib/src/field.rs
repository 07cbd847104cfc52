//! Values extracted from the capture groups of a matched line.

use std::fmt;

/// A single captured value.
///
/// Captures made only of ASCII decimal digits become [`Field::Int`]; anything
/// else, including digit strings too large for a `u64`, stays [`Field::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// A decimal integer.
    Int(u64),
    /// Any other captured text, verbatim.
    Text(String),
}

impl Field {
    /// Converts a raw capture into a field.
    #[must_use]
    pub fn from_capture(capture: &str) -> Self {
        if is_decimal(capture) {
            if let Ok(value) = capture.parse() {
                return Self::Int(value);
            }
        }
        Self::Text(capture.to_string())
    }

    /// Returns the integer value, if this is an integer field.
    #[must_use]
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the text value, if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Returns true when `s` is non-empty and made only of ASCII digits.
pub(crate) fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<u64> for Field {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Field::Int(0))]
    #[case("555", Field::Int(555))]
    #[case("007", Field::Int(7))]
    #[case("Foo bar", Field::Text("Foo bar".to_string()))]
    #[case("-3", Field::Text("-3".to_string()))]
    #[case("1.5", Field::Text("1.5".to_string()))]
    #[case("", Field::Text(String::new()))]
    fn converts_only_plain_digit_strings(#[case] capture: &str, #[case] expected: Field) {
        assert_eq!(Field::from_capture(capture), expected);
    }

    #[test]
    fn oversized_digit_strings_stay_text() {
        let huge = "184467440737095516160";
        assert_eq!(Field::from_capture(huge), Field::Text(huge.to_string()));
    }

    #[test]
    fn accessors() {
        assert_eq!(Field::Int(4).as_int(), Some(4));
        assert_eq!(Field::Int(4).as_text(), None);
        assert_eq!(Field::from("x").as_text(), Some("x"));
        assert_eq!(Field::from("x").to_string(), "x");
    }
}
