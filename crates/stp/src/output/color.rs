//! Color helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success: green  (files that parse)
//!   - Error:   red    (parse failures)
//!   - Info:    cyan   (capability names, file paths)
//!   - Muted:   dimmed (labels, raw lines)
//!   - Emphasis: bold  (headings)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_colors_disabled() {
        let config = OutputConfig { use_colors: false };
        assert_eq!(success("ok", &config), "ok");
        assert_eq!(error("failed", &config), "failed");
        assert_eq!(info("graph__e", &config), "graph__e");
        assert_eq!(dimmed("label", &config), "label");
        assert_eq!(bold("Title", &config), "Title");
    }
}
