//! Configuration for the stp CLI.
//!
//! Settings come from an optional YAML file: the path given with `--config`,
//! or `.stp.yaml` in the current directory when it exists. Missing keys take
//! their defaults.
//!
//! ```yaml
//! log-filter: steinlib=debug,stp=info
//! color: false
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".stp.yaml";

/// Log filter used when neither `RUST_LOG` nor the config file set one.
pub const DEFAULT_LOG_FILTER: &str = "steinlib=warn,stp=info";

/// Configuration file structure for stp.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StpConfig {
    /// `tracing` filter directives, e.g. `steinlib=debug`.
    #[serde(rename = "log-filter")]
    pub log_filter: String,

    /// Whether to colorize text output. `NO_COLOR` overrides this.
    pub color: bool,
}

impl Default for StpConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: true,
        }
    }
}

impl StpConfig {
    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or a configuration
    /// error if it is not valid YAML for this structure.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Parse configuration from YAML text. An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed YAML or unknown keys.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicit path must exist. Without one, `.stp.yaml` in the current
    /// directory is used if present, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the chosen file cannot be read or parsed.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::discover_in(explicit, &current_dir)
    }

    /// Like [`StpConfig::discover`], looking for the default file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error when the chosen file cannot be read or parsed.
    pub fn discover_in(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };
        tracing::debug!(path = %path.display(), "loading configuration");
        Self::load(&path)
    }
}
