//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `check`: Parse files and report whether each one is valid STP
//! - `summary`: Count what a file declares and contains
//! - `trace`: Print every parser callback as it fires
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config`: Read settings from this YAML file instead of `.stp.yaml`
//!
//! # Example
//!
//! ```bash
//! stp check instances/*.stp
//! stp --json summary instances/b01.stp
//! stp trace instances/b01.stp
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::StpConfig;
use crate::output::{OutputConfig, OutputMode};

pub use args::{CheckArgs, SummaryArgs, TraceArgs};

/// stp - inspect SteinLib STP files
///
/// Parses Steiner tree problem instances in the SteinLib STP format and
/// reports what the parser sees.
#[derive(Parser, Debug)]
#[command(name = "stp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to `.stp.yaml` in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check that files parse
    ///
    /// Prints `ok` or the first failure with its line number for each file.
    /// Exits with a non-zero status when any file fails.
    Check(CheckArgs),

    /// Summarize a file
    ///
    /// Shows the comment metadata, declared and observed record counts, the
    /// sections in order and the coordinate dimension.
    Summary(SummaryArgs),

    /// Print every parser callback
    ///
    /// One line per callback: the capability name and its fields.
    Trace(TraceArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns clap's error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// The output mode selected by `--json`.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error when an input cannot be read or parsed, or when
    /// `check` finds an invalid file.
    pub fn execute(&self, config: &StpConfig) -> Result<()> {
        let output_mode = self.output_mode();
        let output_config = OutputConfig::from_config(config);

        match &self.command {
            Commands::Check(args) => execute::execute_check(args, output_mode, &output_config),
            Commands::Summary(args) => execute::execute_summary(args, output_mode, &output_config),
            Commands::Trace(args) => execute::execute_trace(args, output_mode, &output_config),
        }
    }
}
