//! Argument structs for each command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// STP files to check
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Arguments for the summary command
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// STP file to summarize
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the trace command
#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    /// STP file to trace
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
