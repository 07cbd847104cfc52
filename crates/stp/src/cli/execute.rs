//! Command execution logic.

use anyhow::{Result, bail};
use std::io::{self, Write};

use super::args::{CheckArgs, SummaryArgs, TraceArgs};
use crate::inspect::{self, Summary, Trace, TraceEntry};
use crate::output::{self, OutputConfig, OutputMode};

/// Execute the check command
pub fn execute_check(
    args: &CheckArgs,
    output_mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let results: Vec<_> = args.files.iter().map(|path| inspect::check(path)).collect();
    let failed = results.iter().filter(|result| !result.ok).count();

    match output_mode {
        OutputMode::Json => output::print_json(&results)?,
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for result in &results {
                output::write_check_text(&mut handle, result, config)?;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} file(s) failed to parse", results.len());
    }
    tracing::info!(files = results.len(), "all files parsed");
    Ok(())
}

/// Execute the summary command
pub fn execute_summary(
    args: &SummaryArgs,
    output_mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let summary = inspect::run(&args.file, Summary::default())?;

    match output_mode {
        OutputMode::Json => output::print_json(&summary)?,
        OutputMode::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            output::write_summary_text(&mut handle, &summary, config)?;
        }
    }
    Ok(())
}

/// Execute the trace command
pub fn execute_trace(
    args: &TraceArgs,
    output_mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let trace = inspect::run(
        &args.file,
        Trace::new(|entry: &TraceEntry| match output_mode {
            OutputMode::Json => output::write_json_line(&mut handle, entry),
            OutputMode::Text => output::write_trace_text(&mut handle, entry, config),
        }),
    )?;
    let count = trace.finish()?;
    handle.flush()?;

    tracing::debug!(callbacks = count, "trace complete");
    Ok(())
}
