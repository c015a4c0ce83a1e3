//! Interpret command implementation.
//! Turns captured analyzer stdout into a JSON notice file.

use super::models::InterpretArgs;
use crate::interpret::{filter_output_lines, keep_notice, parse_output_lines};
use crate::notices::ProgramNotices;
use crate::output::write_notices;
use anyhow::{Context, Result};
use colored::*;
use log::info;
use std::fs;

/// Execute the interpret command
pub fn execute_interpret(args: InterpretArgs) -> Result<()> {
    let stdout = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read analyzer output {}", args.input.display()))?;

    let filtered = filter_output_lines(&stdout);
    if filtered.daemon_restarted {
        info!("Analyzer output reports a daemon restart");
    }

    let notices = parse_output_lines(
        filtered.lines.iter().map(String::as_str),
        &args.root_dir,
        ProgramNotices::new(),
        keep_notice,
    )
    .context("Failed to interpret analyzer output")?;

    write_notices(&notices, &args.output).context("Failed to write notices")?;
    println!(
        "✓ {} notices written to {}",
        notices.iter().count(),
        args.output.display().to_string().cyan()
    );

    Ok(())
}
