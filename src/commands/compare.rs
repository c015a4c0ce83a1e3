//! Compare command implementation.
//! Diffs two notice files and reports every discrepancy.

use super::models::CompareArgs;
use crate::diff::render_report;
use crate::output::{read_notices, write_report};
use crate::utils::error::CompareError;
use anyhow::{Context, Result};
use colored::*;

/// Execute the compare command
pub fn execute_compare(args: CompareArgs) -> Result<()> {
    // Step 1: Load both sides
    let expected = read_notices(&args.expected).context("Failed to read expected notices")?;
    let actual = read_notices(&args.actual).context("Failed to read actual notices")?;

    // Step 2: Diff with the actual notices on the GOT side
    let diff = actual.diff(&args.root_dir, &expected);
    let report = render_report(&diff);

    // Step 3: Write output if requested
    if let Some(path) = &args.output {
        write_report(&report.to_summary(), path).context("Failed to write comparison report")?;
        println!(
            "📊 Comparison report written to {}",
            path.display().to_string().cyan()
        );
    }

    // Step 4: Terminal Summary
    if args.summary {
        println!("{}", report.lines.join("\n"));
    }

    println!(
        "{} {} lines across {} files ({} differing)",
        if report.different {
            report.status().red().bold()
        } else {
            report.status().green().bold()
        },
        report.lines_checked,
        report.files_checked,
        report.differing_lines
    );

    // Step 5: Final Status
    if report.different {
        return Err(CompareError::NoticesDiffer(report.failure_text()).into());
    }

    Ok(())
}
