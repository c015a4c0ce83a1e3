//! Check command implementation.
//! Judges a captured run against expected notices, stderr and exit status.

use super::models::CheckArgs;
use crate::expectations::{Expectations, OutputNoticeChecker};
use crate::output::{read_notices, read_run_result};
use anyhow::{Context, Result};
use colored::*;

/// Execute the check command
pub fn execute_check(args: CheckArgs) -> Result<()> {
    // Step 1: Load expectations and the run
    let expected = read_notices(&args.expected).context("Failed to read expected notices")?;
    let result = read_run_result(&args.result).context("Failed to read run result")?;

    // Step 2: Build the checker
    let mut checker = OutputNoticeChecker::new(result, &args.root_dir);
    if let Some(restarted) = args.expect_daemon_restart {
        checker = checker.expecting_daemon_restart(restarted);
    }

    // Step 3: Check notices, stderr and exit code
    Expectations::new(expected)
        .with_expect_fail(args.expect_fail)
        .with_expect_stderr(args.expect_stderr)
        .check(&checker)?;

    println!("{}", "✓ Run matches expectations".green().bold());
    Ok(())
}
