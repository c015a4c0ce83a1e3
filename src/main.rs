//! Notice Check CLI
//!
//! Compares static analyzer diagnostics against per-line expectations.
//! Interprets captured analyzer output and renders readable diffs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use notice_check::commands::{
    display_version, execute_check, execute_compare, execute_interpret, CheckArgs, CompareArgs,
    InterpretArgs,
};

/// Notice Check - analyzer diagnostics versus expectations
#[derive(Parser, Debug)]
#[command(name = "notice-check")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare actual notices against expected notices
    Compare {
        /// JSON notices the run was expected to produce
        #[arg(short, long)]
        expected: PathBuf,

        /// JSON notices the run actually produced
        #[arg(short, long)]
        actual: PathBuf,

        /// Directory report paths are made relative to
        #[arg(long, env = "NOTICE_CHECK_ROOT_DIR", default_value = ".")]
        root_dir: PathBuf,

        /// Output path for the JSON comparison report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full report to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Turn captured analyzer stdout into JSON notices
    Interpret {
        /// File holding the analyzer's stdout
        #[arg(short, long)]
        input: PathBuf,

        /// Directory the analyzer was run from
        #[arg(long, env = "NOTICE_CHECK_ROOT_DIR", default_value = ".")]
        root_dir: PathBuf,

        /// Output path for the JSON notices
        #[arg(short, long, default_value = "notices.json")]
        output: PathBuf,
    },

    /// Check a captured run against expectations
    Check {
        /// JSON notices the run is expected to produce
        #[arg(short, long)]
        expected: PathBuf,

        /// JSON run result with exit_code, stdout and stderr
        #[arg(short, long)]
        result: PathBuf,

        /// Directory the analyzer was run from
        #[arg(long, env = "NOTICE_CHECK_ROOT_DIR", default_value = ".")]
        root_dir: PathBuf,

        /// Expect a non-zero exit code even without expected errors
        #[arg(long)]
        expect_fail: bool,

        /// Exact stderr the run must produce
        #[arg(long, default_value = "")]
        expect_stderr: String,

        /// Require the daemon to have restarted (true) or not (false)
        #[arg(long)]
        expect_daemon_restart: Option<bool>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Compare {
            expected,
            actual,
            root_dir,
            output,
            summary,
        } => {
            execute_compare(CompareArgs {
                expected,
                actual,
                root_dir,
                output,
                summary,
            })?;
        }

        Commands::Interpret {
            input,
            root_dir,
            output,
        } => {
            execute_interpret(InterpretArgs {
                input,
                root_dir,
                output,
            })?;
        }

        Commands::Check {
            expected,
            result,
            root_dir,
            expect_fail,
            expect_stderr,
            expect_daemon_restart,
        } => {
            execute_check(CheckArgs {
                expected,
                result,
                root_dir,
                expect_fail,
                expect_stderr,
                expect_daemon_restart,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
