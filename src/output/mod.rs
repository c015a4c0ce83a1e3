//! Readers and writers for notices, run results and comparison reports.
//!
//! Everything on disk is JSON:
//! - Notices as an array of `{location, line_number, col, severity, tag, msg}`
//! - Run results as `{exit_code, stdout, stderr}`
//! - Comparison summaries with a timestamp, status and report rows

pub mod json;

// Re-export main functions
pub use json::{
    notices_to_string, read_notices, read_report, read_run_result, write_notices, write_report,
};
