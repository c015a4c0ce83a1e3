//! Interpretation of analyzer output.
//!
//! This module handles:
//! - Stripping summary, debug and daemon lines from captured stdout
//! - Parsing `file:line[:col]: severity: msg [tag]` lines into notices
//! - Adding those notices to a `ProgramNotices`

mod filter;
mod output_parser;

pub use filter::{filter_output_lines, FilteredOutput};
pub use output_parser::{keep_notice, parse_output_line, parse_output_lines, OutputLine};
