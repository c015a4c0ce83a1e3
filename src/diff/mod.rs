//! Notice diff generation and comparison.
//!
//! This module pairs the notices of two programs (what the analyzer reported
//! versus what was expected) and renders a deterministic report.
//!
//! # Example
//! ```ignore
//! use notice_check::diff::compare_notices;
//!
//! let diff = actual.diff(&root_dir, &expected);
//! compare_notices(&diff)?;
//! ```

mod engine;
mod normalizer;
mod output;
mod schema;

// Public API exports
pub use engine::{compare_notices, generate_diff};
pub use normalizer::{normalise_notices, relative_path};
pub use output::render_report;
pub use schema::{
    ComparisonReport, ComparisonSummary, DiffFileNotices, DiffNotices, LinePair, Slot,
};

#[cfg(test)]
mod tests;
