//! Diff and report data structures.
//!
//! `DiffNotices` and `DiffFileNotices` are built fresh by every diff and never
//! changed afterwards. `ComparisonSummary` is what gets written to disk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::notices::Notice;

/// Left and right notices for one line
pub type LinePair = (Vec<Notice>, Vec<Notice>);

/// Paired notices for one file, keyed by line number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffFileNotices {
    by_line_number: BTreeMap<u32, LinePair>,
}

impl DiffFileNotices {
    pub fn new(by_line_number: BTreeMap<u32, LinePair>) -> Self {
        Self { by_line_number }
    }

    pub fn line_count(&self) -> usize {
        self.by_line_number.len()
    }

    /// Lines in ascending order, each side sorted independently
    pub fn iter(&self) -> impl Iterator<Item = (u32, Vec<Notice>, Vec<Notice>)> + '_ {
        self.by_line_number
            .iter()
            .map(|(line_number, (left, right))| {
                let mut left = left.clone();
                let mut right = right.clone();
                left.sort();
                right.sort();
                (*line_number, left, right)
            })
    }
}

/// Paired notices for a whole program, keyed by display path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffNotices {
    by_file: BTreeMap<String, DiffFileNotices>,
}

impl DiffNotices {
    pub fn new(by_file: BTreeMap<String, DiffFileNotices>) -> Self {
        Self { by_file }
    }

    pub fn is_empty(&self) -> bool {
        self.by_file.is_empty()
    }

    pub fn file(&self, path: &str) -> Option<&DiffFileNotices> {
        self.by_file.get(path)
    }

    /// Files sorted by path
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiffFileNotices)> {
        self.by_file
            .iter()
            .map(|(path, notices)| (path.as_str(), notices))
    }
}

/// One compared slot on a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Both sides agree; holds the left display
    Same(String),

    /// The sides disagree; holds (got, want) displays
    Different(String, String),
}

/// Rendered outcome of comparing a diff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Report rows in output order
    pub lines: Vec<String>,

    /// Whether any line disagreed
    pub different: bool,

    pub files_checked: usize,
    pub lines_checked: usize,
    pub differing_lines: usize,
}

impl ComparisonReport {
    /// Text carried by the failure: a leading newline then every row
    pub fn failure_text(&self) -> String {
        format!("\n{}", self.lines.join("\n"))
    }

    pub fn status(&self) -> &'static str {
        if self.different {
            "FAILED"
        } else {
            "PASSED"
        }
    }
}

/// JSON form of a comparison written by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Schema version of this report
    pub report_version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// PASSED or FAILED
    pub status: String,

    pub files_checked: usize,
    pub lines_checked: usize,
    pub differing_lines: usize,

    /// Rendered report rows
    pub report: Vec<String>,
}
