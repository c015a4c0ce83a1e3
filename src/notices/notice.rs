//! A single diagnostic emitted by the analyzer.
//!
//! Notices are plain values: "mutating" helpers consume or copy the notice
//! and hand back a new one, so earlier snapshots are never disturbed.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::config::REVEAL_PREFIX;

/// Kind of a notice
///
/// The analyzer reports open-ended severity strings. The two we reason about
/// get their own variants and everything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Error,
    Note,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Error => "error",
            Severity::Note => "note",
            Severity::Other(other) => other,
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value {
            "error" => Severity::Error,
            "note" => Severity::Note,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "error" => Severity::Error,
            "note" => Severity::Note,
            _ => Severity::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single notice for one line of one file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notice {
    /// Full path of the file this notice is for
    pub location: PathBuf,

    /// Line the notice appears on (1-based)
    pub line_number: u32,

    /// Column, when the analyzer reported one
    #[serde(default)]
    pub col: Option<u32>,

    /// Severity such as error or note
    pub severity: Severity,

    /// Classifier such as an error code (`assignment`, `arg-type`)
    #[serde(default)]
    pub tag: Option<String>,

    /// Message, possibly spanning several lines
    pub msg: String,
}

impl Notice {
    /// Create a notice without a column or tag
    pub fn new(
        location: impl Into<PathBuf>,
        line_number: u32,
        severity: impl Into<Severity>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            line_number,
            col: None,
            severity: severity.into(),
            tag: None,
            msg: msg.into(),
        }
    }

    /// Message used by a note that reveals an inferred type
    pub fn reveal_msg(revealed: &str) -> String {
        format!("{}{}\"", REVEAL_PREFIX, revealed)
    }

    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_line_number(mut self, line_number: u32) -> Self {
        self.line_number = line_number;
        self
    }

    pub fn with_col(mut self, col: Option<u32>) -> Self {
        self.col = col;
        self
    }

    pub fn with_severity(mut self, severity: impl Into<Severity>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Whether this is a note produced by revealing a type
    pub fn is_type_reveal(&self) -> bool {
        self.severity == Severity::Note && self.msg.starts_with(REVEAL_PREFIX)
    }

    /// Whether this notice describes the same diagnostic as `other`
    ///
    /// Location, line, severity, tag and message must be identical. The
    /// column is only compared when both sides have one.
    pub fn matches(&self, other: &Notice) -> bool {
        let same = self.location == other.location
            && self.line_number == other.line_number
            && self.severity == other.severity
            && self.tag == other.tag
            && self.msg == other.msg;
        if !same {
            return false;
        }

        match (self.col, other.col) {
            (Some(left), Some(right)) => left == right,
            _ => true,
        }
    }

    /// Single line rendering used for ordering and in reports
    ///
    /// Format: `col=COL severity=SEVERITY[TAG]:: MSG`, leaving out the column
    /// and tag when absent.
    pub fn display(&self) -> String {
        let col = match self.col {
            Some(col) => format!("col={} ", col),
            None => String::new(),
        };
        let tag = match &self.tag {
            Some(tag) => format!("[{}]", tag),
            None => String::new(),
        };
        format!("{}severity={}{}:: {}", col, self.severity, tag, self.msg)
    }

    /// One notice per line of the message, otherwise identical
    pub fn for_compare(&self) -> Vec<Notice> {
        self.msg
            .split('\n')
            .map(|line| self.clone().with_msg(line))
            .collect()
    }
}

impl PartialOrd for Notice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Notice {
    fn cmp(&self, other: &Self) -> Ordering {
        self.display()
            .cmp(&other.display())
            .then_with(|| self.location.cmp(&other.location))
            .then_with(|| self.line_number.cmp(&other.line_number))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.severity.as_str().cmp(other.severity.as_str()))
            .then_with(|| self.tag.cmp(&other.tag))
            .then_with(|| self.msg.cmp(&other.msg))
    }
}
