//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

use crate::notices::NameOrLine;

/// Errors raised while resolving or mutating notices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoticeError {
    /// A symbolic name was unknown, or a line held no notice of the wanted severity
    #[error("Failed to find registered notices for {}", describe_missing(.location, .line_number, .name))]
    MissingNotices {
        location: PathBuf,
        name: Option<NameOrLine>,
        line_number: Option<u32>,
    },
}

impl NoticeError {
    pub(crate) fn missing(
        location: impl Into<PathBuf>,
        name: Option<NameOrLine>,
        line_number: Option<u32>,
    ) -> Self {
        NoticeError::MissingNotices {
            location: location.into(),
            name,
            line_number,
        }
    }
}

fn describe_missing(
    location: &std::path::Path,
    line_number: &Option<u32>,
    name: &Option<NameOrLine>,
) -> String {
    let mut line = String::new();
    if let Some(line_number) = line_number {
        line.push_str(&format!(":{}", line_number));
    }
    if let Some(NameOrLine::Name(name)) = name {
        line.push_str(&format!(" ({})", name));
    }
    format!("{}{}", location.display(), line)
}

/// Errors raised when expected and actual notices disagree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// Carries the complete rendered report, starting with a newline
    #[error("{0}")]
    NoticesDiffer(String),
}

/// Errors that can occur while interpreting analyzer output
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error("Line from analyzer output is invalid: {line}")]
    InvalidOutputLine { line: String },

    #[error("Unknown severity: {severity}")]
    UnknownSeverity { line: String, severity: String },
}

/// Errors raised when a run does not meet its expectations
#[derive(Error, Debug)]
pub enum ExpectationError {
    #[error(transparent)]
    Notices(#[from] CompareError),

    #[error(transparent)]
    Interpret(#[from] InterpretError),

    #[error("Expected stderr in result ({got}) to match expectations ({want})")]
    StderrMismatch { got: String, want: String },

    #[error("Expected exit code from result ({0}) to be non zero")]
    ExpectedFailure(i32),

    #[error("Expected exit code from result ({0}) to be zero")]
    ExpectedSuccess(i32),

    #[error("Expected the daemon to restart")]
    DaemonNotRestarted,

    #[error("Expected the daemon to not restart")]
    DaemonRestarted,
}

/// Errors that can occur during file input and output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Invalid notice record: {0}")]
    InvalidRecord(String),
}
