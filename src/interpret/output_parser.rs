//! Parser for diagnostic lines printed by the analyzer.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::notices::{Notice, ProgramNotices, Severity};
use crate::utils::error::InterpretError;

static OUTPUT_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<filename>[^:]+):(?P<line_number>\d+)(:(?P<col>\d+))?: (?P<severity>[^:]+): (?P<msg>.+?)(\s+\[(?P<tag>[^\]]+)\])?$",
    )
    .expect("Invalid output line regex")
});

/// One parsed diagnostic line, before it is anchored to a root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub filename: String,
    pub line_number: u32,
    pub col: Option<u32>,
    pub severity: Severity,
    pub tag: Option<String>,
    pub msg: String,
}

impl OutputLine {
    /// Notice for this line with the filename joined onto `root_dir`
    pub fn into_notice(self, root_dir: &Path) -> Notice {
        Notice::new(root_dir.join(&self.filename), self.line_number, self.severity, self.msg)
            .with_col(self.col)
            .with_tag(self.tag)
    }
}

/// Parse a single line of analyzer output
///
/// Surrounding whitespace is ignored. Only `error` and `note` severities are
/// accepted.
///
/// # Errors
/// * `InterpretError::InvalidOutputLine` - The line is not a diagnostic
/// * `InterpretError::UnknownSeverity` - The severity is neither error nor note
pub fn parse_output_line(line: &str) -> Result<OutputLine, InterpretError> {
    let captures = OUTPUT_LINE_REGEX
        .captures(line.trim())
        .ok_or_else(|| InterpretError::InvalidOutputLine {
            line: line.to_string(),
        })?;

    let severity = match &captures["severity"] {
        "error" => Severity::Error,
        "note" => Severity::Note,
        other => {
            return Err(InterpretError::UnknownSeverity {
                line: line.to_string(),
                severity: other.to_string(),
            })
        }
    };

    let line_number = captures["line_number"]
        .parse::<u32>()
        .map_err(|_| InterpretError::InvalidOutputLine {
            line: line.to_string(),
        })?;

    let col = match captures.name("col") {
        Some(col) => Some(col.as_str().parse::<u32>().map_err(|_| {
            InterpretError::InvalidOutputLine {
                line: line.to_string(),
            }
        })?),
        None => None,
    };

    let tag = captures
        .name("tag")
        .map(|tag| tag.as_str().trim().to_string())
        .filter(|tag| !tag.is_empty());

    Ok(OutputLine {
        filename: captures["filename"].to_string(),
        line_number,
        col,
        severity,
        tag,
        msg: captures["msg"].trim().to_string(),
    })
}

/// Normaliser that keeps every notice unchanged
pub fn keep_notice(notice: Notice) -> Option<Notice> {
    Some(notice)
}

/// Parse analyzer output lines into a copy of `into`
///
/// `lines` must already be filtered down to diagnostics (see
/// `filter_output_lines`). Every notice passes through `normalise` before it is
/// added; returning `None` drops it.
///
/// # Arguments
/// * `lines` - Diagnostic lines from the analyzer
/// * `root_dir` - Directory the analyzer was run from
/// * `into` - Notices the parsed ones are added to
/// * `normalise` - Hook to rewrite or drop each notice
///
/// # Errors
/// * `InterpretError` - The first line that fails to parse
///
/// # Example
/// ```ignore
/// let actual = parse_output_lines(&lines, &root_dir, ProgramNotices::new(), keep_notice)?;
/// ```
pub fn parse_output_lines<'a, I, F>(
    lines: I,
    root_dir: &Path,
    into: ProgramNotices,
    mut normalise: F,
) -> Result<ProgramNotices, InterpretError>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(Notice) -> Option<Notice>,
{
    let mut program = into;
    let mut parsed = 0usize;

    for line in lines {
        let notice = parse_output_line(line)?.into_notice(root_dir);
        if let Some(notice) = normalise(notice) {
            program = program.add_notice(notice);
            parsed += 1;
        }
    }

    debug!("Interpreted {} notices from analyzer output", parsed);
    Ok(program)
}
