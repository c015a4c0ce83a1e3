//! JSON input and output.
//!
//! Writes notices and comparison summaries with pretty formatting and reads
//! them back, along with captured run results.

use crate::diff::ComparisonSummary;
use crate::expectations::RunResult;
use crate::notices::{Notice, ProgramNotices};
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write notices to a JSON file as an array of records
///
/// # Arguments
/// * `notices` - Notices to write, in path then line order
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let actual = parse_output_lines(&lines, &root_dir, ProgramNotices::new(), keep_notice)?;
/// write_notices(&actual, "actual.json")?;
/// ```
pub fn write_notices(
    notices: &ProgramNotices,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let records: Vec<&Notice> = notices.iter().collect();
    info!(
        "Writing {} notices to: {}",
        records.len(),
        output_path.as_ref().display()
    );
    write_json(&records, output_path.as_ref())
}

/// Notices as a pretty JSON string
pub fn notices_to_string(notices: &ProgramNotices) -> Result<String, OutputError> {
    let records: Vec<&Notice> = notices.iter().collect();
    serde_json::to_string_pretty(&records).map_err(OutputError::SerializationFailed)
}

/// Read notices from a JSON array of records
///
/// Records keep their relative order within each line.
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
/// * `OutputError::InvalidRecord` - A record has line number 0
pub fn read_notices(input_path: impl AsRef<Path>) -> Result<ProgramNotices, OutputError> {
    let records: Vec<Notice> = read_json(input_path.as_ref())?;

    if let Some(bad) = records.iter().find(|notice| notice.line_number == 0) {
        return Err(OutputError::InvalidRecord(format!(
            "{} has line number 0",
            bad.location().display()
        )));
    }

    debug!("Loaded {} notices", records.len());
    Ok(ProgramNotices::from_notices(records))
}

/// Read a captured analyzer run
pub fn read_run_result(input_path: impl AsRef<Path>) -> Result<RunResult, OutputError> {
    let result: RunResult = read_json(input_path.as_ref())?;
    debug!("Run result loaded: exit code {}", result.exit_code);
    Ok(result)
}

/// Write a comparison summary to a JSON file
///
/// # Errors
/// Same as `write_notices`
pub fn write_report(
    summary: &ComparisonSummary,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    info!(
        "Writing {} report to: {}",
        summary.status,
        output_path.as_ref().display()
    );
    write_json(summary, output_path.as_ref())
}

/// Read a comparison summary back
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ComparisonSummary, OutputError> {
    let summary: ComparisonSummary = read_json(input_path.as_ref())?;
    debug!(
        "Report loaded: version {}, generated {}",
        summary.report_version, summary.generated_at
    );
    Ok(summary)
}

fn write_json<T: Serialize + ?Sized>(value: &T, output_path: &Path) -> Result<(), OutputError> {
    // Validate path
    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(OutputError::SerializationFailed)?;

    debug!("Wrote {} bytes", calculate_file_size(output_path));
    Ok(())
}

fn read_json<T: DeserializeOwned>(input_path: &Path) -> Result<T, OutputError> {
    debug!("Reading JSON from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
