//! Core diff engine implementation.
//! Pairs two programs' notices per file and line, and checks the pairing.

use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;

use super::normalizer::bucket_notices;
use super::output::render_report;
use super::schema::{DiffFileNotices, DiffNotices, LinePair};
use crate::notices::ProgramNotices;
use crate::utils::error::CompareError;

/// Pair `left` and `right` notices per file and line
///
/// # Arguments
/// * `left` - Notices shown as GOT in reports
/// * `root_dir` - Directory that paths are made relative to
/// * `right` - Notices shown as WANT in reports
///
/// # Returns
/// DiffNotices where a line present on only one side has an empty other side
pub fn generate_diff(left: &ProgramNotices, root_dir: &Path, right: &ProgramNotices) -> DiffNotices {
    // Step 1: Flatten and split multi-line messages on each side
    let left_buckets = bucket_notices(root_dir, left);
    let right_buckets = bucket_notices(root_dir, right);

    // Step 2: Merge into one table, defaulting missing sides to empty
    let mut combined: BTreeMap<String, BTreeMap<u32, LinePair>> = BTreeMap::new();
    for (side, buckets) in [(0usize, left_buckets), (1usize, right_buckets)] {
        for (path, by_line) in buckets {
            let file = combined.entry(path).or_default();
            for (line_number, notices) in by_line {
                let pair = file.entry(line_number).or_default();
                if side == 0 {
                    pair.0.extend(notices);
                } else {
                    pair.1.extend(notices);
                }
            }
        }
    }

    debug!("Diff covers {} files", combined.len());

    // Step 3: Wrap without sorting; consumers sort when iterating
    DiffNotices::new(
        combined
            .into_iter()
            .map(|(path, by_line)| (path, DiffFileNotices::new(by_line)))
            .collect(),
    )
}

/// Check that every line of a diff agrees
///
/// # Errors
/// * `CompareError::NoticesDiffer` - at least one line disagrees; carries the
///   whole rendered report so every discrepancy is visible at once
pub fn compare_notices(diff: &DiffNotices) -> Result<(), CompareError> {
    let report = render_report(diff);

    info!(
        "Compared {} lines across {} files: {}",
        report.lines_checked,
        report.files_checked,
        report.status()
    );

    if report.different {
        return Err(CompareError::NoticesDiffer(report.failure_text()));
    }

    Ok(())
}
