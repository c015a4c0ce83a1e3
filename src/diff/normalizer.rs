//! Path and message normalisation applied before pairing notices.

use std::collections::BTreeMap;
use std::path::Path;

use crate::notices::{Notice, ProgramNotices};

/// Notices grouped by display path and then line number
pub(crate) type Buckets = BTreeMap<String, BTreeMap<u32, Vec<Notice>>>;

/// Display path for `location`, relative to `root_dir` when under it
pub fn relative_path(root_dir: &Path, location: &Path) -> String {
    match location.strip_prefix(root_dir) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => location.display().to_string(),
    }
}

/// Sort notices and split every multi-line message into one notice per line
pub fn normalise_notices(notices: &[Notice]) -> Vec<Notice> {
    let mut sorted = notices.to_vec();
    sorted.sort();
    sorted
        .iter()
        .flat_map(|notice| {
            if notice.msg.contains('\n') {
                notice.for_compare()
            } else {
                vec![notice.clone()]
            }
        })
        .collect()
}

/// Flatten a program into per-path, per-line buckets of single-line notices
pub(crate) fn bucket_notices(root_dir: &Path, notices: &ProgramNotices) -> Buckets {
    let mut buckets = Buckets::new();
    for notice in notices.iter() {
        let path = relative_path(root_dir, notice.location());
        buckets
            .entry(path)
            .or_default()
            .entry(notice.line_number)
            .or_default()
            .extend(notice.for_compare());
    }
    buckets
}
