//! Text rendering for notice comparisons.
//!
//! Produces the tick/cross report: a `> path` header per file, then one row
//! per line, expanded into GOT/WANT rows wherever the sides disagree.

use chrono::Utc;

use super::normalizer::normalise_notices;
use super::schema::{ComparisonReport, ComparisonSummary, DiffNotices, Slot};
use crate::notices::Notice;
use crate::utils::config::{CROSS, NONE_PLACEHOLDER, REPORT_LINE_PREFIX, REPORT_SCHEMA_VERSION, TICK};

/// Render every file and line of a diff
pub fn render_report(diff: &DiffNotices) -> ComparisonReport {
    let mut report = ComparisonReport::default();

    for (path, file_diff) in diff.iter() {
        report.files_checked += 1;
        report.lines.push(format!("> {}", path));

        for (line_number, left, right) in file_diff.iter() {
            report.lines_checked += 1;

            let slots = pair_slots(&normalise_notices(&left), &normalise_notices(&right));
            let clean = slots.iter().all(|slot| matches!(slot, Slot::Same(_)));
            let line_check = if clean { TICK } else { CROSS };
            if !clean {
                report.different = true;
                report.differing_lines += 1;
            }

            render_line(&mut report.lines, line_check, line_number, &slots);
        }
    }

    report
}

/// Pair both sides positionally, padding the shorter one
fn pair_slots(left: &[Notice], right: &[Notice]) -> Vec<Slot> {
    let longest = left.len().max(right.len());
    (0..longest)
        .map(|index| match (left.get(index), right.get(index)) {
            (Some(left), Some(right)) if right.matches(left) => Slot::Same(left.display()),
            (left, right) => Slot::Different(display_or_none(left), display_or_none(right)),
        })
        .collect()
}

fn display_or_none(notice: Option<&Notice>) -> String {
    notice
        .map(Notice::display)
        .unwrap_or_else(|| NONE_PLACEHOLDER.to_string())
}

fn render_line(out: &mut Vec<String>, line_check: &str, line_number: u32, slots: &[Slot]) {
    let prefix = REPORT_LINE_PREFIX;

    if let [Slot::Same(only)] = slots {
        out.push(format!("{}{} {}: {}", prefix, line_check, line_number, only));
        return;
    }

    out.push(format!("{}{} {}:", prefix, line_check, line_number));
    for slot in slots {
        match slot {
            Slot::Same(display) => out.push(format!("{}{} {}", prefix, TICK, display)),
            Slot::Different(got, want) => {
                out.push(format!("{}{} !! GOT  !! {}", prefix, CROSS, got));
                out.push(format!("{}  !! WANT !! {}", prefix, want));
            }
        }
    }
}

impl ComparisonReport {
    /// JSON-ready summary stamped with the current time
    pub fn to_summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            report_version: REPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            status: self.status().to_string(),
            files_checked: self.files_checked,
            lines_checked: self.lines_checked,
            differing_lines: self.differing_lines,
            report: self.lines.clone(),
        }
    }
}
