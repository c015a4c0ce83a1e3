//! Tests for diff generation, comparison and report rendering.

use super::*;
use crate::notices::{FileNotices, Notice, ProgramNotices, Severity};
use crate::utils::error::CompareError;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

const ROOT: &str = "/tmp/scenario";

fn location(path: &str) -> PathBuf {
    Path::new(ROOT).join(path)
}

fn error(path: &str, line: u32, tag: &str, msg: &str) -> Notice {
    Notice::new(location(path), line, Severity::Error, msg).with_tag(Some(tag.to_string()))
}

fn note(path: &str, line: u32, msg: &str) -> Notice {
    Notice::new(location(path), line, Severity::Note, msg)
}

fn program(notices: Vec<Notice>) -> ProgramNotices {
    ProgramNotices::from_notices(notices)
}

fn failure_text(actual: &ProgramNotices, expected: &ProgramNotices) -> String {
    match compare_notices(&actual.diff(ROOT, expected)) {
        Err(CompareError::NoticesDiffer(text)) => text,
        Ok(()) => panic!("expected comparison to fail"),
    }
}

// ============================================================================
// DIFF GENERATION
// ============================================================================

#[test]
fn test_diff_against_self_has_identical_sides() {
    let notices = program(vec![
        error("main.py", 3, "assignment", "bad"),
        note("main.py", 3, "one\ntwo"),
        note("pkg/mod.py", 1, "hi"),
    ]);

    let diff = notices.diff(ROOT, &notices);
    for (_, file) in diff.iter() {
        for (_, left, right) in file.iter() {
            assert_eq!(left, right);
        }
    }
    assert!(compare_notices(&diff).is_ok());
}

#[test]
fn test_diff_uses_relative_paths_and_splits_messages() {
    let left = program(vec![note("main.py", 2, "a\nb")]);
    let diff = left.diff(ROOT, &ProgramNotices::new());

    let file = diff.file("main.py").expect("relative path key");
    let lines: Vec<(u32, Vec<Notice>, Vec<Notice>)> = file.iter().collect();
    assert_eq!(lines.len(), 1);
    let (line_number, got, want) = &lines[0];
    assert_eq!(*line_number, 2);
    assert_eq!(
        got.iter().map(|n| n.msg.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
    assert!(want.is_empty());
}

#[test]
fn test_diff_aligns_programs_from_different_roots() {
    let left = ProgramNotices::from_notices(vec![Notice::new(
        "/one/root/main.py",
        1,
        Severity::Note,
        "x",
    )]);
    let right = ProgramNotices::from_notices(vec![Notice::new(
        "/one/root/main.py",
        1,
        Severity::Note,
        "x",
    )]);

    let diff = left.diff("/one/root", &right);
    assert!(diff.file("main.py").is_some());
    assert!(compare_notices(&diff).is_ok());
}

#[test]
fn test_diff_keeps_paths_outside_root_absolute() {
    let left = ProgramNotices::from_notices(vec![Notice::new(
        "/elsewhere/stub.pyi",
        4,
        Severity::Note,
        "x",
    )]);
    let diff = left.diff(ROOT, &ProgramNotices::new());
    assert!(diff.file("/elsewhere/stub.pyi").is_some());
}

// ============================================================================
// COMPARISON
// ============================================================================

#[test]
fn test_extra_note_on_actual_side_fails() {
    let expected = program(vec![error("error.py", 3, "assignment", "msg")]);
    let actual = program(vec![
        error("error.py", 3, "assignment", "msg"),
        note("error.py", 3, "extra"),
    ]);

    let text = failure_text(&actual, &expected);
    assert_eq!(
        text,
        [
            "",
            "> error.py",
            "  | ✘ 3:",
            "  | ✓ severity=error[assignment]:: msg",
            "  | ✘ !! GOT  !! severity=note:: extra",
            "  |   !! WANT !! <NONE>",
        ]
        .join("\n")
    );
}

#[test]
fn test_missing_notice_shows_none_on_got_side() {
    let expected = program(vec![note("main.py", 7, "wanted")]);
    let actual = ProgramNotices::new();

    let text = failure_text(&actual, &expected);
    assert!(text.contains("> main.py"));
    assert!(text.contains("  | ✘ 7:"));
    assert!(text.contains("  | ✘ !! GOT  !! <NONE>"));
    assert!(text.contains("  |   !! WANT !! severity=note:: wanted"));
}

#[test]
fn test_mismatched_columns_fail_but_missing_column_matches() {
    let with_col = program(vec![note("main.py", 1, "x").with_col(Some(3))]);
    let other_col = program(vec![note("main.py", 1, "x").with_col(Some(5))]);
    let no_col = program(vec![note("main.py", 1, "x")]);

    assert!(compare_notices(&with_col.diff(ROOT, &no_col)).is_ok());
    assert!(compare_notices(&no_col.diff(ROOT, &with_col)).is_ok());

    let text = failure_text(&with_col, &other_col);
    assert!(text.contains("  | ✘ !! GOT  !! col=3 severity=note:: x"));
    assert!(text.contains("  |   !! WANT !! col=5 severity=note:: x"));
}

#[test]
fn test_multiline_messages_align_line_by_line() {
    let actual = program(vec![note("main.py", 4, "first\nsecond")]);
    let expected = program(vec![note("main.py", 4, "first"), note("main.py", 4, "second")]);

    // Both sides sort the same way once split, so this is clean
    let report = render_report(&actual.diff(ROOT, &expected));
    assert!(!report.different);
}

#[test]
fn test_clean_report_rows() {
    let notices = program(vec![
        note("main.py", 1, "single"),
        error("main.py", 2, "misc", "a"),
        note("main.py", 2, "b"),
    ]);

    let report = render_report(&notices.diff(ROOT, &notices));
    assert_eq!(
        report.lines,
        vec![
            "> main.py",
            "  | ✓ 1: severity=note:: single",
            "  | ✓ 2:",
            "  | ✓ severity=error[misc]:: a",
            "  | ✓ severity=note:: b",
        ]
    );
    assert_eq!(report.files_checked, 1);
    assert_eq!(report.lines_checked, 2);
    assert_eq!(report.differing_lines, 0);
    assert_eq!(report.status(), "PASSED");
}

#[test]
fn test_every_discrepancy_is_reported_at_once() {
    let expected = program(vec![note("a.py", 1, "x"), note("b.py", 9, "y")]);
    let actual = program(vec![note("a.py", 1, "changed"), note("b.py", 9, "also changed")]);

    let report = render_report(&actual.diff(ROOT, &expected));
    assert!(report.different);
    assert_eq!(report.differing_lines, 2);

    let text = report.failure_text();
    assert!(text.contains("> a.py"));
    assert!(text.contains("> b.py"));
    assert!(text.contains("  | ✘ 9:"));
}

#[test]
fn test_report_is_deterministic() {
    let expected = program(vec![note("z.py", 2, "b"), note("a.py", 5, "c"), note("a.py", 1, "a")]);
    let actual = program(vec![note("a.py", 1, "a"), note("z.py", 2, "b")]);

    let first = render_report(&actual.diff(ROOT, &expected));
    let second = render_report(&actual.diff(ROOT, &expected));
    assert_eq!(first, second);
    assert_eq!(first.lines[0], "> a.py");
}

#[test]
fn test_named_expectations_compare_against_parsed_output() {
    let file = FileNotices::new(location("main.py"))
        .set_name("a", 3)
        .add_reveal("a", "builtins.int")
        .unwrap()
        .add_reveal("a", "builtins.str")
        .unwrap();
    let expected = ProgramNotices::new().set_file_notices(location("main.py"), Some(file));

    let actual = program(vec![
        note("main.py", 3, &Notice::reveal_msg("builtins.int")),
        note("main.py", 3, &Notice::reveal_msg("builtins.str")),
    ]);

    assert!(compare_notices(&actual.diff(ROOT, &expected)).is_ok());
}

#[test]
fn test_summary_carries_status_and_rows() {
    let expected = program(vec![note("a.py", 1, "x")]);
    let report = render_report(&ProgramNotices::new().diff(ROOT, &expected));
    let summary = report.to_summary();

    assert_eq!(summary.status, "FAILED");
    assert_eq!(summary.differing_lines, 1);
    assert_eq!(summary.report, report.lines);
    assert!(!summary.generated_at.is_empty());
}
