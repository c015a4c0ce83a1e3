use notice_check::notices::{FileNotices, NameOrLine, Notice, ProgramNotices, Severity};
use notice_check::utils::error::NoticeError;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

fn location() -> PathBuf {
    PathBuf::from("/work/main.py")
}

#[test]
fn test_matches_column_wildcard() {
    let base = Notice::new(location(), 1, Severity::Error, "bad").with_tag(Some("misc".into()));

    assert!(base.matches(&base));
    assert!(base.matches(&base.clone().with_col(Some(2))));
    assert!(base.clone().with_col(Some(2)).matches(&base));
    assert!(!base
        .clone()
        .with_col(Some(2))
        .matches(&base.clone().with_col(Some(3))));
    assert!(!base.matches(&base.clone().with_tag(None)));
}

#[test]
fn test_add_error_then_find_returns_it() {
    let file = FileNotices::new(location())
        .add_error(4u32, "arg-type", "first")
        .unwrap()
        .add_error(4u32, "arg-type", "second")
        .unwrap();

    let found = file
        .find_for_name_or_line(4u32, Some(&Severity::Error), true)
        .unwrap();
    assert_eq!(found.line_number, 4);
    assert_eq!(found.notice.map(|n| n.msg), Some("second".to_string()));
}

#[test]
fn test_add_reveal_twice_coalesces_in_call_order() {
    let file = FileNotices::new(location())
        .set_name("x", 7)
        .add_reveal("x", "builtins.int")
        .unwrap()
        .add_reveal(7u32, "builtins.str")
        .unwrap();

    let notices: Vec<&Notice> = file.iter().collect();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0].msg,
        "Revealed type is \"builtins.int\"\nRevealed type is \"builtins.str\""
    );
    assert!(notices[0].is_type_reveal());
}

#[test]
fn test_unknown_name_is_a_lookup_error() {
    let err = FileNotices::new(location())
        .add_note("missing", "hello")
        .unwrap_err();
    assert_eq!(
        err,
        NoticeError::MissingNotices {
            location: location(),
            name: Some(NameOrLine::Name("missing".to_string())),
            line_number: None,
        }
    );
    assert_eq!(
        err.to_string(),
        "Failed to find registered notices for /work/main.py (missing)"
    );
}

#[test]
fn test_change_without_existing_notice_fails() {
    let file = FileNotices::new(location()).add_note(2u32, "just a note").unwrap();
    let err = file.change_error(2u32, |notice| notice).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to find registered notices for /work/main.py:2"
    );
}

#[test]
fn test_snapshots_survive_mutation() {
    let before = ProgramNotices::new().add_notice(Notice::new(location(), 1, Severity::Note, "a"));
    let after = before.add_notice(Notice::new(location(), 1, Severity::Note, "b"));

    assert_eq!(before.iter().count(), 1);
    assert_eq!(after.iter().count(), 2);
}

#[test]
fn test_program_modify_file_requires_existing_when_asked() {
    let program = ProgramNotices::new();
    assert!(program
        .modify_file(location(), true, |file| Ok(file))
        .is_err());

    let program = program
        .modify_file(location(), false, |file| file.add_error(1u32, "misc", "bad"))
        .unwrap();
    assert!(program.has_notices());
    assert!(program.file_notices(Path::new("/work/main.py")).is_some());
}

#[test]
fn test_notice_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Notice>();
    assert_send_sync::<FileNotices>();
    assert_send_sync::<ProgramNotices>();
}
