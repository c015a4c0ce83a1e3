//! Notices attached to a single line of a single file.

use std::path::Path;
use std::sync::Arc;

use super::notice::{Notice, Severity};

/// Ordered notices for one `(location, line_number)` pair
///
/// Notices keep insertion order. Every contained notice carries this line's
/// location and line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNotices {
    location: Arc<Path>,
    line_number: u32,
    notices: Arc<Vec<Notice>>,
}

impl LineNotices {
    pub fn new(location: impl AsRef<Path>, line_number: u32) -> Self {
        Self {
            location: Arc::from(location.as_ref()),
            line_number,
            notices: Arc::new(Vec::new()),
        }
    }

    pub(crate) fn with_shared_location(location: Arc<Path>, line_number: u32) -> Self {
        Self {
            location,
            line_number,
            notices: Arc::new(Vec::new()),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Notices in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
        self.notices.iter()
    }

    /// Build a notice positioned on this line
    pub fn generate_notice(&self, severity: impl Into<Severity>, msg: impl Into<String>) -> Notice {
        Notice::new(self.location.to_path_buf(), self.line_number, severity, msg)
    }

    /// Copy with `notice` appended
    ///
    /// The appended notice is pinned to this line's location and line number.
    pub fn add(&self, notice: Notice) -> Self {
        let mut next = self.clone();
        let notice = next.pin(notice);
        Arc::make_mut(&mut next.notices).push(notice);
        next
    }

    /// Copy where notices chosen by `chooser` become `replaced`
    ///
    /// With `first_only` only the first chosen notice is substituted and later
    /// matches pass through unchanged.
    pub fn replace<F>(&self, chooser: F, replaced: Notice, first_only: bool) -> Self
    where
        F: Fn(&Notice) -> bool,
    {
        let replaced = self.pin(replaced);
        let mut substituted = false;
        let notices = self
            .notices
            .iter()
            .map(|notice| {
                if (first_only && substituted) || !chooser(notice) {
                    return notice.clone();
                }
                substituted = true;
                replaced.clone()
            })
            .collect();

        self.set_notices(notices)
    }

    /// Copy without any notice chosen by `chooser`
    pub fn remove<F>(&self, chooser: F) -> Self
    where
        F: Fn(&Notice) -> bool,
    {
        let notices = self
            .notices
            .iter()
            .filter(|notice| !chooser(*notice))
            .cloned()
            .collect();
        self.set_notices(notices)
    }

    /// Copy holding exactly `notices`
    pub fn set_notices(&self, notices: Vec<Notice>) -> Self {
        let notices = notices.into_iter().map(|notice| self.pin(notice)).collect();
        Self {
            location: Arc::clone(&self.location),
            line_number: self.line_number,
            notices: Arc::new(notices),
        }
    }

    fn pin(&self, mut notice: Notice) -> Notice {
        if notice.location.as_path() != &*self.location {
            notice.location = self.location.to_path_buf();
        }
        notice.line_number = self.line_number;
        notice
    }
}

impl<'a> IntoIterator for &'a LineNotices {
    type Item = &'a Notice;
    type IntoIter = std::slice::Iter<'a, Notice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn messages(line: &LineNotices) -> Vec<&str> {
        line.iter().map(|n| n.msg.as_str()).collect()
    }

    #[test]
    fn test_add_returns_new_value() {
        let empty = LineNotices::new("/src/main.py", 3);
        let one = empty.add(empty.generate_notice(Severity::Note, "a"));
        let two = one.add(one.generate_notice(Severity::Note, "b"));

        assert!(!empty.has_notices());
        assert_eq!(messages(&one), vec!["a"]);
        assert_eq!(messages(&two), vec!["a", "b"]);
    }

    #[test]
    fn test_add_pins_notice_to_line() {
        let line = LineNotices::new("/src/main.py", 3);
        let stray = Notice::new("/elsewhere.py", 99, Severity::Note, "moved");
        let line = line.add(stray);

        let notice = line.iter().next().unwrap();
        assert_eq!(notice.location(), Path::new("/src/main.py"));
        assert_eq!(notice.line_number, 3);
    }

    #[test]
    fn test_replace_first_only() {
        let line = LineNotices::new("/src/main.py", 1);
        let line = line
            .add(line.generate_notice(Severity::Note, "x"))
            .add(line.generate_notice(Severity::Note, "y"))
            .add(line.generate_notice(Severity::Note, "x"));

        let replaced = line.replace(
            |n| n.msg == "x",
            line.generate_notice(Severity::Note, "z"),
            true,
        );
        assert_eq!(messages(&replaced), vec!["z", "y", "x"]);

        let all = line.replace(
            |n| n.msg == "x",
            line.generate_notice(Severity::Note, "z"),
            false,
        );
        assert_eq!(messages(&all), vec!["z", "y", "z"]);
        assert_eq!(messages(&line), vec!["x", "y", "x"]);
    }

    #[test]
    fn test_remove_filters_all_matches() {
        let line = LineNotices::new("/src/main.py", 1);
        let line = line
            .add(line.generate_notice(Severity::Note, "x"))
            .add(line.generate_notice(Severity::Error, "y"))
            .add(line.generate_notice(Severity::Note, "x"));

        let removed = line.remove(|n| n.severity == Severity::Note);
        assert_eq!(messages(&removed), vec!["y"]);
        assert_eq!(line.len(), 3);
    }
}
