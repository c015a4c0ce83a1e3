//! Notices for a single file, addressable by line number or symbolic name.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use super::line::LineNotices;
use super::notice::{Notice, Severity};
use crate::utils::error::NoticeError;

/// Reference to a line, either directly or through a registered name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameOrLine {
    Name(String),
    Line(u32),
}

impl From<&str> for NameOrLine {
    fn from(value: &str) -> Self {
        NameOrLine::Name(value.to_string())
    }
}

impl From<String> for NameOrLine {
    fn from(value: String) -> Self {
        NameOrLine::Name(value)
    }
}

impl From<u32> for NameOrLine {
    fn from(value: u32) -> Self {
        NameOrLine::Line(value)
    }
}

impl fmt::Display for NameOrLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameOrLine::Name(name) => f.write_str(name),
            NameOrLine::Line(line) => write!(f, "{}", line),
        }
    }
}

/// Result of resolving a line reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLookup {
    /// Concrete line the reference resolved to
    pub line_number: u32,

    /// Notices currently on that line (empty when there are none yet)
    pub line_notices: LineNotices,

    /// Most recently added notice of the requested severity, if any
    pub notice: Option<Notice>,
}

/// Notices for one file
///
/// Line names and line notices are kept apart: a line may carry any number
/// of names, and renaming never moves notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNotices {
    location: Arc<Path>,
    by_line_number: Arc<BTreeMap<u32, LineNotices>>,
    name_to_line_number: Arc<BTreeMap<String, u32>>,
}

impl FileNotices {
    pub fn new(location: impl AsRef<Path>) -> Self {
        Self {
            location: Arc::from(location.as_ref()),
            by_line_number: Arc::new(BTreeMap::new()),
            name_to_line_number: Arc::new(BTreeMap::new()),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// True iff at least one line holds a notice
    pub fn has_notices(&self) -> bool {
        self.by_line_number.values().any(LineNotices::has_notices)
    }

    /// Every notice, by ascending line and then insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.by_line_number.values().flat_map(|line| line.iter())
    }

    pub fn lines(&self) -> impl Iterator<Item = (u32, &LineNotices)> {
        self.by_line_number
            .iter()
            .map(|(line_number, notices)| (*line_number, notices))
    }

    pub fn names(&self) -> impl Iterator<Item = (&str, u32)> {
        self.name_to_line_number
            .iter()
            .map(|(name, line_number)| (name.as_str(), *line_number))
    }

    /// Line for a reference, or `None` for an unknown name
    pub fn get_line_number(&self, name_or_line: &NameOrLine) -> Option<u32> {
        match name_or_line {
            NameOrLine::Line(line_number) => Some(*line_number),
            NameOrLine::Name(name) => self.name_to_line_number.get(name).copied(),
        }
    }

    pub fn notices_for_line_number(&self, line_number: u32) -> Option<&LineNotices> {
        self.by_line_number.get(&line_number)
    }

    pub fn generate_notices_for_line(&self, line_number: u32) -> LineNotices {
        LineNotices::with_shared_location(Arc::clone(&self.location), line_number)
    }

    /// Resolve a reference and find the latest notice on that line
    ///
    /// With `severity` the most recently added notice of that severity wins,
    /// otherwise the most recently added notice of any kind.
    ///
    /// # Errors
    /// * `NoticeError::MissingNotices` - unknown name, or `must_exist` and no
    ///   notice was found
    pub fn find_for_name_or_line(
        &self,
        name_or_line: impl Into<NameOrLine>,
        severity: Option<&Severity>,
        must_exist: bool,
    ) -> Result<LineLookup, NoticeError> {
        let name_or_line = name_or_line.into();
        let line_number = self.resolve(&name_or_line)?;

        let line_notices = match self.notices_for_line_number(line_number) {
            Some(existing) => existing.clone(),
            None => self.generate_notices_for_line(line_number),
        };

        let notice = line_notices
            .iter()
            .rev()
            .find(|notice| severity.map_or(true, |wanted| &notice.severity == wanted))
            .cloned();

        if notice.is_none() && must_exist {
            return Err(NoticeError::missing(
                self.location.to_path_buf(),
                Some(name_or_line),
                Some(line_number),
            ));
        }

        Ok(LineLookup {
            line_number,
            line_notices,
            notice,
        })
    }

    /// Copy with `name` pointing at `line_number`
    pub fn set_name(&self, name: impl Into<String>, line_number: u32) -> Self {
        let mut next = self.clone();
        Arc::make_mut(&mut next.name_to_line_number).insert(name.into(), line_number);
        next
    }

    /// Copy with the notices of one line swapped out
    ///
    /// An empty `notices` drops the line entirely.
    pub fn set_line_notices(&self, line_number: u32, notices: LineNotices) -> Self {
        let mut next = self.clone();
        let lines = Arc::make_mut(&mut next.by_line_number);
        if notices.is_empty() {
            lines.remove(&line_number);
        } else {
            lines.insert(line_number, notices);
        }
        next
    }

    pub fn add_notice(&self, line_number: u32, notice: Notice) -> Self {
        let line_notices = match self.notices_for_line_number(line_number) {
            Some(existing) => existing.add(notice),
            None => self.generate_notices_for_line(line_number).add(notice),
        };
        self.set_line_notices(line_number, line_notices)
    }

    /// Expect a revealed type on a line
    ///
    /// Grows an existing note on that line by one message line instead of
    /// adding a second note.
    pub fn add_reveal(
        &self,
        name_or_line: impl Into<NameOrLine>,
        revealed: &str,
    ) -> Result<Self, NoticeError> {
        self.append_to_note(name_or_line.into(), Notice::reveal_msg(revealed))
    }

    /// Expect a note on a line, coalescing with an existing note like `add_reveal`
    pub fn add_note(
        &self,
        name_or_line: impl Into<NameOrLine>,
        note: &str,
    ) -> Result<Self, NoticeError> {
        self.append_to_note(name_or_line.into(), note.to_string())
    }

    /// Expect an error on a line; errors never coalesce
    pub fn add_error(
        &self,
        name_or_line: impl Into<NameOrLine>,
        error_type: &str,
        error: &str,
    ) -> Result<Self, NoticeError> {
        let found = self.find_for_name_or_line(name_or_line, None, false)?;
        let notice = found
            .line_notices
            .generate_notice(Severity::Error, error)
            .with_tag(Some(error_type.to_string()));
        Ok(self.set_line_notices(found.line_number, found.line_notices.add(notice)))
    }

    pub fn change_reveal<F>(
        &self,
        name_or_line: impl Into<NameOrLine>,
        modify: F,
    ) -> Result<Self, NoticeError>
    where
        F: FnOnce(Notice) -> Notice,
    {
        self.change_latest(name_or_line.into(), Severity::Note, modify)
    }

    pub fn change_error<F>(
        &self,
        name_or_line: impl Into<NameOrLine>,
        modify: F,
    ) -> Result<Self, NoticeError>
    where
        F: FnOnce(Notice) -> Notice,
    {
        self.change_latest(name_or_line.into(), Severity::Error, modify)
    }

    pub fn change_note<F>(
        &self,
        name_or_line: impl Into<NameOrLine>,
        modify: F,
    ) -> Result<Self, NoticeError>
    where
        F: FnOnce(Notice) -> Notice,
    {
        self.change_latest(name_or_line.into(), Severity::Note, modify)
    }

    /// Copy without the notices chosen by `chooser` on one line
    pub fn remove_notices<F>(
        &self,
        name_or_line: impl Into<NameOrLine>,
        chooser: F,
    ) -> Result<Self, NoticeError>
    where
        F: Fn(&Notice) -> bool,
    {
        let found = self.find_for_name_or_line(name_or_line, None, false)?;
        Ok(self.set_line_notices(found.line_number, found.line_notices.remove(chooser)))
    }

    /// Strip `remove` from every type reveal on one line
    pub fn remove_from_revealed_type(
        &self,
        name_or_line: impl Into<NameOrLine>,
        remove: &str,
    ) -> Result<Self, NoticeError> {
        let found = self.find_for_name_or_line(name_or_line, None, false)?;
        let notices = found
            .line_notices
            .iter()
            .map(|notice| {
                if notice.is_type_reveal() {
                    notice.clone().with_msg(notice.msg.replace(remove, ""))
                } else {
                    notice.clone()
                }
            })
            .collect();
        Ok(self.set_line_notices(found.line_number, found.line_notices.set_notices(notices)))
    }

    /// Copy without any notices, optionally forgetting line names too
    pub fn clear(&self, clear_names: bool) -> Self {
        Self {
            location: Arc::clone(&self.location),
            by_line_number: Arc::new(BTreeMap::new()),
            name_to_line_number: if clear_names {
                Arc::new(BTreeMap::new())
            } else {
                Arc::clone(&self.name_to_line_number)
            },
        }
    }

    fn resolve(&self, name_or_line: &NameOrLine) -> Result<u32, NoticeError> {
        self.get_line_number(name_or_line).ok_or_else(|| {
            NoticeError::missing(
                self.location.to_path_buf(),
                Some(name_or_line.clone()),
                None,
            )
        })
    }

    fn append_to_note(&self, name_or_line: NameOrLine, msg: String) -> Result<Self, NoticeError> {
        let found = self.find_for_name_or_line(name_or_line, Some(&Severity::Note), false)?;

        let line_notices = match found.notice {
            Some(existing) => {
                debug!(
                    "Coalescing note at {}:{}",
                    self.location.display(),
                    found.line_number
                );
                let grown = existing
                    .clone()
                    .with_msg(format!("{}\n{}", existing.msg, msg));
                found
                    .line_notices
                    .replace(|notice| notice.matches(&existing), grown, true)
            }
            None => {
                let note = found.line_notices.generate_notice(Severity::Note, msg);
                found.line_notices.add(note)
            }
        };

        Ok(self.set_line_notices(found.line_number, line_notices))
    }

    fn change_latest<F>(
        &self,
        name_or_line: NameOrLine,
        severity: Severity,
        modify: F,
    ) -> Result<Self, NoticeError>
    where
        F: FnOnce(Notice) -> Notice,
    {
        let found = self.find_for_name_or_line(name_or_line.clone(), Some(&severity), true)?;
        let existing = match found.notice {
            Some(existing) => existing,
            None => {
                return Err(NoticeError::missing(
                    self.location.to_path_buf(),
                    Some(name_or_line),
                    Some(found.line_number),
                ))
            }
        };

        let replacement = modify(existing.clone());
        let line_notices = found
            .line_notices
            .replace(|notice| notice.matches(&existing), replacement, true);
        Ok(self.set_line_notices(found.line_number, line_notices))
    }
}
