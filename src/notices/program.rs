//! Notices for a whole program run, keyed by file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::file::FileNotices;
use super::notice::Notice;
use crate::diff::{generate_diff, DiffNotices};
use crate::utils::error::NoticeError;

/// Every notice for a program, keyed by absolute file path
///
/// This is the shape of both the expected and the actual result of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramNotices {
    files: Arc<BTreeMap<PathBuf, FileNotices>>,
}

impl ProgramNotices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw notices, keeping their relative order within each line
    pub fn from_notices(notices: impl IntoIterator<Item = Notice>) -> Self {
        notices
            .into_iter()
            .fold(Self::new(), |program, notice| program.add_notice(notice))
    }

    pub fn has_notices(&self) -> bool {
        self.files.values().any(FileNotices::has_notices)
    }

    /// Every notice, ordered by path and then line
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.files.values().flat_map(|file| file.iter())
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &FileNotices)> {
        self.files
            .iter()
            .map(|(location, notices)| (location.as_path(), notices))
    }

    pub fn file_notices(&self, location: &Path) -> Option<&FileNotices> {
        self.files.get(location)
    }

    pub fn generate_notices_for_location(&self, location: impl AsRef<Path>) -> FileNotices {
        FileNotices::new(location)
    }

    /// Copy with one file replaced, or removed when `notices` is `None`
    pub fn set_file_notices(
        &self,
        location: impl Into<PathBuf>,
        notices: Option<FileNotices>,
    ) -> Self {
        let mut next = self.clone();
        let files = Arc::make_mut(&mut next.files);
        let location = location.into();
        match notices {
            Some(notices) => {
                files.insert(location, notices);
            }
            None => {
                files.remove(&location);
            }
        }
        next
    }

    /// Copy with one file passed through `change`
    ///
    /// # Errors
    /// * `NoticeError::MissingNotices` - `must_exist` and the file is unknown,
    ///   or whatever `change` reports
    pub fn modify_file<F>(
        &self,
        location: impl AsRef<Path>,
        must_exist: bool,
        change: F,
    ) -> Result<Self, NoticeError>
    where
        F: FnOnce(FileNotices) -> Result<FileNotices, NoticeError>,
    {
        let location = location.as_ref();
        let current = match self.file_notices(location) {
            Some(existing) => existing.clone(),
            None if must_exist => {
                return Err(NoticeError::missing(location.to_path_buf(), None, None))
            }
            None => self.generate_notices_for_location(location),
        };

        let changed = change(current)?;
        Ok(self.set_file_notices(location.to_path_buf(), Some(changed)))
    }

    /// Copy with `notice` added to its own file and line
    pub fn add_notice(&self, notice: Notice) -> Self {
        let file = match self.file_notices(notice.location()) {
            Some(existing) => existing.clone(),
            None => self.generate_notices_for_location(notice.location()),
        };
        let location = notice.location.clone();
        let file = file.add_notice(notice.line_number, notice);
        self.set_file_notices(location, Some(file))
    }

    /// Pair these notices (left) with `other` (right) per file and line
    ///
    /// Paths under `root_dir` are made relative to it so that both sides
    /// line up even when built from different absolute roots.
    pub fn diff(&self, root_dir: impl AsRef<Path>, other: &ProgramNotices) -> DiffNotices {
        generate_diff(self, root_dir.as_ref(), other)
    }
}

impl FromIterator<Notice> for ProgramNotices {
    fn from_iter<T: IntoIterator<Item = Notice>>(iter: T) -> Self {
        Self::from_notices(iter)
    }
}
