//! Expectations about a single analyzer run.
//!
//! A run is judged on three things, in this order: its notices, its stderr and
//! its exit code. Notices are checked through a `NoticeChecker` so callers can
//! plug in how actual notices are obtained.
//!
//! # Example
//! ```ignore
//! use notice_check::expectations::{Expectations, OutputNoticeChecker, RunResult};
//!
//! let checker = OutputNoticeChecker::new(result, &root_dir);
//! Expectations::new(expected).check(&checker)?;
//! ```

mod checker;

pub use checker::{NoticeChecker, OutputNoticeChecker};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::notices::{Notice, ProgramNotices};
use crate::utils::error::ExpectationError;

/// Captured outcome of running the analyzer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub exit_code: i32,

    #[serde(default)]
    pub stdout: String,

    #[serde(default)]
    pub stderr: String,
}

/// What a run is expected to produce
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectations {
    /// Expect a non-zero exit code even without expected errors
    pub expect_fail: bool,

    /// Exact stderr the run must produce
    pub expect_stderr: String,

    pub expect_notices: ProgramNotices,
}

impl Expectations {
    pub fn new(expect_notices: ProgramNotices) -> Self {
        Self {
            expect_notices,
            ..Self::default()
        }
    }

    pub fn with_expect_fail(mut self, expect_fail: bool) -> Self {
        self.expect_fail = expect_fail;
        self
    }

    pub fn with_expect_stderr(mut self, expect_stderr: impl Into<String>) -> Self {
        self.expect_stderr = expect_stderr.into();
        self
    }

    /// Whether the run should exit non-zero
    ///
    /// True when failure is expected outright or any expected notice is an error.
    pub fn expected_exit_nonzero(&self) -> bool {
        self.expect_fail || self.expect_notices.iter().any(Notice::is_error)
    }

    /// Check a run against these expectations
    ///
    /// # Errors
    /// * `ExpectationError::Notices` - Actual notices differ from the expected ones
    /// * `ExpectationError::StderrMismatch` - stderr is not exactly as expected
    /// * `ExpectationError::ExpectedFailure` - Exit code was zero but should not be
    /// * `ExpectationError::ExpectedSuccess` - Exit code was non-zero but should be zero
    /// * Anything else the checker reports
    pub fn check<C>(&self, checker: &C) -> Result<(), ExpectationError>
    where
        C: NoticeChecker + ?Sized,
    {
        checker.check(&self.expect_notices)?;

        let result = checker.result();
        if result.stderr != self.expect_stderr {
            return Err(ExpectationError::StderrMismatch {
                got: result.stderr.clone(),
                want: self.expect_stderr.clone(),
            });
        }

        let nonzero = self.expected_exit_nonzero();
        debug!(
            "Exit code {} (expecting {})",
            result.exit_code,
            if nonzero { "non zero" } else { "zero" }
        );

        match (nonzero, result.exit_code) {
            (true, 0) => Err(ExpectationError::ExpectedFailure(result.exit_code)),
            (false, code) if code != 0 => Err(ExpectationError::ExpectedSuccess(code)),
            _ => Ok(()),
        }
    }
}
