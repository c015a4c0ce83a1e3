//! Notice checkers that derive actual notices from a run.

use log::{debug, warn};
use std::path::{Path, PathBuf};

use super::RunResult;
use crate::diff::compare_notices;
use crate::interpret::{filter_output_lines, keep_notice, parse_output_lines};
use crate::notices::{Notice, ProgramNotices};
use crate::utils::error::{ExpectationError, InterpretError};

/// Produces the actual notices of a run and compares them to expected ones
pub trait NoticeChecker {
    /// The run being checked
    fn result(&self) -> &RunResult;

    /// Fail when the run's notices differ from `expected`
    fn check(&self, expected: &ProgramNotices) -> Result<(), ExpectationError>;
}

/// Checker that reads notices from the analyzer's stdout
#[derive(Debug, Clone)]
pub struct OutputNoticeChecker<F = fn(Notice) -> Option<Notice>> {
    result: RunResult,
    root_dir: PathBuf,
    normalise: F,
    expect_daemon_restart: Option<bool>,
}

impl OutputNoticeChecker {
    pub fn new(result: RunResult, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            result,
            root_dir: root_dir.into(),
            normalise: keep_notice,
            expect_daemon_restart: None,
        }
    }
}

impl<F> OutputNoticeChecker<F>
where
    F: Fn(Notice) -> Option<Notice>,
{
    /// Rewrite or drop every parsed notice before comparing
    pub fn with_normaliser<G>(self, normalise: G) -> OutputNoticeChecker<G>
    where
        G: Fn(Notice) -> Option<Notice>,
    {
        OutputNoticeChecker {
            result: self.result,
            root_dir: self.root_dir,
            normalise,
            expect_daemon_restart: self.expect_daemon_restart,
        }
    }

    /// Also require the daemon to have restarted (or not) during the run
    pub fn expecting_daemon_restart(mut self, restarted: bool) -> Self {
        self.expect_daemon_restart = Some(restarted);
        self
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Notices the analyzer reported, and whether its daemon restarted
    ///
    /// # Errors
    /// * `InterpretError` - stdout holds a line that is not a diagnostic
    pub fn actual_notices(&self) -> Result<(ProgramNotices, bool), InterpretError> {
        let filtered = filter_output_lines(&self.result.stdout);
        let notices = parse_output_lines(
            filtered.lines.iter().map(String::as_str),
            &self.root_dir,
            ProgramNotices::new(),
            &self.normalise,
        )?;
        Ok((notices, filtered.daemon_restarted))
    }
}

impl<F> NoticeChecker for OutputNoticeChecker<F>
where
    F: Fn(Notice) -> Option<Notice>,
{
    fn result(&self) -> &RunResult {
        &self.result
    }

    fn check(&self, expected: &ProgramNotices) -> Result<(), ExpectationError> {
        let (actual, daemon_restarted) = self.actual_notices()?;
        debug!("Checking analyzer output from {}", self.root_dir.display());

        compare_notices(&actual.diff(&self.root_dir, expected))?;

        match self.expect_daemon_restart {
            Some(true) if !daemon_restarted => Err(ExpectationError::DaemonNotRestarted),
            Some(false) if daemon_restarted => Err(ExpectationError::DaemonRestarted),
            None if daemon_restarted => {
                warn!("Daemon restarted during the run");
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notices::Severity;

    fn run(stdout: &str) -> RunResult {
        RunResult {
            exit_code: 1,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn expected() -> ProgramNotices {
        ProgramNotices::from_notices(vec![Notice::new("/root/main.py", 2, Severity::Error, "bad")
            .with_tag(Some("misc".to_string()))])
    }

    #[test]
    fn test_matching_output_passes() {
        let checker = OutputNoticeChecker::new(
            run("main.py:2: error: bad  [misc]\nFound 1 error in 1 file"),
            "/root",
        );
        assert!(checker.check(&expected()).is_ok());
    }

    #[test]
    fn test_differing_output_reports_got_and_want() {
        let checker = OutputNoticeChecker::new(run("main.py:2: error: worse  [misc]"), "/root");
        let err = checker.check(&expected()).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("!! GOT  !! severity=error[misc]:: worse"));
        assert!(text.contains("!! WANT !! severity=error[misc]:: bad"));
    }

    #[test]
    fn test_normaliser_applies_before_compare() {
        let checker = OutputNoticeChecker::new(run("main.py:2: error: BAD  [misc]"), "/root")
            .with_normaliser(|notice: Notice| {
                let msg = notice.msg.to_lowercase();
                Some(notice.with_msg(msg))
            });
        assert!(checker.check(&expected()).is_ok());
    }

    #[test]
    fn test_invalid_output_is_an_interpret_error() {
        let checker = OutputNoticeChecker::new(run("not a diagnostic"), "/root");
        assert!(matches!(
            checker.check(&expected()),
            Err(ExpectationError::Interpret(_))
        ));
    }

    #[test]
    fn test_daemon_restart_expectation() {
        let stdout = "Restarting: plugins changed\nDaemon stopped\nDaemon started\nmain.py:2: error: bad  [misc]";
        let restarted = OutputNoticeChecker::new(run(stdout), "/root");

        assert!(restarted.clone().check(&expected()).is_ok());
        assert!(restarted
            .clone()
            .expecting_daemon_restart(true)
            .check(&expected())
            .is_ok());
        assert!(matches!(
            restarted.expecting_daemon_restart(false).check(&expected()),
            Err(ExpectationError::DaemonRestarted)
        ));

        let quiet = OutputNoticeChecker::new(run("main.py:2: error: bad  [misc]"), "/root")
            .expecting_daemon_restart(true);
        assert!(matches!(
            quiet.check(&expected()),
            Err(ExpectationError::DaemonNotRestarted)
        ));
    }
}
