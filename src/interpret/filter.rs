//! Filtering of raw analyzer stdout down to diagnostic lines.

use crate::utils::config::{
    DAEMON_RESTARTING, DAEMON_STARTED, DAEMON_STOPPED, DEBUG_LINE_PREFIX, SUMMARY_FOUND_PREFIX,
    SUMMARY_SUCCESS_PREFIX,
};

/// Diagnostic lines left after filtering, plus what the daemon reported
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredOutput {
    pub lines: Vec<String>,
    pub daemon_restarted: bool,
}

/// Strip everything that is not a diagnostic from analyzer stdout
///
/// Removes `:debug:` lines, blank lines, a trailing `Found ...` or
/// `Success: no issues ...` summary, and the daemon's start and restart
/// announcements at the top of the output.
pub fn filter_output_lines(stdout: &str) -> FilteredOutput {
    let mut lines: Vec<String> = stdout
        .trim()
        .lines()
        .filter(|line| !line.starts_with(DEBUG_LINE_PREFIX))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    if lines.last().is_some_and(|last| {
        last.starts_with(SUMMARY_FOUND_PREFIX) || last.starts_with(SUMMARY_SUCCESS_PREFIX)
    }) {
        lines.pop();
    }

    let mut daemon_restarted = false;
    if lines.len() >= 2 && lines[0] == DAEMON_RESTARTING && lines[1] == DAEMON_STOPPED {
        lines.drain(..2);
        daemon_restarted = true;
    }

    if lines.first().is_some_and(|first| first == DAEMON_STARTED) {
        lines.remove(0);
    }

    FilteredOutput {
        lines,
        daemon_restarted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_debug_and_summary() {
        let stdout = ":debug: starting\nmain.py:1: note: hi\n\nFound 1 error in 1 file (checked 1 source file)\n";
        assert_eq!(
            filter_output_lines(stdout),
            FilteredOutput {
                lines: vec!["main.py:1: note: hi".to_string()],
                daemon_restarted: false,
            }
        );
    }

    #[test]
    fn test_success_only_output_is_empty() {
        let filtered = filter_output_lines("Success: no issues found in 3 source files\n");
        assert!(filtered.lines.is_empty());
    }

    #[test]
    fn test_daemon_restart_is_reported() {
        let stdout = "Restarting: plugins changed\nDaemon stopped\nDaemon started\nmain.py:1: note: hi\nFound 1 error";
        let filtered = filter_output_lines(stdout);
        assert!(filtered.daemon_restarted);
        assert_eq!(filtered.lines, vec!["main.py:1: note: hi"]);
    }

    #[test]
    fn test_daemon_start_without_restart() {
        let filtered = filter_output_lines("Daemon started\nmain.py:4: error: bad  [misc]");
        assert!(!filtered.daemon_restarted);
        assert_eq!(filtered.lines, vec!["main.py:4: error: bad  [misc]"]);
    }
}
