use std::path::PathBuf;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// JSON notices the run was expected to produce
    pub expected: PathBuf,

    /// JSON notices the run actually produced
    pub actual: PathBuf,

    /// Directory report paths are made relative to
    pub root_dir: PathBuf,

    /// Where to write the JSON comparison summary (optional)
    pub output: Option<PathBuf>,

    /// Print the rendered report to stdout
    pub summary: bool,
}

/// Arguments for the interpret command
#[derive(Debug, Clone)]
pub struct InterpretArgs {
    /// Captured analyzer stdout
    pub input: PathBuf,

    /// Directory the analyzer was run from
    pub root_dir: PathBuf,

    /// Where to write the parsed notices
    pub output: PathBuf,
}

/// Arguments for the check command
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// JSON notices the run is expected to produce
    pub expected: PathBuf,

    /// JSON run result with exit code, stdout and stderr
    pub result: PathBuf,

    /// Directory the analyzer was run from
    pub root_dir: PathBuf,

    /// Expect a non-zero exit code even without expected errors
    pub expect_fail: bool,

    /// Exact stderr the run must produce
    pub expect_stderr: String,

    /// Require the daemon to have restarted (or not)
    pub expect_daemon_restart: Option<bool>,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            expected: PathBuf::from("expected.json"),
            actual: PathBuf::from("actual.json"),
            root_dir: PathBuf::from("."),
            output: None,
            summary: false,
        }
    }
}
