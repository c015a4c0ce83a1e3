//! Configuration and constants for comparison and reporting.

/// Marks a line or slot where both sides agree
pub const TICK: &str = "✓";

/// Marks a line or slot where the sides disagree
pub const CROSS: &str = "✘";

/// Stands in for the missing side of an unpaired slot
pub const NONE_PLACEHOLDER: &str = "<NONE>";

/// Prefix for every per-line row of the report
pub const REPORT_LINE_PREFIX: &str = "  | ";

/// Message prefix shared by every type reveal note
pub const REVEAL_PREFIX: &str = "Revealed type is \"";

/// Current JSON comparison report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Lines the analyzer prints around its diagnostics
pub const DEBUG_LINE_PREFIX: &str = ":debug:";
pub const SUMMARY_FOUND_PREFIX: &str = "Found ";
pub const SUMMARY_SUCCESS_PREFIX: &str = "Success: no issues";
pub const DAEMON_RESTARTING: &str = "Restarting: plugins changed";
pub const DAEMON_STOPPED: &str = "Daemon stopped";
pub const DAEMON_STARTED: &str = "Daemon started";
