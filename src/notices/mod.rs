//! Notice data model.
//!
//! This module handles:
//! - Single notices and their matching rules
//! - Per-line, per-file and per-program collections
//! - Line-addressed expectation building (reveals, errors, notes)
//!
//! Every structure is a persistent value: operations return a new value that
//! shares unchanged parts with the old one.

pub mod file;
pub mod line;
pub mod notice;
pub mod program;

// Re-export main types
pub use file::{FileNotices, LineLookup, NameOrLine};
pub use line::LineNotices;
pub use notice::{Notice, Severity};
pub use program::ProgramNotices;
