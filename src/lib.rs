//! Notice Check
//!
//! Compares the diagnostics a static analyzer reports ("notices") against
//! per-line expectations and renders a readable tick/cross diff when they
//! disagree.
//!
//! This crate provides the library behind the `notice-check` CLI tool and can
//! be used directly from test harnesses:
//!
//! ```ignore
//! use notice_check::expectations::{Expectations, OutputNoticeChecker};
//!
//! let checker = OutputNoticeChecker::new(result, &root_dir);
//! Expectations::new(expected).check(&checker)?;
//! ```

pub mod commands;
pub mod diff;
pub mod expectations;
pub mod interpret;
pub mod notices;
pub mod output;
pub mod utils;
