//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod check;
pub mod compare;
pub mod interpret;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use check::execute_check;
pub use compare::execute_compare;
pub use interpret::execute_interpret;
pub use models::{CheckArgs, CompareArgs, InterpretArgs};
pub use utils::display_version;
