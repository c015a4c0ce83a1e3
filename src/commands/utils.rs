use crate::utils::config::REPORT_SCHEMA_VERSION;

/// Display version information
pub fn display_version() {
    println!("Notice Check v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Compares analyzer diagnostics against per-line expectations.");
}
