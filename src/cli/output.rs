//! Shared output helpers for the goa binary.
//!
//! Global CLI flags are mirrored into `GOA_*` environment variables at
//! startup so every subcommand can check them without threading state.

/// True when `--json` was passed (machine-readable output).
pub fn is_json() -> bool {
    std::env::var("GOA_JSON").is_ok()
}

/// True when `--quiet` was passed (suppress non-essential output).
pub fn is_quiet() -> bool {
    std::env::var("GOA_QUIET").is_ok()
}

/// Print a JSON value to stdout as a single line.
pub fn print_json(value: &serde_json::Value) {
    println!("{value}");
}
