//! CLI subcommand implementations for the goa binary.

pub mod cal_cmd;
pub mod doctor;
pub mod download_cmd;
pub mod fetch_cmd;
pub mod list_cmd;
pub mod output;
