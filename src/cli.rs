//! CLI domain: parse, route, help, output, and presentation only.
//! No scan or baseline logic; the route table dispatches to the check workflow.

mod help;
mod output;
mod parse;
mod presentation;
mod progress;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{BaselineCommands, Cli, Commands, ScanArgs};
pub use presentation::{
    format_baseline_show_json, format_baseline_show_text, format_check_outcome_json,
    format_check_outcome_text, format_scan_report_json, format_scan_report_text, Palette,
};
pub use progress::TerminalProgress;
pub use route::RunContext;
