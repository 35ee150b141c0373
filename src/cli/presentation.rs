//! CLI presentation: text and json formatters per command family.

mod baseline;
mod check;
mod scan;
mod shared;

pub use baseline::{format_baseline_show_json, format_baseline_show_text};
pub use check::{format_check_outcome_json, format_check_outcome_text};
pub use scan::{format_scan_report_json, format_scan_report_text};
pub use shared::Palette;
