//! Shared presentation helpers: terminal colors, failure lists, timestamps.

use crate::error::ReadFailure;
use crate::snapshot::epoch_seconds_to_datetime;
use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Applies terminal colors when enabled
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn added(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn modified(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn deleted(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn format_timestamp(seconds: f64) -> String {
    epoch_seconds_to_datetime(seconds)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{} (invalid timestamp)", seconds))
}

/// Warning block listing files left out of the scan
pub fn format_failures_text(failures: &[ReadFailure], palette: &Palette) -> Option<String> {
    if failures.is_empty() {
        return None;
    }
    let mut out = palette.modified(&format!(
        "Warning: {} file(s) could not be read and were left out:",
        failures.len()
    ));
    for failure in failures {
        out.push_str(&format!(
            "\n  - {}: {}",
            failure.path.display(),
            failure.source
        ));
    }
    Some(out)
}

pub fn failures_json(failures: &[ReadFailure]) -> Value {
    Value::Array(
        failures
            .iter()
            .map(|f| {
                json!({
                    "path": f.path.display().to_string(),
                    "error": f.source.to_string(),
                })
            })
            .collect(),
    )
}

pub fn to_pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
