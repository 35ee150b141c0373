//! Baseline command presentation: summary table and fingerprint listing.

use super::shared::{format_timestamp, to_pretty_json};
use crate::snapshot::Snapshot;
use comfy_table::Table;
use serde_json::json;
use std::path::Path;

pub fn format_baseline_show_text(path: &Path, snapshot: Option<&Snapshot>, files: bool) -> String {
    let Some(snapshot) = snapshot else {
        return format!(
            "No baseline at {}.\n\nRun 'fixity check <PATH>' to create one.",
            path.display()
        );
    };

    let mut table = Table::new();
    table.set_header(vec!["Baseline", "Created", "Files"]);
    table.add_row(vec![
        path.display().to_string(),
        format_timestamp(snapshot.timestamp),
        snapshot.len().to_string(),
    ]);
    let mut out = table.to_string();

    if files && !snapshot.is_empty() {
        let mut listing = Table::new();
        listing.set_header(vec!["Path", "SHA-256"]);
        for fingerprint in snapshot.fingerprints() {
            listing.add_row(vec![fingerprint.path, fingerprint.digest.to_hex()]);
        }
        out.push_str("\n\n");
        out.push_str(&listing.to_string());
    }
    out
}

pub fn format_baseline_show_json(path: &Path, snapshot: Option<&Snapshot>, files: bool) -> String {
    let out = match snapshot {
        None => json!({ "baseline": path.display().to_string(), "exists": false }),
        Some(snapshot) => {
            let mut out = json!({
                "baseline": path.display().to_string(),
                "exists": true,
                "timestamp": snapshot.timestamp,
                "files": snapshot.len(),
            });
            if files {
                out["hashes"] = json!(snapshot.hashes);
            }
            out
        }
    };
    to_pretty_json(&out)
}
