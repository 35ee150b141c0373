//! Scan command presentation: fingerprint listing.

use super::shared::{failures_json, format_failures_text, to_pretty_json, Palette};
use crate::tree::scanner::ScanReport;
use serde_json::json;

pub fn format_scan_report_text(report: &ScanReport, palette: &Palette) -> String {
    let mut out = String::new();
    for fingerprint in report.snapshot.fingerprints() {
        out.push_str(&format!("{}  {}\n", palette.dim(&fingerprint.digest.to_hex()), fingerprint.path));
    }
    out.push_str(&format!(
        "\n{} file(s) hashed under {}",
        report.snapshot.len(),
        report.root.display()
    ));
    if report.skipped_oversize > 0 {
        out.push_str(&format!(
            "\n{} file(s) above the size limit were skipped",
            report.skipped_oversize
        ));
    }
    if let Some(warnings) = format_failures_text(&report.failures, palette) {
        out.push_str("\n\n");
        out.push_str(&warnings);
    }
    out
}

pub fn format_scan_report_json(report: &ScanReport) -> String {
    let out = json!({
        "root": report.root.display().to_string(),
        "timestamp": report.snapshot.timestamp,
        "hashes": report.snapshot.hashes,
        "skipped_oversize": report.skipped_oversize,
        "failures": failures_json(&report.failures),
    });
    to_pretty_json(&out)
}
