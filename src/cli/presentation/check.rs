//! Check command presentation: the drift report.

use super::shared::{failures_json, format_failures_text, format_timestamp, to_pretty_json, Palette};
use crate::check::CheckOutcome;
use crate::diff::DiffResult;
use serde_json::json;
use std::collections::BTreeSet;
use std::path::Path;

pub fn format_check_outcome_text(outcome: &CheckOutcome, baseline: &Path, palette: &Palette) -> String {
    let mut sections = Vec::new();

    match outcome {
        CheckOutcome::Bootstrapped { report } => {
            sections.push(format!(
                "First-time setup: saved {} file hash(es) to {}.\nNo earlier baseline existed, so nothing was compared.",
                report.snapshot.len(),
                baseline.display()
            ));
        }
        CheckOutcome::Compared {
            baseline_timestamp,
            diff,
            updated,
            ..
        } => {
            sections.push(format!(
                "Compared with baseline from {} ({}).",
                format_timestamp(*baseline_timestamp),
                baseline.display()
            ));
            sections.push(format_diff_text(diff, palette));
            if *updated {
                sections.push(format!("Baseline updated: {}", baseline.display()));
            } else {
                sections.push(palette.dim(
                    "Tip: run with --update to replace the saved baseline with this scan.",
                ));
            }
        }
    }

    if let Some(warnings) = format_failures_text(&outcome.report().failures, palette) {
        sections.push(warnings);
    }

    sections.join("\n\n")
}

fn format_diff_text(diff: &DiffResult, palette: &Palette) -> String {
    let mut out = palette.heading("Report:");
    if diff.is_clean() {
        out.push_str(&format!(
            "\n\n{}",
            palette.added(&format!("No changes detected ({} file(s) unchanged).", diff.unchanged))
        ));
        return out;
    }

    push_path_section(&mut out, "Modified files:", &diff.modified, |p| palette.modified(p));
    push_path_section(&mut out, "New files added:", &diff.added, |p| palette.added(p));
    push_path_section(&mut out, "Deleted files:", &diff.deleted, |p| palette.deleted(p));
    out.push_str(&format!(
        "\n\n{} modified, {} added, {} deleted, {} unchanged",
        diff.modified.len(),
        diff.added.len(),
        diff.deleted.len(),
        diff.unchanged
    ));
    out
}

fn push_path_section(
    out: &mut String,
    title: &str,
    paths: &BTreeSet<String>,
    paint: impl Fn(&str) -> String,
) {
    if paths.is_empty() {
        return;
    }
    out.push_str(&format!("\n\n{}", title));
    for path in paths {
        out.push_str(&format!("\n  - {}", paint(path)));
    }
}

pub fn format_check_outcome_json(outcome: &CheckOutcome, baseline: &Path) -> String {
    let report = outcome.report();
    let mut out = json!({
        "root": report.root.display().to_string(),
        "baseline": baseline.display().to_string(),
        "files": report.snapshot.len(),
        "skipped_oversize": report.skipped_oversize,
        "failures": failures_json(&report.failures),
        "baseline_written": outcome.baseline_written(),
    });

    match outcome {
        CheckOutcome::Bootstrapped { .. } => {
            out["status"] = json!("bootstrapped");
        }
        CheckOutcome::Compared {
            baseline_timestamp,
            diff,
            ..
        } => {
            out["status"] = json!(if diff.is_clean() { "clean" } else { "changed" });
            out["baseline_timestamp"] = json!(baseline_timestamp);
            out["added"] = json!(diff.added);
            out["modified"] = json!(diff.modified);
            out["deleted"] = json!(diff.deleted);
            out["unchanged"] = json!(diff.unchanged);
        }
    }

    to_pretty_json(&out)
}
