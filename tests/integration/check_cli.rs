//! Binary-level tests: run `fixity` as an operator would

use crate::integration::test_utils::{abc_tree, write_file};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary in `working_dir` with an isolated home and config dir
fn fixity(working_dir: &Path, args: &[&str]) -> Output {
    let home = working_dir.join(".home");
    fs::create_dir_all(&home).unwrap();
    Command::new(env!("CARGO_BIN_EXE_fixity"))
        .args(args)
        .current_dir(working_dir)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_STATE_HOME", home.join("state"))
        .env_remove("FIXITY_LOG")
        .env_remove("FIXITY_LOG_FORMAT")
        .env_remove("FIXITY_LOG_OUTPUT")
        .output()
        .expect("failed to run fixity binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_first_run_creates_baseline_in_working_directory() {
    let tree = abc_tree();
    let working = TempDir::new().unwrap();
    let target = tree.path().to_str().unwrap();

    let output = fixity(working.path(), &["check", target]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("First-time setup"));
    assert!(working.path().join("hashes.json").is_file());
}

#[test]
fn test_changes_are_reported_and_baseline_kept() {
    let tree = abc_tree();
    let working = TempDir::new().unwrap();
    let target = tree.path().to_str().unwrap();
    assert!(fixity(working.path(), &["check", target]).status.success());
    let before = fs::read(working.path().join("hashes.json")).unwrap();

    write_file(tree.path(), "b", "22");
    fs::remove_file(tree.path().join("c")).unwrap();
    write_file(tree.path(), "d", "4");

    let output = fixity(working.path(), &["check", target]);
    let text = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(text.contains("Modified files:\n  - b"), "stdout: {}", text);
    assert!(text.contains("New files added:\n  - d"), "stdout: {}", text);
    assert!(text.contains("Deleted files:\n  - c"), "stdout: {}", text);
    assert!(text.contains("--update"));
    assert_eq!(fs::read(working.path().join("hashes.json")).unwrap(), before);
}

#[test]
fn test_update_flag_accepts_changes() {
    let tree = abc_tree();
    let working = TempDir::new().unwrap();
    let target = tree.path().to_str().unwrap();
    assert!(fixity(working.path(), &["check", target]).status.success());

    write_file(tree.path(), "a", "changed");
    let updated = fixity(working.path(), &["check", target, "--update"]);
    assert!(updated.status.success());
    assert!(stdout(&updated).contains("Baseline updated"));

    let after = fixity(working.path(), &["check", target]);
    assert!(stdout(&after).contains("No changes detected"));
}

#[test]
fn test_json_report() {
    let tree = abc_tree();
    let working = TempDir::new().unwrap();
    let target = tree.path().to_str().unwrap();
    assert!(fixity(working.path(), &["check", target]).status.success());
    write_file(tree.path(), "a", "changed");

    let output = fixity(working.path(), &["check", target, "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(value["status"], "changed");
    assert_eq!(value["modified"], serde_json::json!(["a"]));
    assert_eq!(value["unchanged"], 2);
    assert_eq!(value["baseline_written"], false);
}

#[test]
fn test_invalid_directory_exits_non_zero() {
    let working = TempDir::new().unwrap();
    let missing = working.path().join("does-not-exist");

    let output = fixity(working.path(), &["check", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid directory"));
    assert!(!working.path().join("hashes.json").exists());
}

#[test]
fn test_corrupt_baseline_exits_non_zero_and_is_kept() {
    let tree = abc_tree();
    let working = TempDir::new().unwrap();
    fs::write(working.path().join("hashes.json"), "garbage").unwrap();

    let output = fixity(
        working.path(),
        &["check", tree.path().to_str().unwrap(), "--update"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("corrupt"));
    assert_eq!(
        fs::read_to_string(working.path().join("hashes.json")).unwrap(),
        "garbage"
    );
}

#[test]
fn test_baseline_flag_and_show() {
    let tree = abc_tree();
    let working = TempDir::new().unwrap();
    let baseline = working.path().join("state").join("tree.json");
    let baseline = baseline.to_str().unwrap();

    let check = fixity(
        working.path(),
        &["--baseline", baseline, "check", tree.path().to_str().unwrap()],
    );
    assert!(check.status.success(), "stderr: {}", stderr(&check));

    let show = fixity(
        working.path(),
        &["--baseline", baseline, "baseline", "show", "--format", "json"],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&show)).unwrap();
    assert_eq!(value["exists"], true);
    assert_eq!(value["files"], 3);
}

#[test]
fn test_logs_stay_off_stdout() {
    let tree = abc_tree();
    let working = TempDir::new().unwrap();

    let output = fixity(
        working.path(),
        &[
            "--log-level",
            "debug",
            "check",
            tree.path().to_str().unwrap(),
            "--format",
            "json",
        ],
    );

    assert!(output.status.success());
    assert!(serde_json::from_str::<serde_json::Value>(&stdout(&output)).is_ok());
    assert!(stderr(&output).contains("Scan complete"));
}
