//! Check workflow tests: bootstrap, comparison and update gating

use crate::integration::test_utils::{abc_tree, write_file};
use fixity::progress::NoopObserver;
use fixity::{BaselineStore, CheckOptions, CheckOutcome, Checker, FixityError, Scanner};
use std::fs;
use tempfile::TempDir;

fn checker(state: &TempDir) -> Checker {
    Checker::new(
        Scanner::new(),
        BaselineStore::new(state.path().join("hashes.json")),
    )
}

#[test]
fn test_modified_added_and_deleted_are_reported() {
    let tree = abc_tree();
    let state = TempDir::new().unwrap();
    let checker = checker(&state);

    let first = checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap();
    assert!(matches!(first, CheckOutcome::Bootstrapped { .. }));
    assert_eq!(first.report().snapshot.len(), 3);

    write_file(tree.path(), "b", "22");
    fs::remove_file(tree.path().join("c")).unwrap();
    write_file(tree.path(), "d", "4");

    let second = checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap();
    let diff = second.diff().unwrap();

    assert_eq!(diff.modified.iter().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(diff.added.iter().collect::<Vec<_>>(), vec!["d"]);
    assert_eq!(diff.deleted.iter().collect::<Vec<_>>(), vec!["c"]);
    assert_eq!(diff.unchanged, 1);
}

#[test]
fn test_unchanged_tree_reports_nothing_twice() {
    let tree = abc_tree();
    let state = TempDir::new().unwrap();
    let checker = checker(&state);

    checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap();
    for _ in 0..2 {
        let outcome = checker
            .run(tree.path(), CheckOptions::default(), &NoopObserver)
            .unwrap();
        let diff = outcome.diff().unwrap();
        assert!(diff.is_clean());
        assert_eq!(diff.unchanged, 3);
    }
}

#[test]
fn test_empty_directory_bootstraps_empty_baseline() {
    let tree = TempDir::new().unwrap();
    let state = TempDir::new().unwrap();
    let checker = checker(&state);

    checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap();
    let stored = checker.store().load().unwrap().unwrap();
    assert!(stored.is_empty());

    let outcome = checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap();
    assert!(outcome.diff().unwrap().is_clean());
}

#[test]
fn test_baseline_is_untouched_without_update() {
    let tree = abc_tree();
    let state = TempDir::new().unwrap();
    let checker = checker(&state);

    checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap();
    let before = fs::read(checker.store().path()).unwrap();

    write_file(tree.path(), "a", "changed");
    checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap();

    assert_eq!(fs::read(checker.store().path()).unwrap(), before);
}

#[test]
fn test_update_accepts_current_state() {
    let tree = abc_tree();
    let state = TempDir::new().unwrap();
    let checker = checker(&state);

    checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap();
    write_file(tree.path(), "a", "changed");

    let updated = checker
        .run(tree.path(), CheckOptions { update: true }, &NoopObserver)
        .unwrap();
    assert!(updated.baseline_written());
    assert!(!updated.diff().unwrap().is_clean());
    let stored = checker.store().load().unwrap().unwrap();
    assert_eq!(stored, updated.report().snapshot);

    let after = checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap();
    assert!(after.diff().unwrap().is_clean());
}

#[test]
fn test_corrupt_baseline_aborts_and_is_preserved() {
    let tree = abc_tree();
    let state = TempDir::new().unwrap();
    let checker = checker(&state);
    fs::write(checker.store().path(), "{\"timestamp\": oops").unwrap();

    let err = checker
        .run(tree.path(), CheckOptions { update: true }, &NoopObserver)
        .unwrap_err();

    assert!(matches!(
        err,
        FixityError::Storage(fixity::StorageError::ParseFailure { .. })
    ));
    assert_eq!(
        fs::read_to_string(checker.store().path()).unwrap(),
        "{\"timestamp\": oops"
    );
}

#[test]
fn test_cancelled_scan_writes_nothing() {
    let tree = abc_tree();
    let state = TempDir::new().unwrap();
    let token = fixity::progress::CancellationToken::new();
    token.cancel();
    let checker = Checker::new(
        Scanner::new().with_cancellation(token),
        BaselineStore::new(state.path().join("hashes.json")),
    );

    let err = checker
        .run(tree.path(), CheckOptions::default(), &NoopObserver)
        .unwrap_err();
    assert!(matches!(err, FixityError::Scan(fixity::ScanError::Cancelled)));
    assert!(!checker.store().exists());
}
