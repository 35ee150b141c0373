//! End-to-end scan tests: traversal rules, key format and failure isolation

use crate::integration::test_utils::write_file;
use fixity::error::ReadFailure;
use fixity::progress::{CountingObserver, NoopObserver};
use fixity::tree::hasher::{self, ContentHasher};
use fixity::tree::walker::WalkerConfig;
use fixity::types::FileDigest;
use fixity::Scanner;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_ignored_directories_are_pruned_at_every_depth() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/main.rs", "fn main() {}");
    write_file(dir.path(), ".git/objects/abc", "blob");
    write_file(dir.path(), "web/node_modules/pkg/index.js", "x");
    write_file(dir.path(), "pkg/__pycache__/mod.pyc", "x");
    write_file(dir.path(), "venv/bin/python", "x");
    write_file(dir.path(), "docs/venv.md", "not a directory");

    let report = Scanner::new().scan(dir.path(), &NoopObserver).unwrap();
    let keys: Vec<&str> = report.snapshot.hashes.keys().map(String::as_str).collect();

    assert_eq!(keys, vec!["docs/venv.md", "src/main.rs"]);
}

#[test]
fn test_size_limit_is_inclusive() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "at_limit", &"a".repeat(16));
    write_file(dir.path(), "over_limit", &"a".repeat(17));

    let config = WalkerConfig {
        max_file_size: 16,
        ..WalkerConfig::default()
    };
    let report = Scanner::new()
        .with_walker_config(config)
        .scan(dir.path(), &NoopObserver)
        .unwrap();

    assert!(report.snapshot.get("at_limit").is_some());
    assert!(report.snapshot.get("over_limit").is_none());
    assert_eq!(report.skipped_oversize, 1);
    assert!(report.failures.is_empty());
}

#[test]
fn test_keys_are_relative_and_slash_separated() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a/b/c.txt", "deep");

    let report = Scanner::new().scan(dir.path(), &NoopObserver).unwrap();
    let digest = report.snapshot.get("a/b/c.txt").unwrap();
    assert_eq!(*digest, hasher::digest_bytes(b"deep"));
}

#[test]
fn test_scan_is_deterministic_across_worker_counts() {
    let dir = TempDir::new().unwrap();
    for i in 0..40 {
        write_file(dir.path(), &format!("d{}/f{}.txt", i % 4, i), &format!("content {}", i));
    }

    let sequential = Scanner::new().with_workers(1).scan(dir.path(), &NoopObserver).unwrap();
    let parallel = Scanner::new().with_workers(6).scan(dir.path(), &NoopObserver).unwrap();

    assert_eq!(sequential.snapshot.hashes, parallel.snapshot.hashes);
    assert_eq!(sequential.snapshot.len(), 40);
}

#[test]
fn test_observer_sees_every_file() {
    let dir = TempDir::new().unwrap();
    for i in 0..10 {
        write_file(dir.path(), &format!("f{}", i), "x");
    }

    let observer = CountingObserver::new();
    Scanner::new().with_workers(3).scan(dir.path(), &observer).unwrap();

    assert_eq!(observer.total(), 10);
    assert_eq!(observer.hashed(), 10);
    assert_eq!(observer.failed(), 0);
}

/// Reports every file under a directory named `locked` as unreadable
struct LockedDirHasher;

impl ContentHasher for LockedDirHasher {
    fn hash(&self, path: &Path) -> Result<FileDigest, ReadFailure> {
        if path.components().any(|c| c.as_os_str() == "locked") {
            return Err(ReadFailure::new(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        hasher::hash_file(path)
    }
}

#[test]
fn test_unreadable_files_are_isolated() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "ok.txt", "fine");
    write_file(dir.path(), "locked/secret.txt", "hidden");
    write_file(dir.path(), "locked/other.txt", "hidden");

    let report = Scanner::new()
        .with_hasher(Arc::new(LockedDirHasher))
        .scan(dir.path(), &NoopObserver)
        .unwrap();

    assert_eq!(report.snapshot.len(), 1);
    assert!(report.snapshot.get("ok.txt").is_some());
    assert_eq!(report.failures.len(), 2);
    assert!(report.failures[0].path.ends_with("locked/other.txt"));
    assert!(report.failures[1].path.ends_with("locked/secret.txt"));
}

#[cfg(unix)]
#[test]
fn test_permission_denied_file_is_omitted() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "ok.txt", "fine");
    write_file(dir.path(), "private.txt", "secret");
    let private = dir.path().join("private.txt");
    fs::set_permissions(&private, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read mode 000 files, so there is nothing to observe
    if fs::File::open(&private).is_ok() {
        fs::set_permissions(&private, fs::Permissions::from_mode(0o644)).unwrap();
        return;
    }

    let report = Scanner::new().scan(dir.path(), &NoopObserver).unwrap();
    fs::set_permissions(&private, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(report.snapshot.get("ok.txt").is_some());
    assert!(report.snapshot.get("private.txt").is_none());
    assert_eq!(report.failures.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_followed_by_default() {
    let dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    write_file(outside.path(), "target.txt", "outside");
    write_file(dir.path(), "real.txt", "inside");
    std::os::unix::fs::symlink(outside.path().join("target.txt"), dir.path().join("link.txt"))
        .unwrap();
    std::os::unix::fs::symlink(outside.path(), dir.path().join("linked_dir")).unwrap();

    let report = Scanner::new().scan(dir.path(), &NoopObserver).unwrap();
    let keys: Vec<&str> = report.snapshot.hashes.keys().map(String::as_str).collect();

    assert_eq!(keys, vec!["real.txt"]);
}
