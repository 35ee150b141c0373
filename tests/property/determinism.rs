//! Property-based tests for determinism guarantees

use fixity::progress::NoopObserver;
use fixity::tree::hasher::{self, CHUNK_SIZE};
use fixity::Scanner;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Streaming in chunks gives the same digest as hashing the whole buffer
#[test]
fn test_streamed_digest_matches_whole_buffer() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(any::<u8>(), 0..(CHUNK_SIZE * 3)),
            |content| {
                let streamed = hasher::hash_reader(content.as_slice()).unwrap();
                prop_assert_eq!(streamed, hasher::digest_bytes(&content));
                Ok(())
            },
        )
        .unwrap();
}

/// Scanning the same tree twice, with any worker count, yields the same map
#[test]
fn test_scan_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::new(proptest::test_runner::Config {
        cases: 16,
        ..proptest::test_runner::Config::default()
    });

    runner
        .run(
            &(
                prop::collection::btree_map("[a-z]{1,8}", prop::collection::vec(any::<u8>(), 0..256), 0..12),
                1usize..6,
            ),
            |(files, workers)| {
                let dir = TempDir::new().unwrap();
                for (name, content) in &files {
                    fs::write(dir.path().join(name), content).unwrap();
                }

                let first = Scanner::new().with_workers(1).scan(dir.path(), &NoopObserver).unwrap();
                let second = Scanner::new()
                    .with_workers(workers)
                    .scan(dir.path(), &NoopObserver)
                    .unwrap();

                prop_assert_eq!(&first.snapshot.hashes, &second.snapshot.hashes);
                prop_assert_eq!(first.snapshot.len(), files.len());
                for (name, content) in &files {
                    prop_assert_eq!(first.snapshot.get(name), Some(&hasher::digest_bytes(content)));
                }
                Ok(())
            },
        )
        .unwrap();
}
