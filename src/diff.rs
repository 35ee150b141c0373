//! Differ: set comparison of a baseline mapping against a current mapping

use crate::snapshot::Snapshot;
use crate::types::FileDigest;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Classification of every path in baseline ∪ current
///
/// The three sets are pairwise disjoint. Paths in both mappings with equal
/// digests are unchanged and only counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub added: BTreeSet<String>,
    pub modified: BTreeSet<String>,
    pub deleted: BTreeSet<String>,
    pub unchanged: usize,
}

impl DiffResult {
    /// True when nothing was added, modified or deleted
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }
}

/// Compare two path → digest mappings
pub fn compare(
    baseline: &BTreeMap<String, FileDigest>,
    current: &BTreeMap<String, FileDigest>,
) -> DiffResult {
    let mut result = DiffResult::default();

    for (path, old_digest) in baseline {
        match current.get(path) {
            None => {
                result.deleted.insert(path.clone());
            }
            Some(new_digest) if new_digest != old_digest => {
                result.modified.insert(path.clone());
            }
            Some(_) => result.unchanged += 1,
        }
    }

    for path in current.keys() {
        if !baseline.contains_key(path) {
            result.added.insert(path.clone());
        }
    }

    result
}

pub fn compare_snapshots(baseline: &Snapshot, current: &Snapshot) -> DiffResult {
    compare(&baseline.hashes, &current.hashes)
}
