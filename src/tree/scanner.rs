//! Scanner: walks a root and hashes every eligible file into a Snapshot

use crate::error::{ReadFailure, ScanError};
use crate::progress::{CancellationToken, ScanObserver};
use crate::snapshot::Snapshot;
use crate::tree::hasher::{ContentHasher, Sha256Hasher};
use crate::tree::path;
use crate::tree::walker::{WalkEntry, Walker, WalkerConfig};
use crate::types::FileDigest;
use parking_lot::Mutex;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Upper bound on the default number of hashing workers
const MAX_DEFAULT_WORKERS: usize = 8;

/// Default worker count: available parallelism, capped
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(MAX_DEFAULT_WORKERS)
}

/// Outcome of one scan
#[derive(Debug)]
pub struct ScanReport {
    /// Canonical root that was scanned
    pub root: PathBuf,
    pub snapshot: Snapshot,
    /// Files that could not be read, sorted by path. Not part of the snapshot.
    pub failures: Vec<ReadFailure>,
    pub skipped_oversize: usize,
    pub skipped_other: usize,
}

/// Scanner over one root directory at a time
#[derive(Clone)]
pub struct Scanner {
    walker_config: WalkerConfig,
    workers: usize,
    hasher: Arc<dyn ContentHasher>,
    cancel: CancellationToken,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            walker_config: WalkerConfig::default(),
            workers: default_workers(),
            hasher: Arc::new(Sha256Hasher),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Bound the hashing pool; `1` hashes sequentially
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_hasher(mut self, hasher: Arc<dyn ContentHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Exclude one more absolute file path from the walk
    pub fn excluding(mut self, file: PathBuf) -> Self {
        self.walker_config.excluded_files.push(file);
        self
    }

    pub fn walker_config(&self) -> &WalkerConfig {
        &self.walker_config
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Scan `root` and build a fresh Snapshot
    ///
    /// Per-file read failures are collected in the report and never abort
    /// the scan. Cancellation returns `ScanError::Cancelled` and discards all
    /// partial results.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn scan(&self, root: &Path, observer: &dyn ScanObserver) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let root = path::canonical_root(root)?;

        let walk = Walker::with_config(root.clone(), self.walker_config.clone()).walk();
        debug!(
            files = walk.entries.len(),
            oversize = walk.skipped_oversize,
            other = walk.skipped_other,
            "Walked filesystem"
        );
        observer.on_walk_complete(walk.entries.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("fixity-hash-{}", i))
            .build()
            .map_err(|e| ScanError::WorkerPool(e.to_string()))?;

        let failures = Mutex::new(Vec::new());
        let hashed: Vec<Option<(String, FileDigest)>> = pool.install(|| {
            walk.entries
                .par_iter()
                .map(|entry| self.hash_entry(&root, entry, observer, &failures))
                .collect::<Result<Vec<_>, ScanError>>()
        })?;

        let hashes: BTreeMap<String, FileDigest> = hashed.into_iter().flatten().collect();
        let mut failures = failures.into_inner();
        failures.sort_by(|a, b| a.path.cmp(&b.path));

        let report = ScanReport {
            root,
            snapshot: Snapshot::new(hashes),
            failures,
            skipped_oversize: walk.skipped_oversize,
            skipped_other: walk.skipped_other,
        };

        info!(
            hashed = report.snapshot.len(),
            failed = report.failures.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Scan complete"
        );
        observer.on_scan_complete(&report);
        Ok(report)
    }

    fn hash_entry(
        &self,
        root: &Path,
        entry: &WalkEntry,
        observer: &dyn ScanObserver,
        failures: &Mutex<Vec<ReadFailure>>,
    ) -> Result<Option<(String, FileDigest)>, ScanError> {
        if self.cancel.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        let key = match path::relative_key(root, &entry.path) {
            Ok(key) => key,
            Err(ScanError::NonUtf8Name { path }) => {
                let failure = ReadFailure::new(
                    path,
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "file name is not valid UTF-8",
                    ),
                );
                warn!("{}", failure);
                observer.on_failure(&failure);
                failures.lock().push(failure);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        match self.hasher.hash(&entry.path) {
            Ok(digest) => {
                observer.on_file_hashed(&key);
                Ok(Some((key, digest)))
            }
            Err(failure) => {
                warn!("{}", failure);
                observer.on_failure(&failure);
                failures.lock().push(failure);
                Ok(None)
            }
        }
    }
}
