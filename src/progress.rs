//! Progress observability for scans.
//!
//! Observers are advisory: no scan logic depends on them. They are called from
//! hashing workers, so implementations must be `Sync`.

use crate::error::ReadFailure;
use crate::tree::scanner::ScanReport;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Receives scan progress events
pub trait ScanObserver: Send + Sync {
    /// The walk finished and `total` files will be hashed
    fn on_walk_complete(&self, _total: usize) {}

    /// One file was hashed successfully
    fn on_file_hashed(&self, _relative_path: &str) {}

    /// One file could not be read and was left out
    fn on_failure(&self, _failure: &ReadFailure) {}

    fn on_scan_complete(&self, _report: &ScanReport) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Observer that counts events
#[derive(Debug, Default)]
pub struct CountingObserver {
    total: AtomicUsize,
    hashed: AtomicUsize,
    failed: AtomicUsize,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    pub fn hashed(&self) -> usize {
        self.hashed.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }
}

impl ScanObserver for CountingObserver {
    fn on_walk_complete(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
    }

    fn on_file_hashed(&self, _relative_path: &str) {
        self.hashed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_failure(&self, _failure: &ReadFailure) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }
}

/// Cooperative cancellation flag checked by the scanner between files
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
