//! Check workflow: scan, compare against the baseline, optionally update it.
//!
//! A run is either a bootstrap (no baseline yet: scan and save, no diff) or a
//! comparison (load, scan, diff, and save only when an update was requested).
//! The stored baseline is written at most once per run, and only after a
//! complete scan.

use crate::baseline::BaselineStore;
use crate::config::FixityConfig;
use crate::diff::{compare_snapshots, DiffResult};
use crate::error::FixityError;
use crate::progress::ScanObserver;
use crate::tree::path;
use crate::tree::scanner::{ScanReport, Scanner};
use std::path::Path;
use tracing::info;

/// Per-run options
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Replace the baseline with the current scan after comparing
    pub update: bool,
}

/// What a check run did
#[derive(Debug)]
pub enum CheckOutcome {
    /// No baseline existed; the current scan was saved as the first one
    Bootstrapped { report: ScanReport },
    /// The current scan was compared against the stored baseline
    Compared {
        baseline_timestamp: f64,
        report: ScanReport,
        diff: DiffResult,
        /// Whether the baseline was replaced with the current scan
        updated: bool,
    },
}

impl CheckOutcome {
    pub fn report(&self) -> &ScanReport {
        match self {
            CheckOutcome::Bootstrapped { report } | CheckOutcome::Compared { report, .. } => {
                report
            }
        }
    }

    pub fn diff(&self) -> Option<&DiffResult> {
        match self {
            CheckOutcome::Bootstrapped { .. } => None,
            CheckOutcome::Compared { diff, .. } => Some(diff),
        }
    }

    /// Whether this run wrote the baseline file
    pub fn baseline_written(&self) -> bool {
        match self {
            CheckOutcome::Bootstrapped { .. } => true,
            CheckOutcome::Compared { updated, .. } => *updated,
        }
    }
}

/// Runs scans against one baseline store
pub struct Checker {
    scanner: Scanner,
    store: BaselineStore,
}

impl Checker {
    pub fn new(scanner: Scanner, store: BaselineStore) -> Self {
        Self { scanner, store }
    }

    pub fn from_config(config: &FixityConfig) -> Self {
        Self::new(config.scanner(), config.baseline_store())
    }

    pub fn store(&self) -> &BaselineStore {
        &self.store
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Check `root` against the stored baseline
    ///
    /// The root is validated and the baseline loaded before any hashing, so an
    /// invalid root or corrupt baseline aborts the run without scanning.
    pub fn run(
        &self,
        root: &Path,
        options: CheckOptions,
        observer: &dyn ScanObserver,
    ) -> Result<CheckOutcome, FixityError> {
        path::canonical_root(root)?;
        let baseline = self.store.load()?;
        let scanner = self.scanner_for_run();

        let Some(baseline) = baseline else {
            info!(
                baseline = %self.store.path().display(),
                "No baseline found, saving first scan"
            );
            let report = scanner.scan(root, observer)?;
            self.store.save(&report.snapshot)?;
            return Ok(CheckOutcome::Bootstrapped { report });
        };

        let report = scanner.scan(root, observer)?;
        let diff = compare_snapshots(&baseline, &report.snapshot);
        info!(
            added = diff.added.len(),
            modified = diff.modified.len(),
            deleted = diff.deleted.len(),
            unchanged = diff.unchanged,
            "Compared against baseline"
        );

        if options.update {
            self.store.save(&report.snapshot)?;
        }

        Ok(CheckOutcome::Compared {
            baseline_timestamp: baseline.timestamp,
            report,
            diff,
            updated: options.update,
        })
    }

    /// Scan without reading or writing the baseline
    pub fn scan_only(
        &self,
        root: &Path,
        observer: &dyn ScanObserver,
    ) -> Result<ScanReport, FixityError> {
        Ok(self.scanner_for_run().scan(root, observer)?)
    }

    /// The configured scanner, also excluding the baseline file itself
    fn scanner_for_run(&self) -> Scanner {
        match self.store.absolute_path() {
            Some(baseline) => self.scanner.clone().excluding(baseline),
            None => self.scanner.clone(),
        }
    }
}
