//! Terminal progress for scans, written to stderr.

use crate::progress::ScanObserver;
use crate::tree::scanner::ScanReport;
use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Redraw the live counter every this many files
const REDRAW_EVERY: usize = 64;

pub struct TerminalProgress {
    enabled: bool,
    live: bool,
    total: AtomicUsize,
    done: AtomicUsize,
}

impl TerminalProgress {
    /// Progress that prints a file count, plus a live counter on a terminal
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            live: enabled && std::io::stderr().is_terminal(),
            total: AtomicUsize::new(0),
            done: AtomicUsize::new(0),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    fn tick(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if !self.live {
            return;
        }
        let total = self.total.load(Ordering::Relaxed);
        if done % REDRAW_EVERY == 0 || done == total {
            let mut stderr = std::io::stderr().lock();
            let _ = write!(stderr, "\rHashing {}/{}", done, total);
            let _ = stderr.flush();
        }
    }
}

impl ScanObserver for TerminalProgress {
    fn on_walk_complete(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
        if self.enabled {
            eprintln!("Scanning {} file(s)...", total);
        }
    }

    fn on_file_hashed(&self, _relative_path: &str) {
        self.tick();
    }

    fn on_failure(&self, _failure: &crate::error::ReadFailure) {
        self.tick();
    }

    fn on_scan_complete(&self, _report: &ScanReport) {
        if self.live && self.total.load(Ordering::Relaxed) > 0 {
            eprintln!();
        }
    }
}
