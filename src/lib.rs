//! Fixity: Directory Integrity Checking
//!
//! Recursively hashes every file under a root, persists the fingerprint set as
//! a baseline, and on later runs reports which files were added, modified, or
//! deleted relative to it.

pub mod baseline;
pub mod check;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod progress;
pub mod snapshot;
pub mod tree;
pub mod types;

pub use baseline::BaselineStore;
pub use check::{CheckOptions, CheckOutcome, Checker};
pub use diff::{compare, DiffResult};
pub use error::{FixityError, ReadFailure, ScanError, StorageError};
pub use snapshot::Snapshot;
pub use tree::scanner::{ScanReport, Scanner};
pub use types::{FileDigest, FileFingerprint};
