//! Error types for the fixity integrity checker.

use std::path::PathBuf;
use thiserror::Error;

/// A single file could not be opened or read while hashing.
///
/// Recovered locally by the scanner: the path is left out of the snapshot and
/// the failure is surfaced as a warning.
#[derive(Debug, Error)]
#[error("Could not read {}: {source}", .path.display())]
pub struct ReadFailure {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl ReadFailure {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Scan-level errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid directory {}: {reason}", .path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    #[error("Path {} is not inside scan root {}", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("File name of {} is not valid UTF-8", .path.display())]
    NonUtf8Name { path: PathBuf },

    #[error("Scan cancelled before completion")]
    Cancelled,

    #[error("Failed to start hashing workers: {0}")]
    WorkerPool(String),
}

/// Baseline storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write baseline {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Baseline {} is corrupt: {message}", .path.display())]
    ParseFailure { path: PathBuf, message: String },

    #[error("Failed to read baseline {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize baseline: {0}")]
    Serialize(String),
}

/// A digest string that is not 64 hex characters
#[derive(Debug, Error)]
#[error("Invalid digest {value:?}: {reason}")]
pub struct DigestParseError {
    pub value: String,
    pub reason: String,
}

/// Top-level error for a fixity run
#[derive(Debug, Error)]
pub enum FixityError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}
