//! Baseline store: the single persisted Snapshot
//!
//! The baseline is a human-readable JSON record. Saving writes a temporary
//! file beside the destination and renames it into place, so a reader sees
//! either the previous complete baseline or the new one.

use crate::error::StorageError;
use crate::snapshot::Snapshot;
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default baseline file name, resolved against the working directory
pub const DEFAULT_BASELINE_FILE: &str = "hashes.json";

/// File-backed baseline storage
#[derive(Debug, Clone)]
pub struct BaselineStore {
    path: PathBuf,
}

impl Default for BaselineStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASELINE_FILE)
    }
}

impl BaselineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Absolute location of the baseline file, whether or not it exists yet
    pub fn absolute_path(&self) -> Option<PathBuf> {
        if let Ok(path) = dunce::canonicalize(&self.path) {
            return Some(path);
        }
        let file_name = self.path.file_name()?;
        let parent = dunce::canonicalize(parent_dir(&self.path)).ok()?;
        Some(parent.join(file_name))
    }

    /// Load the stored baseline
    ///
    /// Returns `Ok(None)` when no baseline exists yet. A file that exists but
    /// does not parse is a `ParseFailure`, never treated as absent.
    pub fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No baseline found");
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::ReadFailure {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|e| StorageError::ParseFailure {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        debug!(
            path = %self.path.display(),
            files = snapshot.len(),
            "Loaded baseline"
        );
        Ok(Some(snapshot))
    }

    /// Replace the stored baseline with `snapshot`
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let content = to_pretty_json(snapshot)?;
        atomic_write(&self.path, &content)?;
        info!(
            path = %self.path.display(),
            files = snapshot.len(),
            "Baseline saved"
        );
        Ok(())
    }
}

/// Pretty JSON with four-space indentation
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, StorageError> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| StorageError::Serialize(e.to_string()))?;
    out.push(b'\n');
    Ok(out)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write to a sibling temp file, sync, then rename over `path`
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    let write_failure = |source: std::io::Error| StorageError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let parent = parent_dir(path);
    if !parent.exists() {
        fs::create_dir_all(parent).map_err(write_failure)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            write_failure(std::io::Error::new(
                ErrorKind::InvalidInput,
                "baseline path has no file name",
            ))
        })?;
    let temp_path = parent.join(format!(".{}.tmp-{}", file_name, std::process::id()));

    let result = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(write_failure(e));
    }
    Ok(())
}
