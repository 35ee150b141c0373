//! Path canonicalization and snapshot keys
//!
//! Snapshot keys are root-relative and `/`-separated, so a baseline stays
//! valid when the root directory is renamed or moved. Names are kept exactly
//! as stored on disk: two distinct files never share a key.

use crate::error::ScanError;
use std::path::{Component, Path, PathBuf};

/// Validate a scan root and return its canonical absolute form
///
/// Fails with `InvalidRoot` when the path does not exist or is not a directory.
pub fn canonical_root(root: &Path) -> Result<PathBuf, ScanError> {
    let metadata = std::fs::metadata(root).map_err(|e| ScanError::InvalidRoot {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::InvalidRoot {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    dunce::canonicalize(root).map_err(|e| ScanError::InvalidRoot {
        path: root.to_path_buf(),
        reason: format!("failed to canonicalize: {}", e),
    })
}

/// Convert an absolute path under `root` into its snapshot key
///
/// Fails with `NonUtf8Name` when a component cannot be represented as UTF-8
/// without loss.
pub fn relative_key(root: &Path, path: &Path) -> Result<String, ScanError> {
    let outside = || ScanError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };
    let relative = path.strip_prefix(root).map_err(|_| outside())?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => match name.to_str() {
                Some(name) => segments.push(name),
                None => {
                    return Err(ScanError::NonUtf8Name {
                        path: path.to_path_buf(),
                    })
                }
            },
            Component::CurDir => {}
            _ => return Err(outside()),
        }
    }

    if segments.is_empty() {
        return Err(outside());
    }
    Ok(segments.join("/"))
}
