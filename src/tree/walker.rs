//! Filesystem walker for collecting the files eligible for hashing

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Directory names pruned from every scan unless overridden by configuration
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", "node_modules", "__pycache__", "venv"];

/// Files larger than this are skipped (50 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// A regular file selected for hashing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Absolute path at traversal time
    pub path: PathBuf,
    pub size: u64,
}

/// Result of one traversal
#[derive(Debug, Clone, Default)]
pub struct Walk {
    /// Eligible files, sorted by path
    pub entries: Vec<WalkEntry>,
    /// Files above the size limit
    pub skipped_oversize: usize,
    /// Symlinks, special files and entries that could not be inspected
    pub skipped_other: usize,
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false). Followed links whose
    /// target resolves outside the root are never visited.
    pub follow_symlinks: bool,
    /// Directory names pruned at any depth (exact name match)
    pub ignored_dirs: Vec<String>,
    /// Size threshold in bytes; larger files are invisible to the scan
    pub max_file_size: u64,
    /// Absolute file paths never yielded (e.g. the baseline file itself)
    pub excluded_files: Vec<PathBuf>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|d| d.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            excluded_files: Vec::new(),
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given (canonical) root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect eligible files
    ///
    /// Entries that cannot be read are logged and skipped; they never abort
    /// the walk. Returned entries are sorted by path.
    pub fn walk(&self) -> Walk {
        let mut walk = Walk::default();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.should_prune(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping entry that could not be walked");
                    walk.skipped_other += 1;
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                // Unfollowed symlinks, sockets, FIFOs, devices
                debug!(path = %entry.path().display(), "Skipping non-regular file");
                walk.skipped_other += 1;
                continue;
            }

            let path = entry.path();
            if self.config.excluded_files.iter().any(|excluded| excluded == path) {
                debug!(path = %path.display(), "Skipping excluded file");
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to read metadata");
                    walk.skipped_other += 1;
                    continue;
                }
            };

            if size > self.config.max_file_size {
                debug!(
                    path = %path.display(),
                    size,
                    limit = self.config.max_file_size,
                    "Skipping file above size limit"
                );
                walk.skipped_oversize += 1;
                continue;
            }

            walk.entries.push(WalkEntry {
                path: path.to_path_buf(),
                size,
            });
        }

        walk.entries.sort_by(|a, b| a.path.cmp(&b.path));
        walk
    }

    /// Prune ignored directories and, when following links, anything whose
    /// resolved location is outside the root
    fn should_prune(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy();
            if self.config.ignored_dirs.iter().any(|ignored| *ignored == name) {
                debug!(path = %entry.path().display(), "Pruning ignored directory");
                return true;
            }
        }

        if self.config.follow_symlinks && entry.path_is_symlink() {
            return !self.resolves_inside_root(entry.path());
        }

        false
    }

    fn resolves_inside_root(&self, path: &Path) -> bool {
        match dunce::canonicalize(path) {
            Ok(target) => {
                let inside = target.starts_with(&self.root);
                if !inside {
                    debug!(
                        path = %path.display(),
                        target = %target.display(),
                        "Not following symlink that leaves the root"
                    );
                }
                inside
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Dangling symlink");
                false
            }
        }
    }
}
