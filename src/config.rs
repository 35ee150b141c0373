//! Configuration System
//!
//! Layered configuration for scans, baseline storage and logging. Sources are
//! merged by the `config` crate: built-in defaults, the global config file,
//! the working-directory `fixity.toml`, then `FIXITY__*` environment
//! variables. CLI flags are applied on top by the binary.

use crate::baseline::{BaselineStore, DEFAULT_BASELINE_FILE};
use crate::logging::LoggingConfig;
use crate::tree::scanner::{default_workers, Scanner};
use crate::tree::walker::{WalkerConfig, DEFAULT_IGNORED_DIRS, DEFAULT_MAX_FILE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod global_file;
    pub mod workspace_file;
}

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixityConfig {
    /// Traversal and hashing settings
    #[serde(default)]
    pub scan: ScanSettings,

    /// Baseline storage settings
    #[serde(default)]
    pub baseline: BaselineSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Traversal and hashing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Files larger than this many bytes are skipped and never reported.
    /// Anything above the limit is a blind spot for tamper detection.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Directory names pruned at any depth (replaces the built-in set)
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,

    /// Directory names pruned in addition to `ignored_dirs`
    #[serde(default)]
    pub extra_ignored_dirs: Vec<String>,

    /// Follow symbolic links that resolve inside the root
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Number of hashing workers
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

fn default_ignored_dirs() -> Vec<String> {
    DEFAULT_IGNORED_DIRS.iter().map(|d| d.to_string()).collect()
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            ignored_dirs: default_ignored_dirs(),
            extra_ignored_dirs: Vec::new(),
            follow_symlinks: false,
            workers: default_workers(),
        }
    }
}

impl ScanSettings {
    /// All pruned directory names, `ignored_dirs` first, without duplicates
    pub fn effective_ignored_dirs(&self) -> Vec<String> {
        let mut dirs: Vec<String> = Vec::new();
        for name in self.ignored_dirs.iter().chain(&self.extra_ignored_dirs) {
            if !dirs.contains(name) {
                dirs.push(name.clone());
            }
        }
        dirs
    }

    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignored_dirs: self.effective_ignored_dirs(),
            max_file_size: self.max_file_size,
            excluded_files: Vec::new(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.max_file_size == 0 {
            return Err("max_file_size must be greater than zero".to_string());
        }
        if self.workers == 0 {
            return Err("workers must be at least 1".to_string());
        }
        if self.effective_ignored_dirs().iter().any(|d| d.trim().is_empty()) {
            return Err("ignored directory names cannot be empty".to_string());
        }
        if self
            .effective_ignored_dirs()
            .iter()
            .any(|d| d.contains('/') || d.contains('\\'))
        {
            return Err("ignored directory entries must be names, not paths".to_string());
        }
        Ok(())
    }
}

/// Baseline storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineSettings {
    /// Baseline file; relative paths resolve against the working directory
    #[serde(default = "default_baseline_path")]
    pub path: PathBuf,
}

fn default_baseline_path() -> PathBuf {
    PathBuf::from(DEFAULT_BASELINE_FILE)
}

impl Default for BaselineSettings {
    fn default() -> Self {
        Self {
            path: default_baseline_path(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Scan(String),
    Baseline(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Scan(msg) => write!(f, "scan: {}", msg),
            ValidationError::Baseline(msg) => write!(f, "baseline: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl FixityConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.scan.validate() {
            errors.push(ValidationError::Scan(e));
        }

        if self.baseline.path.as_os_str().is_empty() {
            errors.push(ValidationError::Baseline(
                "baseline path cannot be empty".to_string(),
            ));
        } else if self.baseline.path.file_name().is_none() {
            errors.push(ValidationError::Baseline(format!(
                "baseline path {} does not name a file",
                self.baseline.path.display()
            )));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Scanner configured from the scan settings
    pub fn scanner(&self) -> Scanner {
        Scanner::new()
            .with_walker_config(self.scan.walker_config())
            .with_workers(self.scan.workers)
    }

    pub fn baseline_store(&self) -> BaselineStore {
        BaselineStore::new(self.baseline.path.clone())
    }
}
