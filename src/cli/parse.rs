//! CLI parse: clap types for fixity. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fixity CLI - directory integrity checker
#[derive(Parser)]
#[command(name = "fixity")]
#[command(version)]
#[command(about = "Hash a directory tree, keep a baseline, and report added, modified and deleted files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides global and ./fixity.toml loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Baseline file (default: hashes.json in the working directory)
    #[arg(long, global = true)]
    pub baseline: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging and progress output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory and compare it with the saved baseline
    ///
    /// The first run saves a baseline and reports nothing. Later runs report
    /// changes and leave the baseline untouched unless --update is given.
    Check {
        /// Directory to check
        path: PathBuf,

        /// Replace the baseline with this scan after reporting
        #[arg(long)]
        update: bool,

        #[command(flatten)]
        scan: ScanArgs,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Scan a directory and print its fingerprints without touching the baseline
    Scan {
        /// Directory to scan
        path: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Inspect the saved baseline
    Baseline {
        #[command(subcommand)]
        command: BaselineCommands,
    },
}

#[derive(Subcommand)]
pub enum BaselineCommands {
    /// Show when the baseline was taken and what it contains
    Show {
        /// List every fingerprint, not just the summary
        #[arg(long)]
        files: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

/// Scan settings that override configuration for one invocation
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Skip files larger than this many bytes. Skipped files are invisible to
    /// the check, so changes to them are never reported.
    #[arg(long)]
    pub max_file_size: Option<u64>,

    /// Number of hashing workers
    #[arg(long)]
    pub workers: Option<usize>,

    /// Follow symbolic links that stay inside the scanned directory
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "ignore", value_name = "DIR_NAME")]
    pub ignore: Vec<String>,
}
