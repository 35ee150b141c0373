//! CLI route: single route table and run context. Dispatches to the check
//! workflow and presentation.

use crate::check::{CheckOptions, Checker};
use crate::cli::parse::{BaselineCommands, Commands, ScanArgs};
use crate::cli::presentation::{
    format_baseline_show_json, format_baseline_show_text, format_check_outcome_json,
    format_check_outcome_text, format_scan_report_json, format_scan_report_text, Palette,
};
use crate::cli::progress::TerminalProgress;
use crate::cli::command_name;
use crate::config::FixityConfig;
use crate::error::FixityError;
use std::io::IsTerminal;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: the merged configuration plus
/// presentation switches.
pub struct RunContext {
    config: FixityConfig,
    show_progress: bool,
    color: bool,
}

impl RunContext {
    /// Create a run context from fully merged configuration.
    pub fn new(config: FixityConfig) -> Self {
        Self {
            config,
            show_progress: true,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Suppress progress output on stderr.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.show_progress = !quiet;
        self
    }

    pub fn config(&self) -> &FixityConfig {
        &self.config
    }

    /// Execute one command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, FixityError> {
        let start = Instant::now();
        let name = command_name(command);
        info!(command = %name, "Executing command");

        let output = match command {
            Commands::Check {
                path,
                update,
                scan,
                format,
            } => {
                let config = self.config_with(scan)?;
                let checker = Checker::from_config(&config);
                let progress = self.progress_for(format);
                let outcome = checker.run(path, CheckOptions { update: *update }, &progress)?;
                if format == "json" {
                    format_check_outcome_json(&outcome, checker.store().path())
                } else {
                    format_check_outcome_text(&outcome, checker.store().path(), &self.palette())
                }
            }
            Commands::Scan { path, scan, format } => {
                let config = self.config_with(scan)?;
                let checker = Checker::from_config(&config);
                let progress = self.progress_for(format);
                let report = checker.scan_only(path, &progress)?;
                if format == "json" {
                    format_scan_report_json(&report)
                } else {
                    format_scan_report_text(&report, &self.palette())
                }
            }
            Commands::Baseline { command } => self.handle_baseline_command(command)?,
        };

        debug!(
            command = %name,
            duration_ms = start.elapsed().as_millis() as u64,
            "Command finished"
        );
        Ok(output)
    }

    fn handle_baseline_command(&self, command: &BaselineCommands) -> Result<String, FixityError> {
        match command {
            BaselineCommands::Show { files, format } => {
                let store = self.config.baseline_store();
                let snapshot = store.load()?;
                Ok(if format == "json" {
                    format_baseline_show_json(store.path(), snapshot.as_ref(), *files)
                } else {
                    format_baseline_show_text(store.path(), snapshot.as_ref(), *files)
                })
            }
        }
    }

    /// Configuration with per-invocation scan overrides applied and validated.
    fn config_with(&self, args: &ScanArgs) -> Result<FixityConfig, FixityError> {
        let mut config = self.config.clone();
        if let Some(max_file_size) = args.max_file_size {
            config.scan.max_file_size = max_file_size;
        }
        if let Some(workers) = args.workers {
            config.scan.workers = workers;
        }
        if args.follow_symlinks {
            config.scan.follow_symlinks = true;
        }
        config.scan.extra_ignored_dirs.extend(args.ignore.iter().cloned());

        config.validate().map_err(|errors| {
            FixityError::Config(
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;
        Ok(config)
    }

    fn progress_for(&self, format: &str) -> TerminalProgress {
        if self.show_progress && format != "json" {
            TerminalProgress::new(true)
        } else {
            TerminalProgress::disabled()
        }
    }

    fn palette(&self) -> Palette {
        Palette::new(self.color)
    }
}
