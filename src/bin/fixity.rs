//! Fixity CLI Binary
//!
//! Command-line interface for the fixity directory integrity checker.

use clap::Parser;
use fixity::cli::{map_error, Cli, RunContext};
use fixity::config::{ConfigLoader, FixityConfig};
use fixity::error::FixityError;
use fixity::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("fixity starting");

    let context = RunContext::new(config).quiet(cli.quiet);
    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Load configuration from `--config`, or from the global and working-directory
/// files, then apply `--baseline`.
fn load_config(cli: &Cli) -> Result<FixityConfig, FixityError> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => {
            let cwd = std::env::current_dir().map_err(|e| {
                FixityError::Config(format!("Cannot determine working directory: {}", e))
            })?;
            ConfigLoader::load(&cwd)?
        }
    };
    if let Some(ref baseline) = cli.baseline {
        config.baseline.path = baseline.clone();
    }
    Ok(config)
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &FixityConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if logging.output == "file" {
        logging.file = Some(fixity::logging::resolve_log_file_path(
            cli.log_file.clone(),
            logging.file.clone(),
        ));
    } else if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
