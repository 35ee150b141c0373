//! CLI command-name contract for logging.

use crate::cli::parse::{BaselineCommands, Commands};

/// Command name string for log records (e.g. "check", "baseline.show").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Check { .. } => "check".to_string(),
        Commands::Scan { .. } => "scan".to_string(),
        Commands::Baseline { command } => format!("baseline.{}", baseline_command_name(command)),
    }
}

pub fn baseline_command_name(command: &BaselineCommands) -> &'static str {
    match command {
        BaselineCommands::Show { .. } => "show",
    }
}
