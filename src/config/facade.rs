//! Config loading facade: builds the layered source stack and deserializes it.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::FixityConfig;
use crate::error::FixityError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::Path;

/// Prefix for environment overrides, e.g. `FIXITY__SCAN__WORKERS=2`
const ENV_PREFIX: &str = "FIXITY";
const ENV_SEPARATOR: &str = "__";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a run from `working_dir`
    ///
    /// Precedence (highest last): defaults, global file, `fixity.toml` in
    /// `working_dir`, environment.
    pub fn load(working_dir: &Path) -> Result<FixityConfig, FixityError> {
        let builder = merge_policy::builder_with_defaults().map_err(config_error)?;
        let builder = global_file::add_to_builder(builder).map_err(config_error)?;
        let builder = workspace_file::add_to_builder(builder, working_dir).map_err(config_error)?;
        Self::finish(builder)
    }

    /// Load configuration from an explicit file, ignoring the global and
    /// working-directory files. Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<FixityConfig, FixityError> {
        if !path.is_file() {
            return Err(FixityError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()
            .map_err(config_error)?
            .add_source(File::from(path.to_path_buf()).required(true));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<FixityConfig, FixityError> {
        let config: FixityConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)?;

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
}

fn config_error(e: config::ConfigError) -> FixityError {
    FixityError::Config(e.to_string())
}
