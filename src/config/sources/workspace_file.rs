//! Working-directory config file source: ./fixity.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// File name looked up in the working directory
pub const WORKSPACE_CONFIG_FILE: &str = "fixity.toml";

/// Add the working-directory config file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    working_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = working_dir.join(WORKSPACE_CONFIG_FILE);
    if !path.is_file() {
        return Ok(builder);
    }
    debug!(config_path = %path.display(), "Using working-directory configuration");
    Ok(builder.add_source(File::from(path).required(false)))
}
