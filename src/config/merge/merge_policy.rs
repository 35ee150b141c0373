//! Merge rules: defaults, override order, conflict handling.

use crate::baseline::DEFAULT_BASELINE_FILE;
use crate::tree::scanner::default_workers;
use crate::tree::walker::DEFAULT_MAX_FILE_SIZE;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// List-valued defaults (`scan.ignored_dirs`) come from serde defaults so a
/// file that sets the list replaces it rather than merging element-wise.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("scan.max_file_size", DEFAULT_MAX_FILE_SIZE as i64)?
        .set_default("scan.follow_symlinks", false)?
        .set_default("scan.workers", default_workers() as i64)?
        .set_default("baseline.path", DEFAULT_BASELINE_FILE)
}
