//! Command implementations.

pub mod build;
pub mod check;
pub mod prerender;
pub mod sitemap;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use leaselens_core::Config;

/// Resolve the config path against the project root.
pub fn config_path(config: &Path, root: &Path) -> PathBuf {
    if config.is_absolute() {
        config.to_path_buf()
    } else {
        root.join(config)
    }
}

/// Load configuration with `LEASELENS__*` overrides.
///
/// A missing file leaves every setting at its default.
pub fn load_config(config: &Path, root: &Path) -> Result<Config> {
    let path = config_path(config, root);
    let config = Config::load_with_env(&path)
        .wrap_err_with(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}
