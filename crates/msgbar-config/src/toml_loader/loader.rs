//! Core TOML config loading.

use crate::schema::SiteConfig;
use msgbar_common::ConfigError;
use std::path::Path;
use tracing::info;

/// Parse a site config from TOML text.
///
/// Missing sections fall back to serde defaults; the msgbar table is not
/// validated here.
pub fn parse_site_config(content: &str) -> Result<SiteConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load a site config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = parse_site_config(&content)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}
