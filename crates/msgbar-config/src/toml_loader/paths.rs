//! Platform config path resolution.

use msgbar_common::ConfigError;
use std::path::PathBuf;

/// Get the platform-specific config file path.
///
/// On macOS: `~/Library/Application Support/msgbar/config.toml`
/// On Linux: `~/.config/msgbar/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError("could not determine platform config directory".into())
    })?;
    Ok(config_dir.join("msgbar").join("config.toml"))
}
