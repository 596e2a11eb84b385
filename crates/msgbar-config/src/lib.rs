//! MsgBar configuration system.
//!
//! Loads the plugin's untrusted configuration, validates every styling
//! value against a narrow safe subset of CSS, and exposes the trusted
//! theme store as an optional [`ThemeSource`] capability.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use msgbar_config::load_config;
//!
//! let site = load_config().expect("failed to load config");
//! let config = site.msgbar.validate().expect("invalid msgbar config");
//! println!("{}", config.message());
//! ```

pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod validation;

pub use schema::{MsgBarConfig, RawConfig, SiteConfig};
pub use theme::{load_theme_from_path, StaticTheme, ThemeDefaults, ThemeSource};
pub use toml_loader::{default_config_path, load_from_path};
pub use validation::{validate, validate_css_color, validate_css_font_family, validate_css_length};

use msgbar_common::ConfigError;

/// Convenience function to load the site config from the platform default path.
pub fn load_config() -> Result<SiteConfig, ConfigError> {
    let path = default_config_path()?;
    load_from_path(&path)
}
