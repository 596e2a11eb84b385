//! Theme defaults: the trusted middle tier of the style fallback chain.
//!
//! The site's theme store is modelled as a [`ThemeSource`] capability that
//! callers pass as `Option<&dyn ThemeSource>`. Values from a theme are
//! trusted and never go through the CSS validators.

use msgbar_common::ThemeError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Read access to the site's theme store.
///
/// Each accessor may report that the slot is unset (`Ok(None)`) or that the
/// store itself could not be queried (`Err`).
pub trait ThemeSource {
    fn primary_color(&self) -> Result<Option<String>, ThemeError>;
    fn secondary_color(&self) -> Result<Option<String>, ThemeError>;
    /// Font name (e.g. `Roboto`), not a full font-family list.
    fn font(&self) -> Result<Option<String>, ThemeError>;
}

/// Snapshot of the theme slots the message bar uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeDefaults {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font: Option<String>,
}

impl ThemeDefaults {
    /// Query a theme source once.
    ///
    /// A missing source or any failing accessor yields empty defaults; the
    /// failure is logged and never propagated. Blank values count as unset.
    pub fn fetch(source: Option<&dyn ThemeSource>) -> Self {
        let Some(source) = source else {
            return Self::default();
        };

        match Self::try_fetch(source) {
            Ok(defaults) => defaults,
            Err(e) => {
                warn!(error = %e, "Theme lookup failed, using built-in defaults");
                Self::default()
            }
        }
    }

    fn try_fetch(source: &dyn ThemeSource) -> Result<Self, ThemeError> {
        Ok(Self {
            primary_color: non_blank(source.primary_color()?),
            secondary_color: non_blank(source.secondary_color()?),
            font: non_blank(source.font()?),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Theme values held in memory, e.g. from the site config's `[theme]`
/// table or a theme YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticTheme {
    pub name: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font: Option<String>,
}

impl ThemeSource for StaticTheme {
    fn primary_color(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.primary_color.clone())
    }

    fn secondary_color(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.secondary_color.clone())
    }

    fn font(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.font.clone())
    }
}

/// Load a theme from a YAML file.
pub fn load_theme_from_path(path: &Path) -> Result<StaticTheme, ThemeError> {
    if !path.exists() {
        return Err(ThemeError::Load(format!(
            "theme file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ThemeError::Load(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let theme: StaticTheme = serde_yaml::from_str(&content).map_err(|e| {
        ThemeError::Load(format!("failed to parse theme YAML {}: {e}", path.display()))
    })?;

    info!("loaded theme from {}", path.display());
    Ok(theme)
}
