//! Raw and validated MsgBar configuration types.

use std::collections::HashMap;

use msgbar_common::ConfigError;
use serde::Deserialize;

use crate::theme::StaticTheme;
use crate::validation;

/// Untrusted plugin configuration, exactly as supplied.
///
/// Every field is optional at this stage; `message` is enforced by
/// [`RawConfig::validate`]. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub message: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub bar_height: Option<String>,
}

impl RawConfig {
    /// Build a raw config from an untyped key/value mapping.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let get = |key: &str| map.get(key).cloned();
        Self {
            message: get("message"),
            background_color: get("background_color"),
            text_color: get("text_color"),
            font_family: get("font_family"),
            font_size: get("font_size"),
            bar_height: get("bar_height"),
        }
    }

    /// Shorthand for a config carrying only a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Run the sanitization pipeline over this config.
    pub fn validate(&self) -> Result<MsgBarConfig, ConfigError> {
        validation::validate(self)
    }
}

/// Sanitized plugin configuration.
///
/// Every present styling value has passed its validator. Omitted and
/// rejected values are both `None`. Only [`validation::validate`] can
/// build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgBarConfig {
    pub(crate) message: String,
    pub(crate) background_color: Option<String>,
    pub(crate) text_color: Option<String>,
    pub(crate) font_family: Option<String>,
    pub(crate) font_size: Option<String>,
    pub(crate) bar_height: Option<String>,
}

impl MsgBarConfig {
    /// Markdown source of the bar message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    pub fn text_color(&self) -> Option<&str> {
        self.text_color.as_deref()
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_size(&self) -> Option<&str> {
        self.font_size.as_deref()
    }

    pub fn bar_height(&self) -> Option<&str> {
        self.bar_height.as_deref()
    }
}

/// Site configuration file layout.
///
/// ```toml
/// [theme]
/// primary_color = "#112233"
/// font = "Roboto"
///
/// [msgbar]
/// message = "Scheduled maintenance on **Friday**"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Trusted theme defaults for the site, if configured.
    pub theme: Option<StaticTheme>,
    /// Untrusted plugin configuration.
    pub msgbar: RawConfig,
}
