//! MsgBar rendering: style resolution, message sanitization and response
//! injection.
//!
//! A [`MsgBar`] is built once at activation from the untrusted plugin
//! config and an optional theme source. It is immutable afterwards and can
//! rewrite any number of responses concurrently.

pub mod fragment;
pub mod inject;
pub mod markdown;
pub mod sanitize;
pub mod style;


pub use fragment::{render_fragment, BAR_ID, STYLE_ID};
pub use inject::{inject_fragment, is_html_content_type};
pub use markdown::render_message;
pub use sanitize::sanitize_html;
pub use style::ResolvedStyle;

use std::borrow::Cow;

use msgbar_common::ConfigError;
use msgbar_config::{MsgBarConfig, RawConfig, ThemeDefaults, ThemeSource};
use tracing::info;

/// An activated message bar: resolved style plus the pre-rendered fragment.
#[derive(Debug, Clone)]
pub struct MsgBar {
    style: ResolvedStyle,
    fragment: String,
}

impl MsgBar {
    /// Validate the plugin config, query the theme once and render the bar.
    ///
    /// Fails only when the config has no usable `message`.
    pub fn activate(raw: &RawConfig, theme: Option<&dyn ThemeSource>) -> Result<Self, ConfigError> {
        let config = raw.validate()?;
        let defaults = ThemeDefaults::fetch(theme);
        Ok(Self::new(&config, &defaults))
    }

    /// Build from an already validated config and fetched theme defaults.
    pub fn new(config: &MsgBarConfig, theme: &ThemeDefaults) -> Self {
        let style = ResolvedStyle::resolve(config, theme);
        let fragment = render_fragment(&style);
        info!(
            background = %style.background_color,
            text = %style.text_color,
            font_size = %style.font_size,
            bar_height = %style.bar_height,
            "MsgBar activated"
        );
        Self { style, fragment }
    }

    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    /// The `<style>` + bar markup injected into HTML responses.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Rewrite a response body, injecting the bar when it is HTML.
    pub fn process_response<'a>(&self, content_type: &str, body: &'a str) -> Cow<'a, str> {
        inject_fragment(content_type, body, &self.fragment)
    }
}
