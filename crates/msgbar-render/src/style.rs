//! Style resolution: explicit config, then theme default, then built-in.

use msgbar_config::{MsgBarConfig, ThemeDefaults};
use serde::Serialize;

use crate::markdown::render_message;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#245466";
pub const DEFAULT_TEXT_COLOR: &str = "white";
pub const DEFAULT_FONT_FAMILY: &str = "'Arial', sans-serif";
pub const DEFAULT_FONT_SIZE: &str = "14px";
pub const DEFAULT_BAR_HEIGHT: &str = "30px";

/// Final values interpolated into the bar fragment.
///
/// Every field is already safe to emit unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    pub font_size: String,
    pub bar_height: String,
    /// Sanitized inline HTML rendered from the Markdown message.
    pub message_html: String,
}

impl ResolvedStyle {
    /// Merge a validated config with theme defaults.
    ///
    /// Background takes the theme's primary color, text the secondary
    /// color and the font family is built from the theme font name.
    /// Font size and bar height have no theme slot.
    pub fn resolve(config: &MsgBarConfig, theme: &ThemeDefaults) -> Self {
        Self {
            background_color: pick(
                config.background_color(),
                theme.primary_color.clone(),
                DEFAULT_BACKGROUND_COLOR,
            ),
            text_color: pick(
                config.text_color(),
                theme.secondary_color.clone(),
                DEFAULT_TEXT_COLOR,
            ),
            font_family: pick(
                config.font_family(),
                theme.font.as_deref().map(theme_font_family),
                DEFAULT_FONT_FAMILY,
            ),
            font_size: pick(config.font_size(), None, DEFAULT_FONT_SIZE),
            bar_height: pick(config.bar_height(), None, DEFAULT_BAR_HEIGHT),
            message_html: render_message(config.message()),
        }
    }
}

/// Turn a theme font name into a font-family list with a generic fallback.
pub fn theme_font_family(name: &str) -> String {
    format!("'{}', sans-serif", name.trim())
}

fn pick(explicit: Option<&str>, themed: Option<String>, fallback: &str) -> String {
    explicit
        .map(str::to_string)
        .or(themed)
        .unwrap_or_else(|| fallback.to_string())
}
