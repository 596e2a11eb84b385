//! Configuration sanitization.
//!
//! Turns an untrusted [`RawConfig`] into a [`MsgBarConfig`]. The message
//! is the only field whose absence is fatal; every styling value either
//! passes its validator or degrades silently to `None`, leaving the
//! fallback choice to the style resolver.

mod color;
mod font;
mod helpers;
mod length;


pub use color::validate_css_color;
pub use font::validate_css_font_family;
pub use length::validate_css_length;

use msgbar_common::ConfigError;
use tracing::warn;

use crate::schema::{MsgBarConfig, RawConfig};

type Validator = for<'a> fn(&'a str) -> Result<&'a str, String>;

/// Validate a raw config, failing only when `message` is missing or blank.
pub fn validate(raw: &RawConfig) -> Result<MsgBarConfig, ConfigError> {
    // A blank message counts as missing.
    let message = match raw.message.as_deref() {
        Some(m) if !m.trim().is_empty() => m.to_string(),
        _ => return Err(ConfigError::MissingField("message")),
    };

    Ok(MsgBarConfig {
        message,
        background_color: sanitize_field(
            "background_color",
            raw.background_color.as_deref(),
            validate_css_color,
        ),
        text_color: sanitize_field("text_color", raw.text_color.as_deref(), validate_css_color),
        font_family: sanitize_field(
            "font_family",
            raw.font_family.as_deref(),
            validate_css_font_family,
        ),
        font_size: sanitize_field("font_size", raw.font_size.as_deref(), validate_css_length),
        bar_height: sanitize_field("bar_height", raw.bar_height.as_deref(), validate_css_length),
    })
}

/// Run one optional field through its validator. Rejections are logged
/// and collapse to `None`, same as an omitted field.
fn sanitize_field(name: &str, value: Option<&str>, validator: Validator) -> Option<String> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }

    match validator(value) {
        Ok(accepted) => Some(accepted.to_string()),
        Err(reason) => {
            warn!(
                field = name,
                value = ?value,
                reason = %reason,
                "Config value rejected by sanitizer, falling back"
            );
            None
        }
    }
}
