//! CSS font-family validation.

use regex::Regex;
use std::sync::LazyLock;

use super::helpers::{check_forbidden_chars, non_empty_trimmed};

/// Longest accepted font-family list, in characters.
pub const MAX_FONT_FAMILY_LEN: usize = 200;

/// CSS functions that can fetch resources or evaluate expressions.
static CSS_FUNCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:url|calc|var|attr|expression)\s*\(").unwrap());

/// Validate a CSS font-family list.
///
/// Quoting and ordering are left exactly as the caller wrote them; the
/// trimmed value is returned when it is short enough, free of structural
/// characters and free of function calls.
pub fn validate_css_font_family(value: &str) -> Result<&str, String> {
    let trimmed = non_empty_trimmed(value, "font-family")?;

    let len = trimmed.chars().count();
    if len > MAX_FONT_FAMILY_LEN {
        return Err(format!(
            "font-family too long: {len} characters (max {MAX_FONT_FAMILY_LEN})"
        ));
    }

    check_forbidden_chars(trimmed)?;

    // An open comment would swallow every rule after the declaration.
    if trimmed.contains("/*") || trimmed.contains("*/") {
        return Err("CSS injection blocked: comment marker in font-family".into());
    }

    if let Some(m) = CSS_FUNCTION_RE.find(trimmed) {
        return Err(format!(
            "CSS injection blocked: function call '{}' in font-family",
            m.as_str()
        ));
    }

    Ok(trimmed)
}
