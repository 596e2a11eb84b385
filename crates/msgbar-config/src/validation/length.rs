//! CSS length validation (`font_size`, `bar_height`).

use regex::Regex;
use std::sync::LazyLock;

use super::helpers::{check_forbidden_chars, non_empty_trimmed};

/// Non-negative decimal followed by one of the supported units.
static LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?(?:px|em|rem|%|vh|vw)$").unwrap());

/// Validate a CSS length such as `14px`, `1.5rem` or `100%`.
///
/// Returns the trimmed value. Internal whitespace, signs, missing units
/// and anything carrying a structural character are rejected.
pub fn validate_css_length(value: &str) -> Result<&str, String> {
    let trimmed = non_empty_trimmed(value, "CSS length")?;

    check_forbidden_chars(trimmed)?;

    if !LENGTH_RE.is_match(trimmed) {
        return Err(format!(
            "Invalid CSS length: expected number + px/em/rem/%/vh/vw, got '{trimmed}'"
        ));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_lengths() {
        assert_eq!(validate_css_length("14px"), Ok("14px"));
        assert_eq!(validate_css_length("2rem"), Ok("2rem"));
        assert_eq!(validate_css_length("1.5em"), Ok("1.5em"));
        assert_eq!(validate_css_length("100%"), Ok("100%"));
        assert_eq!(validate_css_length("10vh"), Ok("10vh"));
        assert_eq!(validate_css_length("50vw"), Ok("50vw"));
        assert_eq!(validate_css_length("0px"), Ok("0px"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(validate_css_length("  30px \n"), Ok("30px"));
    }

    #[test]
    fn rejects_missing_unit() {
        assert!(validate_css_length("14").is_err());
        assert!(validate_css_length("1.6").is_err());
    }

    #[test]
    fn rejects_unknown_or_uppercase_units() {
        assert!(validate_css_length("14pt").is_err());
        assert!(validate_css_length("14PX").is_err());
        assert!(validate_css_length("2ch").is_err());
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(validate_css_length("-4px").is_err());
        assert!(validate_css_length(".5em").is_err());
        assert!(validate_css_length("1.px").is_err());
        assert!(validate_css_length("1.2.3px").is_err());
        assert!(validate_css_length("14 px").is_err());
        assert!(validate_css_length("px").is_err());
    }

    #[test]
    fn rejects_declaration_breakout() {
        assert!(validate_css_length("14px; color: red;").is_err());
        assert!(validate_css_length("14px}").is_err());
        assert!(validate_css_length("14px\\9").is_err());
        assert!(validate_css_length("14px</style>").is_err());
    }

    #[test]
    fn rejects_functions() {
        assert!(validate_css_length("calc(10px + 2em)").is_err());
        assert!(validate_css_length("var(--size)").is_err());
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(validate_css_length("١٤px").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate_css_length("").is_err());
        assert!(validate_css_length("   ").is_err());
    }
}
