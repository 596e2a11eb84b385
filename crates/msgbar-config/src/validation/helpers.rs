//! Shared checks used by every value validator.

/// Characters that can terminate a declaration, open or close a block,
/// start an escape, or break out into markup.
pub(crate) const FORBIDDEN_CHARS: [char; 6] = [';', '{', '}', '\\', '<', '>'];

/// Reject values carrying any structural CSS/HTML character.
pub(crate) fn check_forbidden_chars(value: &str) -> Result<(), String> {
    match value.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        Some(ch) => Err(format!("CSS injection blocked: contains '{ch}'")),
        None => Ok(()),
    }
}

/// Trim a value, rejecting it if nothing is left.
pub(crate) fn non_empty_trimmed<'a>(value: &'a str, what: &str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("Empty {what} value"));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_chars_each_rejected() {
        for ch in FORBIDDEN_CHARS {
            let value = format!("a{ch}b");
            assert!(check_forbidden_chars(&value).is_err(), "{value}");
        }
    }

    #[test]
    fn plain_text_passes() {
        assert!(check_forbidden_chars("'Open Sans', sans-serif").is_ok());
    }

    #[test]
    fn blank_is_rejected() {
        assert!(non_empty_trimmed("   ", "color").is_err());
        assert_eq!(non_empty_trimmed("  red ", "color"), Ok("red"));
    }
}
