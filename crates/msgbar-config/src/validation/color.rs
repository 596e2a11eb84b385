//! CSS color validation.
//!
//! Accepted forms:
//! - Hex colors: `#rgb`, `#rrggbb`, `#rrggbbaa`
//! - `rgb()` / `rgba()` in comma or space syntax, channels 0-255
//! - `hsl()` / `hsla()` in comma or space syntax, hue with optional unit
//! - CSS color keywords such as `red` or `rebeccapurple`
//!
//! Accepted values are returned untouched so the user's notation survives.

use regex::Regex;
use std::sync::LazyLock;

use super::helpers::{check_forbidden_chars, non_empty_trimmed};

/// Regex for hex color: #RGB, #RRGGBB, or #RRGGBBAA.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// `rgb(r, g, b)` / `rgba(r, g, b, a)`.
static RGB_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*([0-9]{1,3}(?:\.[0-9]+)?)\s*,\s*([0-9]{1,3}(?:\.[0-9]+)?)\s*,\s*([0-9]{1,3}(?:\.[0-9]+)?)\s*(?:,\s*([0-9]*\.?[0-9]+%?)\s*)?\)$",
    )
    .unwrap()
});

/// `rgb(r g b)` / `rgb(r g b / a)`.
static RGB_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*([0-9]{1,3}(?:\.[0-9]+)?)\s+([0-9]{1,3}(?:\.[0-9]+)?)\s+([0-9]{1,3}(?:\.[0-9]+)?)\s*(?:/\s*([0-9]*\.?[0-9]+%?)\s*)?\)$",
    )
    .unwrap()
});

/// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`.
static HSL_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*(-?[0-9]*\.?[0-9]+)(?:deg|rad|turn)?\s*,\s*([0-9]{1,3}(?:\.[0-9]+)?)%\s*,\s*([0-9]{1,3}(?:\.[0-9]+)?)%\s*(?:,\s*([0-9]*\.?[0-9]+%?)\s*)?\)$",
    )
    .unwrap()
});

/// `hsl(h s% l%)` / `hsl(h s% l% / a)`.
static HSL_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*(-?[0-9]*\.?[0-9]+)(?:deg|rad|turn)?\s+([0-9]{1,3}(?:\.[0-9]+)?)%\s+([0-9]{1,3}(?:\.[0-9]+)?)%\s*(?:/\s*([0-9]*\.?[0-9]+%?)\s*)?\)$",
    )
    .unwrap()
});

/// CSS color keywords, lowercase.
pub const CSS_COLOR_KEYWORDS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "transparent", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

/// Validate a CSS color value.
///
/// Returns the original, untrimmed value when it is one of the accepted
/// forms. Never panics on malformed input.
pub fn validate_css_color(value: &str) -> Result<&str, String> {
    let trimmed = non_empty_trimmed(value, "CSS color")?;

    // Check for injection patterns first
    check_forbidden_chars(trimmed)?;

    if trimmed.starts_with('#') {
        return if HEX_RE.is_match(trimmed) {
            Ok(value)
        } else {
            Err(format!(
                "Invalid hex color: expected #rgb, #rrggbb or #rrggbbaa, got '{trimmed}'"
            ))
        };
    }

    let lower = trimmed.to_ascii_lowercase();

    if lower.starts_with("rgb") {
        return validate_rgb_function(trimmed).map(|()| value);
    }

    if lower.starts_with("hsl") {
        return validate_hsl_function(trimmed).map(|()| value);
    }

    if CSS_COLOR_KEYWORDS.contains(&lower.as_str()) {
        return Ok(value);
    }

    Err(format!("Unrecognized CSS color: '{trimmed}'"))
}

/// Validate an `rgb()`/`rgba()` call, including channel and alpha ranges.
fn validate_rgb_function(value: &str) -> Result<(), String> {
    let caps = RGB_COMMA_RE
        .captures(value)
        .or_else(|| RGB_SPACE_RE.captures(value))
        .ok_or_else(|| format!("Malformed rgb/rgba: '{value}'"))?;

    for i in 1..=3 {
        let channel: f64 = caps[i]
            .parse()
            .map_err(|_| format!("Non-numeric channel in '{value}'"))?;
        if channel > 255.0 {
            return Err(format!("Channel {channel} out of range [0, 255] in '{value}'"));
        }
    }

    match caps.get(4) {
        Some(alpha) => validate_alpha(alpha.as_str(), value),
        None => Ok(()),
    }
}

/// Validate an `hsl()`/`hsla()` call, including saturation, lightness and alpha.
fn validate_hsl_function(value: &str) -> Result<(), String> {
    let caps = HSL_COMMA_RE
        .captures(value)
        .or_else(|| HSL_SPACE_RE.captures(value))
        .ok_or_else(|| format!("Malformed hsl/hsla: '{value}'"))?;

    for i in 2..=3 {
        let percent: f64 = caps[i]
            .parse()
            .map_err(|_| format!("Non-numeric percentage in '{value}'"))?;
        if percent > 100.0 {
            return Err(format!("{percent}% out of range [0, 100] in '{value}'"));
        }
    }

    match caps.get(4) {
        Some(alpha) => validate_alpha(alpha.as_str(), value),
        None => Ok(()),
    }
}

/// Alpha is 0-1, or 0%-100% when written as a percentage.
fn validate_alpha(alpha: &str, value: &str) -> Result<(), String> {
    let (number, max) = match alpha.strip_suffix('%') {
        Some(n) => (n, 100.0),
        None => (alpha, 1.0),
    };
    let parsed: f64 = number
        .parse()
        .map_err(|_| format!("Non-numeric alpha '{alpha}' in '{value}'"))?;
    if parsed > max {
        return Err(format!("Alpha '{alpha}' out of range in '{value}'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Hex colors ---

    #[test]
    fn valid_hex_3_digit() {
        assert_eq!(validate_css_color("#fff"), Ok("#fff"));
        assert_eq!(validate_css_color("#A0c"), Ok("#A0c"));
    }

    #[test]
    fn valid_hex_6_digit() {
        assert_eq!(validate_css_color("#245466"), Ok("#245466"));
        assert_eq!(validate_css_color("#FFFFFF"), Ok("#FFFFFF"));
    }

    #[test]
    fn valid_hex_8_digit() {
        assert_eq!(validate_css_color("#00d4ff80"), Ok("#00d4ff80"));
    }

    #[test]
    fn invalid_hex_wrong_length() {
        assert!(validate_css_color("#ff").is_err());
        assert!(validate_css_color("#ffff").is_err());
        assert!(validate_css_color("#fffff").is_err());
        assert!(validate_css_color("#fffffff").is_err());
    }

    #[test]
    fn invalid_hex_non_hex_chars() {
        assert!(validate_css_color("#gggggg").is_err());
        assert!(validate_css_color("#xyz").is_err());
    }

    // --- rgb/rgba ---

    #[test]
    fn valid_rgb() {
        assert!(validate_css_color("rgb(255, 0, 0)").is_ok());
        assert!(validate_css_color("rgb(0,0,0)").is_ok());
        assert!(validate_css_color("RGB(10, 20, 30)").is_ok());
        assert!(validate_css_color("rgb(12.5, 0, 255)").is_ok());
    }

    #[test]
    fn valid_rgba() {
        assert!(validate_css_color("rgba(0, 212, 255, 0.12)").is_ok());
        assert!(validate_css_color("rgba(0,0,0,.5)").is_ok());
        assert!(validate_css_color("rgba(0,0,0,1)").is_ok());
        assert!(validate_css_color("rgba(0,0,0,50%)").is_ok());
    }

    #[test]
    fn valid_rgb_space_syntax() {
        assert!(validate_css_color("rgb(255 128 0)").is_ok());
        assert!(validate_css_color("rgb(255 128 0 / 0.5)").is_ok());
    }

    #[test]
    fn invalid_rgb_out_of_range() {
        assert!(validate_css_color("rgb(256, 0, 0)").is_err());
        assert!(validate_css_color("rgba(0, 0, 0, 1.5)").is_err());
        assert!(validate_css_color("rgba(0, 0, 0, 150%)").is_err());
    }

    #[test]
    fn invalid_rgb_wrong_arg_count() {
        assert!(validate_css_color("rgb(0, 0)").is_err());
        assert!(validate_css_color("rgba(0, 0, 0, 0, 0)").is_err());
    }

    #[test]
    fn invalid_rgb_non_numeric() {
        assert!(validate_css_color("rgba(red, 0, 0, 1)").is_err());
        assert!(validate_css_color("rgb(-1, 0, 0)").is_err());
    }

    // --- hsl/hsla ---

    #[test]
    fn valid_hsl() {
        assert!(validate_css_color("hsl(120, 100%, 50%)").is_ok());
        assert!(validate_css_color("hsl(120deg, 50%, 25%)").is_ok());
        assert!(validate_css_color("hsl(-30, 0%, 100%)").is_ok());
        assert!(validate_css_color("hsl(0.5turn 60% 40%)").is_ok());
    }

    #[test]
    fn valid_hsla() {
        assert!(validate_css_color("hsla(240, 100%, 50%, 0.3)").is_ok());
        assert!(validate_css_color("hsl(240 100% 50% / 30%)").is_ok());
    }

    #[test]
    fn invalid_hsl() {
        assert!(validate_css_color("hsl(120, 100, 50)").is_err());
        assert!(validate_css_color("hsl(120, 101%, 50%)").is_err());
        assert!(validate_css_color("hsla(120, 50%, 50%, 2)").is_err());
        assert!(validate_css_color("hsl(120)").is_err());
    }

    // --- Keywords ---

    #[test]
    fn valid_keywords_keep_original_case() {
        assert_eq!(validate_css_color("red"), Ok("red"));
        assert_eq!(validate_css_color("White"), Ok("White"));
        assert_eq!(validate_css_color("RebeccaPurple"), Ok("RebeccaPurple"));
        assert_eq!(validate_css_color("transparent"), Ok("transparent"));
    }

    #[test]
    fn unknown_keywords_rejected() {
        assert!(validate_css_color("notacolor").is_err());
        assert!(validate_css_color("redd").is_err());
        assert!(validate_css_color("inherit").is_err());
    }

    #[test]
    fn original_value_returned_with_whitespace() {
        assert_eq!(validate_css_color(" #fff "), Ok(" #fff "));
    }

    // --- Injection attempts ---

    #[test]
    fn rejects_rule_breakout() {
        assert!(validate_css_color("red; } body { display: none; } #foo {").is_err());
        assert!(validate_css_color("#fff } body { background: red").is_err());
    }

    #[test]
    fn rejects_css_functions() {
        assert!(validate_css_color("expression(alert(1))").is_err());
        assert!(validate_css_color("url(https://evil.com)").is_err());
        assert!(validate_css_color("var(--x)").is_err());
    }

    #[test]
    fn rejects_markup() {
        assert!(validate_css_color("red</style><script>alert(1)</script>").is_err());
        assert!(validate_css_color("red\\").is_err());
    }

    #[test]
    fn rejects_trailing_garbage_after_function() {
        assert!(validate_css_color("rgb(0,0,0) red").is_err());
        assert!(validate_css_color("rgb(0,0,0)) ").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate_css_color("").is_err());
        assert!(validate_css_color("   ").is_err());
    }
}
