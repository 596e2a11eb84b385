//! Allow-list HTML sanitization for the rendered message.
//!
//! Only a handful of inline tags survive. Anything else is stripped, not
//! escaped: the tag disappears and its text stays. Attributes are kept
//! per tag, and `href` values must use an allowed protocol or be relative.

use ammonia::Builder;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Tags kept in the output.
pub const ALLOWED_TAGS: &[&str] = &["a", "strong", "em", "b", "i", "code", "br", "span"];

/// Attributes kept per tag.
pub const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target", "rel"]),
    ("span", &["class"]),
];

/// URL schemes allowed in `href`.
pub const ALLOWED_PROTOCOLS: &[&str] = &["http", "https", "mailto"];

static SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let tag_attributes: HashMap<&str, HashSet<&str>> = ALLOWED_ATTRIBUTES
        .iter()
        .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
        .collect();

    let mut builder = Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .tag_attributes(tag_attributes)
        .generic_attributes(HashSet::new())
        .url_schemes(ALLOWED_PROTOCOLS.iter().copied().collect())
        // `rel` comes from the message itself, never injected.
        .link_rel(None)
        // Disallowed tags such as `<script>` keep their text.
        .clean_content_tags(HashSet::new())
        .strip_comments(true);
    builder
});

/// Sanitize an HTML fragment against the allow-list.
///
/// Unclosed allowed tags are closed at the end and stray closing tags are
/// dropped, so the result never leaks open elements into the host page.
pub fn sanitize_html(html: &str) -> String {
    SANITIZER.clean(html).to_string()
}
