//! Response body rewriting.

use std::borrow::Cow;
use tracing::debug;

const HEAD_CLOSE: &str = "</head>";

/// Whether a `Content-Type` header value denotes an HTML document.
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

/// Insert `fragment` right before the first `</head>` of an HTML body.
///
/// Non-HTML responses and bodies without a closing head tag are returned
/// borrowed and untouched. The tag match is ASCII case-insensitive.
pub fn inject_fragment<'a>(content_type: &str, body: &'a str, fragment: &str) -> Cow<'a, str> {
    if !is_html_content_type(content_type) {
        debug!(content_type, "Skipping msgbar injection for non-HTML response");
        return Cow::Borrowed(body);
    }

    // ASCII lowercasing keeps byte offsets intact.
    let Some(pos) = body.to_ascii_lowercase().find(HEAD_CLOSE) else {
        debug!("Skipping msgbar injection, no </head> in body");
        return Cow::Borrowed(body);
    };

    let mut out = String::with_capacity(body.len() + fragment.len());
    out.push_str(&body[..pos]);
    out.push_str(fragment);
    out.push_str(&body[pos..]);
    Cow::Owned(out)
}
