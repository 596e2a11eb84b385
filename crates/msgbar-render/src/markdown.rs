//! Markdown message rendering.
//!
//! Markdown is converted with `pulldown-cmark`, link attribute lists
//! (`[text](url){:target="_blank"}`) are folded into the preceding link,
//! a lone wrapping paragraph is removed so the message stays inline, and
//! the result goes through the allow-list sanitizer.

use pulldown_cmark::{html, Options, Parser};
use regex::Regex;
use std::sync::LazyLock;

use crate::sanitize::sanitize_html;

/// `{: key="value" ...}` directly after a closing link tag.
static LINK_ATTR_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</a>\{:\s*([^{}]*?)\s*\}").unwrap());

/// One `key=value` pair in an attribute list. Quotes may already be escaped
/// by the Markdown renderer.
static ATTR_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_-]*)=(?:&quot;(.*?)&quot;|"([^"]*)"|'([^']*)'|([^\s"'&]+))"#)
        .unwrap()
});

/// Render a Markdown message to sanitized inline HTML.
pub fn render_message(markdown: &str) -> String {
    let html = markdown_to_html(markdown);
    let html = apply_link_attributes(&html);
    sanitize_html(strip_wrapping_paragraph(&html))
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Move `{:...}` attribute lists into the opening tag of the link before them.
///
/// Values are copied as the renderer escaped them; the sanitizer decides
/// which attributes survive.
fn apply_link_attributes(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;

    for caps in LINK_ATTR_LIST_RE.captures_iter(html) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&html[last..whole.start()]);
        last = whole.end();

        let attrs = parse_attr_list(&caps[1]);
        let insert_at = out
            .rfind("<a ")
            .and_then(|open| out[open..].find('>').map(|end| open + end));

        match insert_at {
            Some(pos) if !attrs.is_empty() => {
                out.insert_str(pos, &attrs);
                out.push_str("</a>");
            }
            _ => out.push_str(whole.as_str()),
        }
    }
    out.push_str(&html[last..]);
    out
}

fn parse_attr_list(list: &str) -> String {
    let mut attrs = String::new();
    for pair in ATTR_PAIR_RE.captures_iter(list) {
        let value = (2..=5)
            .find_map(|i| pair.get(i))
            .map_or("", |m| m.as_str());
        attrs.push(' ');
        attrs.push_str(&pair[1]);
        attrs.push_str("=\"");
        attrs.push_str(&value.replace('"', "&quot;"));
        attrs.push('"');
    }
    attrs
}

/// Drop a single `<p>...</p>` wrapper; multi-paragraph output is left alone.
fn strip_wrapping_paragraph(html: &str) -> &str {
    let trimmed = html.trim();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner,
        _ => trimmed,
    }
}
