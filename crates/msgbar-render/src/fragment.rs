//! HTML fragment for the message bar.
//!
//! Interpolates a [`ResolvedStyle`] into a `<style>` block and the bar
//! markup. Values are emitted as-is; they were sanitized upstream.

use crate::style::ResolvedStyle;

/// `id` of the injected `<style>` element.
pub const STYLE_ID: &str = "MsgBarStyle";
/// `id` of the bar element.
pub const BAR_ID: &str = "MsgBar";

/// Render the `<style>` block and bar markup for injection before `</head>`.
pub fn render_fragment(style: &ResolvedStyle) -> String {
    let ResolvedStyle {
        background_color,
        text_color,
        font_family,
        font_size,
        bar_height,
        message_html,
    } = style;

    let mut html = String::with_capacity(2048 + message_html.len());
    html.push_str(&format!(
        r#"
<style id="{STYLE_ID}">
#{BAR_ID} {{
    background-color: {background_color};
    color: {text_color};
    width: 100%;
    height: {bar_height};
    line-height: {bar_height};
    box-sizing: border-box;
    text-align: center;
    padding: 0 40px 0 10px;
    font-size: {font_size};
    font-family: {font_family};
    position: fixed;
    top: 0;
    left: 0;
    z-index: 9999;
    box-shadow: 0 1px 3px rgba(0,0,0,0.2);
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}}
#{BAR_ID} a {{
    color: inherit;
    text-decoration: underline;
}}
#{BAR_ID} .close-btn {{
    position: absolute;
    right: 10px;
    top: 50%;
    transform: translateY(-50%);
    font-weight: bold;
    font-size: 16px;
    line-height: 1;
    color: {text_color};
    cursor: pointer;
    background: none;
    border: none;
}}
body {{
    padding-top: {bar_height} !important;
}}
body[data-cy-test="true"] #{BAR_ID} {{
    position: relative !important;
    top: auto !important;
    overflow: visible !important;
}}
body[data-cy-test="true"] #{BAR_ID} .close-btn {{
    top: 5px !important;
    transform: none !important;
}}
</style>
"#
    ));
    html.push_str(&format!(
        r#"<div id="{BAR_ID}">
    {message_html}
    <button class="close-btn" onclick="document.getElementById('{BAR_ID}').remove();document.getElementById('{STYLE_ID}').remove();">&times;</button>
</div>
"#
    ));
    html
}
