//! Output text helpers: HTML escaping and anchor construction.
//!
//! These stand in for the host's string-formatting services. Everything an
//! element emits passes through here so raw field values can never inject
//! markup into the PDF preview or HTML positioning view.

/// Escapes `&`, `<`, `>`, `"` and `'` for safe embedding in HTML.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Builds an anchor element with both href and visible text escaped.
#[must_use]
pub fn anchor(href: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        escape_html(href),
        escape_html(text)
    )
}
