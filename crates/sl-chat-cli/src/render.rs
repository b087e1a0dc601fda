//! Flatten the assistant's HTML replies into terminal text.
//!
//! Only the markup the assistant emits is understood: paragraphs, ordered
//! and unordered lists, and inline emphasis. Anything else is dropped.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z0-9]+)[^>]*>").unwrap());

/// Convert a reply to plain text. Ordered list items are numbered, unordered
/// ones bulleted; entities are decoded.
pub fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    // Counter per open list; `None` for unordered lists.
    let mut lists: Vec<Option<usize>> = Vec::new();
    let mut last = 0;

    for caps in TAG.captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&decode_entities(&html[last..whole.start()]));
        last = whole.end();

        let closing = &caps[1] == "/";
        match (caps[2].to_lowercase().as_str(), closing) {
            ("p", true) | ("br", _) => out.push('\n'),
            ("ol", false) => lists.push(Some(0)),
            ("ul", false) => lists.push(None),
            ("ol" | "ul", true) => {
                lists.pop();
            }
            ("li", false) => {
                let indent = "  ".repeat(lists.len().max(1));
                let marker = match lists.last_mut() {
                    Some(Some(n)) => {
                        *n += 1;
                        format!("{n}.")
                    }
                    _ => "-".to_string(),
                };
                out.push_str(&format!("{indent}{marker} "));
            }
            ("li", true) => out.push('\n'),
            _ => {}
        }
    }
    out.push_str(&decode_entities(&html[last..]));

    out.trim_end().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
