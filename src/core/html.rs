// src/core/html.rs
// Cell-level helpers on top of `scraper`.
// The registrar packs several facts into one <td>, separated by <br>, and
// truncates long link texts, so a cell is read as a list of lines with every
// link replaced by its full href.

use scraper::{ElementRef, Html, node::Node};

use super::sanitize::normalize_ws;

/// Fast ASCII-only lowercasing for tag/attribute matching.
pub fn to_lowercase_fast(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Split serialized markup on `<br>`, `<br/>`, `<br />` (any case).
/// Fragments are returned as-is, empty ones included.
pub fn split_on_br(markup: &str) -> Vec<&str> {
    let lc = to_lowercase_fast(markup);
    let mut out = Vec::new();
    let mut last = 0usize;
    let mut from = 0usize;

    while let Some(rel) = lc[from..].find("<br") {
        let start = from + rel;
        let after = start + 3;
        // `<br` must end the tag name: `<brx>` is not a line break
        let is_br = matches!(lc.as_bytes().get(after), Some(b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n'));
        let Some(close_rel) = lc[after..].find('>') else { break };
        let end = after + close_rel + 1;
        if is_br {
            out.push(&markup[last..start]);
            last = end;
        }
        from = end;
    }
    out.push(&markup[last..]);
    out
}

/// Visible text of `el`, except that an `<a>` with a non-empty href
/// contributes the href instead of its (often truncated) text.
pub fn text_with_hrefs(el: ElementRef<'_>) -> String {
    let mut out = s!();
    push_visible(el, &mut out);
    out
}

fn push_visible(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) => {
                let Some(child_el) = ElementRef::wrap(child) else { continue };
                if e.name().eq_ignore_ascii_case("a") {
                    if let Some(href) = e.attr("href").map(str::trim).filter(|h| !h.is_empty()) {
                        out.push_str(href);
                        continue;
                    }
                }
                push_visible(child_el, out);
            }
            _ => {}
        }
    }
}

/// One markup fragment → one normalized text line (may be empty).
pub fn fragment_line(fragment: &str) -> String {
    let doc = Html::parse_fragment(fragment);
    normalize_ws(&text_with_hrefs(doc.root_element()))
}

/// A `<td>` → its non-empty text lines.
pub fn cell_lines(td: ElementRef<'_>) -> Vec<String> {
    split_on_br(&td.inner_html())
        .into_iter()
        .map(fragment_line)
        .filter(|l| !l.is_empty())
        .collect()
}
