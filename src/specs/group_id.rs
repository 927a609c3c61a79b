// src/specs/group_id.rs
//! Scraping *spec* for the group lookup page.
//!
//! Posting a group name to `timetable.cgi?n=700` returns a page whose heading
//! carries a permalink: `<a title="Постійне посилання на розклад" href="...?n=700&group=-1911">`.
//! The `group` query value is the site id used to fetch that group's timetable.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::config::consts::PERMALINK_MARKER;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[title][href]").expect("static selector"));

// Relative hrefs are resolved against this; only the query matters.
const DUMMY_BASE: &str = "http://localhost/";

pub fn extract_group_id(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let href = doc
        .select(&ANCHOR)
        .find(|a| a.value().attr("title").is_some_and(|t| t.contains(PERMALINK_MARKER)))
        .and_then(|a| a.value().attr("href"))?;

    group_from_href(href)
}

/// `group` value of an href: URL query first, then a raw `[?&]group=` scan
/// (malformed URLs, or hrefs like `timetable.cgi&group=-1911` whose "query"
/// parses as part of the path).
pub fn group_from_href(href: &str) -> Option<String> {
    let href = href.trim();
    let from_query = parse_href(href).and_then(|url| {
        url.query_pairs()
            .find(|(k, v)| k == "group" && !v.is_empty())
            .map(|(_, v)| v.into_owned())
    });
    from_query.or_else(|| {
        logd!("GroupId: no group in query of {:?}, scanning raw text", href);
        scan_group_param(href)
    })
}

fn parse_href(href: &str) -> Option<Url> {
    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(DUMMY_BASE).ok()?.join(href).ok(),
        Err(_) => None,
    }
}

/// `[?&]group=<value>` with the value running up to the next `&`.
fn scan_group_param(href: &str) -> Option<String> {
    let mut from = 0usize;
    while let Some(rel) = href[from..].find("group=") {
        let at = from + rel;
        let preceded = at > 0 && matches!(href.as_bytes()[at - 1], b'?' | b'&');
        let value_start = at + "group=".len();
        if preceded {
            let value = href[value_start..].split('&').next().unwrap_or("");
            if !value.is_empty() {
                return Some(s!(value));
            }
        }
        from = value_start;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_href() {
        assert_eq!(
            group_from_href("https://dekanat.nung.edu.ua/cgi-bin/timetable.cgi?n=700&group=-1911").as_deref(),
            Some("-1911")
        );
    }

    #[test]
    fn relative_href() {
        assert_eq!(group_from_href("timetable.cgi?n=700&group=-42").as_deref(), Some("-42"));
        assert_eq!(group_from_href("?group=%2D7").as_deref(), Some("-7"));
    }

    #[test]
    fn malformed_href_falls_back_to_scan() {
        assert_eq!(group_from_href("http://[bad/timetable.cgi?n=700&group=-1911").as_deref(), Some("-1911"));
        assert_eq!(group_from_href("http://[bad/?subgroup=1").as_deref(), None);
    }

    #[test]
    fn group_outside_the_query_is_scanned() {
        assert_eq!(group_from_href("timetable.cgi&group=-1911").as_deref(), Some("-1911"));
        assert_eq!(group_from_href("...&group=-1911").as_deref(), Some("-1911"));
        assert_eq!(group_from_href("/cgi-bin/timetable.cgi;n=700&group=-7&x=1").as_deref(), Some("-7"));
    }

    #[test]
    fn missing_group_param() {
        assert_eq!(group_from_href("timetable.cgi?n=700"), None);
        assert_eq!(group_from_href("timetable.cgi?n=700&group="), None);
    }
}
