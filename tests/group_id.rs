// tests/group_id.rs
//
// Site id lookup from permalink anchors.
//
mod common;

use nung_sched::specs::group_id::extract_group_id;

fn page(title: &str, href: &str) -> String {
    format!(r#"<html><body><h4>ПЗС-23-1 <a title="{title}" href="{href}">🔗</a></h4></body></html>"#)
}

#[test]
fn permalink_anchor_gives_the_group_value() {
    let html = page(
        "Постійне посилання на розклад",
        "https://dekanat.nung.edu.ua/cgi-bin/timetable.cgi?n=700&amp;group=-1911",
    );
    assert_eq!(extract_group_id(&html).as_deref(), Some("-1911"));
}

#[test]
fn malformed_url_still_yields_the_value() {
    let html = page("Постійне посилання", "https://[dekanat/timetable.cgi?n=700&amp;group=-1911");
    assert_eq!(extract_group_id(&html).as_deref(), Some("-1911"));
}

#[test]
fn group_after_a_bare_ampersand_is_found() {
    let html = r#"<h4><a title="Постійне посилання" href="...&group=-1911">x</a></h4>"#;
    assert_eq!(extract_group_id(html).as_deref(), Some("-1911"));

    let html = page("Постійне посилання на розклад", "timetable.cgi&amp;group=-1911");
    assert_eq!(extract_group_id(&html).as_deref(), Some("-1911"));
}

#[test]
fn relative_lookup_page() {
    assert_eq!(extract_group_id(common::LOOKUP_PAGE).as_deref(), Some("-1911"));
}

#[test]
fn other_anchors_are_ignored() {
    let html = r#"<a title="Друк" href="timetable.cgi?n=700&group=-1">друк</a>
        <a href="timetable.cgi?n=700&group=-2">без title</a>"#;
    assert_eq!(extract_group_id(html), None);
    assert_eq!(extract_group_id(common::NO_PERMALINK_PAGE), None);
}

#[test]
fn permalink_without_group_is_not_found() {
    let html = page("Постійне посилання", "timetable.cgi?n=700");
    assert_eq!(extract_group_id(&html), None);
}
