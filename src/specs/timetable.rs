// src/specs/timetable.rs
//! Scraping *spec* for a group's timetable page.
//!
//! Page shape:
//! ```text
//! <div class="col-print-6">
//!   <h4>03.03.2025 <small>Понеділок</small></h4>
//!   <table>
//!     <tr><td>1</td><td>08:00<br>09:20</td><td>Математика (Л)<br>ауд. 1203</td></tr>
//!     ...
//! ```
//! Column 0 is the slot number, column 1 the time, everything after that is
//! lesson info. Output is one [`DayRecord`] per dated heading that has at least
//! one non-empty row.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::cell_lines;
use crate::core::sanitize::{find_dotted_date, normalize_ws};
use crate::days::{self, Weekday};
use crate::lesson;
use crate::store::DayRecord;

static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h4").expect("static selector"));
static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").expect("static selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("static selector"));

/// ISO date (`YYYY-MM-DD`) → day record, for one group.
pub type DayRecords = BTreeMap<String, DayRecord>;

pub fn parse_group_schedule(html: &str) -> DayRecords {
    let doc = Html::parse_document(html);
    let mut out = DayRecords::new();

    for heading in doc.select(&HEADING) {
        let title = normalize_ws(&heading.text().collect::<String>());

        let Some(date) = find_dotted_date(&title).and_then(days::parse_dotted) else {
            logd!("Timetable: heading without date: {:?}", title);
            continue;
        };

        let Some(table) = sibling_table(heading) else {
            logd!("Timetable: no table for {}", days::fmt_dotted(date));
            continue;
        };

        let lessons = table_lessons(table);
        if lessons.is_empty() {
            logd!("Timetable: {} has no lesson rows", days::fmt_dotted(date));
            continue;
        }

        // A repeated heading for the same date overwrites the earlier one.
        out.insert(days::fmt_iso(date), DayRecord { weekday: Weekday::of(date), lessons });
    }

    logd!("Timetable: parsed {} day(s)", out.len());
    out
}

/// First table under the heading's parent.
fn sibling_table(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let parent = heading.parent().and_then(ElementRef::wrap)?;
    parent.select(&TABLE).next()
}

fn table_lessons(table: ElementRef<'_>) -> Vec<String> {
    let mut lessons = Vec::new();
    for tr in table.select(&ROW) {
        let cells: Vec<Vec<String>> = tr.select(&CELL).map(cell_lines).collect();
        if let Some(line) = row_line(&cells) {
            lessons.push(line);
        }
    }
    lessons
}

/// Cells (as lines) → canonical lesson line, `None` for an empty row.
pub fn row_line(cells: &[Vec<String>]) -> Option<String> {
    let first = |i: usize| -> &str {
        cells.get(i).and_then(|c| c.first()).map(|s| s.trim()).unwrap_or("")
    };
    let num = first(0);
    let time = first(1);

    let info = cells
        .iter()
        .skip(2)
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    let info = info.trim();

    if num.is_empty() && time.is_empty() && info.is_empty() {
        return None;
    }
    Some(lesson::encode(num, time, info))
}
