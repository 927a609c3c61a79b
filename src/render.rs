// src/render.rs
//! Day and week views of the stored schedule.
//!
//! A day always lists the eight fixed slots with their default times; a slot's
//! info blocks come from every stored line carrying that slot number, in
//! store order. Output is Telegram-style HTML (only `<b>` is emitted).

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::consts::{SLOT_COUNT, WEEK_RULE_WIDTH, default_time};
use crate::days::{self, Weekday};
use crate::lesson::LessonLine;
use crate::store::Schedule;

pub const NO_LESSONS: &str = "Пар не знайдено.";
pub const REMOTE_MARK: &str = "🏠 <b>дистанційно</b>";
const REMOTE_WORD: &str = "дистанційно";

/// slot number text → info blocks
pub type LessonSlots = BTreeMap<String, Vec<String>>;

pub fn day_header(group: &str, date: NaiveDate) -> String {
    format!(
        "Розклад академічної групи {} {}, {} р.",
        group,
        Weekday::of(date).accusative(),
        days::fmt_dotted(date)
    )
}

pub fn week_header(group: &str, base: NaiveDate) -> String {
    let dates = days::week_dates(base);
    format!(
        "📅 Розклад групи {} на тиждень: {} — {}",
        group,
        days::fmt_dotted(dates[0]),
        days::fmt_dotted(dates[6])
    )
}

/// `" | "` separators become line breaks, lines are trimmed, blank lines
/// dropped, and a bare «дистанційно» line gets the remote mark.
pub fn format_info_block(info: &str) -> String {
    info.split('|')
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| if l.to_lowercase() == REMOTE_WORD { REMOTE_MARK } else { l })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Group decoded lines by slot. Empty slotted infos are dropped; unclassified
/// lines go to slot "0" whole.
pub fn slot_blocks(lessons: &[String]) -> LessonSlots {
    let mut slots = LessonSlots::new();
    for raw in lessons {
        let line = LessonLine::decode(raw);
        let info = match &line {
            LessonLine::Slotted { info, .. } => info.trim(),
            LessonLine::Unclassified(raw) => raw.as_str(),
        };
        let blocks = slots.entry(s!(line.slot_key())).or_default();
        if !info.is_empty() || !line.is_slotted() {
            blocks.push(s!(info));
        }
    }
    slots
}

/// Append `blocks` to `out`, a blank line between consecutive blocks.
pub(crate) fn push_blocks(out: &mut Vec<String>, blocks: &[String]) {
    for (idx, block) in blocks.iter().enumerate() {
        if idx > 0 { out.push(s!()); }
        let formatted = format_info_block(block);
        if !formatted.is_empty() { out.push(formatted); }
    }
}

pub fn render_day(schedule: &Schedule, group: &str, date: NaiveDate) -> String {
    let header = day_header(group, date);
    let lessons = schedule
        .get(group)
        .and_then(|g| g.get(&days::fmt_iso(date)))
        .map(|d| d.lessons.as_slice())
        .unwrap_or(&[]);

    if lessons.is_empty() {
        return join!(&header, "\n\n", NO_LESSONS);
    }

    let slots = slot_blocks(lessons);
    let mut out = Vec::new();
    push_lines!(out, header, "");

    for n in 1..=SLOT_COUNT {
        let num = n.to_string();
        let time = default_time(&num).unwrap_or("");
        out.push(format!("{num}. {time}"));
        if let Some(blocks) = slots.get(&num) {
            push_blocks(&mut out, blocks);
        }
        out.push(s!());
    }

    out.join("\n")
}

/// All seven days of `base`'s Sunday-anchored week, separated by a rule.
pub fn render_week(schedule: &Schedule, group: &str, base: NaiveDate) -> String {
    let rule = join!("\n\n", &"-".repeat(WEEK_RULE_WIDTH), "\n\n");
    days::week_dates(base)
        .iter()
        .map(|d| render_day(schedule, group, *d))
        .collect::<Vec<_>>()
        .join(rule.as_str())
}
