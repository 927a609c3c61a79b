// src/remaining.rs
//! "What's left today": lessons whose end time is still ahead of `now`.
//!
//! The end time is the second `HH:MM` of the raw time text, i.e. the first
//! clock that follows another clock with only non-digits in between
//! (`08:00-09:20`, `11:00 - 12:20`, `08:00<br>09:20` → `08:00 09:20`).
//! A lesson without a readable end time is kept. Unclassified lines carry no
//! time at all and are left out of this view.

use chrono::{NaiveDateTime, NaiveTime};

use crate::config::consts::default_time;
use crate::core::sanitize::find_clock;
use crate::days;
use crate::lesson::LessonLine;
use crate::render::push_blocks;

pub const NOTHING_TODAY: &str = "На сьогодні пар не заплановано. Відпочивай 😌";
pub const ALL_DONE: &str = "На сьогодні пари вже завершились. Можна відпочити 😌";

/// End of a `start<sep>end` time range.
pub fn lesson_end(time: &str) -> Option<NaiveTime> {
    let mut from = 0usize;
    while let Some((_, _, after_start)) = find_clock(time, from) {
        let gap = time[after_start..]
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| after_start + i);
        if let Some(at) = gap {
            if let Some((h, m, after_end)) = find_clock(time, at) {
                if after_end - 5 == at {
                    return NaiveTime::from_hms_opt(h, m, 0);
                }
            }
        }
        // retry with the next clock as the start
        from = after_start - 4;
    }
    None
}

/// Keep iff `now` is strictly before today's end time; fail open.
pub fn is_remaining(now: NaiveDateTime, line: &LessonLine) -> bool {
    match lesson_end(line.time()) {
        Some(end) => now < now.date().and_time(end),
        None => true,
    }
}

/// Slotted lines still ahead of `now`, ordered by slot number (stable).
pub fn filter_remaining(now: NaiveDateTime, lessons: &[String]) -> Vec<LessonLine> {
    let mut kept: Vec<LessonLine> = lessons
        .iter()
        .map(|raw| LessonLine::decode(raw))
        .filter(|l| l.is_slotted() && is_remaining(now, l))
        .collect();
    kept.sort_by_key(|l| l.slot_key().parse::<u32>().unwrap_or(u32::MAX));
    kept
}

pub fn render_remaining(now: NaiveDateTime, lessons: &[String]) -> String {
    if lessons.is_empty() {
        return s!(NOTHING_TODAY);
    }
    let kept = filter_remaining(now, lessons);
    if kept.is_empty() {
        return s!(ALL_DONE);
    }

    let mut blocks: Vec<String> = Vec::new();
    for group in kept.chunk_by(|a, b| a.slot_key() == b.slot_key()) {
        let first = &group[0];
        let slot = first.slot_key();
        let raw_time = first.time().trim();
        let time = if raw_time.is_empty() { default_time(slot).unwrap_or("") } else { raw_time };

        let infos: Vec<String> = group
            .iter()
            .map(|l| l.info().trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();

        let mut lines = vec![format!("{slot}. {time}")];
        let mut body = Vec::new();
        push_blocks(&mut body, &infos);
        if !body.is_empty() {
            lines.push(s!());
            lines.extend(body);
        }
        blocks.push(lines.join("\n"));
    }

    format!(
        "🕓 Пари, які залишились на сьогодні ({}):\n\n{}",
        days::fmt_dotted(now.date()),
        blocks.join("\n\n")
    )
}
