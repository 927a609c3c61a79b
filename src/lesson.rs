// src/lesson.rs
//! Canonical one-string form of a scraped lesson.
//!
//! ```text
//! <slot>. [<raw time>] <info, may span several lines>
//! ```
//!
//! This is the string that lands in `schedule.json`. Anything that does not
//! have this shape decodes to [`LessonLine::Unclassified`] and keeps its text
//! verbatim, so nothing scraped is ever dropped on the way through the store.

use std::fmt;

/// Key under which unclassified lines are bucketed in a day grid.
pub const UNCLASSIFIED_SLOT: &str = "0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonLine {
    Slotted { slot: String, time: String, info: String },
    Unclassified(String),
}

/// Build the canonical line. `slot` may be empty (the row had no number);
/// the result is then stored as-is and decodes as unclassified.
pub fn encode(slot: &str, time: &str, info: &str) -> String {
    format!("{slot}. [{time}] {info}").trim().to_string()
}

impl LessonLine {
    pub fn decode(line: &str) -> Self {
        match tokenize(line) {
            Some((slot, time, info)) => LessonLine::Slotted {
                slot: s!(slot),
                time: s!(time),
                info: s!(info),
            },
            None => LessonLine::Unclassified(s!(line)),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            LessonLine::Slotted { slot, time, info } => encode(slot, time, info),
            LessonLine::Unclassified(raw) => raw.clone(),
        }
    }

    /// Slot number text, or [`UNCLASSIFIED_SLOT`].
    pub fn slot_key(&self) -> &str {
        match self {
            LessonLine::Slotted { slot, .. } => slot,
            LessonLine::Unclassified(_) => UNCLASSIFIED_SLOT,
        }
    }

    pub fn time(&self) -> &str {
        match self {
            LessonLine::Slotted { time, .. } => time,
            LessonLine::Unclassified(_) => "",
        }
    }

    pub fn info(&self) -> &str {
        match self {
            LessonLine::Slotted { info, .. } => info,
            LessonLine::Unclassified(raw) => raw,
        }
    }

    pub fn is_slotted(&self) -> bool {
        matches!(self, LessonLine::Slotted { .. })
    }
}

impl fmt::Display for LessonLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// `digits "." ws* "[" time "]" ws* rest` → (digits, time, rest).
/// `time` ends at the first `]`.
fn tokenize(line: &str) -> Option<(&str, &str, &str)> {
    let digits_end = line
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    if digits_end == 0 { return None; }
    let slot = &line[..digits_end];

    let rest = line[digits_end..].strip_prefix('.')?;
    let rest = rest.trim_start().strip_prefix('[')?;
    let close = rest.find(']')?;
    let time = &rest[..close];
    let info = rest[close + 1..].trim_start();
    Some((slot, time, info))
}
