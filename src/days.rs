// src/days.rs
//! Weekdays, their Ukrainian display forms, user-input aliases, and the
//! Sunday-anchored week arithmetic the registrar's timetable uses.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

/// Sunday first: the index of each variant is its offset from `week_start`.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

struct DayForms {
    key: &'static str,
    nominative: &'static str,
    accusative: &'static str,
    aliases: &'static [&'static str],
}

// Aliases are matched after trim + lowercase. Both apostrophes (U+02BC, U+2019)
// and the ASCII one appear in the wild for «пʼятниця».
const FORMS: [DayForms; 7] = [
    DayForms {
        key: "sun",
        nominative: "Неділя",
        accusative: "на неділю",
        aliases: &["sun", "sunday", "нд", "нед", "неділя", "неділю"],
    },
    DayForms {
        key: "mon",
        nominative: "Понеділок",
        accusative: "на понеділок",
        aliases: &["mon", "monday", "пн", "пон", "понеділок"],
    },
    DayForms {
        key: "tue",
        nominative: "Вівторок",
        accusative: "на вівторок",
        aliases: &["tue", "tuesday", "вт", "вів", "вівторок"],
    },
    DayForms {
        key: "wed",
        nominative: "Середа",
        accusative: "на середу",
        aliases: &["wed", "wednesday", "ср", "сер", "середа", "середу"],
    },
    DayForms {
        key: "thu",
        nominative: "Четвер",
        accusative: "на четвер",
        aliases: &["thu", "thursday", "чт", "чет", "четвер"],
    },
    DayForms {
        key: "fri",
        nominative: "Пʼятниця",
        accusative: "на пʼятницю",
        aliases: &[
            "fri", "friday", "пт", "пʼт", "п'т", "п’т", "пʼят", "п'ят", "п’ят",
            "пʼятниця", "п'ятниця", "п’ятниця", "пятниця", "пʼятницю", "п'ятницю", "п’ятницю",
        ],
    },
    DayForms {
        key: "sat",
        nominative: "Субота",
        accusative: "на суботу",
        aliases: &["sat", "saturday", "сб", "суб", "субота", "суботу"],
    },
];

impl Weekday {
    pub fn of(date: NaiveDate) -> Self {
        WEEK[date.weekday().num_days_from_sunday() as usize]
    }

    /// 0 = Sunday … 6 = Saturday.
    pub fn index(self) -> usize {
        self as usize
    }

    fn forms(self) -> &'static DayForms {
        &FORMS[self.index()]
    }

    /// `mon`, `tue`, … (also the serialized form).
    pub fn key(self) -> &'static str {
        self.forms().key
    }

    /// «Понеділок»
    pub fn nominative(self) -> &'static str {
        self.forms().nominative
    }

    /// «на понеділок»
    pub fn accusative(self) -> &'static str {
        self.forms().accusative
    }

    pub fn aliases(self) -> &'static [&'static str] {
        self.forms().aliases
    }

    pub fn from_key(key: &str) -> Option<Self> {
        WEEK.into_iter().find(|d| d.key() == key)
    }
}

pub fn weekday_key(date: NaiveDate) -> &'static str {
    Weekday::of(date).key()
}

pub fn weekday_display_name(date: NaiveDate) -> &'static str {
    Weekday::of(date).nominative()
}

pub fn weekday_display_name_accusative(date: NaiveDate) -> &'static str {
    Weekday::of(date).accusative()
}

/// Resolve free-form day input («ПН», « friday », «п'ятниця») to a weekday.
pub fn normalize_day_key(text: &str) -> Option<Weekday> {
    let down = text.trim().to_lowercase();
    if down.is_empty() { return None; }
    WEEK.into_iter().find(|d| d.aliases().contains(&down.as_str()))
}

/// Most recent Sunday on or before `base`.
pub fn week_start(base: NaiveDate) -> NaiveDate {
    base - Duration::days(i64::from(base.weekday().num_days_from_sunday()))
}

/// The seven dates of `base`'s week, Sunday first.
pub fn week_dates(base: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(base);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Date of `day` inside the Sunday-anchored week containing `base`;
/// may fall before or after `base`.
pub fn date_for_weekday_in_current_week(day: Weekday, base: NaiveDate) -> NaiveDate {
    let delta = day.index() as i64 - i64::from(base.weekday().num_days_from_sunday());
    base + Duration::days(delta)
}

/// Parse `dd.mm.yyyy`.
pub fn parse_dotted(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%d.%m.%Y").ok()
}

/// `dd.mm.yyyy`
pub fn fmt_dotted(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `YYYY-MM-DD`, the schedule store key.
pub fn fmt_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekday_keys_are_sunday_based() {
        assert_eq!(weekday_key(d(2025, 3, 2)), "sun");
        assert_eq!(weekday_key(d(2025, 3, 3)), "mon");
        assert_eq!(weekday_key(d(2025, 3, 8)), "sat");
        assert_eq!(Weekday::of(d(2025, 3, 2)).index(), 0);
    }

    #[test]
    fn display_forms() {
        assert_eq!(weekday_display_name(d(2025, 3, 3)), "Понеділок");
        assert_eq!(weekday_display_name_accusative(d(2025, 3, 5)), "на середу");
        assert_eq!(weekday_display_name_accusative(d(2025, 3, 7)), "на пʼятницю");
    }

    #[test]
    fn normalize_is_case_and_space_insensitive() {
        assert_eq!(normalize_day_key("  ПН "), Some(Weekday::Mon));
        assert_eq!(normalize_day_key("Friday"), Some(Weekday::Fri));
        assert_eq!(normalize_day_key("П'ЯТНИЦЯ"), Some(Weekday::Fri));
        assert_eq!(normalize_day_key("\tнд\n"), Some(Weekday::Sun));
        assert_eq!(normalize_day_key("someday"), None);
        assert_eq!(normalize_day_key("   "), None);
    }

    #[test]
    fn normalize_is_total_over_aliases() {
        for day in WEEK {
            for alias in day.aliases() {
                assert_eq!(normalize_day_key(alias), Some(day), "{alias}");
                assert_eq!(normalize_day_key(&alias.to_uppercase()), Some(day), "{alias}");
            }
        }
    }

    #[test]
    fn keys_round_trip() {
        for day in WEEK {
            assert_eq!(Weekday::from_key(day.key()), Some(day));
        }
        assert_eq!(Weekday::from_key("xyz"), None);
    }

    #[test]
    fn week_start_is_a_sunday_covering_the_date() {
        let mut date = d(2024, 12, 20);
        for _ in 0..60 {
            let start = week_start(date);
            assert_eq!(weekday_key(start), "sun");
            assert!(start <= date && date <= start + Duration::days(6));
            date += Duration::days(1);
        }
    }

    #[test]
    fn weekday_in_current_week_may_go_backwards() {
        // Wednesday 2025-03-05
        let base = d(2025, 3, 5);
        assert_eq!(date_for_weekday_in_current_week(Weekday::Mon, base), d(2025, 3, 3));
        assert_eq!(date_for_weekday_in_current_week(Weekday::Sat, base), d(2025, 3, 8));
        assert_eq!(date_for_weekday_in_current_week(Weekday::Sun, base), d(2025, 3, 2));
    }

    #[test]
    fn week_dates_cover_sunday_to_saturday() {
        let days = week_dates(d(2025, 3, 5));
        assert_eq!(days[0], d(2025, 3, 2));
        assert_eq!(days[6], d(2025, 3, 8));
    }

    #[test]
    fn serde_uses_short_keys() {
        assert_eq!(serde_json::to_string(&Weekday::Thu).unwrap(), "\"thu\"");
        let w: Weekday = serde_json::from_str("\"sun\"").unwrap();
        assert_eq!(w, Weekday::Sun);
    }

    #[test]
    fn date_formats() {
        assert_eq!(fmt_dotted(d(2025, 3, 3)), "03.03.2025");
        assert_eq!(fmt_iso(d(2025, 3, 3)), "2025-03-03");
        assert_eq!(parse_dotted("31.02.2025"), None);
        assert_eq!(parse_iso("2025-03-03"), Some(d(2025, 3, 3)));
    }
}
