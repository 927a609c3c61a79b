// tests/render.rs
//
// Golden output of the day and week views.
//
use std::collections::BTreeMap;

use chrono::NaiveDate;

use nung_sched::days::Weekday;
use nung_sched::render::{render_day, render_week, week_header, NO_LESSONS, REMOTE_MARK};
use nung_sched::store::{merge_days, DayRecord, Schedule};

const GROUP: &str = "ПЗС-23-1";

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn schedule_with(iso: &str, weekday: Weekday, lessons: &[&str]) -> Schedule {
    let mut schedule = Schedule::new();
    let mut days = BTreeMap::new();
    days.insert(
        iso.to_string(),
        DayRecord { weekday, lessons: lessons.iter().map(|s| s.to_string()).collect() },
    );
    merge_days(&mut schedule, GROUP, days);
    schedule
}

#[test]
fn missing_day_is_header_and_notice_only() {
    let out = render_day(&Schedule::new(), GROUP, d(2025, 3, 3));
    assert_eq!(
        out,
        format!("Розклад академічної групи ПЗС-23-1 на понеділок, 03.03.2025 р.\n\n{NO_LESSONS}")
    );

    let empty = schedule_with("2025-03-03", Weekday::Mon, &[]);
    assert_eq!(render_day(&empty, GROUP, d(2025, 3, 3)), out);
}

#[test]
fn full_day_grid() {
    let schedule = schedule_with(
        "2025-03-03",
        Weekday::Mon,
        &[
            "1. [08:00] Математика (Л)\nауд. 1203",
            "3. [11:00] Фізика\nдистанційно",
            "3. [11:00] Фізика (підгр. 2) | ауд. 2301",
        ],
    );

    let expected = [
        "Розклад академічної групи ПЗС-23-1 на понеділок, 03.03.2025 р.",
        "",
        "1. 08:00 - 09:20",
        "Математика (Л)",
        "ауд. 1203",
        "",
        "2. 09:30 - 10:50",
        "",
        "3. 11:00 - 12:20",
        "Фізика",
        "🏠 <b>дистанційно</b>",
        "",
        "Фізика (підгр. 2)",
        "ауд. 2301",
        "",
        "4. 12:50 - 14:10",
        "",
        "5. 14:20 - 15:40",
        "",
        "6. 15:50 - 17:10",
        "",
        "7. 17:20 - 18:40",
        "",
        "8. 18:50 - 20:10",
        "",
    ]
    .join("\n");

    assert_eq!(render_day(&schedule, GROUP, d(2025, 3, 3)), expected);
}

#[test]
fn remote_block_is_styled_other_text_is_not() {
    let schedule = schedule_with(
        "2025-03-04",
        Weekday::Tue,
        &["2. [] дистанційно", "4. [] Дистанційно відпрацювання"],
    );
    let out = render_day(&schedule, GROUP, d(2025, 3, 4));

    assert!(out.contains(&format!("2. 09:30 - 10:50\n{REMOTE_MARK}\n")));
    assert!(out.contains("4. 12:50 - 14:10\nДистанційно відпрацювання\n"));
}

#[test]
fn out_of_grid_lines_are_stored_but_not_rendered() {
    let schedule = schedule_with(
        "2025-03-05",
        Weekday::Wed,
        &["9. [20:20] Факультатив", "Консультація о 16:00", "1. [] Історія"],
    );
    let out = render_day(&schedule, GROUP, d(2025, 3, 5));

    assert!(out.contains("1. 08:00 - 09:20\nІсторія\n"));
    assert!(!out.contains("Факультатив"));
    assert!(!out.contains("Консультація"));
    assert_eq!(schedule[GROUP]["2025-03-05"].lessons.len(), 3);
}

#[test]
fn week_is_sunday_to_saturday_with_rules() {
    let schedule = schedule_with("2025-03-05", Weekday::Wed, &["2. [] Хімія"]);
    let out = render_week(&schedule, GROUP, d(2025, 3, 5));

    let rule = format!("\n\n{}\n\n", "-".repeat(32));
    let days: Vec<&str> = out.split(rule.as_str()).collect();
    assert_eq!(days.len(), 7);
    assert!(days[0].starts_with("Розклад академічної групи ПЗС-23-1 на неділю, 02.03.2025 р."));
    assert!(days[0].ends_with(NO_LESSONS));
    assert!(days[3].contains("2. 09:30 - 10:50\nХімія"));
    assert!(days[6].starts_with("Розклад академічної групи ПЗС-23-1 на суботу, 08.03.2025 р."));
}

#[test]
fn week_header_spans_the_sunday_week() {
    assert_eq!(
        week_header(GROUP, d(2025, 3, 8)),
        "📅 Розклад групи ПЗС-23-1 на тиждень: 02.03.2025 — 08.03.2025"
    );
    assert_eq!(
        week_header(GROUP, d(2025, 3, 9)),
        "📅 Розклад групи ПЗС-23-1 на тиждень: 09.03.2025 — 15.03.2025"
    );
}
