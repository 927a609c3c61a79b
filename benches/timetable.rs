// benches/timetable.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use nung_sched::{
    core::codepage,
    remaining,
    render,
    specs::timetable,
    store::{self, Schedule},
};

/// A full semester-week page: six days, eight rows each, some with links.
fn sample_page() -> String {
    let mut html = String::from("<html><body><div class=\"row\">");
    for day in 3..9 {
        html.push_str(&format!("<div class=\"col-md-6\"><h4>{day:02}.03.2025 <small>День</small></h4><table class=\"table\">"));
        for slot in 1..=8 {
            html.push_str(&format!(
                "<tr><td>{slot}</td><td>08:00<br>09:20</td>\
                 <td>Дисципліна {slot} (Л)<br>ауд. 12{slot:02}<br>\
                 <a href=\"https://meet.google.com/aaa-bbbb-{slot:03}\">meet.google.com/aaa...</a></td></tr>"
            ));
        }
        html.push_str("</table></div>");
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_timetable(c: &mut Criterion) {
    let page = sample_page();
    let bytes = codepage::encode_cp1251(&page);

    c.bench_function("decode_cp1251", |b| {
        b.iter(|| black_box(codepage::decode_page_bytes(black_box(&bytes))).len())
    });

    c.bench_function("parse_group_schedule", |b| {
        b.iter(|| {
            let days = timetable::parse_group_schedule(black_box(&page));
            black_box(days.len())
        })
    });

    let mut schedule = Schedule::new();
    store::merge_days(&mut schedule, "G", timetable::parse_group_schedule(&page));
    let base = chrono::NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date");

    c.bench_function("render_week", |b| {
        b.iter(|| black_box(render::render_week(black_box(&schedule), "G", base)).len())
    });

    let lessons = &schedule["G"]["2025-03-05"].lessons;
    let now = base.and_hms_opt(12, 0, 0).expect("valid time");
    c.bench_function("render_remaining", |b| {
        b.iter(|| black_box(remaining::render_remaining(now, black_box(lessons))).len())
    });
}

criterion_group!(benches, bench_timetable);
criterion_main!(benches);
