// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://dekanat.nung.edu.ua/cgi-bin/timetable.cgi";
pub const TIMETABLE_QUERY: &str = "n=700";
pub const USER_AGENT: &str = "nung_sched/0.1";
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Page markers
pub const PERMALINK_MARKER: &str = "Постійне посилання";

// Local store
pub const STORE_DIR: &str = ".store";
pub const SCHEDULE_FILE: &str = "schedule.json";
pub const GROUP_IDS_FILE: &str = "group_ids.json";
pub const GROUPS_FILE: &str = "groups.json";
pub const LOG_FILE: &str = "debug.log";

// Polling (be polite)
pub const GROUP_PAUSE_MS: u64 = 1_000;
pub const SYNC_PAUSE_MS: u64 = 500;
pub const POLL_INTERVAL_SECS: u64 = 60 * 60;

// Render
pub const SLOT_COUNT: u8 = 8;
pub const LESSON_DEFAULT_TIMES: [(&str, &str); 8] = [
    ("1", "08:00 - 09:20"),
    ("2", "09:30 - 10:50"),
    ("3", "11:00 - 12:20"),
    ("4", "12:50 - 14:10"),
    ("5", "14:20 - 15:40"),
    ("6", "15:50 - 17:10"),
    ("7", "17:20 - 18:40"),
    ("8", "18:50 - 20:10"),
];
pub const WEEK_RULE_WIDTH: usize = 32;
pub const GROUP_MATCH_LIMIT: usize = 30;

/// Default time range for a slot number, if it is one of the fixed eight.
pub fn default_time(slot: &str) -> Option<&'static str> {
    LESSON_DEFAULT_TIMES
        .iter()
        .find(|(n, _)| *n == slot)
        .map(|(_, t)| *t)
}
