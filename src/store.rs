// src/store.rs
//! Owner of the three persisted mappings:
//!
//! - **schedule**: group → ISO date → [`DayRecord`]
//! - **group ids**: group → site id (lazy, never invalidated)
//! - **groups**: the ordered registry of known group names
//!
//! Loading is forgiving: a missing or unparsable file becomes an empty mapping
//! (logged), and inside the schedule a bad day entry is dropped or repaired on
//! its own. Saving propagates I/O errors to the caller.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::config::options::StoreOptions;
use crate::days::{self, Weekday};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub weekday: Weekday,
    pub lessons: Vec<String>,
}

/// group → ISO date → day
pub type Schedule = BTreeMap<String, BTreeMap<String, DayRecord>>;
/// group → site id
pub type GroupSiteIds = BTreeMap<String, String>;

#[derive(Clone, Debug, Default)]
pub struct Store {
    opts: StoreOptions,
    schedule: Schedule,
    group_ids: GroupSiteIds,
    groups: Vec<String>,
}

impl Store {
    /// Empty store bound to `opts`' files (nothing read yet).
    pub fn new(opts: StoreOptions) -> Self {
        Self { opts, ..Self::default() }
    }

    pub fn load(opts: StoreOptions) -> Self {
        let schedule = load_schedule(&opts.schedule_path());
        let group_ids: GroupSiteIds = load_json(&opts.group_ids_path());
        let groups: Vec<String> = load_json(&opts.groups_path());
        logf!(
            "Store: loaded {} group schedule(s), {} id(s), {} registry group(s) from {}",
            schedule.len(),
            group_ids.len(),
            groups.len(),
            opts.dir().display()
        );
        Self { opts, schedule, group_ids, groups }
    }

    pub fn options(&self) -> &StoreOptions { &self.opts }

    /* ---------- schedule ---------- */

    pub fn schedule(&self) -> &Schedule { &self.schedule }

    pub fn day(&self, group: &str, iso_date: &str) -> Option<&DayRecord> {
        self.schedule.get(group)?.get(iso_date)
    }

    /// Lesson lines of `group` on `iso_date`; empty when unknown.
    pub fn lessons(&self, group: &str, iso_date: &str) -> &[String] {
        self.day(group, iso_date).map(|d| d.lessons.as_slice()).unwrap_or(&[])
    }

    /// Additive merge: dates present in `days` replace the stored ones,
    /// every other date of the group is left alone.
    pub fn merge_days(&mut self, group: &str, days: BTreeMap<String, DayRecord>) {
        merge_days(&mut self.schedule, group, days);
    }

    pub fn save_schedule(&self) -> io::Result<()> {
        save_json(&self.opts.schedule_path(), &self.schedule)
    }

    /// Drop in-memory schedule and re-read it from disk.
    pub fn reload_schedule(&mut self) {
        self.schedule = load_schedule(&self.opts.schedule_path());
        logf!("Store: schedule reloaded ({} group(s))", self.schedule.len());
    }

    /* ---------- group ids ---------- */

    pub fn group_ids(&self) -> &GroupSiteIds { &self.group_ids }

    /// Cached site id, ignoring blank entries.
    pub fn group_id(&self, group: &str) -> Option<&str> {
        self.group_ids
            .get(group)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn set_group_id(&mut self, group: &str, id: &str) {
        self.group_ids.insert(s!(group), s!(id));
    }

    pub fn save_group_ids(&self) -> io::Result<()> {
        save_json(&self.opts.group_ids_path(), &self.group_ids)
    }

    /* ---------- registry ---------- */

    pub fn groups(&self) -> &[String] { &self.groups }

    pub fn set_groups(&mut self, groups: Vec<String>) {
        self.groups = groups;
    }

    pub fn contains_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g == name)
    }

    /// Case-insensitive substring search over the registry, in registry order.
    pub fn find_groups(&self, query: &str) -> Vec<&str> {
        let q = query.trim().to_lowercase();
        if q.is_empty() { return Vec::new(); }
        self.groups
            .iter()
            .filter(|g| g.to_lowercase().contains(&q))
            .map(String::as_str)
            .collect()
    }
}

pub fn merge_days(schedule: &mut Schedule, group: &str, days: BTreeMap<String, DayRecord>) {
    schedule.entry(s!(group)).or_default().extend(days);
}

/// Read the schedule one day at a time, so a bad entry costs only itself.
/// Non-date keys are dropped; a record whose weekday does not decode keeps
/// its lessons and gets the weekday of its date key.
fn load_schedule(path: &Path) -> Schedule {
    let raw: BTreeMap<String, Value> = load_json(path);
    let mut schedule = Schedule::new();
    for (group, value) in raw {
        let Value::Object(entries) = value else {
            loge!("Store: dropping group {:?}, not an object", group);
            continue;
        };
        let kept = entries
            .into_iter()
            .filter_map(|(key, value)| day_record(&group, &key, value).map(|rec| (key, rec)))
            .collect();
        schedule.insert(group, kept);
    }
    schedule
}

#[derive(Deserialize)]
struct LessonsOnly {
    lessons: Vec<String>,
}

fn day_record(group: &str, key: &str, value: Value) -> Option<DayRecord> {
    let Some(date) = days::parse_iso(key) else {
        loge!("Store: dropping non-date key {:?} for {}", key, group);
        return None;
    };
    if let Ok(rec) = serde_json::from_value::<DayRecord>(value.clone()) {
        return Some(rec);
    }
    match serde_json::from_value::<LessonsOnly>(value) {
        Ok(raw) => {
            logd!("Store: {} {} has a bad weekday, taking it from the date", group, key);
            Some(DayRecord { weekday: Weekday::of(date), lessons: raw.lessons })
        }
        Err(e) => {
            loge!("Store: dropping {} for {}: {}", key, group, e);
            None
        }
    }
}

fn load_json<T: DeserializeOwned + Default>(path: &Path) -> T {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            loge!("Store: read {} failed: {}", path.display(), e);
            return T::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            loge!("Store: parse {} failed: {}", path.display(), e);
            T::default()
        }
    }
}

fn save_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)
}
