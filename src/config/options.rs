// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub store: StoreOptions,
    pub fetch: FetchOptions,
    pub poll: PollOptions,
}

/// Where the persisted mappings live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    dir: PathBuf,
    pub schedule_file: String,
    pub group_ids_file: String,
    pub groups_file: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
            schedule_file: s!(SCHEDULE_FILE),
            group_ids_file: s!(GROUP_IDS_FILE),
            groups_file: s!(GROUPS_FILE),
        }
    }
}

impl StoreOptions {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf(), ..Self::default() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn set_dir(&mut self, text: &str) {
        self.dir = PathBuf::from(text.trim());
    }

    pub fn schedule_path(&self) -> PathBuf { self.dir.join(&self.schedule_file) }
    pub fn group_ids_path(&self) -> PathBuf { self.dir.join(&self.group_ids_file) }
    pub fn groups_path(&self) -> PathBuf { self.dir.join(&self.groups_file) }
    pub fn log_path(&self) -> PathBuf { self.dir.join(LOG_FILE) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    /// `<base>?n=700` – the lookup endpoint (group name → page with permalink).
    pub fn lookup_url(&self) -> String {
        join!(&self.base_url, "?", TIMETABLE_QUERY)
    }

    /// `<base>?n=700&group=<id>` – the schedule page of one group.
    pub fn schedule_url(&self, group_id: &str) -> String {
        let escaped: String = url::form_urlencoded::byte_serialize(group_id.as_bytes()).collect();
        join!(&self.lookup_url(), "&group=", &escaped)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollOptions {
    /// Pause between two groups inside one polling cycle.
    pub group_pause: Duration,
    /// Pause between two id lookups in `sync_group_ids`.
    pub sync_pause: Duration,
    /// Sleep between polling cycles.
    pub interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            group_pause: Duration::from_millis(GROUP_PAUSE_MS),
            sync_pause: Duration::from_millis(SYNC_PAUSE_MS),
            interval: Duration::from_secs(POLL_INTERVAL_SECS),
        }
    }
}
