// src/log.rs
//! Append-only debug log next to the store (`<store>/debug.log`).
//!
//! Lines look like `[00:00:01.250][INFO] Store: loaded ...`; the clock is time
//! since the first log call. Writing never fails the caller.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static TARGET: OnceLock<PathBuf> = OnceLock::new();
static WRITER: Mutex<()> = Mutex::new(());
static EPOCH: OnceLock<Instant> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        })
    }
}

/// Point the log at `path`. First call wins.
pub fn init<P: AsRef<Path>>(path: P) {
    let _ = TARGET.set(path.as_ref().to_path_buf());
    EPOCH.get_or_init(Instant::now);
}

fn target() -> &'static Path {
    TARGET.get_or_init(|| Path::new(STORE_DIR).join(LOG_FILE))
}

fn clock(since: Duration) -> String {
    let ms = since.as_millis() as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}

pub fn write_log(level: Level, msg: &str) {
    let since = EPOCH.get_or_init(Instant::now).elapsed();
    let line = format!("[{}][{}] {}\n", clock(since), level, msg);
    let path = target();

    let Ok(_guard) = WRITER.lock() else { return };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
