// tests/common/mod.rs
//
// Canned registrar: serves windows-1251 pages through the `Fetch` seam and
// records every request it sees.
//
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use nung_sched::config::options::{AppOptions, StoreOptions};
use nung_sched::core::codepage::encode_cp1251;
use nung_sched::core::{BoxError, Fetch};

pub const LOOKUP_PAGE: &str = r#"<html><body>
<h4>Розклад групи <a title="Постійне посилання на розклад" href="timetable.cgi?n=700&amp;group=-1911">ПЗС-23-1</a></h4>
</body></html>"#;

pub const NO_PERMALINK_PAGE: &str = "<html><body><p>Групу не знайдено</p></body></html>";

pub const SCHEDULE_PAGE: &str = r#"<html><body>
<div class="row">
 <div class="col-md-6">
  <h4>03.03.2025 <small>Понеділок</small></h4>
  <table class="table">
   <tr><td>1</td><td>08:00<br>09:20</td><td>Математика (Л)<br>ауд. 1203</td></tr>
   <tr><td>3</td><td>11:00<br>12:20</td><td>Фізика<br>дистанційно</td></tr>
  </table>
 </div>
 <div class="col-md-6">
  <h4>04.03.2025 <small>Вівторок</small></h4>
  <table class="table">
   <tr><td>2</td><td>09:30<br>10:50</td><td>Хімія</td></tr>
  </table>
 </div>
</div>
</body></html>"#;

pub const EMPTY_SCHEDULE_PAGE: &str = "<html><body><p>Немає занять</p></body></html>";

pub struct FakeSite {
    pub lookup: Option<&'static str>,
    pub schedule: Option<&'static str>,
    pub posts: Mutex<Vec<(String, String)>>,
    pub gets: Mutex<Vec<String>>,
}

impl FakeSite {
    pub fn new(lookup: Option<&'static str>, schedule: Option<&'static str>) -> Self {
        Self { lookup, schedule, posts: Mutex::new(Vec::new()), gets: Mutex::new(Vec::new()) }
    }

    /// Lookup returns the permalink page, schedule the two-day page.
    pub fn healthy() -> Self {
        Self::new(Some(LOOKUP_PAGE), Some(SCHEDULE_PAGE))
    }

    pub fn post_count(&self) -> usize { self.posts.lock().unwrap().len() }
    pub fn get_count(&self) -> usize { self.gets.lock().unwrap().len() }
}

impl Fetch for FakeSite {
    fn get(&self, url: &str) -> Result<Vec<u8>, BoxError> {
        self.gets.lock().unwrap().push(url.to_string());
        match self.schedule {
            Some(page) => Ok(encode_cp1251(page)),
            None => Err(format!("HTTP error: 503 Service Unavailable {}", url).into()),
        }
    }

    fn post_form(&self, url: &str, body: String) -> Result<Vec<u8>, BoxError> {
        self.posts.lock().unwrap().push((url.to_string(), body));
        match self.lookup {
            Some(page) => Ok(encode_cp1251(page)),
            None => Err("connection refused".into()),
        }
    }
}

/// Fresh, empty store directory under the system temp dir.
pub fn temp_store(name: &str) -> StoreOptions {
    let dir: PathBuf = std::env::temp_dir().join(format!("nung_sched_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    StoreOptions::in_dir(dir)
}

pub fn app_options(store: StoreOptions) -> AppOptions {
    let mut opts = AppOptions { store, ..AppOptions::default() };
    opts.fetch.base_url = "https://registrar.test/cgi-bin/timetable.cgi".to_string();
    opts.poll.group_pause = std::time::Duration::ZERO;
    opts.poll.sync_pause = std::time::Duration::ZERO;
    opts
}
