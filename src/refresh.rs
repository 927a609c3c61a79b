// src/refresh.rs
//! Site → store. Resolves a group's site id (cached in the store), fetches
//! its timetable page, parses it, and merges the result per date.

use std::fmt;
use std::thread;

use crate::{
    config::options::AppOptions,
    core::{codepage, BoxError, Fetch},
    progress::Progress,
    specs::{group_id, timetable},
    store::Store,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated { id: String, days: usize },
    NoLessons { id: String },
    NoGroupId,
}

/// Result of one `update_group` call, with the group name for messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateReport {
    pub group: String,
    pub outcome: UpdateOutcome,
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.group;
        match &self.outcome {
            UpdateOutcome::Updated { id, days } => {
                write!(f, "Розклад для {g} (id {id}) оновлено, днів: {days}")
            }
            UpdateOutcome::NoLessons { id } => {
                write!(f, "На сайті не знайдено пар для групи {g} (id {id})")
            }
            UpdateOutcome::NoGroupId => write!(f, "Не вдалося отримати id групи {g} із сайту"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for SyncSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Оновлено: {}\nПропущено (вже були): {}\nНе вдалося: {}",
            self.updated, self.skipped, self.failed
        )
    }
}

/// Look a group's site id up by name. `None` on HTTP failure or when the page
/// has no permalink (both logged).
pub fn fetch_group_id(fetcher: &dyn Fetch, opts: &AppOptions, group: &str) -> Option<String> {
    let body = codepage::encode_form(&[("group", group), ("sdate", ""), ("edate", "")]);
    let bytes = match fetcher.post_form(&opts.fetch.lookup_url(), body) {
        Ok(b) => b,
        Err(e) => {
            loge!("GroupId: lookup for {} failed: {}", group, e);
            return None;
        }
    };

    let html = codepage::decode_page_bytes(&bytes);
    match group_id::extract_group_id(&html) {
        Some(id) => {
            logf!("GroupId: {} → {}", group, id);
            Some(id)
        }
        None => {
            loge!("GroupId: no id in lookup page for {}", group);
            None
        }
    }
}

/// Timetable page of a group, decoded.
pub fn fetch_group_html(fetcher: &dyn Fetch, opts: &AppOptions, id: &str) -> Result<String, BoxError> {
    let url = opts.fetch.schedule_url(id);
    let bytes = fetcher
        .get(&url)
        .map_err(|e| format!("fetching schedule for group={id}: {e}"))?;
    Ok(codepage::decode_page_bytes(&bytes))
}

/// Cached id, or look it up and persist it.
fn resolve_group_id(store: &mut Store, fetcher: &dyn Fetch, opts: &AppOptions, group: &str)
    -> Result<Option<String>, BoxError>
{
    if let Some(id) = store.group_id(group) {
        return Ok(Some(s!(id)));
    }
    let Some(id) = fetch_group_id(fetcher, opts, group) else {
        return Ok(None);
    };
    store.set_group_id(group, &id);
    store.save_group_ids()?;
    Ok(Some(id))
}

pub fn update_group(store: &mut Store, fetcher: &dyn Fetch, opts: &AppOptions, group: &str)
    -> Result<UpdateReport, BoxError>
{
    let report = |outcome| UpdateReport { group: s!(group), outcome };

    let Some(id) = resolve_group_id(store, fetcher, opts, group)? else {
        return Ok(report(UpdateOutcome::NoGroupId));
    };

    let html = fetch_group_html(fetcher, opts, &id)?;
    let days = timetable::parse_group_schedule(&html);
    if days.is_empty() {
        return Ok(report(UpdateOutcome::NoLessons { id }));
    }

    let count = days.len();
    store.merge_days(group, days);
    store.save_schedule()?;
    Ok(report(UpdateOutcome::Updated { id, days: count }))
}

/// Best-effort refresh before answering a query: any failure is logged and
/// the cached schedule stays as it was.
pub fn refresh_on_demand(store: &mut Store, fetcher: &dyn Fetch, opts: &AppOptions, group: &str) {
    if group.trim().is_empty() { return; }
    match update_group(store, fetcher, opts, group) {
        Ok(report) => logf!("Refresh: {}", report),
        Err(e) => loge!("Refresh: {} failed: {}", group, e),
    }
}

/// Fill in missing site ids for every registry group.
pub fn sync_group_ids(
    store: &mut Store,
    fetcher: &dyn Fetch,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> SyncSummary {
    let groups = store.groups().to_vec();
    let mut summary = SyncSummary::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(groups.len());
    }

    for (i, name) in groups.iter().enumerate() {
        if store.group_id(name).is_some() {
            summary.skipped += 1;
            continue;
        }

        match fetch_group_id(fetcher, opts, name) {
            Some(id) => {
                store.set_group_id(name, &id);
                match store.save_group_ids() {
                    Ok(()) => {
                        summary.updated += 1;
                        if let Some(p) = progress.as_deref_mut() { p.item_done(name); }
                    }
                    Err(e) => {
                        loge!("Sync: saving ids failed: {}", e);
                        summary.failed += 1;
                        if let Some(p) = progress.as_deref_mut() { p.item_failed(name, &e.to_string()); }
                    }
                }
            }
            None => {
                summary.failed += 1;
                if let Some(p) = progress.as_deref_mut() { p.item_failed(name, "id not found"); }
            }
        }

        if i + 1 < groups.len() {
            thread::sleep(opts.poll.sync_pause);
        }
    }

    logf!("Sync: updated={} skipped={} failed={}", summary.updated, summary.skipped, summary.failed);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}
