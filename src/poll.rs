// src/poll.rs
//! Optional unattended refresh: walk every registry group through
//! `refresh::update_group`, pausing between groups, then sleep until the next
//! cycle. One worker thread, one group at a time; all store writes go through
//! the shared mutex so they never interleave with on-demand refreshes.
//!
//! Nothing starts this by default; the CLI's `poll` command is the only user.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::{
    config::options::AppOptions,
    core::Fetch,
    refresh,
    store::Store,
};

pub type SharedStore = Arc<Mutex<Store>>;
pub type SharedFetcher = Arc<dyn Fetch + Send + Sync>;

/// Cloneable cancellation flag that sleepers can wait on.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self { Self::default() }

    pub fn cancel(&self) {
        let (flag, cv) = &*self.inner;
        *lock(flag) = true;
        cv.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *lock(&self.inner.0)
    }

    /// Sleep up to `dur`; returns `true` as soon as the token is cancelled.
    pub fn wait(&self, dur: Duration) -> bool {
        let (flag, cv) = &*self.inner;
        let deadline = Instant::now() + dur;
        let mut cancelled = lock(flag);
        while !*cancelled {
            let now = Instant::now();
            if now >= deadline { return false; }
            cancelled = match cv.wait_timeout(cancelled, deadline - now) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
        true
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Counts for one pass over the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub refreshed: usize,
    pub failed: usize,
    pub cancelled: bool,
}

/// One pass over the registry.
pub fn run_cycle(store: &SharedStore, fetcher: &dyn Fetch, opts: &AppOptions, cancel: &CancelToken) -> CycleSummary {
    let groups = lock(store).groups().to_vec();
    let mut summary = CycleSummary::default();
    logf!("Poll: cycle start, {} group(s)", groups.len());

    for (i, group) in groups.iter().enumerate() {
        if cancel.is_cancelled() {
            summary.cancelled = true;
            break;
        }

        // held for the whole update: merges for one group are serialized
        let res = refresh::update_group(&mut lock(store), fetcher, opts, group);
        match res {
            Ok(report) => {
                logf!("Poll: {}", report);
                summary.refreshed += 1;
            }
            Err(e) => {
                loge!("Poll: {} failed: {}", group, e);
                summary.failed += 1;
            }
        }

        if i + 1 < groups.len() && cancel.wait(opts.poll.group_pause) {
            summary.cancelled = true;
            break;
        }
    }
    summary
}

pub struct PollHandle {
    cancel: CancelToken,
    join: JoinHandle<()>,
}

impl PollHandle {
    pub fn cancel(&self) { self.cancel.cancel(); }

    /// Wait for the worker to exit. Call `cancel` first unless it is
    /// meant to run until the process ends.
    pub fn join(self) {
        if self.join.join().is_err() {
            loge!("Poll: worker panicked");
        }
    }
}

pub struct PollTask;

impl PollTask {
    pub fn spawn(store: SharedStore, fetcher: SharedFetcher, opts: AppOptions) -> PollHandle {
        let cancel = CancelToken::new();
        let token = cancel.clone();

        let join = thread::spawn(move || {
            loop {
                let summary = run_cycle(&store, fetcher.as_ref(), &opts, &token);
                logf!("Poll: cycle done, refreshed={} failed={}", summary.refreshed, summary.failed);
                if summary.cancelled || token.wait(opts.poll.interval) {
                    break;
                }
            }
            logf!("Poll: stopped");
        });

        PollHandle { cancel, join }
    }
}
