// src/progress.rs
/// Status sink for the long runs (id sync, registry refresh). The CLI prints
/// through it; library callers may pass `None`.
pub trait Progress {
    /// Number of registry groups about to be processed.
    fn begin(&mut self, _total: usize) {}

    fn log(&mut self, _msg: &str) {}

    fn item_done(&mut self, _group: &str) {}

    /// `reason` is short and human-readable.
    fn item_failed(&mut self, _group: &str, _reason: &str) {}

    fn finish(&mut self) {}
}

/// Discards everything.
pub struct NullProgress;
impl Progress for NullProgress {}
