// src/progress.rs
/// Lightweight progress reporting used by batch lookups.
/// Front ends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of words to look up.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one word's lookup completes, successful or not.
    fn item_done(&mut self, _word: &str) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
