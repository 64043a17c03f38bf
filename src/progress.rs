// src/progress.rs
/// Lightweight progress reporting for the dataset load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once, before the fetch, with the resource being read.
    fn begin(&mut self, _resource: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when the records are parsed and ready.
    fn loaded(&mut self, _count: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
