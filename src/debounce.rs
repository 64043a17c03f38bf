// src/debounce.rs
use std::time::{Duration, Instant};

/// The one piece of work waiting out the quiet period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTask<T> {
    pub due: Instant,
    pub value: T,
}

/// Holds at most one pending task. Scheduling replaces (cancels) whatever
/// was waiting. Time is passed in; the host decides when to poll.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<PendingTask<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration { self.delay }

    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(PendingTask { due: now + self.delay, value });
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|t| t.value)
    }

    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|t| t.due)
    }

    /// Hand back the value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|t| now >= t.due);
        if due { self.cancel() } else { None }
    }
}
