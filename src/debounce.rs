//! A cancellable, re-armable debounce timer.
//!
//! Each keystroke re-arms the timer with the latest query; only the last
//! write before a pause survives to fire. The clock is injected (`Instant`
//! arguments) so drivers decide how time advances — the interactive CLI
//! polls against [`Debounce::deadline`], tests pass fabricated instants.
//!
//! This is debouncing, not throttling: a burst of N arms inside the window
//! produces exactly one firing, carrying the final value.

use std::time::{Duration, Instant};

/// How long input must be quiet before the pending query fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// At most one pending `(query, deadline)` pair. Last write wins.
#[derive(Debug, Default)]
pub struct Debounce {
    pending: Option<(String, Instant)>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `query` to fire [`DEBOUNCE_WINDOW`] after `now`, discarding
    /// any previously pending query.
    pub fn arm(&mut self, query: String, now: Instant) {
        self.pending = Some((query, now + DEBOUNCE_WINDOW));
    }

    /// Drop the pending query, if any. Idempotent.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The instant the pending query becomes due, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Deliver the pending query if its deadline has passed, clearing it.
    ///
    /// Returns `None` when nothing is armed or the window is still open.
    /// A delivered query is delivered once.
    pub fn fire(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                self.pending.take().map(|(query, _)| query)
            }
            _ => None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}
