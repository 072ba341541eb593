//! The search overlay controller.
//!
//! Owns query state, debounces keystrokes, runs the scoring pipeline, and
//! drives keyboard selection. The view layer feeds it raw input and key
//! events plus the current instant; navigation happens through the
//! [`Navigator`] seam when a result is committed.
//!
//! # State machine
//!
//! ```text
//! Closed ──open──▶ Open(Empty) ──input──▶ Open(Querying)
//!                                             │ tick (debounce due)
//!                              ┌──────────────┴──────────────┐
//!                              ▼                             ▼
//!                      Open(Results)                 Open(NoResults)
//! ```
//!
//! `Escape` closes from any open sub-state; committing a result navigates
//! and then closes. Closing always cancels the pending debounce, so no
//! scoring pass can land after the overlay is gone.

use crate::debounce::Debounce;
use crate::index::ContentIndex;
use crate::scoring::MIN_QUERY_CHARS;
use crate::search::{search, NO_RESULT_SUGGESTIONS};
use crate::types::ScoredResult;
use std::time::Instant;
use tracing::debug;

/// Where committed results go. The web build routes through the SPA
/// router; the CLI prints the destination; tests record it.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Keys the overlay reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

/// What the open overlay is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Open, no query yet (or query cleared).
    Empty,
    /// Query present, debounce window still open.
    Querying,
    /// Ranked results on screen.
    Results,
    /// A query of meaningful length matched nothing.
    NoResults,
}

#[derive(Debug)]
enum State {
    Closed,
    Open {
        query: String,
        results: Vec<ScoredResult>,
        /// Selection cursor. `None` is the "nothing selected" position the
        /// view renders as -1; clamped to `[None, results.len() - 1]`.
        selected: Option<usize>,
        phase: Phase,
    },
}

/// Debounced, keyboard-driven controller over a read-only content index.
///
/// One-shot interaction: committing a result navigates, then resets the
/// controller to `Closed` with query and results cleared.
pub struct OverlayController<'a> {
    index: &'a ContentIndex,
    state: State,
    debounce: Debounce,
}

impl<'a> OverlayController<'a> {
    pub fn new(index: &'a ContentIndex) -> Self {
        OverlayController {
            index,
            state: State::Closed,
            debounce: Debounce::new(),
        }
    }

    /// `Closed → Open(Empty)`. No-op when already open.
    pub fn open(&mut self) {
        if matches!(self.state, State::Closed) {
            debug!("overlay opened");
            self.state = State::Open {
                query: String::new(),
                results: Vec::new(),
                selected: None,
                phase: Phase::Empty,
            };
        }
    }

    /// Close and clear unconditionally, cancelling any pending debounce.
    pub fn close(&mut self) {
        self.debounce.cancel();
        if !matches!(self.state, State::Closed) {
            debug!("overlay closed");
        }
        self.state = State::Closed;
    }

    /// Replace the query with (sanitized) `raw` and re-arm the debounce.
    ///
    /// Any typed character resets the selection cursor. Clearing the query
    /// returns to `Empty` immediately; everything else waits in `Querying`
    /// until the debounce fires via [`tick`](Self::tick).
    pub fn input(&mut self, raw: &str, now: Instant) {
        let State::Open {
            query,
            results,
            selected,
            phase,
        } = &mut self.state
        else {
            return;
        };

        *query = crate::sanitize::sanitize(raw);
        *selected = None;

        if query.is_empty() {
            self.debounce.cancel();
            results.clear();
            *phase = Phase::Empty;
        } else {
            *phase = Phase::Querying;
            self.debounce.arm(query.clone(), now);
        }
    }

    /// Run the scoring pipeline if the debounce window has elapsed.
    ///
    /// Returns `true` when a pass actually ran. A burst of keystrokes
    /// inside the window yields exactly one pass, on the final query.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(fired) = self.debounce.fire(now) else {
            return false;
        };
        let State::Open {
            results, phase, ..
        } = &mut self.state
        else {
            // Closed in the meantime; the cancel in close() makes this
            // unreachable, but a stray pass must never resurrect state.
            return false;
        };

        if fired.chars().count() < MIN_QUERY_CHARS {
            // Too short to score; keep waiting for more input.
            return false;
        }

        *results = search(self.index, &fired);
        *phase = if results.is_empty() {
            Phase::NoResults
        } else {
            Phase::Results
        };
        debug!(query = %fired, results = results.len(), "scoring pass");
        true
    }

    /// Handle a key event while open. Ignored when closed.
    pub fn key(&mut self, key: Key, navigator: &mut dyn Navigator) {
        match key {
            Key::Escape => self.close(),
            Key::ArrowDown => {
                if let State::Open {
                    results, selected, ..
                } = &mut self.state
                {
                    *selected = match (*selected, results.len()) {
                        (_, 0) => None,
                        (None, _) => Some(0),
                        (Some(i), len) if i + 1 < len => Some(i + 1),
                        (Some(i), _) => Some(i),
                    };
                }
            }
            Key::ArrowUp => {
                if let State::Open { selected, .. } = &mut self.state {
                    *selected = match *selected {
                        Some(0) | None => None,
                        Some(i) => Some(i - 1),
                    };
                }
            }
            Key::Enter => {
                if let Some(i) = self.selected() {
                    self.commit(i, navigator);
                }
            }
        }
    }

    /// Commit the result at `position` (click or Enter): navigate to its
    /// url, then reset to `Closed` with everything cleared.
    pub fn commit(&mut self, position: usize, navigator: &mut dyn Navigator) {
        let State::Open { results, .. } = &self.state else {
            return;
        };
        let Some(result) = results.get(position) else {
            return;
        };
        let url = result.record.url.clone();
        debug!(url = %url, "result committed");
        navigator.navigate(&url);
        self.close();
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, State::Closed)
    }

    /// When the pending scoring pass becomes due, if one is armed. Drivers
    /// use this to bound their event-poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Current sub-state, `None` when closed.
    pub fn phase(&self) -> Option<Phase> {
        match &self.state {
            State::Closed => None,
            State::Open { phase, .. } => Some(*phase),
        }
    }

    pub fn query(&self) -> &str {
        match &self.state {
            State::Closed => "",
            State::Open { query, .. } => query,
        }
    }

    pub fn results(&self) -> &[ScoredResult] {
        match &self.state {
            State::Closed => &[],
            State::Open { results, .. } => results,
        }
    }

    /// Selection cursor; `None` is the -1 position.
    pub fn selected(&self) -> Option<usize> {
        match &self.state {
            State::Closed => None,
            State::Open { selected, .. } => *selected,
        }
    }

    /// Queries to suggest in the `NoResults` view.
    pub fn suggestions(&self) -> &'static [&'static str] {
        NO_RESULT_SUGGESTIONS
    }
}
