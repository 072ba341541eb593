//! Debounced in-page search over a static site's content index.
//!
//! The index is a fixed table describing every page and section of the
//! site; searches are a linear scan with additive heuristic scoring. Small
//! on purpose — tens of records, one pass per pause in typing.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐    ┌────────────┐    ┌────────────┐    ┌───────────┐
//! │ types.rs  │───▶│  index.rs  │───▶│ scoring.rs │───▶│ranking.rs │
//! │ (records, │    │ (validated │    │ (additive  │    │ (stable   │
//! │ category) │    │   table)   │    │  weights)  │    │  top-8)   │
//! └───────────┘    └────────────┘    └────────────┘    └───────────┘
//!                        │                  ▲
//!                        ▼                  │ sanitize.rs
//!                  ┌─────────────────────────────────┐
//!                  │           overlay.rs            │
//!                  │ (state machine + debounce.rs +  │
//!                  │        Navigator seam)          │
//!                  └─────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use waypost::{search, site_index};
//!
//! let results = search(site_index(), "contact");
//! assert_eq!(results[0].record.title, "Contact Us");
//! ```
//!
//! For the interactive path, drive an [`OverlayController`] with input and
//! key events and call [`OverlayController::tick`] when its debounce
//! deadline passes.

mod debounce;
mod index;
mod overlay;
mod ranking;
mod sanitize;
mod scoring;
mod search;
mod types;

pub use debounce::{Debounce, DEBOUNCE_WINDOW};
pub use index::{site_index, ContentIndex, IndexError};
pub use overlay::{Key, Navigator, OverlayController, Phase};
pub use ranking::{rank, MAX_RESULTS};
pub use sanitize::{sanitize, MAX_QUERY_CHARS};
pub use scoring::{
    score_record, CONTENT_WEIGHT, FUZZY_WEIGHT, KEYWORD_WEIGHT, MIN_QUERY_CHARS, TITLE_WEIGHT,
};
pub use search::{search, NO_RESULT_SUGGESTIONS};
pub use types::{Category, ScoredResult, SearchRecord};
