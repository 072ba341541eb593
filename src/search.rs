//! The search pipeline: sanitize, score, filter, rank.

use crate::index::ContentIndex;
use crate::ranking::rank;
use crate::sanitize::sanitize;
use crate::scoring::{score_record, MIN_QUERY_CHARS};
use crate::types::ScoredResult;
use tracing::debug;

/// Queries a user might try when their own produced nothing.
pub const NO_RESULT_SUGGESTIONS: &[&str] = &["contact", "help children", "programs", "donate"];

/// Search the index for records matching the raw query.
///
/// The query is sanitized first; sanitized queries shorter than
/// [`MIN_QUERY_CHARS`] characters short-circuit to an empty list without
/// touching the scorer. Zero-scoring records are excluded, the rest are
/// ranked descending (stable on ties) and capped at
/// [`crate::ranking::MAX_RESULTS`].
///
/// Deterministic: a fixed index and query always produce the same ordered
/// list. No failure path — a query with no matches is an empty result, not
/// an error.
pub fn search(index: &ContentIndex, raw_query: &str) -> Vec<ScoredResult> {
    let query = sanitize(raw_query);
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let candidates: Vec<ScoredResult> = index
        .records()
        .iter()
        .filter_map(|record| {
            let score = score_record(record, &query);
            (score > 0).then(|| ScoredResult {
                record: record.clone(),
                score,
            })
        })
        .collect();

    debug!(
        query = %query,
        candidates = candidates.len(),
        "scored content index"
    );

    rank(candidates)
}
