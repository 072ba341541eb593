//! Result ranking: stable descending sort, capped result count.

use crate::types::ScoredResult;

/// Maximum number of results surfaced to the overlay.
pub const MAX_RESULTS: usize = 8;

/// Order scored candidates by descending score and keep the top
/// [`MAX_RESULTS`].
///
/// The sort is stable, so candidates with equal scores keep their original
/// index order — ranking a fixed index twice for the same query always
/// yields the same list.
pub fn rank(mut candidates: Vec<ScoredResult>) -> Vec<ScoredResult> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(MAX_RESULTS);
    candidates
}
