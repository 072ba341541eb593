//! Relevance scoring for content records.
//!
//! Additive heuristic scoring, deliberately simple and deterministic — not
//! a formal IR model. Each match source contributes a fixed weight and the
//! weights sum.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD_WEIGHT_HIERARCHY
//! The weights must satisfy:
//!
//! ```text
//! TITLE_WEIGHT > KEYWORD_WEIGHT > CONTENT_WEIGHT > FUZZY_WEIGHT > 0
//! ```
//!
//! With current values: `100 > 50 > 25 > 10` ✓
//!
//! A single title hit outranks a single hit anywhere else, but keyword
//! matches are additive per keyword, so a record with three matching
//! keywords (150) can outrank a lone title match (100). That is intended:
//! heavily-tagged records are the ones editors most wanted found.
//!
//! ## ZERO_MEANS_EXCLUDED
//! A score of 0 means "no match"; callers drop zero-scoring records before
//! ranking. Every weight is positive, so any match produces a nonzero
//! score.

use crate::types::SearchRecord;

/// Query substring found in the record title.
pub const TITLE_WEIGHT: u32 = 100;
/// Query substring found in a keyword. Additive per matching keyword.
pub const KEYWORD_WEIGHT: u32 = 50;
/// Query substring found in the record content.
pub const CONTENT_WEIGHT: u32 = 25;
/// Fuzzy-fallback hit. Additive per qualifying query word, uncapped.
pub const FUZZY_WEIGHT: u32 = 10;

/// Queries shorter than this (in characters) are not scored at all.
pub const MIN_QUERY_CHARS: usize = 2;

/// Query words longer than this (in characters) participate in the fuzzy
/// fallback.
const FUZZY_MIN_WORD_CHARS: usize = 3;

/// Score one record against a sanitized, lowercase-insensitive query.
///
/// Returns 0 when nothing matches. The query is expected to come from
/// [`crate::sanitize::sanitize`]; this function lowercases both sides but
/// performs no other cleaning.
///
/// # Algorithm
///
/// 1. Title contains the query: +[`TITLE_WEIGHT`].
/// 2. Each keyword containing the query: +[`KEYWORD_WEIGHT`].
/// 3. Content contains the query: +[`CONTENT_WEIGHT`].
/// 4. Fuzzy fallback: for each whitespace-separated query word longer than
///    3 characters, if the concatenated title+content+keywords haystack
///    contains the word with its last character dropped: +[`FUZZY_WEIGHT`].
///    This tolerates simple pluralization ("donations" finds "donation")
///    and trailing typos, nothing more.
pub fn score_record(record: &SearchRecord, query: &str) -> u32 {
    let query = query.to_lowercase();
    if query.chars().count() < MIN_QUERY_CHARS {
        return 0;
    }

    let title = record.title.to_lowercase();
    let content = record.content.to_lowercase();
    let keywords: Vec<String> = record.keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut score = 0u32;

    if title.contains(&query) {
        score += TITLE_WEIGHT;
    }

    for keyword in &keywords {
        if keyword.contains(&query) {
            score += KEYWORD_WEIGHT;
        }
    }

    if content.contains(&query) {
        score += CONTENT_WEIGHT;
    }

    // Fuzzy fallback over the concatenated haystack.
    let haystack = format!("{} {} {}", title, content, keywords.join(" "));
    for word in query.split_whitespace() {
        if word.chars().count() > FUZZY_MIN_WORD_CHARS {
            let stem: String = {
                let mut chars: Vec<char> = word.chars().collect();
                chars.pop();
                chars.into_iter().collect()
            };
            if haystack.contains(&stem) {
                score += FUZZY_WEIGHT;
            }
        }
    }

    score
}
