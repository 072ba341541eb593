//! Query sanitization.
//!
//! Free-text input is cleaned before it reaches matching or display:
//! quote/semicolon/backslash characters, `<script>` blocks, and
//! `javascript:` scheme tokens are stripped, whitespace is trimmed, and the
//! result is capped at [`MAX_QUERY_CHARS`] characters.
//!
//! Sanitization is idempotent: `sanitize(sanitize(x)) == sanitize(x)` for
//! every input. A single global-replace pass does not guarantee that —
//! removing `javascript:` from `javajavascript:script:` reassembles the
//! token from its own residue — so pattern removal loops until the string
//! stops changing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum sanitized query length, in characters (not bytes).
pub const MAX_QUERY_CHARS: usize = 100;

static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| {
    // Non-greedy body match; the regex crate has no lookaround.
    Regex::new(r"(?is)<script\b.*?</script>").expect("script block pattern compiles")
});

static JS_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("javascript scheme pattern compiles"));

/// Clean raw user input for matching and display.
///
/// Never fails; always returns a string, possibly empty. Safe to call on
/// already-sanitized input.
pub fn sanitize(raw: &str) -> String {
    let mut cleaned = strip_to_fixpoint(raw);
    cleaned = cleaned.trim().to_string();
    cleaned = truncate_chars(&cleaned, MAX_QUERY_CHARS);
    // Truncation inside interior whitespace can expose a trailing space.
    cleaned.trim_end().to_string()
}

/// Apply every removal pattern repeatedly until nothing changes.
fn strip_to_fixpoint(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(input: &str) -> String {
    let without_blocks = SCRIPT_BLOCK.replace_all(input, "");
    let without_scheme = JS_SCHEME.replace_all(&without_blocks, "");
    without_scheme
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | ';' | '\\'))
        .collect()
}

/// Truncate to at most `max` characters without splitting a code point.
fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}
