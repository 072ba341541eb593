//! Pipeline scenarios against the built-in site index.

use crate::common::{record, small_index};
use waypost::{
    search, site_index, Category, ContentIndex, FUZZY_WEIGHT, KEYWORD_WEIGHT, MAX_RESULTS,
    NO_RESULT_SUGGESTIONS, TITLE_WEIGHT,
};

#[test]
fn contact_query_scores_title_plus_keyword() {
    let results = search(&small_index(), "contact");
    assert_eq!(results[0].record.title, "Contact Us");
    // Title (+100), keyword "contact" (+50), content "in touch with us"
    // has no direct hit, fuzzy stem "contac" is in the title (+10).
    assert_eq!(results[0].score, TITLE_WEIGHT + KEYWORD_WEIGHT + FUZZY_WEIGHT);
}

#[test]
fn nonsense_query_yields_empty_with_suggestions_available() {
    let results = search(site_index(), "xq");
    assert!(results.is_empty());
    assert_eq!(
        NO_RESULT_SUGGESTIONS,
        ["contact", "help children", "programs", "donate"]
    );
}

#[test]
fn truncated_word_reaches_its_record_through_fuzzy() {
    // "donatx" matches nothing directly anywhere in the fixture; the
    // stem "donat" appears in "donation", so the record still surfaces,
    // below any direct hit.
    let results = search(&small_index(), "donatx");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.title, "Donate Money");
    assert_eq!(results[0].score, FUZZY_WEIGHT);
}

#[test]
fn fuzzy_hits_rank_below_direct_hits() {
    let index = ContentIndex::new(vec![
        record("Donate Money", "", "/donate", Category::Help, &["donate"]),
        record("Annual Report", "Donations summary.", "/report", Category::Page, &[]),
    ])
    .expect("well-formed");

    let results = search(&index, "donate");
    assert_eq!(results[0].record.title, "Donate Money");
    assert!(results[0].score > results[1].score);
}

#[test]
fn builtin_index_answers_common_queries() {
    for (query, expected_title) in [
        ("donate", "Donate Money"),
        ("volunteer", "Volunteer with Us"),
        ("gallery", "Gallery"),
        ("education", "Education Support"),
    ] {
        let results = search(site_index(), query);
        assert!(
            results.iter().any(|r| r.record.title == expected_title),
            "query {:?} should surface {:?}",
            query,
            expected_title
        );
    }
}

#[test]
fn broad_query_is_capped_at_eight() {
    // "children" appears across most of the site's records.
    let results = search(site_index(), "children");
    assert_eq!(results.len(), MAX_RESULTS);
}

#[test]
fn hostile_input_is_neutralized_not_rejected() {
    let results = search(site_index(), "<script>alert(1)</script>contact");
    assert!(!results.is_empty());
    assert_eq!(results[0].record.title, "Contact Us");
}

#[test]
fn search_never_mutates_the_index() {
    let index = small_index();
    let before = index.records().to_vec();
    let _ = search(&index, "contact");
    let _ = search(&index, "zzzz");
    assert_eq!(index.records(), before.as_slice());
}
