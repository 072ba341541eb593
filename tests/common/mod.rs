//! Shared fixtures for integration and property tests.

use waypost::{Category, ContentIndex, SearchRecord};

pub fn record(
    title: &str,
    content: &str,
    url: &str,
    category: Category,
    keywords: &[&str],
) -> SearchRecord {
    SearchRecord {
        title: title.to_string(),
        content: content.to_string(),
        url: url.to_string(),
        category,
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
    }
}

/// A small index with one record per category.
pub fn small_index() -> ContentIndex {
    ContentIndex::new(vec![
        record(
            "Contact Us",
            "Get in touch with us.",
            "/contact",
            Category::Page,
            &["contact", "phone", "email"],
        ),
        record(
            "Education Support",
            "Quality education and school sponsorships.",
            "/programs#education",
            Category::Service,
            &["education", "school", "learning"],
        ),
        record(
            "Phone Number",
            "Call us any time.",
            "/contact#phone",
            Category::Contact,
            &["phone", "call", "telephone"],
        ),
        record(
            "Donate Money",
            "Make a donation to support our programs.",
            "/get-involved#donate",
            Category::Help,
            &["donate", "donation", "give"],
        ),
    ])
    .expect("fixture index is well-formed")
}
