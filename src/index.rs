//! Content index construction and validation.
//!
//! The index is a fixed list of [`SearchRecord`]s describing every page and
//! section of the site. It is validated once at construction and never
//! mutated afterwards, so the search path can assume well-formed records
//! instead of re-checking them on every pass.
//!
//! # Invariants (enforced by `ContentIndex::new`)
//!
//! - Every record has a non-empty `title` and a non-empty `url`.
//! - No two records share the same `(url, category)` pair.

use crate::types::{Category, SearchRecord};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;

/// Error type for content index invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A record's `title` is empty (position in the input list).
    EmptyTitle { position: usize },
    /// A record's `url` is empty (position in the input list).
    EmptyUrl { position: usize },
    /// Two records share the same `(url, category)` pair.
    DuplicateEntry {
        position: usize,
        url: String,
        category: Category,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::EmptyTitle { position } => {
                write!(f, "record {} has an empty title", position)
            }
            IndexError::EmptyUrl { position } => {
                write!(f, "record {} has an empty url", position)
            }
            IndexError::DuplicateEntry {
                position,
                url,
                category,
            } => {
                write!(
                    f,
                    "record {} duplicates ({}, {})",
                    position, url, category
                )
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// A validated, read-only list of searchable site content.
///
/// Construction is the only place invariants are checked; there is no
/// mutation API. Searches borrow the index, so one instance serves the
/// whole application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIndex {
    records: Vec<SearchRecord>,
}

impl ContentIndex {
    /// Validate and wrap a list of records.
    pub fn new(records: Vec<SearchRecord>) -> Result<Self, IndexError> {
        let mut seen: HashSet<(&str, Category)> = HashSet::new();
        for (position, record) in records.iter().enumerate() {
            if record.title.is_empty() {
                return Err(IndexError::EmptyTitle { position });
            }
            if record.url.is_empty() {
                return Err(IndexError::EmptyUrl { position });
            }
            if !seen.insert((record.url.as_str(), record.category)) {
                return Err(IndexError::DuplicateEntry {
                    position,
                    url: record.url.clone(),
                    category: record.category,
                });
            }
        }
        Ok(ContentIndex { records })
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&SearchRecord> {
        self.records.get(position)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn record(
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

static SITE_INDEX: Lazy<ContentIndex> = Lazy::new(|| {
    ContentIndex::new(site_records()).expect("built-in site index is well-formed")
});

/// The built-in index of the site's pages, programs, contact details, and
/// "how to help" entries. Built once on first use, read-only thereafter.
pub fn site_index() -> &'static ContentIndex {
    &SITE_INDEX
}

fn site_records() -> Vec<SearchRecord> {
    use Category::{Contact, Help, Page, Service};
    vec![
        // Pages
        record(
            "Home",
            "Welcome to Place of Grace Children's Home. We provide love, care, and hope for vulnerable children since 2009.",
            "/",
            Page,
            &["home", "welcome", "place of grace", "children", "love", "care", "hope"],
        ),
        record(
            "About Us",
            "Learn about our mission, vision, and the story behind Place of Grace Children's Home.",
            "/about",
            Page,
            &["about", "mission", "vision", "story", "history", "who we are"],
        ),
        record(
            "Our Programs",
            "Discover our educational, healthcare, and rehabilitation programs for children.",
            "/programs",
            Page,
            &["programs", "education", "healthcare", "rehabilitation", "services", "activities"],
        ),
        record(
            "Gallery",
            "View photos and videos of our children, facilities, and daily activities.",
            "/gallery",
            Page,
            &["gallery", "photos", "pictures", "videos", "children", "facilities", "activities"],
        ),
        record(
            "Contact Us",
            "Get in touch with us. Phone: +254 722 860 321, Email: placeofgraceoutreach@gmail.com",
            "/contact",
            Page,
            &["contact", "phone", "email", "address", "get in touch", "reach us"],
        ),
        record(
            "News & Updates",
            "Latest news, events, and updates from Place of Grace Children's Home.",
            "/news",
            Page,
            &["news", "updates", "events", "latest", "announcements", "happenings"],
        ),
        record(
            "Get Involved",
            "Learn how to volunteer, donate, or partner with us to help vulnerable children.",
            "/get-involved",
            Page,
            &["volunteer", "donate", "partner", "help", "support", "get involved", "contribute"],
        ),
        record(
            "Our Impact",
            "See the positive impact we've made in the lives of children and the community.",
            "/impact",
            Page,
            &["impact", "success", "stories", "results", "achievements", "outcomes"],
        ),
        record(
            "FAQ",
            "Frequently asked questions about our programs, admission, and services.",
            "/faq",
            Page,
            &["faq", "questions", "answers", "help", "common questions", "information"],
        ),
        record(
            "Transparency",
            "Our financial reports, governance, and accountability information.",
            "/transparency",
            Page,
            &["transparency", "financial", "reports", "governance", "accountability", "finances"],
        ),
        // Services & programs
        record(
            "Education Support",
            "We provide quality education and school sponsorships for all children.",
            "/programs#education",
            Service,
            &["education", "school", "learning", "sponsorship", "academic", "studies"],
        ),
        record(
            "Healthcare Services",
            "Medical care, nutrition programs, and health monitoring for children.",
            "/programs#healthcare",
            Service,
            &["healthcare", "medical", "nutrition", "health", "doctor", "medicine"],
        ),
        record(
            "Psychosocial Support",
            "Counseling and emotional support to help children heal and grow.",
            "/programs#psychosocial",
            Service,
            &["counseling", "emotional", "support", "healing", "therapy", "mental health"],
        ),
        record(
            "Skills Development",
            "Life skills training and vocational programs for older children.",
            "/programs#skills",
            Service,
            &["skills", "training", "vocational", "life skills", "employment", "work"],
        ),
        // Contact information
        record(
            "Phone Number",
            "Call us at +254 722 860 321",
            "/contact#phone",
            Contact,
            &["phone", "call", "telephone", "number", "+254", "722", "860", "321"],
        ),
        record(
            "Email Address",
            "Email us at placeofgraceoutreach@gmail.com",
            "/contact#email",
            Contact,
            &["email", "mail", "placeofgraceoutreach", "gmail", "contact email"],
        ),
        record(
            "Our Location",
            "Visit us at Donholm Phase Five Policeline Road, Nairobi",
            "/contact#location",
            Contact,
            &["address", "location", "donholm", "nairobi", "policeline", "visit"],
        ),
        // Common searches
        record(
            "How to Help Children",
            "Learn different ways you can help vulnerable children through donations, volunteering, or sponsorship.",
            "/get-involved",
            Help,
            &["help children", "help kids", "support children", "vulnerable children", "orphans"],
        ),
        record(
            "Donate Money",
            "Make a donation to support our programs and help care for children.",
            "/get-involved#donate",
            Help,
            &["donate", "donation", "money", "give", "support", "contribute", "help financially"],
        ),
        record(
            "Volunteer with Us",
            "Join our volunteer program and make a direct impact in children's lives.",
            "/get-involved#volunteer",
            Help,
            &["volunteer", "help", "join", "participate", "work with children", "give time"],
        ),
    ]
}
