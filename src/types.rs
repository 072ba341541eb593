//! The building blocks of the content index.
//!
//! These types describe what a search can return: a static record per
//! page/section of the site, a closed category enumeration used only for
//! display, and the transient scored wrapper produced by each search pass.
//!
//! # Invariants
//!
//! - **SearchRecord**: `title` and `url` are non-empty. Not enforced here;
//!   `ContentIndex::new` checks it at construction so everything downstream
//!   can rely on it.
//! - **ScoredResult**: `score > 0`. Zero-scoring records are dropped before
//!   ranking, so a `ScoredResult` always represents a match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the site a record describes.
///
/// A closed enumeration: unknown category strings fail deserialization.
/// Categories drive display iconography only and never participate in
/// scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A top-level page of the site.
    Page,
    /// A program or service section.
    Service,
    /// A way to reach the organization.
    Contact,
    /// A "how to help" entry.
    Help,
}

impl Category {
    /// Display icon for the result list. Total over the enum.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Page => "📄",
            Category::Service => "🎯",
            Category::Contact => "📞",
            Category::Help => "❤️",
        }
    }

    /// Human-readable category label for the result list.
    pub fn label(self) -> &'static str {
        match self {
            Category::Page => "Page",
            Category::Service => "Service",
            Category::Contact => "Contact",
            Category::Help => "How to Help",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One searchable page or section of the site.
///
/// Records are defined statically and never mutated; the index is the unit
/// of validation, not the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// Short human-readable label. Non-empty (checked by `ContentIndex`).
    pub title: String,
    /// Descriptive sentence(s). May be empty.
    #[serde(default)]
    pub content: String,
    /// Destination path or path+fragment. Non-empty, not checked for
    /// existence.
    pub url: String,
    /// Display category.
    pub category: Category,
    /// Lowercase search terms. Duplicates are harmless, order irrelevant.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A record plus its relevance score for one query.
///
/// Created fresh on every search pass and replaced wholesale on the next;
/// nothing is cached between queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    #[serde(flatten)]
    pub record: SearchRecord,
    pub score: u32,
}
