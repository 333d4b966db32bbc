//! Common types used throughout newsstand
//!
//! The domain model ([`Article`]) and the fixed category set every feed
//! is keyed on.

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Category
// ============================================================================

/// A top-headlines category
///
/// The upstream API exposes exactly this set; each category identifies an
/// independent feed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    /// All categories, in display order
    pub fn all() -> [Category; 7] {
        [
            Category::General,
            Category::Business,
            Category::Entertainment,
            Category::Health,
            Category::Science,
            Category::Sports,
            Category::Technology,
        ]
    }

    /// The lowercase name used in API query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    /// Capitalized name for headings
    pub fn title(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| Error::unknown_category(s))
    }
}

// ============================================================================
// Article
// ============================================================================

/// A single headline, as consumed by the feed and the presentation layer
///
/// Immutable once received. `url` is the identity key for rendering; the
/// upstream API guarantees it is unique within a fetched set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Headline title (empty when the upstream omits it)
    pub title: String,
    /// Short description (empty when the upstream omits it)
    pub description: String,
    /// Cover image URL, if any
    pub image_url: Option<String>,
    /// Canonical article URL; unique per fetched set
    pub url: String,
    /// Author, if known
    pub author: Option<String>,
    /// Publication timestamp
    pub published_at: DateTime<Utc>,
    /// Name of the publishing outlet
    pub source_name: String,
}
