//! Feed parameters and state
//!
//! A feed is keyed on an immutable (country, category, page size)
//! combination; [`FeedState`] is the mutable half, owned by the
//! controller and mutated only through its operations.

use crate::api::HeadlinesQuery;
use crate::types::{Article, Category};

/// Default country filter
pub const DEFAULT_COUNTRY: &str = "us";

/// Default number of articles per page
pub const DEFAULT_PAGE_SIZE: u32 = 8;

// ============================================================================
// Parameters
// ============================================================================

/// The immutable identity of a feed
///
/// Changing any of these means a different feed: the controller discards
/// its state and starts over (see [`crate::feed::Feed::reset`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedParams {
    /// Two-letter country code
    pub country: String,
    /// Headline category
    pub category: Category,
    /// Articles per fetched page
    pub page_size: u32,
}

impl FeedParams {
    /// Create params for a category with default country and page size
    pub fn new(category: Category) -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            category,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the country filter
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// The query for a given page of this feed
    pub fn query(&self, page: u32) -> HeadlinesQuery {
        HeadlinesQuery {
            country: self.country.clone(),
            category: self.category,
            page,
            page_size: self.page_size,
        }
    }
}

impl Default for FeedParams {
    fn default() -> Self {
        Self::new(Category::General)
    }
}

// ============================================================================
// State
// ============================================================================

/// The mutable state of a feed
#[derive(Debug, Clone)]
pub struct FeedState {
    /// Accumulated articles, append-only, in API response order with the
    /// oldest-requested page first
    pub articles: Vec<Article>,
    /// The most recently requested page (1-based)
    pub page: u32,
    /// Total results available upstream, as of the latest response
    pub total_results: u32,
    /// Whether an initial load is in flight
    pub loading: bool,
}

impl FeedState {
    /// Whether more articles are available upstream
    ///
    /// False exactly when the accumulated count equals `total_results`;
    /// an empty feed with no known results reports false.
    pub fn has_more(&self) -> bool {
        self.articles.len() as u32 != self.total_results
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            page: 1,
            total_results: 0,
            loading: false,
        }
    }
}
