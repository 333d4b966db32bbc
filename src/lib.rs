//! # newsstand
//!
//! A client-side news reader: categorized top headlines fetched from a
//! third-party news API, loaded incrementally one page at a time.
//!
//! ## Features
//!
//! - **Top-headlines client**: typed wrapper over the `/v2/top-headlines`
//!   endpoint with camelCase wire mapping
//! - **Pagination controller**: tracks the current page, accumulated
//!   articles, upstream total and loading flag; detects exhaustion
//! - **Stale-response protection**: generation-tagged fetches, so
//!   responses that resolve after a feed switch are discarded
//! - **Progress observer**: advisory load-progress reports for driving a
//!   terminal loading bar
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use newsstand::{Category, Feed, FeedParams, NewsApi};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> newsstand::Result<()> {
//!     let api = Arc::new(NewsApi::new("my-api-key")?);
//!     let feed = Feed::new(api, FeedParams::new(Category::Technology));
//!
//!     feed.load_initial().await;
//!     while feed.has_more().await {
//!         feed.load_next().await;
//!     }
//!
//!     for article in feed.snapshot().await.articles {
//!         println!("{}", article.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Presentation (cli)                    │
//! │   read: load_initial → render → load_next until exhausted   │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┴───────────────────────────────┐
//! │                      Feed controller (feed)                 │
//! │   FeedState: articles · page · total_results · loading      │
//! │   generation counter discards stale completions             │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────────┬──────────┴─────────┬─────────────────────┐
//! │   Fetch (api)    │    HTTP (http)     │  Progress observer  │
//! │ top-headlines    │ GET · base URL     │ 10 · 30 · 70 · 100  │
//! │ wire → domain    │ status mapping     │ advisory only       │
//! └──────────────────┴────────────────────┴─────────────────────┘
//! ```

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and the domain model
pub mod types;

/// HTTP client plumbing
pub mod http;

/// Fetch client for the top-headlines endpoint
pub mod api;

/// The pagination controller
pub mod feed;

/// Load-progress reporting
pub mod progress;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{HeadlineSource, HeadlinesPage, HeadlinesQuery, NewsApi};
pub use error::{Error, Result};
pub use feed::{Feed, FeedParams, FeedState};
pub use progress::{NullProgress, ProgressSink};
pub use types::{Article, Category};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
