//! Wire types for the top-headlines endpoint
//!
//! The upstream payload is an envelope: `status` plus either
//! `articles`/`totalResults` or, on upstream errors, `code`/`message`.
//! Field names are camelCase on the wire.

use crate::types::Article;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-headlines response envelope
#[derive(Debug, Deserialize)]
pub struct HeadlinesEnvelope {
    /// `"ok"` or `"error"`
    #[serde(default)]
    pub status: String,

    /// Total number of results available for the query
    #[serde(default, rename = "totalResults")]
    pub total_results: u32,

    /// One page of articles; absent on error envelopes and some
    /// malformed responses
    pub articles: Option<Vec<WireArticle>>,

    /// Upstream error code (error envelopes only)
    pub code: Option<String>,

    /// Upstream error message (error envelopes only)
    pub message: Option<String>,
}

/// A single article as the upstream serializes it
#[derive(Debug, Deserialize)]
pub struct WireArticle {
    /// Publishing outlet
    pub source: WireSource,
    /// Author, often null
    pub author: Option<String>,
    /// Title, occasionally null
    pub title: Option<String>,
    /// Description, occasionally null
    pub description: Option<String>,
    /// Canonical article URL
    pub url: String,
    /// Cover image URL, often null
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    /// Publication timestamp (ISO 8601)
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

/// The `source` object nested in each wire article
#[derive(Debug, Deserialize)]
pub struct WireSource {
    /// Machine identifier, often null
    pub id: Option<String>,
    /// Display name
    pub name: String,
}

impl From<WireArticle> for Article {
    fn from(wire: WireArticle) -> Self {
        Self {
            title: wire.title.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            image_url: wire.url_to_image,
            url: wire.url,
            author: wire.author,
            published_at: wire.published_at,
            source_name: wire.source.name,
        }
    }
}
