//! Fetch client for the top-headlines endpoint
//!
//! # Overview
//!
//! [`NewsApi`] issues
//! `GET /v2/top-headlines?country=..&category=..&apiKey=..&page=..&pageSize=..`
//! and maps the wire payload into domain [`Article`]s. The feed controller
//! consumes it through the [`HeadlineSource`] trait so tests can substitute
//! scripted sources.
//!
//! Error envelopes and payloads without an `articles` field are typed
//! errors at this layer; the controller swallows them into its empty-state
//! recovery.

mod types;

pub use types::{HeadlinesEnvelope, WireArticle, WireSource};

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::progress::{ProgressSink, PARSED, RESPONSE_RECEIVED};
use crate::types::{Article, Category};
use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;


/// Default base URL for the upstream news API
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// Path of the top-headlines endpoint
pub const TOP_HEADLINES_PATH: &str = "/v2/top-headlines";

// ============================================================================
// Query and page
// ============================================================================

/// Parameters for one top-headlines request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesQuery {
    /// Two-letter country code (e.g. `us`)
    pub country: String,
    /// Headline category
    pub category: Category,
    /// 1-based page number
    pub page: u32,
    /// Number of articles per page
    pub page_size: u32,
}

/// One fetched page of headlines
#[derive(Debug, Clone, Default)]
pub struct HeadlinesPage {
    /// Articles in API response order
    pub articles: Vec<Article>,
    /// Total results available for the query, as of this response
    pub total_results: u32,
}

// ============================================================================
// Source trait
// ============================================================================

/// Something that can serve pages of headlines
///
/// The production implementation is [`NewsApi`]; tests drive the feed
/// controller with scripted implementations.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Fetch one page of top headlines
    ///
    /// `progress` is reported at the response-received and parsed points;
    /// pass [`crate::progress::NullProgress`] when nobody is watching.
    async fn top_headlines(
        &self,
        query: &HeadlinesQuery,
        progress: &dyn ProgressSink,
    ) -> Result<HeadlinesPage>;
}

// ============================================================================
// Client
// ============================================================================

/// Client for the upstream news API
pub struct NewsApi {
    http: HttpClient,
    api_key: String,
}

impl NewsApi {
    /// Create a client against the default base URL
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;

        let http = HttpClient::with_config(
            HttpClientConfig::builder().base_url(base_url).build(),
        );

        Ok(Self {
            http,
            api_key: api_key.into(),
        })
    }

    /// Build the request config for a query
    fn request_config(&self, query: &HeadlinesQuery) -> RequestConfig {
        RequestConfig::new()
            .query("country", &query.country)
            .query("category", query.category.as_str())
            .query("apiKey", &self.api_key)
            .query("page", query.page.to_string())
            .query("pageSize", query.page_size.to_string())
    }
}

impl std::fmt::Debug for NewsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The key stays out of logs
        f.debug_struct("NewsApi")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl HeadlineSource for NewsApi {
    async fn top_headlines(
        &self,
        query: &HeadlinesQuery,
        progress: &dyn ProgressSink,
    ) -> Result<HeadlinesPage> {
        debug!(
            country = %query.country,
            category = %query.category,
            page = query.page,
            "fetching top headlines"
        );

        let response = self
            .http
            .get_with_config(TOP_HEADLINES_PATH, self.request_config(query))
            .await?;
        progress.progress(RESPONSE_RECEIVED);

        let envelope: HeadlinesEnvelope = response.json().await.map_err(Error::Http)?;
        progress.progress(PARSED);

        let Some(articles) = envelope.articles else {
            if envelope.status == "error" {
                let code = envelope.code.unwrap_or_else(|| "unknown".to_string());
                let message = envelope.message.unwrap_or_default();
                warn!(%code, "upstream returned an error envelope");
                return Err(Error::api(code, message));
            }
            return Err(Error::malformed("payload has no `articles` field"));
        };

        Ok(HeadlinesPage {
            articles: articles.into_iter().map(Article::from).collect(),
            total_results: envelope.total_results,
        })
    }
}
