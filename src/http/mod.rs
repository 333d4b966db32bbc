//! HTTP client module
//!
//! A thin GET client over reqwest: base-URL joining, default headers,
//! per-request query parameters and timeout, and HTTP status → error
//! mapping.
//!
//! There is deliberately no retry loop and no rate limiter here: every
//! load issues exactly one network call, and failures fall through to
//! the feed controller's empty-state recovery.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
