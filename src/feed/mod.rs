//! Feed module
//!
//! The pagination controller: tracks the current page, the accumulated
//! articles, the upstream total, and the loading flag, and decides when
//! to fetch the next page versus stop.
//!
//! # Overview
//!
//! One [`Feed`] per (country, category, page size) combination.
//! [`Feed::load_initial`] fetches page 1 and replaces the state;
//! [`Feed::load_next`] fetches the following page and appends.
//! [`FeedState::has_more`] signals exhaustion to the presentation layer.

mod controller;
mod types;

pub use controller::Feed;
pub use types::{FeedParams, FeedState, DEFAULT_COUNTRY, DEFAULT_PAGE_SIZE};
