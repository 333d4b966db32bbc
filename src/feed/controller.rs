//! The feed controller
//!
//! Owns [`FeedState`] and decides when more data is needed. All mutation
//! happens in the completion step of [`Feed::load_initial`] and
//! [`Feed::load_next`]; nothing else touches the state.
//!
//! Every outstanding fetch captures the feed's generation at issue time.
//! [`Feed::reset`] bumps the generation, so a response that resolves
//! after a reset no longer matches and is discarded instead of writing
//! into the new feed's state.

use super::types::{FeedParams, FeedState};
use crate::api::HeadlineSource;
use crate::progress::{self, NullProgress, ProgressSink};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

struct Inner {
    params: RwLock<FeedParams>,
    state: RwLock<FeedState>,
    generation: AtomicU64,
}

/// Pagination controller for one headline feed
///
/// Cheap to clone; clones share the same state. Errors never escape the
/// controller: a failed load presents as an empty or shorter list.
#[derive(Clone)]
pub struct Feed {
    source: Arc<dyn HeadlineSource>,
    progress: Arc<dyn ProgressSink>,
    inner: Arc<Inner>,
}

impl Feed {
    /// Create a feed over a headline source
    pub fn new(source: Arc<dyn HeadlineSource>, params: FeedParams) -> Self {
        Self {
            source,
            progress: Arc::new(NullProgress),
            inner: Arc::new(Inner {
                params: RwLock::new(params),
                state: RwLock::new(FeedState::default()),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Attach a progress observer for initial loads
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// A snapshot of the current state
    pub async fn snapshot(&self) -> FeedState {
        self.inner.state.read().await.clone()
    }

    /// The feed's current parameters
    pub async fn params(&self) -> FeedParams {
        self.inner.params.read().await.clone()
    }

    /// Whether more articles are available upstream
    pub async fn has_more(&self) -> bool {
        self.inner.state.read().await.has_more()
    }

    /// Discard the current state and re-key the feed
    ///
    /// Installs a fresh [`FeedState`] for `params` and bumps the
    /// generation so in-flight fetches for the old feed are discarded on
    /// completion.
    pub async fn reset(&self, params: FeedParams) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        *self.inner.params.write().await = params;
        *self.inner.state.write().await = FeedState::default();
    }

    /// Load the first page
    ///
    /// Issues exactly one fetch for page 1; there is no retry. On success
    /// the state holds that page and the upstream total. On any failure
    /// (transport, HTTP status, malformed payload) the state is reset to
    /// an empty, non-loading feed; the error is logged and swallowed.
    pub async fn load_initial(&self) {
        let generation = self.inner.generation.load(Ordering::SeqCst);

        self.inner.state.write().await.loading = true;
        self.progress.progress(progress::STARTED);

        let query = self.inner.params.read().await.query(1);
        let result = self.source.top_headlines(&query, self.progress.as_ref()).await;

        let mut state = self.inner.state.write().await;
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding stale initial load");
            return;
        }

        match result {
            Ok(page) => {
                state.articles = page.articles;
                state.total_results = page.total_results;
                state.page = 1;
                state.loading = false;
                drop(state);
                self.progress.progress(progress::COMPLETE);
            }
            Err(e) => {
                warn!(error = %e, "initial load failed, resetting to empty feed");
                state.articles = Vec::new();
                state.total_results = 0;
                state.loading = false;
            }
        }
    }

    /// Load the page after the last requested one and append it
    ///
    /// Callers are expected to consult [`Feed::has_more`] first; the
    /// controller itself does not check. The page counter advances before
    /// the response is known: a failed fetch leaves the counter pointing
    /// past the failed page, so the next call requests the page after it.
    /// Successful pages are appended in fetch order; previously
    /// accumulated articles are never truncated or reordered, and
    /// `total_results` tracks the latest response.
    pub async fn load_next(&self) {
        let generation = self.inner.generation.load(Ordering::SeqCst);

        let next_page = {
            let mut state = self.inner.state.write().await;
            state.page += 1;
            state.page
        };

        let query = self.inner.params.read().await.query(next_page);
        let result = self.source.top_headlines(&query, &NullProgress).await;

        let mut state = self.inner.state.write().await;
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            debug!(page = next_page, "discarding stale page load");
            return;
        }

        match result {
            Ok(page) => {
                state.articles.extend(page.articles);
                state.total_results = page.total_results;
            }
            Err(e) => {
                warn!(error = %e, page = next_page, "failed to load next page");
            }
        }
    }
}

impl std::fmt::Debug for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feed")
            .field("generation", &self.inner.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
