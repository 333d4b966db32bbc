//! CLI runner - executes commands
//!
//! Drives a [`Feed`] the way a scrolling reader would: one initial load,
//! then follow-up pages until the feed is exhausted, a page cap is hit,
//! or a page comes back empty-handed.

use crate::api::NewsApi;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result};
use crate::feed::{Feed, FeedParams};
use crate::progress::{NullProgress, ProgressSink};
use crate::types::{Article, Category};
use kdam::{tqdm, Bar, BarExt};
use std::sync::{Arc, Mutex};

/// Progress sink that drives a terminal loading bar
struct TerminalProgress {
    bar: Mutex<Bar>,
}

impl TerminalProgress {
    fn new() -> Self {
        Self {
            bar: Mutex::new(tqdm!(total = 100, desc = "loading")),
        }
    }

    /// Remove the bar line so article output starts clean
    fn clear(&self) {
        let mut bar = self.bar.lock().unwrap();
        let _ = bar.clear();
    }
}

impl ProgressSink for TerminalProgress {
    fn progress(&self, percent: u8) {
        let mut bar = self.bar.lock().unwrap();
        let _ = bar.update_to(usize::from(percent));
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Read {
                category,
                country,
                page_size,
                max_pages,
            } => {
                self.read(*category, country.clone(), *page_size, *max_pages)
                    .await
            }
            Commands::Categories => self.categories(),
        }
    }

    /// Resolve the API key from the flag or the environment
    fn api_key(&self) -> Result<String> {
        if let Some(key) = &self.cli.api_key {
            return Ok(key.clone());
        }
        std::env::var("NEWSAPI_KEY").map_err(|_| Error::MissingApiKey)
    }

    /// Fetch and render headlines page by page
    async fn read(
        &self,
        category: Category,
        country: String,
        page_size: u32,
        max_pages: Option<u32>,
    ) -> Result<()> {
        let api = Arc::new(NewsApi::new(self.api_key()?)?);
        let params = FeedParams::new(category)
            .with_country(country)
            .with_page_size(page_size);

        let bar = match self.cli.format {
            OutputFormat::Pretty => Some(Arc::new(TerminalProgress::new())),
            OutputFormat::Json => None,
        };
        let progress: Arc<dyn ProgressSink> = match &bar {
            Some(bar) => bar.clone(),
            None => Arc::new(NullProgress),
        };

        let feed = Feed::new(api, params).with_progress(progress);

        feed.load_initial().await;
        if let Some(bar) = &bar {
            bar.clear();
        }

        let mut state = feed.snapshot().await;
        if self.cli.format == OutputFormat::Pretty {
            println!("Top {} Headlines", category.title());
            println!();
        }
        self.render(&state.articles)?;

        let mut pages_fetched = 1;
        while feed.has_more().await && max_pages.map_or(true, |cap| pages_fetched < cap) {
            feed.load_next().await;
            let next = feed.snapshot().await;

            // A page that added nothing was a failed or empty fetch;
            // stop instead of spinning on the same counter forever
            if next.articles.len() == state.articles.len() {
                break;
            }

            self.render(&next.articles[state.articles.len()..])?;
            state = next;
            pages_fetched += 1;
        }

        if self.cli.format == OutputFormat::Pretty {
            println!(
                "{} of {} articles loaded",
                state.articles.len(),
                state.total_results
            );
        }

        Ok(())
    }

    /// List the fixed category set
    fn categories(&self) -> Result<()> {
        for category in Category::all() {
            println!("{category}");
        }
        Ok(())
    }

    /// Render a batch of articles in the selected format
    fn render(&self, articles: &[Article]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Pretty => {
                for article in articles {
                    render_pretty(article);
                }
            }
            OutputFormat::Json => {
                for article in articles {
                    println!("{}", serde_json::to_string(article)?);
                }
            }
        }
        Ok(())
    }
}

/// Print one article as a card
fn render_pretty(article: &Article) {
    let title = if article.title.is_empty() {
        "(untitled)"
    } else {
        &article.title
    };
    println!("* {title}");

    let mut byline = format!(
        "{} | {}",
        article.source_name,
        article.published_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(author) = &article.author {
        byline.push_str(" | ");
        byline.push_str(author);
    }
    println!("  {byline}");

    if !article.description.is_empty() {
        println!("  {}", article.description);
    }
    println!("  {}", article.url);
    println!();
}
