//! CLI commands and argument parsing

use crate::feed::{DEFAULT_COUNTRY, DEFAULT_PAGE_SIZE};
use crate::types::Category;
use clap::{Parser, Subcommand};

/// newsstand CLI
#[derive(Parser, Debug)]
#[command(name = "newsstand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (falls back to the NEWSAPI_KEY environment variable)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read top headlines for a category, page by page
    Read {
        /// Headline category
        #[arg(short, long, value_enum, default_value_t = Category::General)]
        category: Category,

        /// Two-letter country code
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,

        /// Articles per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,

        /// Maximum number of pages to fetch (default: keep going until
        /// the feed is exhausted)
        #[arg(long)]
        max_pages: Option<u32>,
    },

    /// List the available categories
    Categories,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable article cards
    Pretty,
    /// One JSON article per line
    Json,
}
