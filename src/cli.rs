// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The raw values parsed here are validated and normalized into a
// `CrawlConfig` (see src/config.rs) before any crawling starts.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "docs-scraper",
    version = "0.1.0",
    about = "Scrape static docs from a base URL and save them as Markdown",
    long_about = "docs-scraper crawls every page of a documentation site that lives under the \
                  base URL's path prefix, extracts the main content of each page, and writes it \
                  as Markdown files that mirror the site's URL structure."
)]
pub struct Cli {
    /// Base docs URL (e.g., https://nextjs.org/docs)
    #[arg(long)]
    pub url: String,

    /// Directory to save markdown files
    #[arg(long, default_value = "output")]
    pub out: String,

    /// Number of pages fetched and saved in parallel
    #[arg(long, default_value_t = 10)]
    pub threads: usize,

    /// Path prefix that scopes the crawl (defaults to the path of --url)
    ///
    /// Only links whose path starts with this prefix are followed.
    #[arg(long)]
    pub base_path: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Output the per-page report in JSON format instead of text
    #[arg(long)]
    pub json: bool,

    /// Show debug logs (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}
