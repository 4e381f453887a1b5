// src/config.rs
// =============================================================================
// Validated crawl settings.
//
// The CLI hands us raw strings and numbers; this module turns them into a
// `CrawlConfig` that the rest of the program can trust:
// - the base URL parses and has its fragment removed
// - the base path always starts with '/' and never ends with one
//   (except for the root path "/")
// - the worker count is at least 1
// =============================================================================

use crate::cli::Cli;
use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// How the final per-page report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Where the crawl starts; relative links are resolved against it
    pub base_url: Url,
    /// Path prefix that decides which links are in scope (e.g. "/docs")
    pub base_path: String,
    /// Root of the Markdown output tree
    pub output_dir: PathBuf,
    /// Maximum number of pages fetched and saved at the same time
    pub max_threads: usize,
    /// Timeout applied to every HTTP request
    pub timeout: Duration,
    pub format: ReportFormat,
}

impl CrawlConfig {
    /// Builds a config with the CLI defaults for everything but the URL
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let base_path = normalize_base_path(base_url.path());

        Ok(Self {
            base_url,
            base_path,
            output_dir: PathBuf::from("output"),
            max_threads: 10,
            timeout: Duration::from_secs(10),
            format: ReportFormat::Text,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.threads == 0 {
            bail!("--threads must be at least 1");
        }

        let mut config = Self::new(&cli.url)?;
        if let Some(base_path) = &cli.base_path {
            config.base_path = normalize_base_path(base_path);
        }
        config.output_dir = PathBuf::from(&cli.out);
        config.max_threads = cli.threads;
        config.timeout = Duration::from_secs(cli.timeout);
        config.format = if cli.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        };

        Ok(config)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).with_context(|| format!("Invalid URL '{}'", raw))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!("URL must use http or https: {}", raw));
    }

    url.set_fragment(None);
    Ok(url)
}

// "/docs/" -> "/docs", "docs" -> "/docs", "" -> "/"
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    format!("/{}", trimmed)
}
