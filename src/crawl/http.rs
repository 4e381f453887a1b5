// src/crawl/http.rs
// =============================================================================
// This module downloads HTML pages.
//
// Both phases of the crawl go through the same `PageFetcher`:
// - discovery fetches pages to find more links
// - the save phase fetches pages to convert them to Markdown
//
// One reqwest Client is created up front and cloned into every task, so all
// requests share one connection pool.
//
// Rust concepts:
// - async/await: network I/O without blocking the thread
// - Result<T, E>: every fetch either returns HTML or a PageError
// =============================================================================

use crate::error::{NetworkError, PageError};
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    // Create an HTTP client with reasonable settings
    // Every request is bounded by `timeout`; there are no retries
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("docs-scraper/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    // Fetches a web page and returns its HTML content
    //
    // Any transport failure or non-2xx status becomes PageError::Network,
    // which always names the URL that failed.
    pub async fn fetch(&self, url: &Url) -> Result<String, PageError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| PageError::network(url.as_str(), NetworkError::from_reqwest(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageError::network(
                url.as_str(),
                NetworkError::Status(status.as_u16()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| PageError::network(url.as_str(), NetworkError::from_reqwest(&e)))
    }
}
