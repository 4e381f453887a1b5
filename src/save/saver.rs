// src/save/saver.rs
// =============================================================================
// Fetches one page, converts it, and writes the Markdown file.
//
// Each page is an independent unit of work: the only state shared between
// concurrent saves is the read-only output root. Creating a directory that
// already exists is fine, so sibling pages may race on their parent folders.
// =============================================================================

use super::path::path_from_url;
use super::pool::WorkerPool;
use crate::error::PageError;
use crate::markdown::ContentExtractor;
use futures::StreamExt;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// What happened to one page during the save phase
#[derive(Debug)]
pub struct PageOutcome {
    pub url: Url,
    /// The saved file, relative to the output directory
    pub result: Result<PathBuf, PageError>,
}

impl PageOutcome {
    pub fn is_saved(&self) -> bool {
        self.result.is_ok()
    }

    pub fn report(&self) -> PageReport {
        match &self.result {
            Ok(path) => PageReport {
                url: self.url.to_string(),
                status: "saved",
                path: Some(path.display().to_string()),
                message: None,
            },
            Err(e) => PageReport {
                url: self.url.to_string(),
                status: e.kind(),
                path: None,
                message: Some(e.to_string()),
            },
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(path) => write!(f, "Saved: {}", path.display()),
            Err(e) => write!(f, "{}", e),
        }
    }
}

/// JSON-friendly view of a PageOutcome
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub url: String,
    /// "saved", "network", "no_content" or "filesystem"
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub struct PageSaver {
    extractor: ContentExtractor,
    output_dir: PathBuf,
    base_path: String,
}

impl PageSaver {
    pub fn new(
        extractor: ContentExtractor,
        output_dir: impl Into<PathBuf>,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            extractor,
            output_dir: output_dir.into(),
            base_path: base_path.into(),
        }
    }

    pub async fn save(&self, url: Url) -> PageOutcome {
        let result = self.try_save(&url).await;
        if let Err(e) = &result {
            tracing::warn!("{}", e);
        }
        PageOutcome { url, result }
    }

    async fn try_save(&self, url: &Url) -> Result<PathBuf, PageError> {
        let page = self.extractor.extract(url).await?;

        let relative_path = path_from_url(url, &self.base_path);
        let full_path = self.output_dir.join(&relative_path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PageError::filesystem(parent, e))?;
        }

        tokio::fs::write(&full_path, page.to_markdown())
            .await
            .map_err(|e| PageError::filesystem(&full_path, e))?;

        tracing::debug!("Wrote {} ({} blocks)", full_path.display(), page.blocks.len());
        Ok(relative_path)
    }
}

// Saves every page through the pool, calling `on_done` as each one finishes
//
// Outcomes are returned in completion order.
pub async fn save_all<F>(
    pages: Vec<Url>,
    saver: &PageSaver,
    pool: &WorkerPool,
    mut on_done: F,
) -> Vec<PageOutcome>
where
    F: FnMut(&PageOutcome),
{
    let mut outcomes = Vec::with_capacity(pages.len());
    let mut results = std::pin::pin!(pool.run(pages, |url| saver.save(url)));

    while let Some(outcome) = results.next().await {
        on_done(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}
