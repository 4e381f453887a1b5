// src/pipeline.rs
// =============================================================================
// Ties both phases together:
//
//   discovery (sequential)          save (concurrent)
//   Frontier + LinkDiscoverer  ->   WorkerPool + PageSaver
//
// Nothing a single page does can abort the run; failures end up as
// PageOutcomes in the summary. Only setup problems (like building the HTTP
// client or the output directory) are returned as errors.
// =============================================================================

use crate::config::CrawlConfig;
use crate::crawl::{Frontier, LinkDiscoverer, PageFetcher};
use crate::markdown::ContentExtractor;
use crate::save::{save_all, PageOutcome, PageSaver, WorkerPool};
use anyhow::{Context, Result};

/// Progress events, reported while the crawl runs
#[derive(Debug)]
pub enum Progress<'a> {
    /// Discovery finished with this many pages
    Discovered(usize),
    /// One page went through the save phase
    PageDone(&'a PageOutcome),
}

/// Everything the CLI needs to print at the end of a run
#[derive(Debug)]
pub struct CrawlSummary {
    pub pages_found: usize,
    /// False when the base URL itself could not be fetched
    pub base_reachable: bool,
    pub outcomes: Vec<PageOutcome>,
}

impl CrawlSummary {
    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.saved()
    }
}

/// Crawls the docs site and writes every page as Markdown
///
/// `on_progress` is called once discovery finishes and then once per page,
/// in completion order. Printing is left to the caller.
pub async fn crawl_and_scrape<F>(config: &CrawlConfig, mut on_progress: F) -> Result<CrawlSummary>
where
    F: FnMut(Progress<'_>),
{
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create output directory '{}'",
                config.output_dir.display()
            )
        })?;

    let fetcher = PageFetcher::new(config.timeout)?;

    // Phase 1: find every page
    let discoverer = LinkDiscoverer::new(
        fetcher.clone(),
        config.base_url.clone(),
        config.base_path.clone(),
    );
    let discovery = Frontier::new(config.base_url.clone(), config.base_path.clone())
        .run(&discoverer)
        .await;

    let pages_found = discovery.pages.len();
    tracing::info!(
        "Discovered {} page(s) after visiting {}",
        pages_found,
        discovery.visited
    );
    on_progress(Progress::Discovered(pages_found));

    // Phase 2: fetch, convert and save them
    let pool = WorkerPool::new(config.max_threads);
    let saver = PageSaver::new(
        ContentExtractor::new(fetcher),
        config.output_dir.clone(),
        config.base_path.clone(),
    );

    tracing::info!(
        "Saving {} page(s) with {} worker(s)",
        pages_found,
        pool.max_workers()
    );

    let outcomes = save_all(discovery.pages, &saver, &pool, |outcome| {
        on_progress(Progress::PageDone(outcome))
    })
    .await;

    Ok(CrawlSummary {
        pages_found,
        base_reachable: discovery.base_reachable,
        outcomes,
    })
}
