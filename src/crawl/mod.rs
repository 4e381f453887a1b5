// src/crawl/mod.rs
// =============================================================================
// This module handles the discovery half of the scraper.
//
// Submodules:
// - http: the shared PageFetcher (one reqwest client, bounded timeout)
// - links: finds in-scope documentation links on a page
// - frontier: visits every discovered page once until nothing new turns up
//
// Why crawl first and save later?
// - The visited set is only touched by one task, so it needs no locking
// - Once the full page list is known, saving is embarrassingly parallel
// =============================================================================

mod frontier;
mod http;
mod links;

// Re-export the public API
pub use frontier::Frontier;
pub use http::PageFetcher;
pub use links::LinkDiscoverer;
