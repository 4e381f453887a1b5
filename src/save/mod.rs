// src/save/mod.rs
// =============================================================================
// The save half of the scraper.
//
// Submodules:
// - path: URL -> relative Markdown file path
// - pool: bounded worker pool (at most N pages in flight)
// - saver: fetch + extract + write for one page, and the batch driver
// =============================================================================

mod path;
mod pool;
mod saver;

pub use pool::WorkerPool;
pub use saver::{save_all, PageOutcome, PageReport, PageSaver};
