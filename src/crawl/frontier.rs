// src/crawl/frontier.rs
// =============================================================================
// This module drives link discovery.
//
// How it works:
// 1. Fetch the base URL and seed the queue with the doc links found on it
// 2. Take any URL out of the queue and mark it visited
// 3. Ask the LinkSource for the links on that page
// 4. Every link we have not visited yet joins the queue (and the result set)
// 5. Repeat until the queue is empty
//
// URLs are compared in canonical form (no fragment, no trailing slash), so a
// base URL of "/docs/" and links to "/docs" count as one page.
//
// Discovery is strictly sequential: one fetch at a time. The visited set
// guarantees that every URL is fetched for discovery at most once.
//
// There is no depth or page limit, so a site that generates an endless
// stream of new in-scope URLs would never finish.
//
// Rust concepts:
// - HashSet: to track visited URLs (O(1) lookup)
// - BTreeSet: a sorted set, used as the queue so runs are reproducible
// - Generics: `run` works with any LinkSource, real or fake
// =============================================================================

use super::links::{canonical_page_url, is_in_scope, LinkSource};
use std::collections::{BTreeSet, HashSet};
use url::Url;

/// The result of discovery: every doc page we know about
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// All discovered pages, sorted
    pub pages: Vec<Url>,
    /// False when the base URL itself could not be fetched
    pub base_reachable: bool,
    /// Number of pages fetched for link discovery (base URL included)
    pub visited: usize,
}

pub struct Frontier {
    base_url: Url,
    base_path: String,
    visited: HashSet<Url>,
    to_visit: BTreeSet<Url>,
    all_links: BTreeSet<Url>,
}

impl Frontier {
    pub fn new(base_url: Url, base_path: impl Into<String>) -> Self {
        Self {
            base_url: canonical_page_url(base_url),
            base_path: base_path.into(),
            visited: HashSet::new(),
            to_visit: BTreeSet::new(),
            all_links: BTreeSet::new(),
        }
    }

    /// Discovers every in-scope page reachable from the base URL
    pub async fn run<S: LinkSource>(mut self, source: &S) -> Discovery {
        let base_url = self.base_url.clone();

        let base_reachable = match source.discover(&base_url).await {
            Ok(links) => {
                self.enqueue(links);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load base URL {} - {}", base_url, e);
                false
            }
        };

        // The base page has now been fetched for discovery. If it is itself a
        // doc page it belongs in the output even when nothing links back to it.
        self.visited.insert(base_url.clone());
        if base_reachable && is_in_scope(base_url.path(), &self.base_path) {
            self.all_links.insert(base_url);
        }

        while let Some(url) = self.pop() {
            self.visited.insert(url.clone());

            match source.discover(&url).await {
                Ok(links) => self.enqueue(links),
                Err(e) => tracing::warn!("Failed to load {} - {}", url, e),
            }
        }

        Discovery {
            pages: self.all_links.into_iter().collect(),
            base_reachable,
            visited: self.visited.len(),
        }
    }

    // Removes an arbitrary URL from the queue (the smallest, for determinism)
    fn pop(&mut self) -> Option<Url> {
        self.to_visit.pop_first()
    }

    fn enqueue(&mut self, links: Vec<Url>) {
        for link in links.into_iter().map(canonical_page_url) {
            if self.visited.contains(&link) {
                continue;
            }
            self.all_links.insert(link.clone());
            self.to_visit.insert(link);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does `run` take `mut self` instead of `&mut self`?
//    - A Frontier is single-use: once discovery is done, its sets are no
//      longer needed, so `run` consumes it and moves the results out
//    - Two crawls in the same process simply use two Frontiers
//
// 2. Why a BTreeSet for the queue?
//    - Any visiting order finds the same pages
//    - A sorted set makes that order the same on every run, which helps
//      when reading logs or writing tests
//
// 3. What is `S: LinkSource`?
//    - A generic parameter with a trait bound
//    - The compiler generates a version of `run` for each concrete source,
//      so the fake site used in tests costs nothing at runtime
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NetworkError, PageError};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// An in-memory site: page -> links on that page
    struct FakeSite {
        graph: HashMap<Url, Vec<Url>>,
        fetches: Mutex<HashMap<Url, usize>>,
    }

    impl FakeSite {
        fn new(edges: Vec<(&str, Vec<&str>)>) -> Self {
            let graph = edges
                .into_iter()
                .map(|(page, links)| (url(page), links.into_iter().map(url).collect()))
                .collect();
            Self {
                graph,
                fetches: Mutex::new(HashMap::new()),
            }
        }

        fn fetch_count(&self, page: &str) -> usize {
            let fetches = self.fetches.lock().unwrap();
            fetches.get(&url(page)).copied().unwrap_or(0)
        }
    }

    impl LinkSource for FakeSite {
        async fn discover(&self, page_url: &Url) -> Result<Vec<Url>, PageError> {
            *self
                .fetches
                .lock()
                .unwrap()
                .entry(page_url.clone())
                .or_default() += 1;

            self.graph
                .get(page_url)
                .cloned()
                .ok_or_else(|| PageError::network(page_url.as_str(), NetworkError::Status(404)))
        }
    }

    fn url(path: &str) -> Url {
        Url::parse("https://example.com").unwrap().join(path).unwrap()
    }

    #[tokio::test]
    async fn test_closed_graph_visits_each_page_once() {
        // A cyclic site: every page links to its neighbours and back to the root
        let site = FakeSite::new(vec![
            ("/docs", vec!["/docs/a", "/docs/b"]),
            ("/docs/a", vec!["/docs", "/docs/b", "/docs/a/deep"]),
            ("/docs/b", vec!["/docs/a", "/docs"]),
            ("/docs/a/deep", vec!["/docs/a", "/docs/c"]),
            ("/docs/c", vec!["/docs"]),
        ]);

        let discovery = Frontier::new(url("/docs"), "/docs").run(&site).await;

        assert_eq!(discovery.pages.len(), 5);
        assert_eq!(discovery.visited, 5);
        assert!(discovery.base_reachable);
        for page in ["/docs", "/docs/a", "/docs/b", "/docs/a/deep", "/docs/c"] {
            assert_eq!(site.fetch_count(page), 1, "page {} fetched more than once", page);
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_base_matches_links_without_one() {
        // Started as ".../docs/", but every page links to ".../docs"
        let site = FakeSite::new(vec![
            ("/docs", vec!["/docs", "/docs/a"]),
            ("/docs/a", vec!["/docs", "/docs/a/"]),
        ]);

        let discovery = Frontier::new(url("/docs/"), "/docs").run(&site).await;

        let pages: Vec<_> = discovery.pages.iter().map(Url::path).collect();
        assert_eq!(pages, vec!["/docs", "/docs/a"]);
        assert_eq!(site.fetch_count("/docs"), 1);
        assert_eq!(site.fetch_count("/docs/"), 0);
        assert_eq!(site.fetch_count("/docs/a"), 1);
    }

    #[tokio::test]
    async fn test_leaf_pages_are_included() {
        // "/docs/leaf" never produces links of its own but is still a page
        let site = FakeSite::new(vec![("/docs", vec!["/docs/leaf"]), ("/docs/leaf", vec![])]);

        let discovery = Frontier::new(url("/docs"), "/docs").run(&site).await;

        let pages: Vec<_> = discovery.pages.iter().map(Url::path).collect();
        assert_eq!(pages, vec!["/docs", "/docs/leaf"]);
    }

    #[tokio::test]
    async fn test_failed_page_does_not_stop_discovery() {
        // "/docs/missing" is not in the graph, so fetching it fails
        let site = FakeSite::new(vec![
            ("/docs", vec!["/docs/missing", "/docs/ok"]),
            ("/docs/ok", vec!["/docs/ok/child"]),
            ("/docs/ok/child", vec![]),
        ]);

        let discovery = Frontier::new(url("/docs"), "/docs").run(&site).await;

        assert_eq!(discovery.pages.len(), 4);
        assert_eq!(site.fetch_count("/docs/missing"), 1);
        assert_eq!(site.fetch_count("/docs/ok/child"), 1);
    }

    #[tokio::test]
    async fn test_unreachable_base_yields_empty_discovery() {
        let site = FakeSite::new(vec![]);

        let discovery = Frontier::new(url("/docs"), "/docs").run(&site).await;

        assert!(!discovery.base_reachable);
        assert!(discovery.pages.is_empty());
        assert_eq!(discovery.visited, 1);
    }

    #[tokio::test]
    async fn test_out_of_scope_base_is_not_saved() {
        // Crawl starts on a landing page but only /docs pages are in scope
        let site = FakeSite::new(vec![("/", vec!["/docs/a"]), ("/docs/a", vec![])]);

        let discovery = Frontier::new(url("/"), "/docs").run(&site).await;

        let pages: Vec<_> = discovery.pages.iter().map(Url::path).collect();
        assert_eq!(pages, vec!["/docs/a"]);
    }
}
