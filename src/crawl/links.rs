// src/crawl/links.rs
// =============================================================================
// This module finds documentation links on a page.
//
// A link is "in scope" when its href starts with the base path (e.g. "/docs")
// and is not just a jump to a section of the docs root ("/docs#top").
// In-scope links are resolved against the base URL and have their fragment
// removed, so "/docs/x#section" and "/docs/x" are the same page.
//
// Deduplication against already-visited pages is NOT done here; that is the
// Frontier's job (see frontier.rs).
// =============================================================================

use super::http::PageFetcher;
use crate::error::PageError;
use scraper::{Html, Selector};
use std::future::Future;
use url::Url;

/// Something that can list the in-scope links of a page
///
/// The real implementation is `LinkDiscoverer`; tests plug in an in-memory
/// link graph instead.
pub trait LinkSource {
    fn discover(&self, page_url: &Url) -> impl Future<Output = Result<Vec<Url>, PageError>>;
}

/// Fetches pages over HTTP and returns the documentation links on them
pub struct LinkDiscoverer {
    fetcher: PageFetcher,
    base_url: Url,
    base_path: String,
}

impl LinkDiscoverer {
    pub fn new(fetcher: PageFetcher, base_url: Url, base_path: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url,
            base_path: base_path.into(),
        }
    }
}

impl LinkSource for LinkDiscoverer {
    async fn discover(&self, page_url: &Url) -> Result<Vec<Url>, PageError> {
        tracing::info!("🔗 Crawling: {}", page_url);

        let html = self.fetcher.fetch(page_url).await?;
        let links = extract_doc_links(&html, &self.base_url, &self.base_path);

        tracing::debug!("Found {} doc links on {}", links.len(), page_url);
        Ok(links)
    }
}

// Extracts in-scope documentation links from HTML
//
// Parameters:
//   html: the HTML content to parse
//   base_url: the crawl's base URL (relative links are resolved against it)
//   base_path: the path prefix that scopes the crawl, e.g. "/docs"
//
// Returns: absolute URLs with fragments removed, in document order
//          (duplicates are kept; the caller dedupes)
pub fn extract_doc_links(html: &str, base_url: &Url, base_path: &str) -> Vec<Url> {
    let document = Html::parse_document(html);

    // Our selector "a[href]" is constant and known to be valid
    let selector = Selector::parse("a[href]").expect("valid a[href] selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| is_doc_href(href, base_url, base_path))
        .filter_map(|href| resolve_doc_link(base_url, href))
        // Protocol-relative hrefs ("//cdn.example.com/...") can start with "/"
        .filter(|url| url.origin() == base_url.origin())
        .collect()
}

// Decides whether an href points at a documentation page
//
// Kept:
//   "/docs/x"                          (starts with the base path)
//   "https://same-origin/docs/x"       (absolute, same origin, in scope)
// Skipped:
//   "/docs#top"                        (fragment-only jump on the root page)
//   "/other", "https://elsewhere/docs" (outside the scope)
fn is_doc_href(href: &str, base_url: &Url, base_path: &str) -> bool {
    if href.starts_with(base_path) {
        return !href.starts_with(&format!("{}#", base_path));
    }

    match Url::parse(href) {
        Ok(absolute) => {
            absolute.origin() == base_url.origin()
                && is_in_scope(absolute.path(), base_path)
                && !(absolute.path() == base_path && absolute.fragment().is_some())
        }
        Err(_) => false,
    }
}

// Resolves an href against the base URL and strips its fragment
fn resolve_doc_link(base_url: &Url, href: &str) -> Option<Url> {
    match base_url.join(href) {
        Ok(mut url) => {
            url.set_fragment(None);
            Some(url)
        }
        Err(e) => {
            tracing::debug!("Skipping unparseable href '{}': {}", href, e);
            None
        }
    }
}

/// The single form a page URL is tracked under
///
/// Fragment removed, trailing slash dropped ("/docs/" and "/docs" are the
/// same page). The root path "/" is left alone.
pub fn canonical_page_url(mut url: Url) -> Url {
    url.set_fragment(None);
    let path = url.path();
    if path.len() > 1 && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/').to_string();
        url.set_path(if trimmed.is_empty() { "/" } else { &trimmed });
    }
    url
}

/// True when a URL path lives under the base path
pub fn is_in_scope(path: &str, base_path: &str) -> bool {
    path.starts_with(base_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};
    use rstest::rstest;
    use std::time::Duration;

    fn base() -> Url {
        Url::parse("https://example.com/docs").unwrap()
    }

    fn as_strings(links: Vec<Url>) -> Vec<String> {
        links.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_only_doc_links_are_kept() {
        let html = r##"
            <a href="/docs/x">X</a>
            <a href="/docs#top">Top</a>
            <a href="/other">Other</a>
        "##;
        let links = extract_doc_links(html, &base(), "/docs");
        assert_eq!(as_strings(links), vec!["https://example.com/docs/x"]);
    }

    #[test]
    fn test_fragment_is_stripped() {
        let html = r##"<a href="/docs/x#section">X</a>"##;
        let links = extract_doc_links(html, &base(), "/docs");
        assert_eq!(as_strings(links), vec!["https://example.com/docs/x"]);
    }

    #[test]
    fn test_duplicates_are_left_to_the_caller() {
        let html = r##"<a href="/docs/a">A</a><a href="/docs/a#b">A again</a>"##;
        let links = extract_doc_links(html, &base(), "/docs");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], links[1]);
    }

    #[rstest]
    #[case("/docs/getting-started", true)]
    #[case("/docs", true)]
    #[case("/docs#intro", false)]
    #[case("/blog/post", false)]
    #[case("getting-started", false)]
    #[case("#section", false)]
    #[case("mailto:team@example.com", false)]
    #[case("https://example.com/docs/api", true)]
    #[case("https://example.com/docs#intro", false)]
    #[case("https://example.com/blog", false)]
    #[case("https://other.com/docs/api", false)]
    fn test_is_doc_href(#[case] href: &str, #[case] expected: bool) {
        assert_eq!(is_doc_href(href, &base(), "/docs"), expected, "href: {}", href);
    }

    #[test]
    fn test_root_base_path_accepts_root_relative_links() {
        let base = Url::parse("https://docs.example.com/").unwrap();
        let html = r##"<a href="/guide">Guide</a><a href="/#top">Top</a><a href="rel">Rel</a>"##;
        let links = extract_doc_links(html, &base, "/");
        assert_eq!(as_strings(links), vec!["https://docs.example.com/guide"]);
    }

    #[test]
    fn test_canonical_page_url_drops_trailing_slash() {
        let url = |s: &str| canonical_page_url(Url::parse(s).unwrap()).to_string();
        assert_eq!(url("https://example.com/docs/"), "https://example.com/docs");
        assert_eq!(url("https://example.com/docs/a/#x"), "https://example.com/docs/a");
        assert_eq!(url("https://example.com/docs/a?tab=1"), "https://example.com/docs/a?tab=1");
        assert_eq!(url("https://example.com/"), "https://example.com/");
    }

    #[test]
    fn test_protocol_relative_links_to_other_hosts_are_dropped() {
        let base = Url::parse("https://docs.example.com/").unwrap();
        let html = r##"<a href="//cdn.example.net/lib.js">CDN</a><a href="/api">API</a>"##;
        let links = extract_doc_links(html, &base, "/");
        assert_eq!(as_strings(links), vec!["https://docs.example.com/api"]);
    }

    #[tokio::test]
    async fn test_discoverer_fetches_and_filters() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/docs");
                then.status(200).body(
                    r##"<html><body>
                        <a href="/docs/a">A</a>
                        <a href="/docs#top">Top</a>
                        <a href="/pricing">Pricing</a>
                    </body></html>"##,
                );
            })
            .await;

        let base_url = Url::parse(&server.url("/docs")).unwrap();
        let fetcher = PageFetcher::new(Duration::from_secs(5)).unwrap();
        let discoverer = LinkDiscoverer::new(fetcher, base_url.clone(), "/docs");

        let links = discoverer.discover(&base_url).await.unwrap();
        assert_eq!(as_strings(links), vec![server.url("/docs/a")]);
    }

    #[tokio::test]
    async fn test_discoverer_reports_failed_fetch() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/docs/broken");
                then.status(500);
            })
            .await;

        let base_url = Url::parse(&server.url("/docs")).unwrap();
        let fetcher = PageFetcher::new(Duration::from_secs(5)).unwrap();
        let discoverer = LinkDiscoverer::new(fetcher, base_url, "/docs");

        let page = Url::parse(&server.url("/docs/broken")).unwrap();
        assert!(discoverer.discover(&page).await.is_err());
    }
}
