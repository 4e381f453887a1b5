// src/markdown/extract.rs
// =============================================================================
// This module turns one documentation page into Markdown blocks.
//
// Steps:
// 1. Fetch the page (network errors are reported, not fatal)
// 2. Read the <title> (falls back to the URL)
// 3. Find the content container: <main>, otherwise <article>
// 4. Walk the container in document order and classify every
//    h1-h3 / p / pre / code / li element into a MarkdownBlock
//
// `parse_page` is a pure function (HTML in, Page out) so it can be tested
// without a server. The scraper::Html document never crosses an .await,
// which keeps the futures that call it Send.
// =============================================================================

use super::block::{MarkdownBlock, Page, DEFAULT_CODE_LANGUAGE};
use crate::crawl::PageFetcher;
use crate::error::PageError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// The elements we turn into Markdown, in one selector so matches come back
/// in document order
const CONTENT_ELEMENTS: &str = "h1, h2, h3, p, pre, code, li";

/// Fetches pages and converts their main content to Markdown
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    fetcher: PageFetcher,
}

impl ContentExtractor {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    pub async fn extract(&self, url: &Url) -> Result<Page, PageError> {
        let html = self.fetcher.fetch(url).await?;
        parse_page(&html, url)
    }
}

// Parses a page's HTML into a title and a list of Markdown blocks
//
// Returns PageError::NoContent when the page has no <main> or <article>
pub fn parse_page(html: &str, url: &Url) -> Result<Page, PageError> {
    let document = Html::parse_document(html);

    // These selectors are constants and known to be valid
    let title_selector = Selector::parse("title").expect("valid title selector");
    let main_selector = Selector::parse("main").expect("valid main selector");
    let article_selector = Selector::parse("article").expect("valid article selector");
    let content_selector = Selector::parse(CONTENT_ELEMENTS).expect("valid content selector");

    let title = document
        .select(&title_selector)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| url.to_string());

    let container = document
        .select(&main_selector)
        .next()
        .or_else(|| document.select(&article_selector).next())
        .ok_or_else(|| PageError::NoContent {
            url: url.to_string(),
        })?;

    let blocks = container
        .select(&content_selector)
        .filter_map(|element| classify(element, container))
        .collect();

    Ok(Page {
        url: url.clone(),
        title,
        blocks,
    })
}

// Decides which MarkdownBlock (if any) an element becomes
fn classify(element: ElementRef, container: ElementRef) -> Option<MarkdownBlock> {
    let block = match element.value().name() {
        "h1" => heading(1, element),
        "h2" => heading(2, element),
        "h3" => heading(3, element),
        "p" => MarkdownBlock::Paragraph(element_text(element)),
        "li" => MarkdownBlock::ListItem(element_text(element)),
        "pre" => code_block(element),
        "code" => {
            // <pre><code> was already emitted as a fenced block
            if is_inside_pre(element, container) {
                return None;
            }
            MarkdownBlock::InlineCode(element_text(element))
        }
        _ => return None,
    };
    Some(block)
}

fn heading(level: u8, element: ElementRef) -> MarkdownBlock {
    MarkdownBlock::Heading {
        level,
        text: element_text(element),
    }
}

// <pre><code class="language-rust">...</code></pre> -> ```rust
fn code_block(pre: ElementRef) -> MarkdownBlock {
    let code_selector = Selector::parse("code").expect("valid code selector");
    let code_element = pre.select(&code_selector).next();

    let language = code_element
        .and_then(|code| {
            code.value()
                .classes()
                .find_map(|class| class.strip_prefix("language-"))
                .filter(|language| !language.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_CODE_LANGUAGE.to_string());

    let raw = code_element.unwrap_or(pre).text().collect::<String>();

    MarkdownBlock::CodeBlock {
        language,
        code: raw.trim().to_string(),
    }
}

fn is_inside_pre(element: ElementRef, container: ElementRef) -> bool {
    element
        .ancestors()
        .take_while(|node| node.id() != container.id())
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "pre")
}

// All text inside an element with whitespace runs collapsed
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
