// src/markdown/mod.rs
// =============================================================================
// HTML -> Markdown conversion.
//
// Submodules:
// - block: the MarkdownBlock enum and how each block is written out
// - extract: classifies a page's HTML elements into MarkdownBlocks
// =============================================================================

mod block;
mod extract;

pub use extract::ContentExtractor;
