// src/save/path.rs
// =============================================================================
// Maps a page URL to the Markdown file it is saved as.
//
//   base path "/docs"
//   https://site/docs            -> index.md
//   https://site/docs/a/b        -> a/b.md
//   https://site/docs/page.html  -> page.html.md
//   https://site/docsearch/x     -> docsearch/x.md
//
// The base prefix is only removed when it ends at a "/" (or the end of the
// path). A plain starts-with check would turn "docsearch/x" into "earch/x".
//
// url::Url already resolves "." and ".." segments when it parses a URL, so a
// mapped path can never climb out of the output directory.
// =============================================================================

use std::path::PathBuf;
use url::Url;

/// Converts a full URL to a relative file path under the output directory
pub fn path_from_url(url: &Url, base_path: &str) -> PathBuf {
    let path = url.path().trim_matches('/');
    let prefix = base_path.trim_matches('/');

    let remainder = strip_base_prefix(path, prefix);

    let mut segments: Vec<&str> = remainder.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        segments.push("index");
    }

    let file_name = format!("{}.md", segments.pop().unwrap_or("index"));
    let mut relative: PathBuf = segments.into_iter().collect();
    relative.push(file_name);
    relative
}

// Removes the base prefix only at a segment boundary, so the prefix "docs"
// leaves "docsearch/x" untouched
fn strip_base_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    match path.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}
