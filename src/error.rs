// src/error.rs
// =============================================================================
// Errors that can happen while processing a single documentation page.
//
// Every variant here is page-scoped: the page is skipped, the error is
// reported, and the rest of the crawl keeps going. Nothing in this file ever
// aborts a whole run.
//
// Rust concepts:
// - thiserror: derive Display + std::error::Error from attributes
// - #[source]: chains the underlying io::Error for better messages
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Why a network fetch failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The request did not finish before the configured timeout
    #[error("request timed out")]
    Timeout,
    /// The server answered, but not with a 2xx status
    #[error("HTTP {0}")]
    Status(u16),
    /// Could not connect (DNS failure, refused connection, ...)
    #[error("connection failed: {0}")]
    Connect(String),
    /// Anything else reqwest reports (body decoding, invalid response, ...)
    #[error("{0}")]
    Other(String),
}

impl NetworkError {
    // Maps a reqwest error onto our smaller taxonomy
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            NetworkError::Timeout
        } else if let Some(status) = error.status() {
            NetworkError::Status(status.as_u16())
        } else if error.is_connect() {
            NetworkError::Connect(error.to_string())
        } else {
            NetworkError::Other(error.to_string())
        }
    }
}

/// A failure that stops one page from being saved
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Error fetching {url}: {kind}")]
    Network { url: String, kind: NetworkError },

    /// The page has neither a <main> nor an <article> element
    #[error("No main content in {url}")]
    NoContent { url: String },

    #[error("Failed to write {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PageError {
    pub fn network(url: impl Into<String>, kind: NetworkError) -> Self {
        PageError::Network {
            url: url.into(),
            kind,
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PageError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Short machine-friendly name used in the JSON report
    pub fn kind(&self) -> &'static str {
        match self {
            PageError::Network { .. } => "network",
            PageError::NoContent { .. } => "no_content",
            PageError::Filesystem { .. } => "filesystem",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_message_names_url() {
        let err = PageError::network("https://example.com/docs/a", NetworkError::Status(404));
        assert_eq!(
            err.to_string(),
            "Error fetching https://example.com/docs/a: HTTP 404"
        );
        assert_eq!(err.kind(), "network");
    }

    #[test]
    fn test_no_content_message() {
        let err = PageError::NoContent {
            url: "https://example.com/docs".to_string(),
        };
        assert_eq!(err.to_string(), "No main content in https://example.com/docs");
    }

    #[test]
    fn test_filesystem_message_shows_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PageError::filesystem("out/a.md", io);
        assert!(err.to_string().starts_with("Failed to write out/a.md"));
        assert_eq!(err.kind(), "filesystem");
    }
}
