// src/markdown/block.rs
// =============================================================================
// The Markdown side of the converter.
//
// A page's body is a list of `MarkdownBlock`s. The HTML classifier
// (extract.rs) decides what each element *means*; this file decides how each
// kind of block is *written*. Keeping the two apart means a new output style
// only touches the Display impl below.
// =============================================================================

use std::fmt;
use url::Url;

/// Code blocks without a `language-*` class get this tag
pub const DEFAULT_CODE_LANGUAGE: &str = "tsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownBlock {
    /// h1-h3; `level` is 1, 2 or 3
    Heading { level: u8, text: String },
    Paragraph(String),
    ListItem(String),
    CodeBlock { language: String, code: String },
    InlineCode(String),
}

impl fmt::Display for MarkdownBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkdownBlock::Heading { level, text } => {
                write!(f, "{} {}", "#".repeat(usize::from(*level)), text)
            }
            MarkdownBlock::Paragraph(text) => write!(f, "{}", text),
            MarkdownBlock::ListItem(text) => write!(f, "- {}", text),
            MarkdownBlock::CodeBlock { language, code } => {
                write!(f, "```{}\n{}\n```", language, code)
            }
            MarkdownBlock::InlineCode(text) => write!(f, "`{}`", text),
        }
    }
}

/// One documentation page, ready to be written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: Url,
    pub title: String,
    pub blocks: Vec<MarkdownBlock>,
}

impl Page {
    /// Renders the output file content
    ///
    /// ```text
    /// > Source: <url>
    /// # <title>
    ///
    /// <block>
    ///
    /// <block>
    ///
    /// ```
    pub fn to_markdown(&self) -> String {
        let mut lines = vec![
            format!("> Source: {}", self.url),
            format!("# {}", self.title),
            String::new(),
        ];

        for block in &self.blocks {
            lines.push(block.to_string());
            lines.push(String::new());
        }

        lines.join("\n")
    }
}
