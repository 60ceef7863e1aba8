//! # kiln
//!
//! Compile Markdown documents to HTML.
//!
//! kiln implements the small Markdown dialect used by the kiln static site
//! generator. A document is split into blocks on blank lines, every block is
//! classified by its syntax, and the text left after stripping block syntax is
//! tokenized into inline spans. The result is a render tree that
//! [`kiln_core::render`] turns into HTML.
//!
//! ## Dialect
//!
//! - Blocks: paragraphs, `#` headings (1 to 6 levels), fenced code, `>` quotes,
//!   `*`/`-` unordered lists and `1.` ordered lists numbered without gaps
//! - Inline: `**bold**`, `_italic_`, `` `code` ``, `![alt](src)`, `[text](href)`
//! - Emphasis does not nest, and nothing is escaped
//! - An unclosed inline delimiter fails the whole document
//!
//! ## Example
//!
//! ```rust
//! let html = kiln::markdown_to_html("# Title\n\nSome **bold** text.").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>");
//! ```

pub mod block;
mod compiler;
pub mod inline;
mod options;

pub use block::{classify, split_blocks, Block, BlockKind};
pub use compiler::{compile_block, Compiler};
pub use inline::tokenize;
pub use kiln_core::{render, NodeError, RenderNode, SpanKind, TypedSpan};
pub use options::Options;

/// Error type for Markdown compilation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Invalid markdown, unclosed `{delimiter}` in: {text}")]
    MalformedInline {
        delimiter: &'static str,
        text: String,
    },

    #[error("Invalid heading with {level} leading '#': {block}")]
    InvalidHeading { level: usize, block: String },

    #[error("Unknown block kind: {0}")]
    UnknownBlockKind(String),

    #[error(transparent)]
    Node(#[from] NodeError),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Compile a document into a render tree with default options
pub fn compile_document(markdown: &str) -> Result<RenderNode> {
    Compiler::new().compile_document(markdown)
}

/// Compile a document and render it to HTML with default options
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Compiler::new().markdown_to_html(markdown)
}
