//! Typed inline spans
//!
//! The tokenizer produces a flat sequence of spans for each run of text.
//! Only links and images carry a target URL.

use crate::node::RenderNode;
use crate::Result;

/// Kind of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// An inline unit of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedSpan {
    /// Plain text
    Plain(String),

    /// Bold text (`**text**`)
    Bold(String),

    /// Italic text (`_text_`)
    Italic(String),

    /// Inline code (`` `code` ``)
    Code(String),

    /// Link with text and URL (`[text](url)`)
    Link { text: String, url: String },

    /// Image with alt text and source (`![alt](url)`)
    Image { alt: String, url: String },
}

impl TypedSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        TypedSpan::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TypedSpan::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        TypedSpan::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            TypedSpan::Plain(_) => SpanKind::Plain,
            TypedSpan::Bold(_) => SpanKind::Bold,
            TypedSpan::Italic(_) => SpanKind::Italic,
            TypedSpan::Code(_) => SpanKind::Code,
            TypedSpan::Link { .. } => SpanKind::Link,
            TypedSpan::Image { .. } => SpanKind::Image,
        }
    }

    /// Text content (link text, image alt text, or the span text)
    pub fn content(&self) -> &str {
        match self {
            TypedSpan::Plain(text)
            | TypedSpan::Bold(text)
            | TypedSpan::Italic(text)
            | TypedSpan::Code(text) => text,
            TypedSpan::Link { text, .. } => text,
            TypedSpan::Image { alt, .. } => alt,
        }
    }

    /// Link or image URL
    pub fn target(&self) -> Option<&str> {
        match self {
            TypedSpan::Link { url, .. } | TypedSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, TypedSpan::Plain(_))
    }

    /// Convert into the render node for this span
    pub fn into_node(self) -> Result<RenderNode> {
        match self {
            TypedSpan::Plain(text) => Ok(RenderNode::text(text)),
            TypedSpan::Bold(text) => RenderNode::leaf("b", text),
            TypedSpan::Italic(text) => RenderNode::leaf("i", text),
            TypedSpan::Code(text) => RenderNode::leaf("code", text),
            TypedSpan::Link { text, url } => RenderNode::leaf_with_attrs("a", text, [("href", url)]),
            TypedSpan::Image { alt, url } => {
                RenderNode::leaf_with_attrs("img", "", [("src", url), ("alt", alt)])
            }
        }
    }
}
