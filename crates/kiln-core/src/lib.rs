//! kiln-core - HTML render tree and serialization
//!
//! This crate provides the data structures shared by the kiln Markdown
//! compiler: the typed inline spans produced by the tokenizer, the render
//! tree built from them, and the HTML serializer for that tree.
//!
//! # Architecture
//!
//! ```text
//!                  ┌────────────┐         ┌─────────────┐
//! Markdown ──────▶ │ TypedSpans │ ──────▶ │ Render tree │ ──▶ HTML String
//!   (kiln)         └────────────┘         └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use kiln_core::{render, RenderNode, TypedSpan};
//!
//! let children = vec![
//!     TypedSpan::plain("This is ").into_node().unwrap(),
//!     TypedSpan::Bold("bold".to_string()).into_node().unwrap(),
//!     TypedSpan::plain(" text.").into_node().unwrap(),
//! ];
//! let paragraph = RenderNode::parent("p", children).unwrap();
//!
//! assert_eq!(render(&paragraph), "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod render;
mod span;

pub use node::{Attributes, RenderNode, Tag};
pub use render::render;
pub use span::{SpanKind, TypedSpan};

/// Error type for render tree construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Invalid tag name: {0:?}")]
    InvalidTag(String),
}

pub type Result<T> = std::result::Result<T, NodeError>;
