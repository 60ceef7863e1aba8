//! Block-to-tree compilation
//!
//! Strips block syntax, tokenizes what is left and assembles the node tree
//! for each block, then wraps all blocks of a document in a root element.

use kiln_core::{render, RenderNode};

use crate::block::{self, ordered_marker, BlockKind};
use crate::inline::tokenize;
use crate::options::Options;
use crate::{MarkdownError, Result};

const CODE_FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

/// Compiles Markdown documents into render trees
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: Options,
}

impl Compiler {
    /// Create a compiler with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Compile a whole document into a single root node.
    ///
    /// The first failing block aborts the document.
    pub fn compile_document(&self, markdown: &str) -> Result<RenderNode> {
        let blocks = block::blocks(markdown);
        tracing::debug!("Compiling document with {} blocks", blocks.len());

        let mut children = Vec::with_capacity(blocks.len());
        for block in blocks {
            tracing::debug!("Compiling {} block", block.kind);
            let node = compile_block(block.text, block.kind)?;

            let node = match (&self.options.code_wrapper, block.kind) {
                (Some(wrapper), BlockKind::Code) => RenderNode::parent(wrapper, vec![node])?,
                _ => node,
            };
            children.push(node);
        }

        Ok(RenderNode::parent(&self.options.root_tag, children)?)
    }

    /// Compile a document and render it to HTML
    pub fn markdown_to_html(&self, markdown: &str) -> Result<String> {
        let root = self.compile_document(markdown)?;
        Ok(render(&root))
    }
}

/// Compile one block of the given kind into a parent node
pub fn compile_block(text: &str, kind: BlockKind) -> Result<RenderNode> {
    match kind {
        BlockKind::Heading => compile_heading(text),
        BlockKind::Code => compile_code(text),
        BlockKind::Quote => compile_quote(text),
        BlockKind::Paragraph => compile_paragraph(text),
        BlockKind::UnorderedList => compile_unordered_list(text),
        BlockKind::OrderedList => compile_ordered_list(text),
    }
}

fn compile_heading(block: &str) -> Result<RenderNode> {
    let level = block.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return Err(MarkdownError::InvalidHeading {
            level,
            block: first_line(block).to_string(),
        });
    }

    let text = skip_chars(&block[level..], 1);
    RenderNode::parent(&format!("h{}", level), inline_children(text)?).map_err(Into::into)
}

fn compile_code(block: &str) -> Result<RenderNode> {
    let text = block.strip_prefix(CODE_FENCE).unwrap_or(block);
    let text = text.strip_suffix(CODE_FENCE).unwrap_or(text);
    RenderNode::parent("code", inline_children(text)?).map_err(Into::into)
}

/// Quote lines lose their first two characters whatever they are, so a line
/// written `>text` loses the `t`.
fn compile_quote(block: &str) -> Result<RenderNode> {
    let text = block
        .split('\n')
        .map(|line| skip_chars(line, 2))
        .collect::<Vec<_>>()
        .join(" ");
    RenderNode::parent("blockquote", inline_children(text.trim())?).map_err(Into::into)
}

fn compile_paragraph(block: &str) -> Result<RenderNode> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    RenderNode::parent("p", inline_children(&text)?).map_err(Into::into)
}

fn compile_unordered_list(block: &str) -> Result<RenderNode> {
    let items = block
        .split('\n')
        .map(|line| list_item(skip_chars(line, 2)))
        .collect::<Result<Vec<_>>>()?;
    RenderNode::parent("ul", items).map_err(Into::into)
}

fn compile_ordered_list(block: &str) -> Result<RenderNode> {
    let items = block
        .split('\n')
        .enumerate()
        .map(|(i, line)| list_item(skip_chars(line, ordered_marker(i).len())))
        .collect::<Result<Vec<_>>>()?;
    RenderNode::parent("ol", items).map_err(Into::into)
}

fn list_item(text: &str) -> Result<RenderNode> {
    RenderNode::parent("li", inline_children(text)?).map_err(Into::into)
}

fn inline_children(text: &str) -> Result<Vec<RenderNode>> {
    tokenize(text)?
        .into_iter()
        .map(|span| span.into_node().map_err(MarkdownError::from))
        .collect()
}

/// Drop the first `n` characters of `s`
fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(idx, _)| &s[idx..])
}

fn first_line(s: &str) -> &str {
    s.split('\n').next().unwrap_or(s)
}
