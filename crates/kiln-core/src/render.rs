//! HTML serialization
//!
//! Converts a render tree into HTML text. Text and attribute values are
//! written as-is; documents are trusted input.

use crate::node::{Attributes, RenderNode, Tag};

/// Render a node and its descendants to HTML
pub fn render(node: &RenderNode) -> String {
    let mut output = String::with_capacity(1024);
    render_node(node, &mut output);
    output
}

fn render_node(node: &RenderNode, out: &mut String) {
    match node {
        RenderNode::Leaf {
            tag: None, value, ..
        } => out.push_str(value),

        RenderNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => {
            open_tag(tag, attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }

        RenderNode::Parent {
            tag,
            children,
            attributes,
        } => {
            open_tag(tag, attributes, out);
            for child in children {
                render_node(child, out);
            }
            close_tag(tag, out);
        }
    }
}

fn open_tag(tag: &Tag, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag.as_str());
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &Tag, out: &mut String) {
    out.push_str("</");
    out.push_str(tag.as_str());
    out.push('>');
}
