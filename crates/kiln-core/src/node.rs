//! HTML render tree
//!
//! This module defines the nodes the compiler builds and the serializer walks.
//! A node is either a leaf holding a text value or a parent owning an ordered
//! list of children. Only parents and tagged leaves produce markup.

use std::fmt;

use indexmap::IndexMap;

use crate::{NodeError, Result};

/// Element attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// A validated HTML element name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Create a tag, rejecting empty names and names with characters
    /// other than ASCII alphanumerics and `-`
    pub fn new(name: &str) -> Result<Self> {
        let valid = !name.is_empty()
            && name.starts_with(|c: char| c.is_ascii_alphabetic())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(NodeError::InvalidTag(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node of the output tree
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Text value, wrapped in `tag` when present and emitted verbatim otherwise
    Leaf {
        tag: Option<Tag>,
        value: String,
        attributes: Attributes,
    },

    /// Element owning its children
    Parent {
        tag: Tag,
        children: Vec<RenderNode>,
        attributes: Attributes,
    },
}

impl RenderNode {
    /// Create an untagged leaf (raw text run)
    pub fn text(value: impl Into<String>) -> Self {
        RenderNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf
    pub fn leaf(tag: &str, value: impl Into<String>) -> Result<Self> {
        Self::leaf_with_attrs(tag, value, Vec::<(String, String)>::new())
    }

    /// Create a tagged leaf with attributes
    pub fn leaf_with_attrs<K, V>(
        tag: &str,
        value: impl Into<String>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Ok(RenderNode::Leaf {
            tag: Some(Tag::new(tag)?),
            value: value.into(),
            attributes: collect_attrs(attrs),
        })
    }

    /// Create a parent element
    pub fn parent(tag: &str, children: Vec<RenderNode>) -> Result<Self> {
        Ok(RenderNode::Parent {
            tag: Tag::new(tag)?,
            children,
            attributes: Attributes::new(),
        })
    }

    /// Create a parent element with attributes
    pub fn parent_with_attrs<K, V>(
        tag: &str,
        children: Vec<RenderNode>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        Ok(RenderNode::Parent {
            tag: Tag::new(tag)?,
            children,
            attributes: collect_attrs(attrs),
        })
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            RenderNode::Leaf { tag, .. } => tag.as_ref().map(Tag::as_str),
            RenderNode::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Get the children (empty for leaves)
    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Leaf { .. } => &[],
            RenderNode::Parent { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            RenderNode::Leaf { attributes, .. } | RenderNode::Parent { attributes, .. } => {
                attributes
            }
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Get the leaf value (`None` for parents)
    pub fn value(&self) -> Option<&str> {
        match self {
            RenderNode::Leaf { value, .. } => Some(value),
            RenderNode::Parent { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, RenderNode::Leaf { .. })
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, RenderNode::Parent { .. })
    }

    /// Concatenated text of all leaves below this node
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

impl fmt::Display for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render(self))
    }
}

fn collect_attrs<K, V>(attrs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    attrs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

fn collect_text(node: &RenderNode, out: &mut String) {
    match node {
        RenderNode::Leaf { value, .. } => out.push_str(value),
        RenderNode::Parent { children, .. } => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
