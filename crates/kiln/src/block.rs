//! Block classification
//!
//! A document is split into blocks on blank lines, and each block is assigned
//! a structural kind by looking at its first characters and line prefixes.

use std::fmt;
use std::str::FromStr;

use crate::MarkdownError;

const CODE_FENCE: &str = "```";

/// Structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    OrderedList,
    UnorderedList,
}

impl BlockKind {
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Paragraph,
        BlockKind::Heading,
        BlockKind::Code,
        BlockKind::Quote,
        BlockKind::OrderedList,
        BlockKind::UnorderedList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::OrderedList => "ordered_list",
            BlockKind::UnorderedList => "unordered_list",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = MarkdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MarkdownError::UnknownBlockKind(s.to_string()))
    }
}

/// A classified block of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockKind,
}

/// Split a document into blocks and classify each one
pub fn blocks(document: &str) -> Vec<Block<'_>> {
    split_blocks(document)
        .into_iter()
        .map(|text| Block {
            text,
            kind: classify(text),
        })
        .collect()
}

/// Split a document on blank lines (`"\n\n"`).
///
/// Each block is trimmed and blocks that end up empty are dropped.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a trimmed block. The first matching rule wins.
pub fn classify(block: &str) -> BlockKind {
    if is_code(block) {
        return BlockKind::Code;
    }
    if is_heading(block) {
        return BlockKind::Heading;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if lines
        .iter()
        .all(|line| line.starts_with("* ") || line.starts_with("- "))
    {
        BlockKind::UnorderedList
    } else if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_marker(i)))
    {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Marker of the `index`-th ordered list item (`"1. "`, `"2. "`, ...)
pub(crate) fn ordered_marker(index: usize) -> String {
    format!("{}. ", index + 1)
}

fn is_code(block: &str) -> bool {
    block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE)
}

/// A `#` first and a `"# "` somewhere in the first seven characters.
///
/// This admits some text that is not a valid heading (`"#a # b"`); the
/// compiler rejects those by counting the leading `#` characters.
fn is_heading(block: &str) -> bool {
    if !block.starts_with('#') {
        return false;
    }
    let head_end = block
        .char_indices()
        .nth(7)
        .map_or(block.len(), |(idx, _)| idx);
    block[..head_end].contains("# ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_blocks() {
        assert_eq!(split_blocks("a\n\nb\n\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_blocks_drops_empty_blocks() {
        assert_eq!(split_blocks("a\n\n\n\nb"), vec!["a", "b"]);
        assert_eq!(split_blocks("\n\n  \n\n"), Vec::<&str>::new());
        assert_eq!(split_blocks(""), Vec::<&str>::new());
    }

    #[test]
    fn test_split_blocks_trims_and_keeps_soft_breaks() {
        assert_eq!(
            split_blocks("  first line\nsecond line  \n\n\tnext\n"),
            vec!["first line\nsecond line", "next"]
        );
    }

    #[test]
    fn test_classify_heading() {
        assert_eq!(classify("# Title"), BlockKind::Heading);
        assert_eq!(classify("###### Six"), BlockKind::Heading);
    }

    #[test]
    fn test_classify_heading_out_of_range_is_paragraph() {
        assert_eq!(classify("#######  too many"), BlockKind::Paragraph);
        assert_eq!(classify("#nospace"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_heading_proxy_accepts_embedded_marker() {
        // `"# "` within seven characters is enough, even past a non-`#`
        assert_eq!(classify("#a # b"), BlockKind::Heading);
    }

    #[test]
    fn test_classify_code() {
        assert_eq!(classify("```\nlet x = 1;\n```"), BlockKind::Code);
        assert_eq!(classify("```\nnot closed"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_code_before_heading() {
        assert_eq!(classify("```\n# comment\n```"), BlockKind::Code);
    }

    #[test]
    fn test_classify_quote() {
        assert_eq!(classify("> one\n> two"), BlockKind::Quote);
        assert_eq!(classify(">tight"), BlockKind::Quote);
        assert_eq!(classify("> one\ntwo"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(classify("* a\n- b\n* c"), BlockKind::UnorderedList);
        assert_eq!(classify("*a\n* b"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(classify("1. a\n2. b\n3. c"), BlockKind::OrderedList);
        assert_eq!(classify("1. a\n3. b"), BlockKind::Paragraph);
        assert_eq!(classify("2. a\n3. b"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_long_ordered_list() {
        let block: Vec<String> = (1..=12).map(|i| format!("{}. item", i)).collect();
        assert_eq!(classify(&block.join("\n")), BlockKind::OrderedList);
    }

    #[test]
    fn test_classify_paragraph() {
        assert_eq!(classify("Just text\nover two lines"), BlockKind::Paragraph);
    }

    #[test]
    fn test_blocks() {
        let doc = "# Title\n\nText here.\n\n- a\n- b";
        let kinds: Vec<BlockKind> = blocks(doc).iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::UnorderedList
            ]
        );
    }

    #[test]
    fn test_block_kind_names() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }
        assert_eq!(
            "table".parse::<BlockKind>(),
            Err(MarkdownError::UnknownBlockKind("table".to_string()))
        );
    }
}
