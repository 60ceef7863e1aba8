//! Inline tokenizer
//!
//! Splits a run of text into typed spans. Passes run in a fixed order and
//! each pass only looks at spans that are still plain text, so emphasis is
//! never nested and links or images inside emphasis stay literal.

use once_cell::sync::Lazy;
use regex::Regex;

use kiln_core::TypedSpan;

use crate::{MarkdownError, Result};

static IMAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Tokenize a run of text into typed spans.
///
/// Fails with [`MarkdownError::MalformedInline`] when `**`, `_` or `` ` ``
/// is opened without a matching close.
pub fn tokenize(text: &str) -> Result<Vec<TypedSpan>> {
    let mut spans = Vec::new();
    if !text.is_empty() {
        spans.push(TypedSpan::plain(text));
    }

    let spans = split_delimiter(spans, "**", TypedSpan::Bold)?;
    let spans = split_delimiter(spans, "_", TypedSpan::Italic)?;
    let spans = split_delimiter(spans, "`", TypedSpan::Code)?;
    let spans = split_images(spans);
    let spans = split_links(spans);

    Ok(spans)
}

/// Split plain spans on a paired delimiter.
///
/// Even-indexed fragments stay plain, odd-indexed fragments become `wrap`.
/// Empty fragments are dropped.
pub fn split_delimiter(
    spans: Vec<TypedSpan>,
    delimiter: &'static str,
    wrap: fn(String) -> TypedSpan,
) -> Result<Vec<TypedSpan>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TypedSpan::Plain(text) if text.contains(delimiter) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let fields: Vec<&str> = text.split(delimiter).collect();
        if fields.len() % 2 == 0 {
            return Err(MarkdownError::MalformedInline {
                delimiter,
                text: text.clone(),
            });
        }

        for (i, field) in fields.into_iter().enumerate() {
            if field.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TypedSpan::plain(field));
            } else {
                out.push(wrap(field.to_string()));
            }
        }
    }

    Ok(out)
}

/// Split `![alt](url)` patterns out of plain spans
pub fn split_images(spans: Vec<TypedSpan>) -> Vec<TypedSpan> {
    split_matches(spans, &IMAGE_REGEX, false, |alt, url| TypedSpan::image(alt, url))
}

/// Split `[text](url)` patterns out of plain spans, ignoring any match
/// directly preceded by `!`
pub fn split_links(spans: Vec<TypedSpan>) -> Vec<TypedSpan> {
    split_matches(spans, &LINK_REGEX, true, |text, url| TypedSpan::link(text, url))
}

fn split_matches(
    spans: Vec<TypedSpan>,
    pattern: &Regex,
    reject_after_bang: bool,
    make: fn(&str, &str) -> TypedSpan,
) -> Vec<TypedSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TypedSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut last = 0;
        let mut pos = 0;
        while let Some(caps) = pattern.captures_at(&text, pos) {
            let Some(whole) = caps.get(0) else {
                break;
            };

            if reject_after_bang && text[..whole.start()].ends_with('!') {
                // `[` is one byte, so the next search starts on a char boundary
                pos = whole.start() + 1;
                continue;
            }

            push_plain(&mut out, &text[last..whole.start()]);
            out.push(make(&caps[1], &caps[2]));
            last = whole.end();
            pos = whole.end();
        }
        push_plain(&mut out, &text[last..]);
    }

    out
}

fn push_plain(out: &mut Vec<TypedSpan>, text: &str) {
    if !text.is_empty() {
        out.push(TypedSpan::plain(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::SpanKind;
    use pretty_assertions::assert_eq;

    fn bold(s: &str) -> TypedSpan {
        TypedSpan::Bold(s.to_string())
    }

    fn italic(s: &str) -> TypedSpan {
        TypedSpan::Italic(s.to_string())
    }

    fn code(s: &str) -> TypedSpan {
        TypedSpan::Code(s.to_string())
    }

    #[test]
    fn test_plain_text() {
        let spans = tokenize("just some words, nothing else.").unwrap();
        assert_eq!(spans, vec![TypedSpan::plain("just some words, nothing else.")]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(tokenize("").unwrap(), Vec::<TypedSpan>::new());
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            tokenize("This is **bold** text").unwrap(),
            vec![
                TypedSpan::plain("This is "),
                bold("bold"),
                TypedSpan::plain(" text"),
            ]
        );
        assert_eq!(tokenize("**bold**").unwrap(), vec![bold("bold")]);
    }

    #[test]
    fn test_adjacent_delimiters_emit_no_empty_spans() {
        assert_eq!(
            tokenize("**one****two**").unwrap(),
            vec![bold("one"), bold("two")]
        );
        assert_eq!(
            tokenize("a****b").unwrap(),
            vec![TypedSpan::plain("a"), TypedSpan::plain("b")]
        );
    }

    #[test]
    fn test_unclosed_bold() {
        let err = tokenize("**unclosed").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::MalformedInline {
                delimiter: "**",
                text: "**unclosed".to_string(),
            }
        );
    }

    #[test]
    fn test_unclosed_italic_and_code() {
        assert!(matches!(
            tokenize("snake_case"),
            Err(MarkdownError::MalformedInline { delimiter: "_", .. })
        ));
        assert!(matches!(
            tokenize("a `tick"),
            Err(MarkdownError::MalformedInline { delimiter: "`", .. })
        ));
    }

    #[test]
    fn test_mixed_emphasis() {
        assert_eq!(
            tokenize("Some **bold** and _italic_ and `code`.").unwrap(),
            vec![
                TypedSpan::plain("Some "),
                bold("bold"),
                TypedSpan::plain(" and "),
                italic("italic"),
                TypedSpan::plain(" and "),
                code("code"),
                TypedSpan::plain("."),
            ]
        );
    }

    #[test]
    fn test_typed_spans_are_not_resplit() {
        // The italic and code passes never look inside a bold span
        assert_eq!(
            tokenize("**a_b `c`**").unwrap(),
            vec![bold("a_b `c`")]
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            tokenize("See ![a cat](https://example.com/cat.png) here").unwrap(),
            vec![
                TypedSpan::plain("See "),
                TypedSpan::image("a cat", "https://example.com/cat.png"),
                TypedSpan::plain(" here"),
            ]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            tokenize("[home](/) and [docs](/docs)").unwrap(),
            vec![
                TypedSpan::link("home", "/"),
                TypedSpan::plain(" and "),
                TypedSpan::link("docs", "/docs"),
            ]
        );
    }

    #[test]
    fn test_image_is_not_a_link() {
        let spans = tokenize("![alt](u1) and [text](u2)").unwrap();
        assert_eq!(
            spans,
            vec![
                TypedSpan::image("alt", "u1"),
                TypedSpan::plain(" and "),
                TypedSpan::link("text", "u2"),
            ]
        );
        let images = spans.iter().filter(|s| s.kind() == SpanKind::Image).count();
        let links = spans.iter().filter(|s| s.kind() == SpanKind::Link).count();
        assert_eq!((images, links), (1, 1));
    }

    #[test]
    fn test_bang_before_link_pattern_in_plain_text() {
        // A `!` left in plain text still blocks link detection right after it
        let spans = split_links(vec![TypedSpan::plain("wow![x](y) [z](w)")]);
        assert_eq!(
            spans,
            vec![
                TypedSpan::plain("wow![x](y) "),
                TypedSpan::link("z", "w"),
            ]
        );
    }

    #[test]
    fn test_repeated_identical_links() {
        assert_eq!(
            tokenize("[a](b)[a](b)").unwrap(),
            vec![TypedSpan::link("a", "b"), TypedSpan::link("a", "b")]
        );
    }

    #[test]
    fn test_link_inside_bold_stays_literal() {
        assert_eq!(tokenize("**[x](y)**").unwrap(), vec![bold("[x](y)")]);
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(
            tokenize("héllo **wörld** ![ça](ü.png)").unwrap(),
            vec![
                TypedSpan::plain("héllo "),
                bold("wörld"),
                TypedSpan::plain(" "),
                TypedSpan::image("ça", "ü.png"),
            ]
        );
    }
}
