//! Configuration options for document compilation

/// Options for assembling a compiled document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tag of the root element wrapping every block
    pub root_tag: String,

    /// Tag of the element wrapped around each code block's `code` element.
    /// `None` leaves code blocks bare.
    pub code_wrapper: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
            code_wrapper: Some("pre".to_string()),
        }
    }
}
