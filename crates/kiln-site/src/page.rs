//! Page assembly: title extraction, template filling and base-path rewriting

use kiln::Compiler;

use crate::{Result, SiteError};

/// Placeholder replaced with the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced with the rendered page content
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Return the text of the first `# ` line of a document, trimmed
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
}

/// Substitute every title and content placeholder in a template
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Point root-relative `href` and `src` attributes at `base_path`
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{}", base_path))
        .replace("src=\"/", &format!("src=\"{}", base_path))
}

/// Compile a Markdown page and place it into a template.
///
/// `source` names the page in errors.
pub fn render_page(
    compiler: &Compiler,
    source: &std::path::Path,
    markdown: &str,
    template: &str,
    base_path: &str,
) -> Result<String> {
    let content = compiler
        .markdown_to_html(markdown)
        .map_err(|source_err| SiteError::Markdown {
            path: source.to_path_buf(),
            source: source_err,
        })?;
    let title =
        extract_title(markdown).ok_or_else(|| SiteError::MissingTitle(source.to_path_buf()))?;

    let page = fill_template(template, title, &content);
    Ok(rewrite_base_path(&page, base_path))
}
