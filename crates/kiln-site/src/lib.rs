//! # kiln-site
//!
//! Static site generation on top of the kiln Markdown compiler.
//!
//! A build mirrors a static assets directory into the output directory, then
//! turns every Markdown file under the content directory into an HTML page by
//! filling a template's `{{ Title }}` and `{{ Content }}` placeholders.
//!
//! ```text
//! static/  ───copy──────────────────────────────▶ public/
//! content/ ───kiln───▶ HTML ───template.html───▶ public/**/*.html
//! ```

pub mod config;
pub mod page;
pub mod site;

use std::path::PathBuf;

pub use config::{Config, ConfigError};
pub use page::{extract_title, fill_template, render_page, rewrite_base_path};
pub use site::{build, copy_static, generate_page, generate_pages_recursive};

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("No title found in {}: expected a line starting with '# '", .0.display())]
    MissingTitle(PathBuf),

    #[error("Failed to compile {}: {source}", .path.display())]
    Markdown {
        path: PathBuf,
        source: kiln::MarkdownError,
    },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, SiteError>;
