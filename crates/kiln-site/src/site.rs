//! Site building: static mirroring and recursive page generation

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use kiln::Compiler;

use crate::config::Config;
use crate::page::render_page;
use crate::{Result, SiteError};

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Directory entries sorted by file name
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .map_err(io_err(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(io_err(dir))?;
    entries.sort();
    Ok(entries)
}

/// Clear `destination` and mirror the `source` tree into it.
///
/// Returns the number of files copied.
pub fn copy_static(source: &Path, destination: &Path) -> Result<usize> {
    if destination.exists() {
        for path in sorted_entries(destination)? {
            if path.is_dir() {
                fs::remove_dir_all(&path).map_err(io_err(&path))?;
            } else {
                fs::remove_file(&path).map_err(io_err(&path))?;
            }
        }
    } else {
        fs::create_dir_all(destination).map_err(io_err(destination))?;
    }

    copy_tree(source, destination)
}

fn copy_tree(source: &Path, destination: &Path) -> Result<usize> {
    let mut copied = 0;

    for path in sorted_entries(source)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = destination.join(name);

        if path.is_dir() {
            fs::create_dir(&target).map_err(io_err(&target))?;
            copied += copy_tree(&path, &target)?;
        } else {
            tracing::info!("Copying {} to {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(io_err(&target))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Generate one HTML page from a Markdown file and a template.
///
/// The destination must not exist yet.
pub fn generate_page(
    compiler: &Compiler,
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<()> {
    tracing::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from).map_err(io_err(from))?;
    let template = fs::read_to_string(template_path).map_err(io_err(template_path))?;
    let page = render_page(compiler, from, &markdown, &template, base_path)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(io_err(dest))?;
    file.write_all(page.as_bytes()).map_err(io_err(dest))?;

    Ok(())
}

/// Generate a page for every `.md` file below `content_dir`, mirroring the
/// directory layout under `dest_dir`. Other files are skipped.
///
/// Returns the written pages in visiting order.
pub fn generate_pages_recursive(
    compiler: &Compiler,
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for path in sorted_entries(content_dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };

        if path.is_dir() {
            let nested = generate_pages_recursive(
                compiler,
                &path,
                template_path,
                &dest_dir.join(name),
                base_path,
            )?;
            written.extend(nested);
        } else if path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION) {
            let dest = dest_dir.join(name).with_extension(HTML_EXTENSION);
            generate_page(compiler, &path, template_path, &dest, base_path)?;
            written.push(dest);
        } else {
            tracing::debug!("Skipping {}", path.display());
        }
    }

    Ok(written)
}

/// Build the whole site: mirror static files, then generate every page
pub fn build(config: &Config) -> Result<Vec<PathBuf>> {
    let compiler = Compiler::new();

    let copied = copy_static(&config.static_dir, &config.output_dir)?;
    tracing::info!(
        "Copied {} static files into {}",
        copied,
        config.output_dir.display()
    );

    let pages = generate_pages_recursive(
        &compiler,
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &config.base_path,
    )?;
    tracing::info!("Generated {} pages", pages.len());

    Ok(pages)
}
