//! Writing generated Markdown, either into a placeholder of an existing
//! template or as a fresh file.

use std::fs;
use std::path::Path;

use log::info;

use crate::constants::{BLOCK_SEPARATOR, PLACEHOLDER};
use crate::error::{DocError, DocResult};
use crate::page::read_file;

/// Replaces the first placeholder in `template` with `content`.
///
/// # Errors
/// * `DocError::MissingPlaceholder` if `template` has no placeholder
pub fn merge_into_template(template: &str, content: &str, path: &Path) -> DocResult<String> {
    if !template.contains(PLACEHOLDER) {
        return Err(DocError::MissingPlaceholder {
            path: path.display().to_string(),
            placeholder: PLACEHOLDER.to_string(),
        });
    }
    Ok(template.replacen(PLACEHOLDER, content, 1))
}

fn write_file(path: &Path, content: &str) -> DocResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(DocError::IoError)?;
    }
    fs::write(path, content).map_err(DocError::IoError)
}

/// Writes the blocks of one page to `path`.
///
/// An existing file at `path` is treated as a template and must contain the
/// placeholder; otherwise the page holds just the generated content.
///
/// # Errors
/// * `DocError::EmptyPage` if `blocks` is empty
/// * `DocError::MissingPlaceholder` if the template has no placeholder
pub fn write_content(blocks: &[String], path: &Path, page: &str) -> DocResult<()> {
    if blocks.is_empty() {
        return Err(DocError::EmptyPage(page.to_string()));
    }

    let mut markdown = blocks.join(BLOCK_SEPARATOR);
    if path.exists() {
        let template = read_file(path)?;
        markdown = merge_into_template(&template, &markdown, path)?;
    }

    info!("Auto-generating docs for {}", path.display());
    write_file(path, &markdown)
}
