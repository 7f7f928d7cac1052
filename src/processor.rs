//! Run orchestration: output directory preparation, index page, and the
//! per-page extract → render → merge pipeline.

use std::fs;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{load_manifest, PageDescriptor, Settings};
use crate::constants::{INDEX_PAGE, TEMPLATE_GLOB};
use crate::error::{DocError, DocResult};
use crate::extract::Extractor;
use crate::markdown::MarkdownRenderer;
use crate::page::{read_file, read_page_data};
use crate::renderer::TemplateRenderer;
use crate::template::{merge_into_template, write_content};

fn template_globset() -> DocResult<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    builder.add(
        Glob::new(TEMPLATE_GLOB).map_err(|e| DocError::TemplateError(e.to_string()))?,
    );
    builder
        .build()
        .map_err(|e| DocError::TemplateError(e.to_string()))
}

/// Deletes `target_dir` and rebuilds it from `template_dir`.
///
/// Every subdirectory of the template tree is recreated and every Markdown
/// file copied, so later pages can be merged into their templates.
pub fn clean_target(template_dir: &Path, target_dir: &Path) -> DocResult<()> {
    if target_dir.exists() {
        debug!("Removing {}", target_dir.display());
        fs::remove_dir_all(target_dir).map_err(DocError::IoError)?;
    }

    let markdown = template_globset()?;
    for entry in WalkDir::new(template_dir) {
        let entry = entry.map_err(|e| DocError::IoError(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(template_dir)
            .map_err(|e| DocError::TemplateError(e.to_string()))?;
        let target = target_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(DocError::IoError)?;
        } else if markdown.is_match(entry.file_name()) {
            debug!("Copying template {}", relative.display());
            fs::copy(entry.path(), &target).map_err(DocError::IoError)?;
        }
    }
    Ok(())
}

/// Part of the readme shown on the index page: everything from the first
/// level-2 heading on, or the whole readme when it has none.
pub fn readme_body(readme: &str) -> &str {
    let readme = readme.strip_prefix('\u{feff}').unwrap_or(readme);
    let heading = if readme.starts_with("## ") {
        Some(0)
    } else {
        readme.find("\n## ").map(|i| i + 1)
    };
    match heading {
        Some(start) => &readme[start..],
        None => {
            warn!("Readme has no level-2 heading, using it whole");
            readme
        }
    }
}

/// Writes `index.md` from the index template and the project readme.
pub fn create_index_page(settings: &Settings) -> DocResult<()> {
    let readme = read_file(&settings.readme)?;
    let template_path = settings.template_dir.join(INDEX_PAGE);
    let template = read_file(&template_path)?;

    let index = merge_into_template(&template, readme_body(&readme), &template_path)?;
    let target = settings.target_dir.join(INDEX_PAGE);
    info!("Writing index page {}", target.display());
    fs::write(target, index).map_err(DocError::IoError)
}

/// Generates every page of a run.
pub struct Processor<'a> {
    settings: &'a Settings,
    extractor: Extractor,
    markdown: MarkdownRenderer<'a>,
}

impl<'a> Processor<'a> {
    pub fn new(settings: &'a Settings, engine: &'a dyn TemplateRenderer) -> DocResult<Self> {
        Ok(Self {
            settings,
            extractor: Extractor::new()?,
            markdown: MarkdownRenderer::new(engine, &settings.source_root),
        })
    }

    /// Extracts, renders, and writes one page.
    pub fn process_page(&self, page: &PageDescriptor) -> DocResult<()> {
        let records = read_page_data(&self.extractor, page, &self.settings.base_path)?;
        let blocks = records
            .iter()
            .map(|record| self.markdown.render_class(record))
            .collect::<DocResult<Vec<_>>>()?;

        let path = self.settings.target_dir.join(&page.page);
        write_content(&blocks, &path, &page.page)
    }

    /// Runs the whole pipeline; the first failure aborts it.
    ///
    /// # Flow
    /// 1. Recreates the output directory from the templates
    /// 2. Builds the index page
    /// 3. Loads the manifest
    /// 4. Generates each page in manifest order
    pub fn run(&self) -> DocResult<()> {
        clean_target(&self.settings.template_dir, &self.settings.target_dir)?;
        create_index_page(self.settings)?;

        let manifest = load_manifest(&self.settings.manifest)?;
        for page in &manifest.pages {
            self.process_page(page)?;
        }

        info!(
            "Generated {} page(s) in {}",
            manifest.pages.len(),
            self.settings.target_dir.display()
        );
        Ok(())
    }
}
