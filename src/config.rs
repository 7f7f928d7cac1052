//! Run settings and page manifest handling.
//! The manifest is an ordered list of page descriptors, stored as JSON or YAML.

use crate::cli::Args;
use crate::error::{DocError, DocResult};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolved locations and options for one documentation run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_path: PathBuf,
    pub template_dir: PathBuf,
    pub target_dir: PathBuf,
    pub manifest: PathBuf,
    pub readme: PathBuf,
    pub source_root: String,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            base_path: args.base_path,
            template_dir: args.templates,
            target_dir: args.output,
            manifest: args.manifest,
            readme: args.readme,
            source_root: args.source_root,
        }
    }
}

/// One output page: where it goes and which sources feed it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageDescriptor {
    /// Destination, relative to the output directory
    pub page: String,

    /// Source directory, relative to the base path
    #[serde(default)]
    pub module: String,

    /// Explicit source file names; overrides the module listing
    #[serde(default, rename = "class")]
    pub classes: Vec<String>,
}

impl PageDescriptor {
    fn validate(&self) -> DocResult<()> {
        if self.page.trim().is_empty() {
            return Err(DocError::ManifestError(
                "page entry without a destination path".to_string(),
            ));
        }
        if self.module.is_empty() && self.classes.is_empty() {
            return Err(DocError::ManifestError(format!(
                "page '{}' names neither a module nor a class list",
                self.page
            )));
        }
        Ok(())
    }
}

/// Ordered sequence of pages generated by one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    pub pages: Vec<PageDescriptor>,
}

/// Parses manifest content, trying JSON first and YAML second.
///
/// # Errors
/// * `DocError::ManifestError` if neither format parses or an entry is
///   missing its destination or sources
pub fn parse_manifest(content: &str) -> DocResult<Manifest> {
    let manifest: Manifest = match serde_json::from_str(content) {
        Ok(m) => m,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| DocError::ManifestError(format!("Invalid manifest format: {}", e)))?,
    };

    for page in &manifest.pages {
        page.validate()?;
    }

    Ok(manifest)
}

/// Reads and parses the manifest at `path`.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> DocResult<Manifest> {
    let path = path.as_ref();
    debug!("Loading manifest from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(DocError::IoError)?;
    parse_manifest(&content)
}
