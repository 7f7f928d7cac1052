//! Page data collection: resolves a page descriptor to its source files and
//! extracts one class record per file.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::config::PageDescriptor;
use crate::error::{DocError, DocResult};
use crate::extract::{Extractor, Member};

/// Extracted documentation for one source class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub module: String,
    pub class_name: String,
    /// Source file relative to the module, without `.java`
    pub source_path: String,
    pub doc: String,
    pub constructors: Vec<Member>,
    pub methods: Vec<Member>,
}

/// Reads a UTF-8 source or template file.
pub fn read_file<P: AsRef<Path>>(path: P) -> DocResult<String> {
    let path = path.as_ref();
    debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(DocError::IoError)
}

/// Class name of a source file: its file name without extension.
pub fn class_name_of(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
        .to_string()
}

/// Path of a source file relative to its module, without the `.java`
/// extension.
pub fn source_path_of(file_name: &str) -> String {
    file_name
        .strip_suffix(".java")
        .unwrap_or(file_name)
        .to_string()
}

/// Lists the regular files of a module directory, sorted by file name.
pub fn list_module<P: AsRef<Path>>(module_dir: P) -> DocResult<Vec<String>> {
    let module_dir = module_dir.as_ref();
    let mut files = Vec::new();
    for entry in WalkDir::new(module_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| DocError::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        files.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(files)
}

/// Source files feeding a page, in the order they are rendered.
pub fn page_sources(page: &PageDescriptor, base_path: &Path) -> DocResult<Vec<(String, PathBuf)>> {
    let module_dir = base_path.join(&page.module);
    let files = if !page.classes.is_empty() {
        page.classes.clone()
    } else {
        list_module(&module_dir)?
    };

    Ok(files
        .into_iter()
        .map(|file| {
            let path = module_dir.join(&file);
            (file, path)
        })
        .collect())
}

/// Builds the class records of one page.
pub fn read_page_data(
    extractor: &Extractor,
    page: &PageDescriptor,
    base_path: &Path,
) -> DocResult<Vec<ClassRecord>> {
    let mut records = Vec::new();
    for (file, path) in page_sources(page, base_path)? {
        let source = read_file(&path)?;
        let class_name = class_name_of(&file);
        let extracted = extractor.extract(&source, &class_name)?;

        records.push(ClassRecord {
            module: page.module.clone(),
            class_name,
            source_path: source_path_of(&file),
            doc: extracted.doc,
            constructors: extracted.constructors,
            methods: extracted.methods,
        });
    }
    Ok(records)
}
