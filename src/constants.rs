//! Common constants used throughout docsmith.

/// Marker replaced with generated content inside template files
pub const PLACEHOLDER: &str = "{{autogenerated}}";

/// Directory the source modules are resolved against
pub const DEFAULT_BASE_PATH: &str = "..";

/// Directory holding Markdown templates, mirrored into the output
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Output directory, wiped on every run
pub const DEFAULT_TARGET_DIR: &str = "doc_sources";

/// Page manifest (JSON or YAML)
pub const DEFAULT_MANIFEST: &str = "pages.json";

/// Readme the index page is built from
pub const DEFAULT_README: &str = "../README.md";

/// Name of the index page, both in the template and output directories
pub const INDEX_PAGE: &str = "index.md";

/// Prefix of the "[source]" links rendered for each class
pub const DEFAULT_SOURCE_ROOT: &str = "https://github.com/deeplearning4j/deeplearning4j/tree/master/deeplearning4j/deeplearning4j-modelimport/src/main/java/org/deeplearning4j/nn/modelimport/keras/";

/// Templates copied from the template directory into the output
pub const TEMPLATE_GLOB: &str = "*.md";

/// Separator placed between the class blocks of one page
pub const BLOCK_SEPARATOR: &str = "\n----\n\n";
