//! Command-line interface implementation for docsmith.
//! Every flag is optional: a bare invocation runs with the built-in layout.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_BASE_PATH, DEFAULT_MANIFEST, DEFAULT_README, DEFAULT_SOURCE_ROOT,
    DEFAULT_TARGET_DIR, DEFAULT_TEMPLATE_DIR,
};

/// Command-line arguments structure for docsmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "docsmith: Markdown API reference generator", long_about = None)]
pub struct Args {
    /// Directory that manifest module paths are resolved against
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BASE_PATH)]
    pub base_path: PathBuf,

    /// Directory containing the Markdown templates
    #[arg(long, value_name = "DIR", default_value = DEFAULT_TEMPLATE_DIR)]
    pub templates: PathBuf,

    /// Output directory. Deleted and recreated on every run
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TARGET_DIR)]
    pub output: PathBuf,

    /// Page manifest in JSON or YAML
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Project readme used for the index page
    #[arg(long, value_name = "FILE", default_value = DEFAULT_README)]
    pub readme: PathBuf,

    /// URL prefix for the per-class source links
    #[arg(long, value_name = "URL", default_value = DEFAULT_SOURCE_ROOT)]
    pub source_root: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
