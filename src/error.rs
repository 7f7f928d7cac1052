//! Error handling for docsmith.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use thiserror::Error;

/// Errors that can abort a documentation run.
///
/// Every variant is fatal: the driver stops at the first error and leaves
/// whatever was already written in place.
#[derive(Error, Debug)]
pub enum DocError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors in loading or validating the page manifest
    #[error("Manifest error: {0}.")]
    ManifestError(String),

    /// Represents a pattern that was expected in a source file but not found
    #[error("Extraction error: {0}.")]
    ExtractionError(String),

    /// Represents errors that occur while rendering text templates
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// A manifest entry produced no rendered class blocks
    #[error("No content for page {0}.")]
    EmptyPage(String),

    /// A template exists at the destination but has nowhere to put the content
    #[error("Template found for {path} but missing {placeholder} tag.")]
    MissingPlaceholder { path: String, placeholder: String },
}

/// Convenience type alias for Results with DocError as the error type.
pub type DocResult<T> = Result<T, DocError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The DocError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: DocError) {
    eprintln!("{}", err);
    std::process::exit(1);
}
