//! docsmith generates Markdown API reference pages from Java sources.
//! It extracts class documentation, constructor and method signatures, and
//! merges the rendered Markdown into a tree of page templates.

/// Command-line interface module for the docsmith binary
pub mod cli;

/// Run settings and the page manifest
/// Supports JSON and YAML manifests
pub mod config;

/// Default paths, the placeholder marker, and separators
pub mod constants;

/// Error types and handling for docsmith
pub mod error;

/// Doc comment, constructor, and method extraction
pub mod extract;

/// Logger initialisation
pub mod logger;

/// Markdown formatting of class records
pub mod markdown;

/// Resolution of page descriptors into class records
pub mod page;

/// Run orchestration
/// - output directory recreation
/// - index page
/// - per-page generation
pub mod processor;

/// Text template rendering engine
pub mod renderer;

/// Placeholder merging and page writing
pub mod template;
