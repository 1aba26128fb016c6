use std::path::PathBuf;

use crate::front_matter::Metadata;

/// A single content unit in the page tree.
///
/// Pages are built once per build cycle and never mutated afterwards; a
/// rebuild discards the whole tree and reads it fresh.
#[derive(Debug, Clone)]
pub struct Page {
    /// Front-matter metadata
    pub metadata: Metadata,
    /// Body HTML, converted from the Markdown source
    pub body: String,
    /// Absolute source path, kept for diagnostics
    pub source_path: PathBuf,
    /// Output path relative to the output root
    pub output_path: PathBuf,
    /// Child pages; populated only on directory-index pages
    pub children: Vec<Page>,
}
