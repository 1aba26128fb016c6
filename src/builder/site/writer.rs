use std::path::Path;

use log::debug;

use crate::builder::page::Page;
use crate::builder::types::BoxResult;
use crate::layout::TemplateRenderer;
use crate::utils::error::SiteError;
use crate::utils::fs;

/// Render every page in the tree and write it under the output root.
///
/// A page is written before its children; any failure aborts the whole
/// pass, leaving already-written files in place. Returns the number of
/// pages written.
pub fn write_pages(
    pages: &[Page],
    renderer: &TemplateRenderer,
    output_root: &Path,
) -> BoxResult<usize> {
    let mut written = 0;

    for page in pages {
        let document = renderer.render(page)?;
        let outpath = output_root.join(&page.output_path);

        debug!("Writing {}", outpath.display());
        fs::write_file(&outpath, &document).map_err(|e| {
            SiteError::File(format!("failed to write {}: {}", outpath.display(), e))
        })?;
        written += 1;

        // Recurse through tree
        written += write_pages(&page.children, renderer, output_root)?;
    }

    Ok(written)
}
