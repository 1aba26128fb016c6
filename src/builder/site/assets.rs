use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::builder::types::BoxResult;
use crate::utils::error::SiteError;

/// Copy every configured asset source into the output root.
///
/// A directory source is merged into `output_root/<basename>`; a file
/// source lands directly in the output root. Copies are update-only: a
/// destination file is rewritten only when missing or older than its
/// source.
pub fn copy_assets(sources: &[PathBuf], output_root: &Path) -> BoxResult<()> {
    fs::create_dir_all(output_root)?;

    for source in sources {
        if source.is_dir() {
            match source.file_name() {
                Some(name) => copy_dir_updated(source, &output_root.join(name))?,
                None => warn!("Asset source {} has no base name, skipping", source.display()),
            }
        } else if source.is_file() {
            match source.file_name() {
                Some(name) => copy_file_updated(source, &output_root.join(name))?,
                None => warn!("Asset source {} has no base name, skipping", source.display()),
            }
        } else {
            warn!("Asset source {} does not exist, skipping", source.display());
        }
    }

    Ok(())
}

/// Recursively merge a directory into the destination
fn copy_dir_updated(source: &Path, destination: &Path) -> BoxResult<()> {
    for entry in WalkDir::new(source) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(source)?;
        copy_file_updated(entry.path(), &destination.join(relative))?;
    }

    Ok(())
}

/// Copy a single file unless the destination is already up to date
fn copy_file_updated(source: &Path, destination: &Path) -> BoxResult<()> {
    if !needs_copy(source, destination) {
        debug!("Asset {} is up to date", destination.display());
        return Ok(());
    }

    // Ensure parent directory exists
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!(
        "Copying asset {} to {}",
        source.display(),
        destination.display()
    );
    fs::copy(source, destination).map_err(|e| {
        SiteError::File(format!(
            "failed to copy {} to {}: {}",
            source.display(),
            destination.display(),
            e
        ))
    })?;

    Ok(())
}

/// A destination needs copying when it is missing or older than its source
fn needs_copy(source: &Path, destination: &Path) -> bool {
    let dest_mtime = match fs::metadata(destination).and_then(|m| m.modified()) {
        Ok(mtime) => mtime,
        Err(_) => return true,
    };

    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(src_mtime) => src_mtime > dest_mtime,
        Err(_) => true,
    }
}
