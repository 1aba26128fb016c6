use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::builder::page::model::Page;
use crate::builder::page::utils::{derive_output_path, is_markdown_file};
use crate::builder::types::BoxResult;
use crate::front_matter;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::SiteError;

/// Name of the page file that roots a directory subtree
const INDEX_FILE: &str = "index.md";

/// Read the full content tree as a forest of pages.
///
/// Top-level Markdown files become leaf pages; directories become subtrees
/// rooted at their `index.md` page, which owns every other page in the
/// directory (files and nested subtrees) as children.
pub fn read_pages(content_root: &Path, renderer: &MarkdownRenderer) -> BoxResult<Vec<Page>> {
    debug!("Reading content tree from {}", content_root.display());

    let mut pages = Vec::new();
    for entry in sorted_entries(content_root)? {
        if entry.is_dir() {
            pages.extend(read_subdir(&entry, content_root, renderer)?);
            continue;
        }

        if !is_markdown_file(&entry) {
            warn!("{}: not a markdown file, skipping", entry.display());
            continue;
        }

        pages.push(read_page(&entry, content_root, renderer, Vec::new())?);
    }

    debug!("Read {} top-level pages", pages.len());
    Ok(pages)
}

/// Read one directory as a subtree.
///
/// Nested directories are handled first, then the directory's own Markdown
/// files; the collected children are attached to the page built from
/// `index.md`. A directory without `index.md` contributes no page of its
/// own; its children are handed to the caller instead (skip-and-flatten).
fn read_subdir(
    dir: &Path,
    content_root: &Path,
    renderer: &MarkdownRenderer,
) -> BoxResult<Vec<Page>> {
    let mut children = Vec::new();
    for entry in sorted_entries(dir)? {
        if entry.is_dir() {
            children.extend(read_subdir(&entry, content_root, renderer)?);
            continue;
        }

        if entry.file_name().map_or(false, |name| name == INDEX_FILE) {
            continue;
        }

        if !is_markdown_file(&entry) {
            warn!("{}: not a markdown file, skipping", entry.display());
            continue;
        }

        children.push(read_page(&entry, content_root, renderer, Vec::new())?);
    }

    let index_path = dir.join(INDEX_FILE);
    if !index_path.is_file() {
        warn!(
            "{} does not contain {}; its pages move up a level",
            dir.display(),
            INDEX_FILE
        );
        return Ok(children);
    }

    Ok(vec![read_page(&index_path, content_root, renderer, children)?])
}

/// Construct a single page from a source file
fn read_page(
    source: &Path,
    content_root: &Path,
    renderer: &MarkdownRenderer,
    children: Vec<Page>,
) -> BoxResult<Page> {
    let raw = fs::read_to_string(source)
        .map_err(|e| SiteError::File(format!("failed to read {}: {}", source.display(), e)))?;

    let (metadata, markdown_body) = front_matter::parse(&raw)
        .map_err(|e| SiteError::FrontMatter(format!("{}: {}", source.display(), e)))?;

    let body = renderer.convert(&markdown_body);
    let output_path = derive_output_path(source, content_root);

    Ok(Page {
        metadata,
        body,
        source_path: source.to_path_buf(),
        output_path,
        children,
    })
}

/// Directory entries in name order, so that builds are deterministic
fn sorted_entries(dir: &Path) -> BoxResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| SiteError::File(format!("failed to scan {}: {}", dir.display(), e)))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| SiteError::File(format!("failed to scan {}: {}", dir.display(), e)))?;
        paths.push(entry.path());
    }

    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn renderer() -> MarkdownRenderer<'static> {
        MarkdownRenderer::new(&Config::default())
    }

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_flat_content_tree() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index.md", "---\ntitle: Home\n---\n# Hi");
        write(dir.path(), "about.md", "About page");

        let pages = read_pages(dir.path(), &renderer()).unwrap();
        assert_eq!(pages.len(), 2);

        let index = pages
            .iter()
            .find(|p| p.output_path == PathBuf::from("index.html"))
            .unwrap();
        assert_eq!(index.metadata.get_str("title"), Some("Home"));
        assert!(index.body.contains("<h1>"));
        assert!(index.children.is_empty());

        let about = pages
            .iter()
            .find(|p| p.output_path == PathBuf::from("about.html"))
            .unwrap();
        assert!(about.body.contains("About page"));
        assert!(about.metadata.is_empty());
    }

    #[test]
    fn test_directory_becomes_subtree_under_index() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "blog/index.md", "---\ntitle: Blog\n---\nPosts");
        write(dir.path(), "blog/post1.md", "---\ntitle: First\n---\nHello");

        let pages = read_pages(dir.path(), &renderer()).unwrap();
        assert_eq!(pages.len(), 1);

        let blog = &pages[0];
        assert_eq!(blog.output_path, PathBuf::from("blog/index.html"));
        assert_eq!(blog.children.len(), 1);
        assert_eq!(
            blog.children[0].output_path,
            PathBuf::from("blog/post1.html")
        );
        assert_eq!(blog.children[0].metadata.get_str("title"), Some("First"));
    }

    #[test]
    fn test_nested_directories_nest_their_indexes() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/index.md", "Docs");
        write(dir.path(), "docs/guide/index.md", "Guide");
        write(dir.path(), "docs/guide/setup.md", "Setup");

        let pages = read_pages(dir.path(), &renderer()).unwrap();
        assert_eq!(pages.len(), 1);

        let docs = &pages[0];
        assert_eq!(docs.output_path, PathBuf::from("docs/index.html"));
        assert_eq!(docs.children.len(), 1);

        let guide = &docs.children[0];
        assert_eq!(guide.output_path, PathBuf::from("docs/guide/index.html"));
        assert_eq!(guide.children.len(), 1);
        assert_eq!(
            guide.children[0].output_path,
            PathBuf::from("docs/guide/setup.html")
        );
    }

    #[test]
    fn test_directory_without_index_is_flattened() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "notes/monday.md", "Monday");
        write(dir.path(), "notes/tuesday.md", "Tuesday");

        let pages = read_pages(dir.path(), &renderer()).unwrap();
        assert_eq!(pages.len(), 2);

        // Output paths still mirror the source layout
        let mut outputs: Vec<_> = pages.iter().map(|p| p.output_path.clone()).collect();
        outputs.sort();
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("notes/monday.html"),
                PathBuf::from("notes/tuesday.html"),
            ]
        );
    }

    #[test]
    fn test_non_markdown_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index.md", "Home");
        write(dir.path(), "robots.txt", "User-agent: *");
        write(dir.path(), "blog/index.md", "Blog");
        write(dir.path(), "blog/draft.txt", "wip");

        let pages = read_pages(dir.path(), &renderer()).unwrap();
        assert_eq!(pages.len(), 2);
        let blog = pages
            .iter()
            .find(|p| p.output_path == PathBuf::from("blog/index.html"))
            .unwrap();
        assert!(blog.children.is_empty());
    }

    #[test]
    fn test_children_are_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "blog/index.md", "Blog");
        write(dir.path(), "blog/zebra.md", "z");
        write(dir.path(), "blog/alpha.md", "a");
        write(dir.path(), "blog/middle.md", "m");

        let pages = read_pages(dir.path(), &renderer()).unwrap();
        let names: Vec<_> = pages[0]
            .children
            .iter()
            .map(|p| p.output_path.clone())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("blog/alpha.html"),
                PathBuf::from("blog/middle.html"),
                PathBuf::from("blog/zebra.html"),
            ]
        );
    }

    #[test]
    fn test_malformed_front_matter_aborts_the_read() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "good.md", "fine");
        write(dir.path(), "bad.md", "---\ntitle: [unclosed\n---\nbody");

        assert!(read_pages(dir.path(), &renderer()).is_err());
    }

    #[test]
    fn test_missing_content_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        assert!(read_pages(&missing, &renderer()).is_err());
    }
}
