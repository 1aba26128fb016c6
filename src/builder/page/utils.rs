use std::path::{Path, PathBuf};

/// Extension of Markdown source files
pub const MARKDOWN_EXT: &str = "md";

/// Extension of rendered output files
pub const HTML_EXT: &str = "html";

/// Derive the output path for a source file: strip the content-root prefix
/// and swap the Markdown extension for the HTML extension. The transform is
/// idempotent, and distinct source files map to distinct output paths.
pub fn derive_output_path(source: &Path, content_root: &Path) -> PathBuf {
    let relative = source.strip_prefix(content_root).unwrap_or(source);

    let mut output = relative.to_path_buf();
    if is_markdown_file(&output) {
        output.set_extension(HTML_EXT);
    }

    output
}

/// Check if a file is a markdown file based on extension
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == MARKDOWN_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_swapped() {
        let output = derive_output_path(Path::new("content/about.md"), Path::new("content"));
        assert_eq!(output, PathBuf::from("about.html"));
    }

    #[test]
    fn test_nested_structure_is_preserved() {
        let output =
            derive_output_path(Path::new("content/blog/2024/post.md"), Path::new("content"));
        assert_eq!(output, PathBuf::from("blog/2024/post.html"));
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let root = Path::new("content");
        let once = derive_output_path(Path::new("content/blog/index.md"), root);
        let twice = derive_output_path(&once, root);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_distinct_sources_stay_distinct() {
        let root = Path::new("content");
        let sources = [
            "content/a.md",
            "content/b.md",
            "content/a/index.md",
            "content/a/b.md",
            "content/b/a.md",
        ];

        let mut outputs: Vec<PathBuf> = sources
            .iter()
            .map(|s| derive_output_path(Path::new(s), root))
            .collect();
        outputs.sort();
        outputs.dedup();
        assert_eq!(outputs.len(), sources.len());
    }

    #[test]
    fn test_markdown_detection() {
        assert!(is_markdown_file(Path::new("index.md")));
        assert!(!is_markdown_file(Path::new("style.css")));
        assert!(!is_markdown_file(Path::new("Makefile")));
    }
}
