use std::path::PathBuf;

/// Default content directory
pub fn default_content() -> PathBuf {
    PathBuf::from("content")
}

/// Default output directory
pub fn default_output() -> PathBuf {
    PathBuf::from("output")
}

/// Default asset sources
pub fn default_assets() -> Vec<PathBuf> {
    vec![PathBuf::from("assets")]
}

/// Default template file
pub fn default_template() -> PathBuf {
    PathBuf::from("template.liquid")
}

/// Default site title
pub fn default_title() -> String {
    String::new()
}

/// Baseline Markdown extension set: tables and related extra syntax,
/// fenced-code language tagging, and smart punctuation
pub fn default_markdown_extensions() -> Vec<String> {
    ["tables", "strikethrough", "autolink", "highlight", "smart"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
