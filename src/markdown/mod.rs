pub mod engine;

use comrak::Options;

use crate::config::Config;

/// Markdown-to-HTML converter configured from the site's extension set
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a new markdown renderer from config
    pub fn new(config: &Config) -> Self {
        MarkdownRenderer {
            options: engine::create_options(&config.markdown_extensions),
        }
    }

    /// Convert a Markdown body to HTML
    pub fn convert(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_basic_markdown() {
        let renderer = MarkdownRenderer::new(&Config::default());
        let html = renderer.convert("# Hello, World!\n\nThis is a **bold** statement.");

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_convert_table_with_default_extensions() {
        let renderer = MarkdownRenderer::new(&Config::default());
        let html = renderer.convert("| a | b |\n|---|---|\n| 1 | 2 |");

        assert!(html.contains("<table>"));
    }
}
