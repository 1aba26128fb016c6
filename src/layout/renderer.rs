use liquid::model::Value;
use liquid::{Object, Template};
use log::debug;

use crate::builder::page::Page;
use crate::builder::processor::yaml_to_liquid;
use crate::config::Config;
use crate::utils::error::{BoxResult, SiteError};
use crate::utils::fs;

/// Renders pages into complete documents through the site template.
///
/// The template file is read and parsed once per build cycle; each page is
/// then rendered independently with `site` and `page` globals.
pub struct TemplateRenderer {
    template: Template,
    site: Object,
}

impl TemplateRenderer {
    /// Load and parse the site template
    pub fn new(config: &Config) -> BoxResult<Self> {
        if !config.template.is_file() {
            return Err(SiteError::Template(format!(
                "template file not found: {}",
                config.template.display()
            ))
            .into());
        }

        debug!("Using template: {}", config.template.display());
        let source = fs::read_file(&config.template)?;

        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| SiteError::Template(format!("failed to create template parser: {}", e)))?;

        let template = parser.parse(&source).map_err(|e| {
            SiteError::Template(format!(
                "failed to parse template {}: {}",
                config.template.display(),
                e
            ))
        })?;

        Ok(TemplateRenderer {
            template,
            site: config.to_liquid(),
        })
    }

    /// Render a single page into a complete document
    pub fn render(&self, page: &Page) -> BoxResult<String> {
        let mut globals = Object::new();
        globals.insert("site".into(), Value::Object(self.site.clone()));
        globals.insert("page".into(), Value::Object(page_to_liquid(page)));

        let rendered = self.template.render(&globals).map_err(|e| {
            SiteError::Template(format!(
                "failed to render {}: {}",
                page.source_path.display(),
                e
            ))
        })?;

        Ok(rendered)
    }
}

/// Convert a page, including its children, to a Liquid object.
///
/// Metadata keys come first so reserved names (`content`, `path`, `url`,
/// `children`) always win over a colliding front-matter key.
pub fn page_to_liquid(page: &Page) -> Object {
    let mut obj = Object::new();

    for (key, value) in page.metadata.iter() {
        obj.insert(key.clone().into(), yaml_to_liquid(value.clone()));
    }

    let path = page.output_path.to_string_lossy().into_owned();
    obj.insert("content".into(), Value::scalar(page.body.clone()));
    obj.insert("url".into(), Value::scalar(format!("/{}", path)));
    obj.insert("path".into(), Value::scalar(path));

    let children: Vec<Value> = page
        .children
        .iter()
        .map(|child| Value::Object(page_to_liquid(child)))
        .collect();
    obj.insert("children".into(), Value::Array(children));

    obj
}
