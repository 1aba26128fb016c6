use std::collections::BTreeMap;
use std::path::PathBuf;

use liquid::model::Value;
use liquid::Object;
use serde::{Deserialize, Serialize};

use crate::builder::processor::yaml_to_liquid;
use crate::config::defaults;

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Content directory holding the Markdown source tree
    #[serde(default = "defaults::default_content")]
    pub content: PathBuf,

    /// Destination directory for the generated site
    #[serde(default = "defaults::default_output")]
    pub output: PathBuf,

    /// Asset sources merged into the output directory
    #[serde(default = "defaults::default_assets")]
    pub assets: Vec<PathBuf>,

    /// Markdown extensions to enable
    #[serde(default = "defaults::default_markdown_extensions")]
    pub markdown_extensions: Vec<String>,

    /// Template file every page is rendered through
    #[serde(default = "defaults::default_template")]
    pub template: PathBuf,

    /// Site title
    #[serde(default = "defaults::default_title")]
    pub title: String,

    /// Custom site values, exposed to templates as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content: defaults::default_content(),
            output: defaults::default_output(),
            assets: defaults::default_assets(),
            markdown_extensions: defaults::default_markdown_extensions(),
            template: defaults::default_template(),
            title: defaults::default_title(),
            extra: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Convert config to a Liquid Object for use in templates
    pub fn to_liquid(&self) -> Object {
        let mut obj = Object::new();

        obj.insert("title".into(), Value::scalar(self.title.clone()));
        obj.insert(
            "content".into(),
            Value::scalar(self.content.to_string_lossy().into_owned()),
        );
        obj.insert(
            "output".into(),
            Value::scalar(self.output.to_string_lossy().into_owned()),
        );

        // Custom variables from the config file
        for (key, value) in &self.extra {
            obj.insert(key.clone().into(), yaml_to_liquid(value.clone()));
        }

        obj
    }
}
