use std::time::Instant;

use log::info;

use crate::builder::page::read_pages;
use crate::builder::site::{assets, writer};
use crate::builder::types::BoxResult;
use crate::config::Config;
use crate::layout::TemplateRenderer;
use crate::markdown::MarkdownRenderer;
use crate::utils::fs;

/// Run one full build cycle: assets, content tree, rendered pages.
///
/// Every cycle is a full rebuild; two runs over unchanged inputs produce
/// byte-identical output. The first unrecovered error aborts the cycle.
pub fn build_site(config: &Config) -> BoxResult<()> {
    let start = Instant::now();

    // Create the output directory if it doesn't exist
    fs::create_directory(&config.output)?;

    info!("Copying assets...");
    assets::copy_assets(&config.assets, &config.output)?;

    info!("Reading content from {}", config.content.display());
    let markdown = MarkdownRenderer::new(config);
    let pages = read_pages(&config.content, &markdown)?;

    let renderer = TemplateRenderer::new(config)?;
    let written = writer::write_pages(&pages, &renderer, &config.output)?;

    info!("Wrote {} pages in {:.2?}", written, start.elapsed());
    Ok(())
}
