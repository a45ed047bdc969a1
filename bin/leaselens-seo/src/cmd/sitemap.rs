//! Sitemap command - emits sitemap.xml over the prerendered output

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use leaselens_core::Config;
use leaselens_generator::{SitemapGenerator, SitemapReport, output_dirs};

/// Run the sitemap command.
pub fn run(config_path: &Path, root: &Path) -> Result<SitemapReport> {
    tracing::info!(?config_path, ?root, "Generating sitemap");

    let config = super::load_config(config_path, root)?;
    generate(config, root)
}

/// Generate the sitemap with an already loaded configuration and print the summary line.
pub fn generate(config: Config, root: &Path) -> Result<SitemapReport> {
    let dirs = output_dirs(&config, root);
    let file_name = config.build.sitemap.clone();

    let report = SitemapGenerator::new(config, root)
        .write(&dirs)
        .wrap_err("Sitemap generation failed")?;

    println!("✓ {file_name} generated ({} URL(s))", report.urls);

    tracing::info!(path = %report.path.display(), urls = report.urls, "Sitemap finished");
    Ok(report)
}
