//! Build command - prerenders the SEO routes, then generates the sitemap

use std::{path::Path, time::Instant};

use color_eyre::eyre::Result;

/// Run the build command.
///
/// The sitemap walks the prerendered output, so it always runs second.
pub fn run(config_path: &Path, root: &Path) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?root, "Starting SEO build");

    let config = super::load_config(config_path, root)?;
    let dist_dir = config.paths(root).dist_dir;

    let prerendered = super::prerender::prerender(config.clone(), root)?;
    let sitemap = super::sitemap::generate(config, root)?;

    let duration = start.elapsed();
    tracing::info!(
        pages = prerendered.pages,
        skipped = prerendered.skipped,
        urls = sitemap.urls,
        output = %dist_dir.display(),
        ?duration,
        "SEO build completed"
    );

    Ok(())
}
