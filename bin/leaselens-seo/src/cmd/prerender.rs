//! Prerender command - writes static HTML for the SEO routes

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use leaselens_core::Config;
use leaselens_generator::{PrerenderReport, Prerenderer};

/// Run the prerender command.
pub fn run(config_path: &Path, root: &Path) -> Result<PrerenderReport> {
    tracing::info!(?config_path, ?root, "Starting prerender");

    let config = super::load_config(config_path, root)?;
    prerender(config, root)
}

/// Prerender with an already loaded configuration and print the summary line.
pub fn prerender(config: Config, root: &Path) -> Result<PrerenderReport> {
    let shell = config.paths(root).shell;
    let report = Prerenderer::new(config, root)
        .run()
        .wrap_err("Prerender failed")?;

    if report.skipped {
        println!("⚠  {} not found, skipping prerender", shell.display());
    } else {
        println!("✓ Prerendered {} page(s) for SEO", report.pages);
    }

    tracing::info!(?report, "Prerender finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_shell_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(Path::new("leaselens.toml"), dir.path()).unwrap();
        assert!(report.skipped);
    }

    #[test]
    fn test_run_writes_pages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("dist")).unwrap();
        std::fs::write(
            dir.path().join("dist/index.html"),
            r#"<html><head><script type="module" src="/assets/app.js"></script></head><body><div id="root"></div></body></html>"#,
        )
        .unwrap();

        let report = run(Path::new("leaselens.toml"), dir.path()).unwrap();

        assert!(!report.skipped);
        assert_eq!(report.pages, 13);
        assert!(dir.path().join("dist/pricing/index.html").is_file());
    }
}
