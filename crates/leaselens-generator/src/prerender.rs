//! Prerender orchestration.
//!
//! Synthesizes a static document for every SEO route from the built shell and
//! the content sources, then writes them into the output tree.

use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use leaselens_core::{Config, OutputDir, SitePaths, StateRecord};
use leaselens_parser::{
    MarkdownRenderer, ParserError, articles::ARTICLE_EXTENSION, load_articles, load_state_records,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    assets::{AssetBundle, AssetError},
    html::{HtmlError, HtmlGenerator, PageSpec},
    pages,
    routes::{MARKETING_PAGES, STATES_DIR, TOOLS, TOOLS_DIR},
};

/// Prerender errors.
#[derive(Debug, Error)]
pub enum PrerenderError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Asset error.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// Content source error.
    #[error("content error: {0}")]
    Parser(#[from] ParserError),
}

/// Result type for prerender operations.
pub type Result<T> = std::result::Result<T, PrerenderError>;

/// Outcome of a prerender run.
#[derive(Debug, Clone, Default)]
pub struct PrerenderReport {
    /// Number of documents written.
    pub pages: usize,

    /// Whether the run was skipped because the shell is missing.
    pub skipped: bool,

    /// Output directories the generated documents live in.
    pub output_dirs: Vec<OutputDir>,

    /// Run duration in milliseconds.
    pub duration_ms: u64,
}

/// Top-level output directories populated by the prerenderer.
///
/// Independent of any run, so the sitemap can be generated on its own.
#[must_use]
pub fn output_dirs(config: &Config, root: &Path) -> Vec<OutputDir> {
    let paths = config.paths(root);
    let mut dirs = vec![OutputDir::generated(TOOLS_DIR)];

    for page in MARKETING_PAGES {
        let name = page.top_dir();
        if !dirs.iter().any(|d| d.name == name) {
            dirs.push(OutputDir::generated(name));
        }
    }

    dirs.push(OutputDir::generated(STATES_DIR));
    dirs.push(OutputDir::content_source(
        config.blog_route(),
        paths.articles_dir,
        ARTICLE_EXTENSION,
    ));
    dirs
}

/// Static prerenderer for the SEO routes.
#[derive(Debug)]
pub struct Prerenderer {
    config: Config,
    root: PathBuf,
}

impl Prerenderer {
    /// Create a prerenderer resolving paths against `root`.
    #[must_use]
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    /// Output directories this prerenderer populates.
    #[must_use]
    pub fn output_dirs(&self) -> Vec<OutputDir> {
        output_dirs(&self.config, &self.root)
    }

    /// Execute the prerender.
    ///
    /// A missing shell is not an error: nothing is written and the report is
    /// marked as skipped.
    pub fn run(&self) -> Result<PrerenderReport> {
        let start = Instant::now();
        let paths = self.config.paths(&self.root);
        let mut report = PrerenderReport {
            output_dirs: self.output_dirs(),
            ..PrerenderReport::default()
        };

        let Some(assets) = AssetBundle::load(&paths.shell)? else {
            warn!(shell = %paths.shell.display(), "shell not found, skipping prerender");
            report.skipped = true;
            return Ok(report);
        };

        info!(output = %paths.dist_dir.display(), "starting prerender");

        let generator = HtmlGenerator::new(self.config.clone());
        let writer = PageWriter {
            generator: &generator,
            assets: &assets,
            paths: &paths,
        };

        // The homepage replaces the shell in place.
        writer.write(&pages::home_page(&generator)?)?;
        report.pages += 1;

        let states = self.load_states(&paths)?;
        if !states.is_empty() {
            for state in &states {
                writer.write(&pages::state_page(&generator, state)?)?;
            }
            writer.write(&pages::states_index_page(&generator, &states)?)?;
            report.pages += states.len() + 1;
        }

        for tool in TOOLS {
            writer.write(&pages::static_page(&generator, tool)?)?;
        }
        report.pages += TOOLS.len();

        for page in MARKETING_PAGES {
            writer.write(&pages::static_page(&generator, page)?)?;
        }
        report.pages += MARKETING_PAGES.len();

        let articles = load_articles(&paths.articles_dir)?;
        if !articles.is_empty() {
            let markdown = MarkdownRenderer::new();
            for article in &articles {
                writer.write(&pages::article_page(&generator, &markdown, article)?)?;
            }
            writer.write(&pages::blog_index_page(&generator, &articles)?)?;
            report.pages += articles.len() + 1;
        }

        report.duration_ms = millis(start.elapsed());
        info!(
            pages = report.pages,
            duration_ms = report.duration_ms,
            "prerender complete"
        );

        Ok(report)
    }

    /// Load state records. A source that fails to parse yields none.
    fn load_states(&self, paths: &SitePaths) -> Result<Vec<StateRecord>> {
        match load_state_records(&paths.state_data, &self.config.content.state_binding) {
            Ok(records) => Ok(records),
            Err(ParserError::Source { path, source }) => {
                warn!(path = %path.display(), error = %source, "failed to parse state data, skipping state pages");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Renders specs and writes them under the output root.
struct PageWriter<'a> {
    generator: &'a HtmlGenerator,
    assets: &'a AssetBundle,
    paths: &'a SitePaths,
}

impl PageWriter<'_> {
    fn write(&self, spec: &PageSpec) -> Result<()> {
        let html = self.generator.generate_document(spec, self.assets)?;
        let output_path = self.generator.output_path(&spec.route, &self.paths.dist_dir);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;

        debug!(path = %output_path.display(), "wrote page");
        Ok(())
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
