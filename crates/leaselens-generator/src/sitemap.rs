//! Sitemap generation.
//!
//! Walks the prerendered output directories and emits an XML sitemap with one
//! entry per generated document.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, SecondsFormat, Utc};
use leaselens_core::{Config, OutputDir};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

const INDEX_FILE: &str = "index.html";

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// A sitemap URL entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Absolute URL.
    pub loc: String,

    /// Last modification time.
    pub lastmod: DateTime<Utc>,
}

impl SitemapEntry {
    /// `lastmod` as ISO-8601 UTC with milliseconds.
    #[must_use]
    pub fn lastmod_string(&self) -> String {
        self.lastmod.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Ordered set of sitemap entries, unique by URL.
#[derive(Debug, Clone, Default)]
pub struct Sitemap {
    seen: HashSet<String>,
    entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// Create an empty sitemap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry unless its URL is already present.
    ///
    /// Returns whether the entry was added.
    pub fn push(&mut self, entry: SitemapEntry) -> bool {
        if !self.seen.insert(entry.loc.clone()) {
            debug!(loc = %entry.loc, "skipping duplicate sitemap URL");
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sitemap has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the sitemap as XML.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for entry in &self.entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                entry.lastmod_string()
            ));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Outcome of writing a sitemap.
#[derive(Debug, Clone)]
pub struct SitemapReport {
    /// Written file.
    pub path: PathBuf,

    /// Number of URLs in the sitemap.
    pub urls: usize,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
    root: PathBuf,
}

impl SitemapGenerator {
    /// Create a new sitemap generator resolving paths against `root`.
    #[must_use]
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    /// Collect entries for the homepage and every document under `dirs`.
    ///
    /// Missing directories are skipped.
    pub fn collect(&self, dirs: &[OutputDir]) -> Result<Sitemap> {
        let paths = self.config.paths(&self.root);
        let mut sitemap = Sitemap::new();

        if paths.shell.is_file() {
            sitemap.push(SitemapEntry {
                loc: self.config.base_url().to_string(),
                lastmod: modified(&paths.shell)?,
            });
        }

        for dir in dirs {
            let dir_path = paths.dist_dir.join(&dir.name);
            if !dir_path.is_dir() {
                debug!(dir = %dir_path.display(), "output directory not found, skipping");
                continue;
            }

            for entry in WalkDir::new(&dir_path).sort_by_file_name() {
                let entry = entry?;
                if !entry.file_type().is_file()
                    || entry.path().extension().is_none_or(|ext| ext != "html")
                {
                    continue;
                }

                let loc = self.url_for_file(entry.path(), &paths.dist_dir);
                let lastmod = match content_source(dir, &dir_path, entry.path()) {
                    Some(source) => {
                        debug!(source = %source.display(), "using content source timestamp");
                        modified(&source)?
                    }
                    None => DateTime::<Utc>::from(entry.metadata()?.modified()?),
                };

                sitemap.push(SitemapEntry { loc, lastmod });
            }
        }

        debug!(count = sitemap.len(), "collected sitemap entries");
        Ok(sitemap)
    }

    /// Collect entries and write the sitemap file.
    pub fn write(&self, dirs: &[OutputDir]) -> Result<SitemapReport> {
        let sitemap = self.collect(dirs)?;
        let path = self.config.paths(&self.root).sitemap;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, sitemap.to_xml())?;

        info!(path = %path.display(), urls = sitemap.len(), "generated sitemap");
        Ok(SitemapReport {
            path,
            urls: sitemap.len(),
        })
    }

    /// Absolute URL of a document under the output root.
    ///
    /// A trailing `index.html` is dropped so the URL ends with `/`.
    fn url_for_file(&self, file: &Path, dist_dir: &Path) -> String {
        let relative = file.strip_prefix(dist_dir).unwrap_or(file);
        let mut path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if let Some(dir) = path.strip_suffix(INDEX_FILE)
            && (dir.is_empty() || dir.ends_with('/'))
        {
            path = dir.to_string();
        }

        self.config.url_for(&path)
    }
}

/// Content file whose timestamp overrides that of `file`, if any.
///
/// Only `<dir>/<slug>/index.html` documents of a content-source directory
/// qualify, and only when `<content dir>/<slug>.<ext>` exists.
fn content_source(dir: &OutputDir, dir_path: &Path, file: &Path) -> Option<PathBuf> {
    if file.file_name()? != INDEX_FILE {
        return None;
    }
    let parent = file.parent()?;
    if parent == dir_path {
        return None;
    }

    let slug = parent.file_name()?.to_str()?;
    let source = dir.lastmod.source_for(slug)?;
    source.is_file().then_some(source)
}

fn modified(path: &Path) -> Result<DateTime<Utc>> {
    let time: SystemTime = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(time))
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
