//! Markdown article loading.

use std::{
    fs,
    path::{Path, PathBuf},
};

use leaselens_core::{Article, frontmatter::parse_frontmatter_lenient};
use tracing::{debug, info};

use crate::Result;

/// Extension of article source files.
pub const ARTICLE_EXTENSION: &str = "md";

/// Load every article in `dir`, sorted by slug.
///
/// A missing directory yields zero articles. Subdirectories are not searched.
/// The extension must match exactly so that `<dir>/<slug>.md` names the source
/// of every loaded article.
pub fn load_articles(dir: &Path) -> Result<Vec<Article>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "articles directory not found");
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == ARTICLE_EXTENSION)
        })
        .collect();
    paths.sort();

    let mut articles = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
            debug!(path = %path.display(), "skipping article with non UTF-8 name");
            continue;
        };
        let raw = fs::read_to_string(&path)?;
        let (frontmatter, body) = parse_frontmatter_lenient(&raw, &path);
        debug!(slug, "loaded article");
        articles.push(Article::from_parts(slug, frontmatter, body, &path));
    }

    info!(dir = %dir.display(), count = articles.len(), "loaded articles");
    Ok(articles)
}
