//! Content types shared by the prerenderer and the sitemap generator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::frontmatter::Frontmatter;

/// One state's landlord-tenant law summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    /// Key of the record in the source object.
    pub key: String,
    pub name: String,
    /// URL segment under `/states/`.
    pub slug: String,
    pub description: String,
    pub security_deposit_limit: String,
    pub security_deposit_return: String,
    pub rent_increase_notice: String,
    pub entry_notice: String,
    pub key_statutes: Vec<String>,
    pub common_issues: Vec<String>,
}

impl StateRecord {
    /// Route of this record's guide page.
    #[must_use]
    pub fn route(&self) -> String {
        format!("states/{}", self.slug)
    }

    /// Whether the slug is a single path segment that stays inside `states/`.
    #[must_use]
    pub fn has_route_safe_slug(&self) -> bool {
        is_path_segment(&self.slug)
    }

    /// First `max_chars` characters of the description.
    #[must_use]
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.description.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.description[..idx],
            None => &self.description,
        }
    }
}

/// A markdown article with its header metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// File stem of the source file.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub lang: String,
    /// Raw markdown body without the header.
    pub body: String,
    pub source_path: PathBuf,
}

impl Article {
    /// Build an article from its parsed header, applying fallbacks for missing fields.
    #[must_use]
    pub fn from_parts(
        slug: impl Into<String>,
        frontmatter: Frontmatter,
        body: String,
        source_path: &Path,
    ) -> Self {
        let slug = slug.into();
        let title = frontmatter
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| slug.replace('-', " "));

        Self {
            title,
            description: frontmatter.description.unwrap_or_default(),
            keywords: frontmatter.keywords.unwrap_or_default(),
            lang: frontmatter
                .lang
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| "en".to_string()),
            body,
            source_path: source_path.to_path_buf(),
            slug,
        }
    }
}

/// How the sitemap resolves `lastmod` for documents under an output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastModPolicy {
    /// Use the generated file's own modification time.
    Generated,
    /// Use the modification time of `<dir>/<slug>.<extension>` for nested
    /// index documents, when that file exists.
    ContentSource { dir: PathBuf, extension: String },
}

impl LastModPolicy {
    /// Content file whose timestamp applies to the document for `slug`.
    ///
    /// Returns `None` for [`LastModPolicy::Generated`]. The file may not exist.
    #[must_use]
    pub fn source_for(&self, slug: &str) -> Option<PathBuf> {
        match self {
            Self::Generated => None,
            Self::ContentSource { dir, extension } => {
                Some(dir.join(format!("{slug}.{extension}")))
            }
        }
    }
}

/// A top-level output directory populated by the prerenderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    /// Directory name relative to the output root.
    pub name: String,
    pub lastmod: LastModPolicy,
}

impl OutputDir {
    /// Directory whose documents carry their own timestamps.
    #[must_use]
    pub fn generated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lastmod: LastModPolicy::Generated,
        }
    }

    /// Directory whose nested documents are regenerated from content files.
    #[must_use]
    pub fn content_source(
        name: impl Into<String>,
        dir: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lastmod: LastModPolicy::ContentSource {
                dir: dir.into(),
                extension: extension.into(),
            },
        }
    }
}

fn is_path_segment(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\'])
}
