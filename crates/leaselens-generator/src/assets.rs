//! Bundled asset tags extracted from the SPA shell.
//!
//! Every prerendered document carries the same stylesheet and script tags as
//! the shell so the client app boots and takes over after the first paint.

use std::{path::Path, sync::LazyLock};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

static LINK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<link[^>]+>").expect("valid link tag pattern"));

static LINK_REL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"rel\s*=\s*["']([^"']*)["']"#).expect("valid link rel pattern"));

static SCRIPT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script[^>]*src="[^"]*"[^>]*></script>"#).expect("valid script tag pattern")
});

/// Only link tags pointing into the bundle directory are carried over.
const ASSET_PATH_MARKER: &str = "/assets/";

/// Link relations the document template emits itself. Carrying them over
/// from an already prerendered shell would duplicate them on every rerun.
const DOCUMENT_RELS: &[&str] = &["icon", "canonical"];

/// Separator between tags in the rendered head and body.
const TAG_SEPARATOR: &str = "\n  ";

/// Asset extraction errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Asset tags copied from the shell into every prerendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBundle {
    /// `<link>` tags referencing bundled assets, in document order.
    pub head_tags: Vec<String>,

    /// `<script src=...></script>` tags, in document order.
    pub body_scripts: Vec<String>,
}

impl AssetBundle {
    /// Extract the asset tags from shell HTML.
    #[must_use]
    pub fn extract(shell: &str) -> Self {
        let head_tags = LINK_TAG
            .find_iter(shell)
            .map(|m| m.as_str())
            .filter(|tag| tag.contains(ASSET_PATH_MARKER) && !is_document_link(tag))
            .map(str::to_string)
            .collect();

        let body_scripts = SCRIPT_TAG
            .find_iter(shell)
            .map(|m| m.as_str().to_string())
            .collect();

        Self {
            head_tags,
            body_scripts,
        }
    }

    /// Read the shell at `path` and extract its asset tags.
    ///
    /// Returns `Ok(None)` when the shell does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!(path = %path.display(), "shell document not found");
            return Ok(None);
        }

        let shell = std::fs::read_to_string(path)?;
        let bundle = Self::extract(&shell);
        debug!(
            head = bundle.head_tags.len(),
            scripts = bundle.body_scripts.len(),
            "extracted asset tags"
        );
        Ok(Some(bundle))
    }

    /// Head tags joined for insertion into a document.
    #[must_use]
    pub fn head_html(&self) -> String {
        self.head_tags.join(TAG_SEPARATOR)
    }

    /// Body scripts joined for insertion into a document.
    #[must_use]
    pub fn body_html(&self) -> String {
        self.body_scripts.join(TAG_SEPARATOR)
    }
}

fn is_document_link(tag: &str) -> bool {
    LINK_REL.captures(tag).is_some_and(|caps| {
        caps[1]
            .split_ascii_whitespace()
            .any(|rel| DOCUMENT_RELS.iter().any(|d| rel.eq_ignore_ascii_case(d)))
    })
}
