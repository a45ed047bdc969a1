//! Article header parsing.
//!
//! Articles start with a delimited header block (`---` for YAML, `+++` for
//! TOML) followed by the markdown body. Headers written by hand are not always
//! valid YAML (`description: Rent: what to know`), so the lenient entry point
//! falls back to reading one `key: value` pair per line.

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Header metadata for an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Article title.
    #[serde(default)]
    pub title: Option<String>,

    /// Summary used for meta tags and listings.
    #[serde(default)]
    pub description: Option<String>,

    /// Comma separated keywords for the keywords meta tag.
    #[serde(default)]
    pub keywords: Option<String>,

    /// Document language.
    #[serde(default)]
    pub lang: Option<String>,
}

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
///
/// The closing delimiter must start a line.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();
    let after_first = &content[delimiter.len()..];
    let closing = format!("\n{delimiter}");
    let closing_pos = after_first.find(&closing)?;

    let frontmatter = after_first[..closing_pos].trim();
    let rest = &after_first[closing_pos + closing.len()..];
    // Drop the remainder of the delimiter line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);

    Some((format, frontmatter, body.trim_start()))
}

/// Parse frontmatter strictly as YAML or TOML.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Frontmatter, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let frontmatter: Frontmatter = match format {
        FrontmatterFormat::Yaml if fm_str.is_empty() => Frontmatter::default(),
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((frontmatter, body.to_string()))
}

/// Parse frontmatter, falling back to line-wise `key: value` pairs when the
/// header is not valid YAML or TOML.
pub fn parse_frontmatter_lenient(content: &str, path: &Path) -> (Frontmatter, String) {
    match parse_frontmatter(content, path) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "falling back to key-value header");
            let Some((_, fm_str, body)) = split_frontmatter(content) else {
                return (Frontmatter::default(), content.to_string());
            };
            let mut pairs = parse_key_values(fm_str);
            let frontmatter = Frontmatter {
                title: pairs.remove("title"),
                description: pairs.remove("description"),
                keywords: pairs.remove("keywords"),
                lang: pairs.remove("lang"),
            };
            (frontmatter, body.to_string())
        }
    }
}

/// Read one `key: value` pair per line, stripping matching outer quotes.
///
/// Lines without a colon, or starting with one, are ignored.
pub fn parse_key_values(header: &str) -> HashMap<String, String> {
    header
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
