//! Build configuration management.
//!
//! Every field has a default, and the defaults reproduce the fixed build step
//! of the LeaseLenses site, so a missing config file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Output tree settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Content source settings.
    #[serde(default)]
    pub content: ContentConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Product name used in titles and structured data.
    #[serde(default = "default_name")]
    pub name: String,

    /// Public base URL without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default document language.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Social preview image path, relative to the base URL.
    #[serde(default = "default_og_image")]
    pub og_image: String,

    /// Favicon href.
    #[serde(default = "default_favicon")]
    pub favicon: String,
}

/// Output tree configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory holding the built SPA bundle.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    /// Shell document file name inside `dist_dir`.
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Sitemap file name inside `dist_dir`.
    #[serde(default = "default_sitemap")]
    pub sitemap: String,
}

/// Content source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Source file holding the state law records.
    #[serde(default = "default_state_data")]
    pub state_data: String,

    /// Name of the binding whose object literal holds the records.
    #[serde(default = "default_state_binding")]
    pub state_binding: String,

    /// Directory of markdown articles.
    #[serde(default = "default_articles_dir")]
    pub articles_dir: String,

    /// Route prefix articles are published under.
    #[serde(default = "default_blog_route")]
    pub blog_route: String,
}

fn default_name() -> String {
    "LeaseLenses".to_string()
}

fn default_base_url() -> String {
    "https://www.leaselenses.com".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_og_image() -> String {
    "/assets/og-image.png".to_string()
}

fn default_favicon() -> String {
    "/favicon.svg".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_shell() -> String {
    "index.html".to_string()
}

fn default_sitemap() -> String {
    "sitemap.xml".to_string()
}

fn default_state_data() -> String {
    "src/data/stateData.ts".to_string()
}

fn default_state_binding() -> String {
    "stateData".to_string()
}

fn default_articles_dir() -> String {
    "seo/content".to_string()
}

fn default_blog_route() -> String {
    "blog".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            base_url: default_base_url(),
            lang: default_lang(),
            og_image: default_og_image(),
            favicon: default_favicon(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            shell: default_shell(),
            sitemap: default_sitemap(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            state_data: default_state_data(),
            state_binding: default_state_binding(),
            articles_dir: default_articles_dir(),
            blog_route: default_blog_route(),
        }
    }
}

/// Absolute locations of every input and output, resolved against a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub dist_dir: PathBuf,
    pub shell: PathBuf,
    pub sitemap: PathBuf,
    pub state_data: PathBuf,
    pub articles_dir: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file with `LEASELENS__` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("LEASELENS").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to the built-in defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.is_empty() {
            return Err(CoreError::config("site.name cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            return Err(CoreError::config(format!(
                "site.base_url must include a scheme: {}",
                self.site.base_url
            )));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        if self.content.blog_route.trim_matches('/').is_empty() {
            return Err(CoreError::config("content.blog_route cannot be empty"));
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url())
    }

    /// Absolute URL of the social preview image.
    #[must_use]
    pub fn og_image_url(&self) -> String {
        self.url_for(&self.site.og_image)
    }

    /// Blog route prefix without surrounding slashes.
    #[must_use]
    pub fn blog_route(&self) -> &str {
        self.content.blog_route.trim_matches('/')
    }

    /// Resolve every configured path against the project root.
    #[must_use]
    pub fn paths(&self, root: &Path) -> SitePaths {
        let dist_dir = root.join(&self.build.dist_dir);
        SitePaths {
            shell: dist_dir.join(&self.build.shell),
            sitemap: dist_dir.join(&self.build.sitemap),
            state_data: root.join(&self.content.state_data),
            articles_dir: root.join(&self.content.articles_dir),
            dist_dir,
        }
    }
}
