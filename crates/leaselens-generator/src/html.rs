//! HTML document generation for prerendered routes.
//!
//! Wraps server-rendered fragments into complete documents carrying meta
//! tags, structured data and the shell's asset tags.

use std::path::{Path, PathBuf};

use leaselens_core::Config;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{
    assets::AssetBundle,
    template::{TemplateContext, TemplateError, TemplateRegistry},
};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Structured data serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Open Graph object type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    /// Value of the `og:type` property.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Everything needed to render one prerendered document.
#[derive(Debug, Clone, Default)]
pub struct PageSpec {
    /// Route relative to the output root, without leading slash. Empty for the homepage.
    pub route: String,
    pub title: String,
    pub description: String,
    /// Absolute canonical URL.
    pub canonical: String,
    pub og_type: OgType,
    /// Server-rendered fragment placed inside the root element.
    pub content: String,
    /// JSON-LD objects, one script block each.
    pub structured_data: Vec<Value>,
    pub keywords: Option<String>,
    /// Document language; the site default when absent.
    pub lang: Option<String>,
}

impl PageSpec {
    /// Create a spec for `route` with its metadata.
    #[must_use]
    pub fn new(
        route: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            title: title.into(),
            description: description.into(),
            canonical: canonical.into(),
            ..Self::default()
        }
    }

    /// Set the Open Graph type.
    #[must_use]
    pub fn with_og_type(mut self, og_type: OgType) -> Self {
        self.og_type = og_type;
        self
    }

    /// Set the rendered fragment.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Append a JSON-LD object.
    #[must_use]
    pub fn with_structured_data(mut self, data: Value) -> Self {
        self.structured_data.push(data);
        self
    }

    /// Set the keywords meta value. Empty keywords are ignored.
    #[must_use]
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        let keywords = keywords.into();
        self.keywords = (!keywords.is_empty()).then_some(keywords);
        self
    }

    /// Set the document language.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// HTML document generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
}

impl HtmlGenerator {
    /// Create a new HTML generator with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
        }
    }

    /// Configuration the generator renders with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render a named fragment template.
    pub fn render_fragment(&self, name: &str, context: &TemplateContext) -> Result<String> {
        Ok(self.templates.render(name, context)?)
    }

    /// Render a complete document for `spec`.
    pub fn generate_document(&self, spec: &PageSpec, assets: &AssetBundle) -> Result<String> {
        debug!(route = %spec.route, "generating HTML document");

        let lang = spec.lang.as_deref().unwrap_or(&self.config.site.lang);
        let title = escape_html(&spec.title);
        let description = escape_html(&spec.description);

        let mut ctx = TemplateContext::new()
            .with_var("lang", escape_html(lang))
            .with_var("favicon", escape_html(&self.config.site.favicon))
            .with_var("title", title)
            .with_var("description", description)
            .with_var("canonical_url", escape_html(&spec.canonical))
            .with_var("og_type", spec.og_type.as_str())
            .with_var("og_image", escape_html(&self.config.og_image_url()))
            .with_var("content", &spec.content)
            .with_var("head_tags", assets.head_html())
            .with_var("body_scripts", assets.body_html());

        if let Some(keywords) = &spec.keywords {
            ctx.insert(
                "keywords_meta",
                format!(
                    "\n  <meta name=\"keywords\" content=\"{}\" />",
                    escape_html(keywords)
                ),
            );
        }

        if !spec.structured_data.is_empty() {
            let blocks = spec
                .structured_data
                .iter()
                .map(json_ld_block)
                .collect::<Result<Vec<_>>>()?;
            ctx.insert("structured_data", blocks.join("\n  "));
        }

        Ok(self.templates.render("document", &ctx)?)
    }

    /// Output file for a route: `<dist>/<route>/index.html`.
    #[must_use]
    pub fn output_path(&self, route: &str, output_dir: &Path) -> PathBuf {
        let route = route.trim_matches('/');
        if route.is_empty() {
            output_dir.join("index.html")
        } else {
            output_dir.join(route).join("index.html")
        }
    }
}

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a JSON-LD object into a script block.
///
/// `</` is escaped so string values cannot close the script element.
pub fn json_ld_block(data: &Value) -> Result<String> {
    let json = serde_json::to_string_pretty(data)?.replace("</", r"<\/");
    Ok(format!(
        "<script type=\"application/ld+json\">\n{json}\n  </script>"
    ))
}

/// Render escaped strings as `<li>` items.
#[must_use]
pub fn list_items<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item.as_ref())))
        .collect()
}
