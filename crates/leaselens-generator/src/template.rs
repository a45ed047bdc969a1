//! HTML template system for prerendered pages.
//!
//! Provides a lightweight template system using string interpolation rather than
//! heavy template engines like Tera or Handlebars. Values are inserted verbatim,
//! so callers escape text before putting it in a context.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Create context with initial variables.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A simple template that supports variable interpolation.
///
/// Variables are specified as `{{ variable_name }}` in the template string,
/// optional ones as `{{ variable_name? }}`. Inserted values are never
/// re-scanned for placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            let (var_name, optional) = if let Some(stripped) = var_name.strip_suffix('?') {
                (stripped, true)
            } else {
                (var_name, false)
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Registry of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new registry with default templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(Template::new("document", DEFAULT_DOCUMENT_TEMPLATE));
        self.register(Template::new("home", DEFAULT_HOME_TEMPLATE));
        self.register(Template::new("simple", DEFAULT_SIMPLE_TEMPLATE));
        self.register(Template::new("state_guide", DEFAULT_STATE_GUIDE_TEMPLATE));
        self.register(Template::new("states_index", DEFAULT_STATES_INDEX_TEMPLATE));
        self.register(Template::new("article", DEFAULT_ARTICLE_TEMPLATE));
        self.register(Template::new("blog_index", DEFAULT_BLOG_INDEX_TEMPLATE));
    }

    /// Register a template, replacing any template with the same name.
    fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Get a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Full HTML document wrapping every prerendered page.
pub const DEFAULT_DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <link rel="icon" href="{{ favicon }}" type="image/svg+xml">

  <title>{{ title }}</title>
  <meta name="description" content="{{ description }}" />{{ keywords_meta? }}
  <link rel="canonical" href="{{ canonical_url }}" />

  <!-- Open Graph -->
  <meta property="og:type" content="{{ og_type }}" />
  <meta property="og:url" content="{{ canonical_url }}" />
  <meta property="og:title" content="{{ title }}" />
  <meta property="og:description" content="{{ description }}" />
  <meta property="og:image" content="{{ og_image }}" />

  <!-- Twitter -->
  <meta property="twitter:card" content="summary_large_image" />
  <meta property="twitter:url" content="{{ canonical_url }}" />
  <meta property="twitter:title" content="{{ title }}" />
  <meta property="twitter:description" content="{{ description }}" />
  <meta property="twitter:image" content="{{ og_image }}" />

  {{ structured_data? }}
  {{ head_tags? }}
</head>
<body>
  <div id="root">{{ content }}</div>
  {{ body_scripts? }}
</body>
</html>"#;

/// Homepage fragment.
pub const DEFAULT_HOME_TEMPLATE: &str = r#"
  <main>
    <h1>{{ heading }}</h1>
    <p>{{ intro }}</p>
    <section>
      <h2>Key Features</h2>
      <ul>
        {{ features }}
      </ul>
    </section>
  </main>"#;

/// Tool and marketing page fragment.
pub const DEFAULT_SIMPLE_TEMPLATE: &str = r#"<main><h1>{{ heading }}</h1><p>{{ body }}</p></main>"#;

/// State law guide fragment.
pub const DEFAULT_STATE_GUIDE_TEMPLATE: &str = r#"
    <main>
      <h1>{{ name }} Landlord-Tenant Law Guide</h1>
      <p>{{ description }}</p>
      <section>
        <h2>Security Deposit</h2>
        <p><strong>Limit:</strong> {{ deposit_limit }}</p>
        <p><strong>Return Period:</strong> {{ deposit_return }}</p>
      </section>
      <section>
        <h2>Rent Increases</h2>
        <p>{{ rent_increase_notice }}</p>
      </section>
      <section>
        <h2>Entry Notice</h2>
        <p>{{ entry_notice }}</p>
      </section>
      {{ key_statutes? }}
      {{ common_issues? }}
    </main>"#;

/// State guides index fragment.
pub const DEFAULT_STATES_INDEX_TEMPLATE: &str = r#"
  <main>
    <h1>State Landlord-Tenant Law Guides</h1>
    <p>{{ intro }}</p>
    <ul>
      {{ items }}
    </ul>
  </main>"#;

/// Blog article fragment.
pub const DEFAULT_ARTICLE_TEMPLATE: &str = r#"
  <main>
    <article>
      <h1>{{ title }}</h1>
      {{ lead? }}
      {{ body }}
    </article>
  </main>"#;

/// Blog index fragment.
pub const DEFAULT_BLOG_INDEX_TEMPLATE: &str = r#"
  <main>
    <h1>{{ heading }}</h1>
    <p>{{ intro }}</p>
    <ul>
      {{ items }}
    </ul>
  </main>"#;
