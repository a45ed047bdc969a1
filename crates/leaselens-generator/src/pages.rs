//! Page specifications for every prerendered route.

use leaselens_core::{Article, StateRecord};
use leaselens_parser::MarkdownRenderer;

use crate::{
    html::{HtmlGenerator, OgType, PageSpec, Result, escape_html, list_items},
    routes::{self, STATES_DIR, StaticRoute},
    structured_data,
    template::TemplateContext,
};

/// Homepage with the product's structured data.
pub fn home_page(generator: &HtmlGenerator) -> Result<PageSpec> {
    let config = generator.config();
    let features = routes::HOME_FEATURES
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect::<Vec<_>>()
        .join("\n        ");

    let ctx = TemplateContext::new()
        .with_var("heading", escape_html(routes::HOME_HEADING))
        .with_var("intro", escape_html(routes::HOME_INTRO))
        .with_var("features", features);
    let content = generator.render_fragment("home", &ctx)?;

    Ok(PageSpec::new(
        "",
        routes::HOME_TITLE,
        routes::HOME_DESCRIPTION,
        config.base_url(),
    )
    .with_content(content)
    .with_structured_data(structured_data::software_application(
        config,
        routes::HOME_DESCRIPTION,
        routes::APP_FEATURE_LIST,
    )))
}

/// Law guide for one state.
pub fn state_page(generator: &HtmlGenerator, state: &StateRecord) -> Result<PageSpec> {
    let config = generator.config();
    let name = &state.name;
    let route = state.route();
    let canonical = config.url_for(&route);
    let states_url = config.url_for(STATES_DIR);

    let mut ctx = TemplateContext::new()
        .with_var("name", escape_html(name))
        .with_var("description", escape_html(&state.description))
        .with_var("deposit_limit", escape_html(&state.security_deposit_limit))
        .with_var("deposit_return", escape_html(&state.security_deposit_return))
        .with_var("rent_increase_notice", escape_html(&state.rent_increase_notice))
        .with_var("entry_notice", escape_html(&state.entry_notice));
    if !state.key_statutes.is_empty() {
        ctx.insert(
            "key_statutes",
            list_section("Key Statutes", &state.key_statutes),
        );
    }
    if !state.common_issues.is_empty() {
        ctx.insert(
            "common_issues",
            list_section("Common Issues", &state.common_issues),
        );
    }
    let content = generator.render_fragment("state_guide", &ctx)?;

    let title = format!("{name} Landlord-Tenant Law Guide | {}", config.site.name);
    let description = format!(
        "Complete guide to {name} landlord-tenant law. Learn about security deposits, rent increases, notice requirements, and tenant rights in {name}."
    );
    let crumb = format!("{name} Law Guide");

    Ok(PageSpec::new(&route, title, description, &canonical)
        .with_og_type(OgType::Article)
        .with_content(content)
        .with_structured_data(structured_data::state_faq(state))
        .with_structured_data(structured_data::breadcrumb_list(&[
            ("Home", config.base_url()),
            ("State Guides", states_url.as_str()),
            (crumb.as_str(), canonical.as_str()),
        ])))
}

/// Index of all state guides, sorted by name.
pub fn states_index_page(generator: &HtmlGenerator, states: &[StateRecord]) -> Result<PageSpec> {
    let config = generator.config();

    let mut sorted: Vec<&StateRecord> = states.iter().collect();
    sorted.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    let items = sorted
        .iter()
        .map(|s| {
            format!(
                "<li><a href=\"/{}\">{}</a> — {}…</li>",
                escape_html(&s.route()),
                escape_html(&s.name),
                escape_html(s.excerpt(routes::STATE_EXCERPT_CHARS))
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let ctx = TemplateContext::new()
        .with_var("intro", escape_html(routes::STATES_INDEX_INTRO))
        .with_var("items", items);
    let content = generator.render_fragment("states_index", &ctx)?;

    Ok(PageSpec::new(
        STATES_DIR,
        routes::STATES_INDEX_TITLE,
        routes::STATES_INDEX_DESCRIPTION,
        config.url_for(STATES_DIR),
    )
    .with_content(content))
}

/// Tool or marketing page from its static copy.
pub fn static_page(generator: &HtmlGenerator, page: &StaticRoute) -> Result<PageSpec> {
    let ctx = TemplateContext::new()
        .with_var("heading", escape_html(page.h1))
        .with_var("body", escape_html(page.body));
    let content = generator.render_fragment("simple", &ctx)?;

    Ok(PageSpec::new(
        page.route,
        page.title,
        page.description,
        generator.config().url_for(page.route),
    )
    .with_content(content))
}

/// Blog article with its markdown body rendered.
pub fn article_page(
    generator: &HtmlGenerator,
    markdown: &MarkdownRenderer,
    article: &Article,
) -> Result<PageSpec> {
    let config = generator.config();
    let blog_route = config.blog_route();
    let route = format!("{blog_route}/{}", article.slug);
    let canonical = config.url_for(&route);
    let blog_url = config.url_for(blog_route);

    let mut ctx = TemplateContext::new()
        .with_var("title", escape_html(&article.title))
        .with_var("body", markdown.render(&article.body));
    if !article.description.is_empty() {
        ctx.insert(
            "lead",
            format!("<p>{}</p>", escape_html(&article.description)),
        );
    }
    let content = generator.render_fragment("article", &ctx)?;

    let title = format!("{} | {}", article.title, config.site.name);

    Ok(PageSpec::new(&route, title, &article.description, &canonical)
        .with_og_type(OgType::Article)
        .with_content(content)
        .with_keywords(&article.keywords)
        .with_lang(&article.lang)
        .with_structured_data(structured_data::article(config, article, &canonical))
        .with_structured_data(structured_data::breadcrumb_list(&[
            ("Home", config.base_url()),
            ("Blog", blog_url.as_str()),
            (article.title.as_str(), canonical.as_str()),
        ])))
}

/// Index of all articles, sorted by title.
pub fn blog_index_page(generator: &HtmlGenerator, articles: &[Article]) -> Result<PageSpec> {
    let config = generator.config();
    let blog_route = config.blog_route();

    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.slug.cmp(&b.slug)));

    let items = sorted
        .iter()
        .map(|a| {
            let summary = if a.description.is_empty() {
                String::new()
            } else {
                format!(" — {}", escape_html(&a.description))
            };
            format!(
                "<li><a href=\"/{blog_route}/{}\">{}</a>{summary}</li>",
                escape_html(&a.slug),
                escape_html(&a.title)
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let ctx = TemplateContext::new()
        .with_var("heading", escape_html(routes::BLOG_INDEX_HEADING))
        .with_var("intro", escape_html(routes::BLOG_INDEX_DESCRIPTION))
        .with_var("items", items);
    let content = generator.render_fragment("blog_index", &ctx)?;

    let title = format!("{} | {}", routes::BLOG_INDEX_HEADING, config.site.name);

    Ok(PageSpec::new(
        blog_route,
        title,
        routes::BLOG_INDEX_DESCRIPTION,
        config.url_for(blog_route),
    )
    .with_content(content))
}

fn list_section(heading: &str, items: &[String]) -> String {
    format!(
        "<section><h2>{heading}</h2><ul>{}</ul></section>",
        list_items(items)
    )
}
