//! Markdown rendering for article bodies using pulldown-cmark.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Markdown renderer with heading anchors.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with tables, footnotes, strikethrough, task lists
    /// and heading attributes enabled.
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self { options }
    }

    /// Render a markdown body to HTML.
    ///
    /// Headings without an explicit `{#id}` get one derived from their text.
    pub fn render(&self, body: &str) -> String {
        let mut events: Vec<Event<'_>> = Parser::new_ext(body, self.options).collect();

        for i in 0..events.len() {
            if !matches!(events[i], Event::Start(Tag::Heading { id: None, .. })) {
                continue;
            }
            let anchor = slugify(&heading_text(&events[i + 1..]));
            if anchor.is_empty() {
                continue;
            }
            if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                *id = Some(CowStr::from(anchor));
            }
        }

        let mut out = String::with_capacity(body.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());
        out
    }
}

/// Concatenated text of a heading, up to its end tag.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Generate an anchor id from heading text.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
