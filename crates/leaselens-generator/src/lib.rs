//! LeaseLens Generator Library
//!
//! Build-time prerendering and sitemap generation for the LeaseLenses site.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`assets`] - Asset tag extraction from the SPA shell
//! - [`html`] - Document generation from page specs
//! - [`structured_data`] - schema.org JSON-LD objects
//! - [`routes`] - Static route metadata
//! - [`pages`] - Page specs for every prerendered route
//! - [`prerender`] - Prerender orchestration
//! - [`sitemap`] - XML sitemap generation

pub mod assets;
pub mod html;
pub mod pages;
pub mod prerender;
pub mod routes;
pub mod sitemap;
pub mod structured_data;
pub mod template;

pub use assets::AssetBundle;
pub use html::{HtmlGenerator, OgType, PageSpec};
pub use prerender::{PrerenderReport, Prerenderer, output_dirs};
pub use sitemap::{Sitemap, SitemapEntry, SitemapGenerator, SitemapReport};
pub use template::{Template, TemplateContext, TemplateRegistry};
