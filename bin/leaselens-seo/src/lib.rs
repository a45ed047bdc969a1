//! LeaseLens SEO CLI Library
//!
//! Command implementations for the `leaselens-seo` binary, exposed as a
//! library so the build step can also be driven from tests and other tools.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (prerender, sitemap, build, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use leaselens_seo::cmd;
//!
//! // Prerender and write the sitemap for the project in the current directory
//! cmd::build::run(Path::new("leaselens.toml"), Path::new(".")).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use leaselens_core::Config;
pub use leaselens_generator::{PrerenderReport, Prerenderer, SitemapGenerator, SitemapReport};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// leaselens_seo::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
