//! LeaseLens Core Library
//!
//! Core types, configuration, and error handling for the LeaseLens SEO build.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;

pub use config::{Config, SitePaths};
pub use content::{Article, LastModPolicy, OutputDir, StateRecord};
pub use error::{CoreError, Result};
pub use frontmatter::Frontmatter;
