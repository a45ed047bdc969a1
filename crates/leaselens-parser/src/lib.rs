//! LeaseLens Parser Library
//!
//! Content source parsers: the object-literal state data file and the
//! markdown article directory.

pub mod articles;
pub mod markdown;
pub mod source;
pub mod states;

use std::path::PathBuf;

pub use articles::load_articles;
pub use markdown::MarkdownRenderer;
pub use source::{SourceError, Value};
pub use states::{load_state_records, parse_state_records};
use thiserror::Error;

/// Parser errors.
#[derive(Debug, Error)]
pub enum ParserError {
    /// A data source that could not be tokenized or parsed.
    #[error("parse error in {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: SourceError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
