//! Error types for vocabulary lookups and statement generation.
//!
//! All failures are deterministic: the same inputs always produce the same
//! error, and no operation performs I/O, so nothing here is retryable.

use thiserror::Error;

use crate::fragment::FragmentCategory;

/// Errors that can occur while resolving fragments or building statements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// The requested fragment name is not registered.
    #[error("unknown fragment: {0}")]
    UnknownFragment(String),

    /// A table definition was rejected before any SQL was produced.
    #[error("malformed schema: {0}")]
    MalformedSchema(String),

    /// A name was registered twice in the same category with different values.
    #[error("duplicate {category} fragment: {name}")]
    DuplicateFragment {
        /// Category the clash happened in.
        category: FragmentCategory,
        /// The clashing fragment name.
        name: String,
    },
}

/// Convenience alias for results with [`VocabError`].
pub type Result<T> = std::result::Result<T, VocabError>;
