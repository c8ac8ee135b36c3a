//! Error types for catalog operations.
//!
//! Covers file I/O, (de)serialization, and structural problems found while
//! validating a catalog or deriving its vocabulary.

use sql_vocab_core::VocabError;
use thiserror::Error;

/// Errors that can occur while loading or using a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A table definition or vocabulary entry was rejected.
    #[error(transparent)]
    Vocabulary(#[from] VocabError),

    /// Two tables share a name (compared case-insensitively).
    #[error("duplicate table in catalog: {0}")]
    DuplicateTable(String),

    /// The requested table is not declared in the catalog.
    #[error("table not found in catalog: {0}")]
    TableNotFound(String),
}

/// Convenience alias for results with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
