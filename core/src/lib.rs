//! SQL vocabulary registry and statement fragment builder.
//!
//! This crate centralizes the SQL words an application concatenates into
//! statements so they are spelled once:
//!
//! - [`Vocabulary`] — an immutable registry of named [`Fragment`]s grouped
//!   by [`FragmentCategory`] (keywords, operators, type suffixes, table and
//!   column names). Unknown names are rejected with
//!   [`VocabError::UnknownFragment`].
//! - [`TableSchema`] / [`ColumnKind`] — lightweight table definitions that
//!   render to `CREATE TABLE` text.
//! - [`Statement`] — ordered typed pieces joined by a pure render step, with
//!   the one-call helpers [`build_create_table`], [`build_select`],
//!   [`build_delete`] and [`build_drop_table`] on top, plus the single-row
//!   helpers [`build_select_value`], [`build_last_id`], [`build_count`] and
//!   [`build_delete_first_row`].
//!
//! Nothing here touches a database. Generated text is handed to whatever
//! driver the caller uses, and `WHERE` clause text is passed through
//! unescaped.
//!
//! # Example
//!
//! ```
//! use sql_vocab_core::*;
//!
//! let vocab = Vocabulary::builtin();
//! let table = vocab.fragment("TTTStats").unwrap();
//!
//! let sql = build_select(&["Name"], table, Some("Active=1"));
//! assert_eq!(sql, "SELECT Name FROM TTTStats WHERE Active=1");
//!
//! assert_eq!(build_delete("Users", Some("ID=5")), "DELETE FROM Users WHERE ID=5");
//! assert!(build_create_table("Users", Vec::<ColumnDef>::new()).is_err());
//! ```

mod build;
mod error;
pub mod fragment;
mod statement;
mod types;
mod validate;
mod vocabulary;

pub use build::{
    build_count, build_create_table, build_delete, build_delete_first_row, build_drop_table,
    build_last_id, build_select, build_select_value,
};
pub use error::{Result, VocabError};
pub use fragment::{Fragment, FragmentCategory, IN_MEMORY_DB};
pub use statement::{Condition, Operator, Piece, Statement};
pub use types::{ColumnDef, ColumnKind, TableSchema};
pub use validate::validate_table;
pub use vocabulary::{Vocabulary, VocabularyBuilder};
