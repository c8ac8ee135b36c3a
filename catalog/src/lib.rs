//! Table catalogs for the SQL vocabulary.
//!
//! A [`Catalog`] is the configuration surface of the workspace: a YAML or
//! JSON file listing tables and their columns. From it this crate renders
//! `CREATE TABLE` / `DROP TABLE IF EXISTS` scripts and derives a
//! [`Vocabulary`](sql_vocab_core::Vocabulary) that also knows the catalog's
//! table and column names.
//!
//! # Quick start
//!
//! ```no_run
//! use sql_vocab_catalog::Catalog;
//!
//! let catalog = Catalog::load("catalog.yml").unwrap();
//! catalog.validate().unwrap();
//!
//! for statement in catalog.create_script().unwrap() {
//!     println!("{statement};");
//! }
//!
//! let vocab = catalog.vocabulary().unwrap();
//! println!("{} fragments known", vocab.len());
//! ```
//!
//! Executing the scripts is left to the caller's database driver.

mod catalog;
mod error;

pub use catalog::{Catalog, CatalogFormat};
pub use error::{CatalogError, Result};
