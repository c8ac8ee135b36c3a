//! Table catalogs loaded from YAML or JSON.
//!
//! A catalog lists the tables an application owns. It is read once at
//! startup and turned into create/drop scripts and a [`Vocabulary`] that
//! knows the catalog's table and column names.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! tables:
//!   - name: Users
//!     columns:
//!       - { name: Name, kind: text }
//!       - { name: Active, kind: boolean }
//!   - name: Notes
//!     columns:
//!       - { name: Text, kind: text }
//!       - { name: Priority, kind: integer }
//! ```

use std::collections::HashSet;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sql_vocab_core::{TableSchema, Vocabulary, build_drop_table};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};

/// Serialization format of a catalog file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// `.json` selects JSON; anything else is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Yaml,
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

/// An ordered set of table definitions.
///
/// # Examples
///
/// ```
/// use sql_vocab_catalog::Catalog;
/// use sql_vocab_core::{ColumnKind, TableSchema};
///
/// let catalog = Catalog::new(vec![
///     TableSchema::new("Users").with_column("Name", ColumnKind::Text),
/// ]);
/// assert_eq!(
///     catalog.create_script().unwrap(),
///     vec!["CREATE TABLE Users (ID INTEGER PRIMARY KEY AUTOINCREMENT, Name TEXT NOT NULL)"]
/// );
/// assert_eq!(catalog.drop_script(), vec!["DROP TABLE IF EXISTS Users"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog format version (e.g., `"1.0"`).
    #[serde(default = "default_version")]
    pub version: String,
    /// Tables in creation order.
    #[serde(default)]
    pub tables: Vec<TableSchema>,
}

impl Catalog {
    pub fn new(tables: Vec<TableSchema>) -> Self {
        Self {
            version: default_version(),
            tables,
        }
    }

    /// Loads a catalog from a YAML or JSON file.
    ///
    /// The file is only parsed here; call [`validate`](Self::validate) to
    /// check the table definitions.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](CatalogError::IoError) if the file cannot be read,
    /// or [`YamlError`](CatalogError::YamlError) /
    /// [`JsonError`](CatalogError::JsonError) if parsing fails. An unknown
    /// column `kind` is a parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path);
        debug!(path = %path.display(), ?format, "loading catalog");

        let reader = BufReader::new(std::fs::File::open(path)?);
        let catalog: Catalog = match format {
            CatalogFormat::Json => serde_json::from_reader(reader)?,
            CatalogFormat::Yaml => serde_yaml::from_reader(reader)?,
        };

        info!(
            path = %path.display(),
            tables = catalog.tables.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`YamlError`](CatalogError::YamlError) if parsing fails.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Saves the catalog in the format implied by the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](CatalogError::IoError) if the file cannot be
    /// written, or a serialization error.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(std::fs::File::create(path)?);
        match CatalogFormat::from_path(path) {
            CatalogFormat::Json => serde_json::to_writer_pretty(writer, self)?,
            CatalogFormat::Yaml => serde_yaml::to_writer(writer, self)?,
        }
        debug!(path = %path.display(), "catalog saved");
        Ok(())
    }

    /// Checks every table and rejects repeated table names.
    ///
    /// # Errors
    ///
    /// Returns [`Vocabulary`](CatalogError::Vocabulary) wrapping
    /// `MalformedSchema` for a bad table, or
    /// [`DuplicateTable`](CatalogError::DuplicateTable).
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.tables.len());
        for table in &self.tables {
            table.validate()?;
            if !seen.insert(table.name.to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateTable(table.name.clone()));
            }
        }
        Ok(())
    }

    /// Looks up a table by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`TableNotFound`](CatalogError::TableNotFound) if absent.
    pub fn table(&self, name: &str) -> Result<&TableSchema> {
        self.tables
            .iter()
            .find(|table| table.name == name)
            .ok_or_else(|| CatalogError::TableNotFound(name.to_string()))
    }

    /// One `CREATE TABLE` statement per table, in declaration order.
    ///
    /// # Errors
    ///
    /// Fails like [`validate`](Self::validate); nothing is returned for a
    /// catalog with any bad table.
    pub fn create_script(&self) -> Result<Vec<String>> {
        self.validate()?;
        let script = self
            .tables
            .iter()
            .map(TableSchema::create_sql)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(statements = script.len(), "rendered create script");
        Ok(script)
    }

    /// One `DROP TABLE IF EXISTS` statement per table, in reverse order.
    pub fn drop_script(&self) -> Vec<String> {
        self.tables
            .iter()
            .rev()
            .map(|table| build_drop_table(&table.name))
            .collect()
    }

    /// The built-in vocabulary extended with this catalog's identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`Vocabulary`](CatalogError::Vocabulary) if an identifier is
    /// empty.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        let mut builder = Vocabulary::builder().with_builtins();
        for table in &self.tables {
            builder = builder.table(table.name.as_str());
            for column in table.column_names() {
                builder = builder.column(column);
            }
        }
        Ok(builder.build()?)
    }
}
