//! Column kinds and table definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VocabError};
use crate::fragment::{
    SUFFIX_BIGINT, SUFFIX_BLOB, SUFFIX_BOOL, SUFFIX_INT, SUFFIX_REAL, SUFFIX_TEXT,
};

/// Declared storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Text,
    Boolean,
    Long,
    Float,
    Blob,
}

impl ColumnKind {
    pub const ALL: [ColumnKind; 6] = [
        ColumnKind::Integer,
        ColumnKind::Text,
        ColumnKind::Boolean,
        ColumnKind::Long,
        ColumnKind::Float,
        ColumnKind::Blob,
    ];

    /// SQL type declaration appended to the column name, leading space included.
    pub fn suffix(self) -> &'static str {
        match self {
            ColumnKind::Integer => SUFFIX_INT,
            ColumnKind::Text => SUFFIX_TEXT,
            ColumnKind::Boolean => SUFFIX_BOOL,
            ColumnKind::Long => SUFFIX_BIGINT,
            ColumnKind::Float => SUFFIX_REAL,
            ColumnKind::Blob => SUFFIX_BLOB,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Text => "text",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Long => "long",
            ColumnKind::Float => "float",
            ColumnKind::Blob => "blob",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKind {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ColumnKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| VocabError::MalformedSchema(format!("unknown column kind '{s}'")))
    }
}

/// A single column declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The `<name><suffix>` text used inside `CREATE TABLE`.
    pub fn definition(&self) -> String {
        format!("{}{}", self.name, self.kind.suffix())
    }
}

impl<S: Into<String>> From<(S, ColumnKind)> for ColumnDef {
    fn from((name, kind): (S, ColumnKind)) -> Self {
        ColumnDef::new(name, kind)
    }
}

/// A table name with its ordered column declarations.
///
/// The `ID` primary key column is implicit and must not be declared.
///
/// # Examples
///
/// ```
/// use sql_vocab_core::{ColumnKind, TableSchema};
///
/// let users = TableSchema::new("Users")
///     .with_column("Name", ColumnKind::Text)
///     .with_column("Active", ColumnKind::Boolean);
/// assert_eq!(
///     users.create_sql().unwrap(),
///     "CREATE TABLE Users (ID INTEGER PRIMARY KEY AUTOINCREMENT, Name TEXT NOT NULL, Active BOOL)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        self.columns.push(ColumnDef::new(name, kind));
        self
    }

    pub fn find_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    /// Checks the structural rules enforced by [`create_sql`](Self::create_sql).
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::MalformedSchema`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        crate::validate::validate_table(&self.name, &self.columns)
    }

    /// Renders this table's `CREATE TABLE` statement.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::MalformedSchema`] if the table fails validation.
    pub fn create_sql(&self) -> Result<String> {
        crate::build::build_create_table(&self.name, self.columns.iter().cloned())
    }

    /// Renders this table's `DROP TABLE IF EXISTS` statement.
    pub fn drop_sql(&self) -> String {
        crate::build::build_drop_table(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_mapping_is_fixed() {
        assert_eq!(ColumnKind::Integer.suffix(), " INT");
        assert_eq!(ColumnKind::Text.suffix(), " TEXT NOT NULL");
        assert_eq!(ColumnKind::Boolean.suffix(), " BOOL");
        assert_eq!(ColumnKind::Long.suffix(), " BIGINT");
        assert_eq!(ColumnKind::Float.suffix(), " REAL");
        assert_eq!(ColumnKind::Blob.suffix(), " BLOB");
    }

    #[test]
    fn test_column_kind_parses_case_insensitively() {
        assert_eq!("text".parse::<ColumnKind>(), Ok(ColumnKind::Text));
        assert_eq!(" Boolean ".parse::<ColumnKind>(), Ok(ColumnKind::Boolean));
        assert_eq!("LONG".parse::<ColumnKind>(), Ok(ColumnKind::Long));
    }

    #[test]
    fn test_column_kind_rejects_unknown() {
        assert!(matches!(
            "varchar".parse::<ColumnKind>(),
            Err(VocabError::MalformedSchema(_))
        ));
    }

    #[test]
    fn test_column_kind_serde_matches_from_str() {
        for kind in ColumnKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: ColumnKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_column_definition_concatenates_suffix() {
        assert_eq!(ColumnDef::new("Priority", ColumnKind::Integer).definition(), "Priority INT");
    }

    #[test]
    fn test_table_schema_deserializes_without_columns() {
        let table: TableSchema = serde_json::from_str(r#"{"name":"Empty"}"#).unwrap();
        assert!(table.columns.is_empty());
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_find_column() {
        let table = TableSchema::new("Users").with_column("Name", ColumnKind::Text);
        assert_eq!(table.find_column("Name").unwrap().kind, ColumnKind::Text);
        assert!(table.find_column("name").is_none());
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["Name"]);
    }
}
