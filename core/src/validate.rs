//! Structural checks for table definitions.
//!
//! Only the shape of a definition is checked: a name, at least one column,
//! and no clashing column names. Identifiers are not quoted or checked
//! against SQL grammar.

use std::collections::HashSet;

use crate::error::{Result, VocabError};
use crate::fragment::ID;
use crate::types::ColumnDef;

/// Validates a table definition before any SQL is rendered.
///
/// Column names are compared ASCII case-insensitively, matching how SQLite
/// resolves identifiers. The implicit `ID` primary key counts as taken.
///
/// # Errors
///
/// Returns [`VocabError::MalformedSchema`] for an empty table name, an empty
/// column list, an empty column name, or a duplicate column name.
pub fn validate_table(table: &str, columns: &[ColumnDef]) -> Result<()> {
    if table.trim().is_empty() {
        return Err(VocabError::MalformedSchema(
            "table name cannot be empty".to_string(),
        ));
    }
    if columns.is_empty() {
        return Err(VocabError::MalformedSchema(format!(
            "table '{table}' must declare at least one column"
        )));
    }

    let mut seen = HashSet::with_capacity(columns.len() + 1);
    seen.insert(ID.to_ascii_lowercase());
    for column in columns {
        if column.name.trim().is_empty() {
            return Err(VocabError::MalformedSchema(format!(
                "table '{table}' has a column with an empty name"
            )));
        }
        if !seen.insert(column.name.to_ascii_lowercase()) {
            return Err(VocabError::MalformedSchema(format!(
                "duplicate column '{}' in table '{table}'",
                column.name
            )));
        }
    }
    Ok(())
}
