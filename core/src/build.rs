//! One-call statement helpers.
//!
//! Thin wrappers over [`Statement`] for the common shapes. Identical inputs
//! always render byte-identical output.

use crate::error::Result;
use crate::fragment::{COUNT_ALL, EQUAL_PARAM, ID};
use crate::statement::Statement;
use crate::types::ColumnDef;
use crate::validate::validate_table;

/// Renders `CREATE TABLE` with the implicit autoincrement `ID` key.
///
/// # Errors
///
/// Returns [`VocabError::MalformedSchema`](crate::VocabError::MalformedSchema)
/// if `columns` is empty or repeats a name. No partial SQL is returned.
///
/// # Examples
///
/// ```
/// use sql_vocab_core::{ColumnKind, build_create_table};
///
/// let sql = build_create_table(
///     "Users",
///     [("Name", ColumnKind::Text), ("Active", ColumnKind::Boolean)],
/// )
/// .unwrap();
/// assert_eq!(
///     sql,
///     "CREATE TABLE Users (ID INTEGER PRIMARY KEY AUTOINCREMENT, Name TEXT NOT NULL, Active BOOL)"
/// );
/// ```
pub fn build_create_table<C>(table: &str, columns: impl IntoIterator<Item = C>) -> Result<String>
where
    C: Into<ColumnDef>,
{
    let columns: Vec<ColumnDef> = columns.into_iter().map(Into::into).collect();
    validate_table(table, &columns)?;
    let definitions = columns.iter().map(ColumnDef::definition).collect();
    Ok(Statement::create_table(table, definitions).render())
}

/// Renders `SELECT <columns> FROM <table> [WHERE <clause>]`.
///
/// An empty column list selects `*`. The clause is inserted verbatim.
pub fn build_select(columns: &[&str], table: &str, where_clause: Option<&str>) -> String {
    let statement = Statement::select(columns, table);
    match where_clause {
        Some(clause) => statement.filter(clause).render(),
        None => statement.render(),
    }
}

/// Renders `DELETE FROM <table> [WHERE <clause>]`.
///
/// The clause is inserted verbatim.
pub fn build_delete(table: &str, where_clause: Option<&str>) -> String {
    let statement = Statement::delete(table);
    match where_clause {
        Some(clause) => statement.filter(clause).render(),
        None => statement.render(),
    }
}

/// Renders `DROP TABLE IF EXISTS <table>`.
pub fn build_drop_table(table: &str) -> String {
    Statement::drop_table(table).render()
}

/// Renders `SELECT <column> FROM <table> WHERE <where_column>=?`.
///
/// Reads one value keyed by another column; the key is bound at the driver.
///
/// ```
/// use sql_vocab_core::build_select_value;
///
/// assert_eq!(
///     build_select_value("TTTMisc", "Int1", "Name"),
///     "SELECT Int1 FROM TTTMisc WHERE Name=?"
/// );
/// ```
pub fn build_select_value(table: &str, column: &str, where_column: &str) -> String {
    Statement::select(&[column], table)
        .filter(format!("{where_column}{EQUAL_PARAM}"))
        .render()
}

/// Renders `SELECT ID FROM <table> ORDER BY ID DESC LIMIT 1`, the most
/// recently inserted key.
pub fn build_last_id(table: &str) -> String {
    Statement::select(&[ID], table)
        .order_by(ID)
        .descending()
        .limit(1)
        .render()
}

/// Renders `SELECT COUNT(*) FROM <table>`; a zero result means the table is
/// empty.
pub fn build_count(table: &str) -> String {
    Statement::select(&[COUNT_ALL], table).render()
}

/// Renders `DELETE FROM <table> WHERE ID = (SELECT MIN(ID) FROM <table>)`,
/// removing the oldest row.
pub fn build_delete_first_row(table: &str) -> String {
    Statement::delete(table)
        .filter(format!("{ID} = (SELECT MIN({ID}) FROM {table})"))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VocabError;
    use crate::types::ColumnKind;

    #[test]
    fn test_create_table_users() {
        let sql = build_create_table(
            "Users",
            [("Name", ColumnKind::Text), ("Active", ColumnKind::Boolean)],
        )
        .unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE Users (ID INTEGER PRIMARY KEY AUTOINCREMENT, Name TEXT NOT NULL, Active BOOL)"
        );
    }

    #[test]
    fn test_create_table_every_kind() {
        let columns: Vec<ColumnDef> = ColumnKind::ALL
            .iter()
            .map(|kind| ColumnDef::new(format!("C{}", kind.as_str()), *kind))
            .collect();
        let sql = build_create_table("Kinds", columns).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE Kinds (ID INTEGER PRIMARY KEY AUTOINCREMENT, Cinteger INT, \
             Ctext TEXT NOT NULL, Cboolean BOOL, Clong BIGINT, Cfloat REAL, Cblob BLOB)"
        );
    }

    #[test]
    fn test_create_table_empty_columns_rejected() {
        let result = build_create_table("Users", Vec::<ColumnDef>::new());
        assert!(matches!(result, Err(VocabError::MalformedSchema(_))));
    }

    #[test]
    fn test_create_table_duplicate_column_rejected() {
        let result = build_create_table(
            "Users",
            [("Name", ColumnKind::Text), ("Name", ColumnKind::Integer)],
        );
        assert!(matches!(result, Err(VocabError::MalformedSchema(_))));
    }

    #[test]
    fn test_select_with_where() {
        assert_eq!(
            build_select(&["Name"], "Users", Some("Active=1")),
            "SELECT Name FROM Users WHERE Active=1"
        );
    }

    #[test]
    fn test_select_without_where() {
        assert_eq!(
            build_select(&["Name", "Active"], "Users", None),
            "SELECT Name, Active FROM Users"
        );
        assert_eq!(build_select(&[], "Users", None), "SELECT * FROM Users");
    }

    #[test]
    fn test_delete() {
        assert_eq!(
            build_delete("Users", Some("ID=5")),
            "DELETE FROM Users WHERE ID=5"
        );
        assert_eq!(build_delete("Users", None), "DELETE FROM Users");
    }

    #[test]
    fn test_drop_table() {
        assert_eq!(build_drop_table("Users"), "DROP TABLE IF EXISTS Users");
    }

    #[test]
    fn test_select_value() {
        assert_eq!(
            build_select_value("TTTMisc", "Int1", "Name"),
            "SELECT Int1 FROM TTTMisc WHERE Name=?"
        );
    }

    #[test]
    fn test_last_id() {
        assert_eq!(
            build_last_id("TTTUndo"),
            "SELECT ID FROM TTTUndo ORDER BY ID DESC LIMIT 1"
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(build_count("TTTStats"), "SELECT COUNT(*) FROM TTTStats");
    }

    #[test]
    fn test_delete_first_row() {
        assert_eq!(
            build_delete_first_row("TTTUndo"),
            "DELETE FROM TTTUndo WHERE ID = (SELECT MIN(ID) FROM TTTUndo)"
        );
    }

    #[test]
    fn test_builders_are_idempotent() {
        let columns = [("Name", ColumnKind::Text), ("Active", ColumnKind::Boolean)];
        assert_eq!(
            build_create_table("Users", columns).unwrap(),
            build_create_table("Users", columns).unwrap()
        );
        assert_eq!(
            build_select(&["Name"], "Users", Some("Active=1")),
            build_select(&["Name"], "Users", Some("Active=1"))
        );
        assert_eq!(
            build_delete("Users", Some("ID=5")),
            build_delete("Users", Some("ID=5"))
        );
    }
}
