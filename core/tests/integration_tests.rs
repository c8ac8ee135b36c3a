//! Integration tests for the sql-vocab-core crate.
//!
//! Generated statements are run against an in-memory SQLite database to
//! show that the text is accepted by a real engine.

use rusqlite::{Connection, params};
use sql_vocab_core::{
    ColumnKind, Condition, IN_MEMORY_DB, Operator, Statement, TableSchema, VocabError, Vocabulary,
    build_count, build_create_table, build_delete, build_delete_first_row, build_drop_table,
    build_last_id, build_select, build_select_value,
};

fn memory_db() -> Connection {
    Connection::open(IN_MEMORY_DB).unwrap()
}

fn users_table() -> TableSchema {
    TableSchema::new("Users")
        .with_column("Name", ColumnKind::Text)
        .with_column("Active", ColumnKind::Boolean)
        .with_column("Priority", ColumnKind::Integer)
}

fn seed_users(conn: &Connection) {
    conn.execute_batch(&users_table().create_sql().unwrap()).unwrap();
    for (name, active, priority) in [("ann", 1, 3), ("bob", 0, 1), ("cid", 1, 2)] {
        conn.execute(
            "INSERT INTO Users (Name, Active, Priority) VALUES (?1, ?2, ?3)",
            params![name, active, priority],
        )
        .unwrap();
    }
}

#[test]
fn test_create_table_executes_for_every_kind() {
    let conn = memory_db();
    let columns: Vec<(String, ColumnKind)> = ColumnKind::ALL
        .iter()
        .map(|kind| (format!("col_{kind}"), *kind))
        .collect();
    let sql = build_create_table("AllKinds", columns).unwrap();
    conn.execute_batch(&sql).unwrap();

    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('AllKinds')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 7);
}

#[test]
fn test_text_columns_are_not_null() {
    let conn = memory_db();
    seed_users(&conn);
    let result = conn.execute(
        "INSERT INTO Users (Name, Active, Priority) VALUES (NULL, 1, 1)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn test_select_with_where_returns_matching_rows() {
    let conn = memory_db();
    seed_users(&conn);

    let sql = build_select(&["Name"], "Users", Some("Active=1"));
    let mut stmt = conn.prepare(&sql).unwrap();
    let mut names: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    names.sort();
    assert_eq!(names, vec!["ann", "cid"]);
}

#[test]
fn test_placeholder_condition_binds_through_driver() {
    let conn = memory_db();
    seed_users(&conn);

    let sql = Statement::select(&["Name"], "Users")
        .filter(Condition::new("Priority", Operator::MoreOrEqual))
        .order_by("Priority")
        .descending()
        .render();
    let mut stmt = conn.prepare(&sql).unwrap();
    let names: Vec<String> = stmt
        .query_map([2], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["ann", "cid"]);
}

#[test]
fn test_like_and_delete() {
    let conn = memory_db();
    seed_users(&conn);

    let sql = Statement::select(&[], "Users").like("Name", "'b%'").render();
    let hits: i64 = conn
        .prepare(&sql)
        .unwrap()
        .query_map([], |_| Ok(()))
        .unwrap()
        .count() as i64;
    assert_eq!(hits, 1);

    let deleted = conn.execute(&build_delete("Users", Some("ID=1")), []).unwrap();
    assert_eq!(deleted, 1);
    let deleted_all = conn.execute(&build_delete("Users", None), []).unwrap();
    assert_eq!(deleted_all, 2);
}

#[test]
fn test_drop_table_is_safe_to_repeat() {
    let conn = memory_db();
    seed_users(&conn);
    conn.execute_batch(&build_drop_table("Users")).unwrap();
    conn.execute_batch(&build_drop_table("Users")).unwrap();
    assert!(conn.prepare("SELECT * FROM Users").is_err());
}

#[test]
fn test_vocabulary_fragments_compose_a_query() {
    let vocab = Vocabulary::builtin();
    let sql = [
        vocab.fragment("select_all_from").unwrap(),
        vocab.fragment("TTTMisc").unwrap(),
        vocab.fragment("where").unwrap(),
        vocab.fragment("Active").unwrap(),
        vocab.fragment("equal_param").unwrap(),
        vocab.fragment("order_by").unwrap(),
        vocab.fragment("ID").unwrap(),
        vocab.fragment("descending").unwrap(),
    ]
    .concat();
    assert_eq!(sql, "SELECT * FROM TTTMisc WHERE Active=? ORDER BY ID DESC");

    let conn = memory_db();
    conn.execute_batch(
        &build_create_table("TTTMisc", [("Active", ColumnKind::Boolean)]).unwrap(),
    )
    .unwrap();
    assert!(conn.prepare(&sql).is_ok());
}

#[test]
fn test_unknown_fragment_never_reaches_sql() {
    let vocab = Vocabulary::builtin();
    let err = vocab.fragment("selct").unwrap_err();
    assert_eq!(err, VocabError::UnknownFragment("selct".to_string()));
    assert_eq!(err.to_string(), "unknown fragment: selct");
}

#[test]
fn test_filter_after_order_by_executes() {
    let conn = memory_db();
    seed_users(&conn);

    let sql = Statement::select(&["Name"], "Users")
        .order_by("Priority")
        .filter("Active=1")
        .descending()
        .render();
    let mut stmt = conn.prepare(&sql).unwrap();
    let names: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["ann", "cid"]);
}

#[test]
fn test_select_value_binds_key() {
    let conn = memory_db();
    seed_users(&conn);

    let priority: i64 = conn
        .query_row(&build_select_value("Users", "Priority", "Name"), ["cid"], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(priority, 2);
}

#[test]
fn test_last_id_is_newest_row() {
    let conn = memory_db();
    seed_users(&conn);

    let last: i64 = conn
        .query_row(&build_last_id("Users"), [], |row| row.get(0))
        .unwrap();
    assert_eq!(last, 3);
}

#[test]
fn test_count_detects_empty_table() {
    let conn = memory_db();
    conn.execute_batch(&users_table().create_sql().unwrap()).unwrap();
    let count = |conn: &Connection| -> i64 {
        conn.query_row(&build_count("Users"), [], |row| row.get(0))
            .unwrap()
    };
    assert_eq!(count(&conn), 0);

    conn.execute_batch(&build_drop_table("Users")).unwrap();
    seed_users(&conn);
    assert_eq!(count(&conn), 3);
}

#[test]
fn test_delete_first_row_removes_oldest() {
    let conn = memory_db();
    seed_users(&conn);

    let removed = conn.execute(&build_delete_first_row("Users"), []).unwrap();
    assert_eq!(removed, 1);

    let mut stmt = conn.prepare(&build_select(&["Name"], "Users", None)).unwrap();
    let mut names: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    names.sort();
    assert_eq!(names, vec!["bob", "cid"]);
}
