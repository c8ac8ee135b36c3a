//! Named SQL fragments and the built-in fragment table.
//!
//! Keyword fragments carry their own surrounding whitespace (`" WHERE "`,
//! `" FROM "`), so statements are assembled by plain concatenation without
//! inserting separators between pieces. Suffix fragments carry a leading
//! space and are appended directly to a column name.
//!
//! The constants are also exported individually so callers that know a
//! fragment at compile time get the name checked by the compiler instead of
//! at lookup time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier understood by embedded engines as a transient database.
pub const IN_MEMORY_DB: &str = ":memory:";

/// Statement keywords, spacing included. `SELECT` is followed directly by
/// the column list.
pub const SELECT: &str = "SELECT ";
pub const FROM: &str = " FROM ";
pub const SELECT_ALL_FROM: &str = "SELECT * FROM ";
pub const DELETE_FROM: &str = "DELETE FROM ";
/// Starts the condition list; later conditions are joined with `AND`/`OR`.
pub const WHERE: &str = " WHERE ";
pub const AND: &str = " AND ";
pub const OR: &str = " OR ";
pub const ORDER_BY: &str = " ORDER BY ";
pub const LIKE: &str = " LIKE ";
/// Applies to the sort key it follows.
pub const DESCENDING: &str = " DESC";
/// Row cap; the count follows directly.
pub const LIMIT: &str = " LIMIT ";
/// Row count aggregate, used in place of a column list.
pub const COUNT_ALL: &str = "COUNT(*)";
/// Table-level statements; the table name follows directly.
pub const CREATE_TABLE: &str = "CREATE TABLE ";
pub const DROP_TABLE: &str = "DROP TABLE IF EXISTS ";
/// Name of the implicit primary key column every generated table gets.
pub const ID: &str = "ID";
/// Opens the column list of `CREATE TABLE` and declares the `ID` key.
pub const AUTO_ID: &str = " (ID INTEGER PRIMARY KEY AUTOINCREMENT, ";
/// Joins column lists and sort keys.
pub const SEPARATOR: &str = ", ";

/// Comparison operators with a literal right-hand side.
pub const EQUAL: &str = "=";
pub const NOT_EQUAL: &str = "!=";
pub const LESS: &str = "<";
pub const MORE: &str = ">";
pub const LESS_OR_EQUAL: &str = "<=";
pub const MORE_OR_EQUAL: &str = ">=";
/// Comparison operators followed by a `?` bind placeholder.
pub const EQUAL_PARAM: &str = "=?";
pub const NOT_EQUAL_PARAM: &str = "!=?";
pub const LESS_PARAM: &str = "<?";
pub const MORE_PARAM: &str = ">?";
pub const LESS_OR_EQUAL_PARAM: &str = "<=?";
pub const MORE_OR_EQUAL_PARAM: &str = ">=?";

/// Column type suffixes, appended directly to a column name.
pub const SUFFIX_INT: &str = " INT";
pub const SUFFIX_TEXT: &str = " TEXT NOT NULL";
pub const SUFFIX_BOOL: &str = " BOOL";
pub const SUFFIX_BIGINT: &str = " BIGINT";
pub const SUFFIX_REAL: &str = " REAL";
pub const SUFFIX_BLOB: &str = " BLOB";

/// Table names shipped with the built-in vocabulary.
pub const BUILTIN_TABLES: &[&str] = &["TTTMisc", "TTTUndo", "TTTStats"];

/// Column names shipped with the built-in vocabulary.
pub const BUILTIN_COLUMNS: &[&str] = &[
    ID,
    "Bool1",
    "Long1",
    "Float1",
    "Int1",
    "Int2",
    "Str1",
    "Str2",
    "Name",
    "NameUI",
    "TableName",
    "TableNumber",
    "Text",
    "Priority",
    "Active",
];

pub(crate) const BUILTIN_KEYWORDS: &[(&str, &str)] = &[
    ("select", SELECT),
    ("from", FROM),
    ("select_all_from", SELECT_ALL_FROM),
    ("delete_from", DELETE_FROM),
    ("where", WHERE),
    ("and", AND),
    ("or", OR),
    ("order_by", ORDER_BY),
    ("like", LIKE),
    ("descending", DESCENDING),
    ("limit", LIMIT),
    ("count_all", COUNT_ALL),
    ("create_table", CREATE_TABLE),
    ("drop_table", DROP_TABLE),
    ("auto_id", AUTO_ID),
    ("separator", SEPARATOR),
    ("in_memory", IN_MEMORY_DB),
];

pub(crate) const BUILTIN_OPERATORS: &[(&str, &str)] = &[
    ("equal", EQUAL),
    ("not_equal", NOT_EQUAL),
    ("less", LESS),
    ("more", MORE),
    ("less_or_equal", LESS_OR_EQUAL),
    ("more_or_equal", MORE_OR_EQUAL),
    ("equal_param", EQUAL_PARAM),
    ("not_equal_param", NOT_EQUAL_PARAM),
    ("less_param", LESS_PARAM),
    ("more_param", MORE_PARAM),
    ("less_or_equal_param", LESS_OR_EQUAL_PARAM),
    ("more_or_equal_param", MORE_OR_EQUAL_PARAM),
];

pub(crate) const BUILTIN_SUFFIXES: &[(&str, &str)] = &[
    ("int", SUFFIX_INT),
    ("text", SUFFIX_TEXT),
    ("bool", SUFFIX_BOOL),
    ("bigint", SUFFIX_BIGINT),
    ("real", SUFFIX_REAL),
    ("blob", SUFFIX_BLOB),
];

/// Grouping of a fragment.
///
/// The declaration order is also the order in which
/// [`Vocabulary::fragment`](crate::Vocabulary::fragment) searches categories
/// when a name is registered in more than one of them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FragmentCategory {
    Keyword,
    Operator,
    Suffix,
    TableName,
    ColumnName,
}

impl FragmentCategory {
    /// All categories in lookup order.
    pub const ALL: [FragmentCategory; 5] = [
        FragmentCategory::Keyword,
        FragmentCategory::Operator,
        FragmentCategory::Suffix,
        FragmentCategory::TableName,
        FragmentCategory::ColumnName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FragmentCategory::Keyword => "keyword",
            FragmentCategory::Operator => "operator",
            FragmentCategory::Suffix => "suffix",
            FragmentCategory::TableName => "table",
            FragmentCategory::ColumnName => "column",
        }
    }
}

impl fmt::Display for FragmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FragmentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(FragmentCategory::Keyword),
            "operator" => Ok(FragmentCategory::Operator),
            "suffix" => Ok(FragmentCategory::Suffix),
            "table" | "table_name" => Ok(FragmentCategory::TableName),
            "column" | "column_name" => Ok(FragmentCategory::ColumnName),
            other => Err(format!("unknown fragment category: {other}")),
        }
    }
}

/// An immutable named SQL string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fragment {
    pub category: FragmentCategory,
    pub name: String,
    pub value: String,
}

impl Fragment {
    pub fn new(
        category: FragmentCategory,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            value: value.into(),
        }
    }

    /// An identifier fragment whose value is its own name.
    pub fn identifier(category: FragmentCategory, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            category,
            value: name.clone(),
            name,
        }
    }
}

/// Iterates every built-in fragment in category order.
pub fn builtin_fragments() -> impl Iterator<Item = Fragment> {
    keyed(FragmentCategory::Keyword, BUILTIN_KEYWORDS)
        .chain(keyed(FragmentCategory::Operator, BUILTIN_OPERATORS))
        .chain(keyed(FragmentCategory::Suffix, BUILTIN_SUFFIXES))
        .chain(identifiers(FragmentCategory::TableName, BUILTIN_TABLES))
        .chain(identifiers(FragmentCategory::ColumnName, BUILTIN_COLUMNS))
}

fn keyed(
    category: FragmentCategory,
    table: &'static [(&'static str, &'static str)],
) -> impl Iterator<Item = Fragment> {
    table
        .iter()
        .map(move |&(name, value)| Fragment::new(category, name, value))
}

fn identifiers(
    category: FragmentCategory,
    names: &'static [&'static str],
) -> impl Iterator<Item = Fragment> {
    names
        .iter()
        .map(move |&name| Fragment::identifier(category, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_unique_per_category() {
        let mut seen = HashSet::new();
        for fragment in builtin_fragments() {
            assert!(
                seen.insert((fragment.category, fragment.name.clone())),
                "duplicate builtin {} {}",
                fragment.category,
                fragment.name
            );
        }
    }

    #[test]
    fn test_auto_id_mentions_id_column() {
        assert!(AUTO_ID.contains(ID));
        assert_eq!(BUILTIN_COLUMNS[0], ID);
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in FragmentCategory::ALL {
            assert_eq!(category.as_str().parse::<FragmentCategory>(), Ok(category));
        }
        assert_eq!(
            "table_name".parse::<FragmentCategory>(),
            Ok(FragmentCategory::TableName)
        );
        assert!("index".parse::<FragmentCategory>().is_err());
    }

    #[test]
    fn test_category_serde_is_snake_case() {
        let json = serde_json::to_string(&FragmentCategory::ColumnName).unwrap();
        assert_eq!(json, "\"column_name\"");
    }
}
