//! Statement assembly from typed pieces.
//!
//! A [`Statement`] is a head (`SELECT ... FROM t`, `DELETE FROM t`, ...)
//! plus conditions, sort keys and an optional row limit, flattened into
//! [`Piece`]s in SQL clause order. Rendering is a pure concatenation: keyword pieces already carry their surrounding spaces,
//! identifiers and clauses are copied verbatim, and lists are joined with
//! `", "`.
//!
//! Clause text handed to [`Statement::filter`], [`Statement::and`] and
//! friends is inserted exactly as given. Nothing is quoted or escaped, so
//! callers must only pass trusted literals; bind user data through the
//! placeholder operators (`=?`, `<?`, ...) and the driver instead.
//!
//! # Examples
//!
//! ```
//! use sql_vocab_core::{Condition, Operator, Statement};
//!
//! let sql = Statement::select(&["Name", "Priority"], "TTTMisc")
//!     .filter(Condition::new("Active", Operator::Equal))
//!     .order_by("Priority")
//!     .descending()
//!     .render();
//! assert_eq!(
//!     sql,
//!     "SELECT Name, Priority FROM TTTMisc WHERE Active=? ORDER BY Priority DESC"
//! );
//! ```

use std::fmt;

use crate::fragment::{
    AND, AUTO_ID, CREATE_TABLE, DELETE_FROM, DESCENDING, DROP_TABLE, EQUAL, EQUAL_PARAM, FROM,
    LESS, LESS_OR_EQUAL, LESS_OR_EQUAL_PARAM, LESS_PARAM, LIKE, LIMIT, MORE, MORE_OR_EQUAL,
    MORE_OR_EQUAL_PARAM, MORE_PARAM, NOT_EQUAL, NOT_EQUAL_PARAM, OR, ORDER_BY, SELECT, SEPARATOR,
    WHERE,
};

/// Comparison operators from the built-in vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    More,
    LessOrEqual,
    MoreOrEqual,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equal => EQUAL,
            Operator::NotEqual => NOT_EQUAL,
            Operator::Less => LESS,
            Operator::More => MORE,
            Operator::LessOrEqual => LESS_OR_EQUAL,
            Operator::MoreOrEqual => MORE_OR_EQUAL,
        }
    }

    /// The operator followed by a `?` bind placeholder.
    pub fn placeholder(self) -> &'static str {
        match self {
            Operator::Equal => EQUAL_PARAM,
            Operator::NotEqual => NOT_EQUAL_PARAM,
            Operator::Less => LESS_PARAM,
            Operator::More => MORE_PARAM,
            Operator::LessOrEqual => LESS_OR_EQUAL_PARAM,
            Operator::MoreOrEqual => MORE_OR_EQUAL_PARAM,
        }
    }
}

/// A single `<column><operator><rhs>` comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    column: String,
    operator: Operator,
    value: Option<String>,
}

impl Condition {
    /// A comparison against a bind placeholder, e.g. `Active=?`.
    pub fn new(column: impl Into<String>, operator: Operator) -> Self {
        Self {
            column: column.into(),
            operator,
            value: None,
        }
    }

    /// A comparison against a literal, e.g. `ID=5`.
    ///
    /// The literal is inserted verbatim.
    pub fn with_value(
        column: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}{}{}", self.column, self.operator.symbol(), value),
            None => write!(f, "{}{}", self.column, self.operator.placeholder()),
        }
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.to_string()
    }
}

/// One element of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// A vocabulary keyword, spacing included.
    Keyword(&'static str),
    /// A table or column name.
    Identifier(String),
    /// Caller-supplied clause text, inserted verbatim.
    Clause(String),
    /// Items joined with `", "`.
    List(Vec<String>),
}

impl Piece {
    fn write_to(&self, out: &mut String) {
        match self {
            Piece::Keyword(keyword) => out.push_str(keyword),
            Piece::Identifier(text) | Piece::Clause(text) => out.push_str(text),
            Piece::List(items) => out.push_str(&items.join(SEPARATOR)),
        }
    }
}

/// One `ORDER BY` key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortKey {
    column: String,
    descending: bool,
}

/// An SQL statement assembled from vocabulary pieces.
///
/// Conditions, sort keys and the row limit are kept apart from the head of
/// the statement and always render in SQL clause order, whatever order the
/// builder methods were called in.
///
/// ```
/// use sql_vocab_core::Statement;
///
/// let sql = Statement::select(&["Name"], "Users")
///     .order_by("Name")
///     .filter("Active=1")
///     .render();
/// assert_eq!(sql, "SELECT Name FROM Users WHERE Active=1 ORDER BY Name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statement {
    head: Vec<Piece>,
    conditions: Vec<(&'static str, String)>,
    order: Vec<SortKey>,
    limit: Option<u64>,
}

impl Statement {
    /// `SELECT <columns> FROM <table>`; an empty column list selects `*`.
    pub fn select(columns: &[&str], table: impl Into<String>) -> Self {
        let list = if columns.is_empty() {
            vec!["*".to_string()]
        } else {
            columns.iter().map(|column| column.to_string()).collect()
        };
        Self::default()
            .push(Piece::Keyword(SELECT))
            .push(Piece::List(list))
            .push(Piece::Keyword(FROM))
            .push(Piece::Identifier(table.into()))
    }

    /// `DELETE FROM <table>`.
    pub fn delete(table: impl Into<String>) -> Self {
        Self::default()
            .push(Piece::Keyword(DELETE_FROM))
            .push(Piece::Identifier(table.into()))
    }

    /// `DROP TABLE IF EXISTS <table>`.
    pub fn drop_table(table: impl Into<String>) -> Self {
        Self::default()
            .push(Piece::Keyword(DROP_TABLE))
            .push(Piece::Identifier(table.into()))
    }

    /// `CREATE TABLE <table> (ID INTEGER PRIMARY KEY AUTOINCREMENT, <defs>)`.
    ///
    /// Column definitions are taken as already rendered; use
    /// [`build_create_table`](crate::build_create_table) for the validated form.
    pub(crate) fn create_table(table: impl Into<String>, definitions: Vec<String>) -> Self {
        Self::default()
            .push(Piece::Keyword(CREATE_TABLE))
            .push(Piece::Identifier(table.into()))
            .push(Piece::Keyword(AUTO_ID))
            .push(Piece::List(definitions))
            .push(Piece::Keyword(")"))
    }

    /// Adds a `WHERE` clause, or `AND` if one is already present.
    pub fn filter(self, clause: impl Into<String>) -> Self {
        self.condition(AND, clause.into())
    }

    /// Adds `AND <clause>`; acts as [`filter`](Self::filter) if no `WHERE` yet.
    pub fn and(self, clause: impl Into<String>) -> Self {
        self.condition(AND, clause.into())
    }

    /// Adds `OR <clause>`; acts as [`filter`](Self::filter) if no `WHERE` yet.
    pub fn or(self, clause: impl Into<String>) -> Self {
        self.condition(OR, clause.into())
    }

    /// Adds `<column> LIKE <pattern>` as a condition. The pattern is verbatim,
    /// quotes included.
    pub fn like(self, column: &str, pattern: &str) -> Self {
        self.condition(AND, format!("{column}{LIKE}{pattern}"))
    }

    /// Adds an `ORDER BY` column; later calls append further sort keys.
    pub fn order_by(mut self, column: impl Into<String>) -> Self {
        self.order.push(SortKey {
            column: column.into(),
            descending: false,
        });
        self
    }

    /// Marks the most recent sort key as descending.
    ///
    /// Does nothing when no [`order_by`](Self::order_by) key has been added.
    pub fn descending(mut self) -> Self {
        if let Some(key) = self.order.last_mut() {
            key.descending = true;
        }
        self
    }

    /// Caps the number of rows; a later call replaces the earlier cap.
    pub fn limit(mut self, rows: u64) -> Self {
        self.limit = Some(rows);
        self
    }

    /// The statement's pieces in render order.
    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces = self.head.clone();
        for (index, (joiner, clause)) in self.conditions.iter().enumerate() {
            pieces.push(Piece::Keyword(if index == 0 { WHERE } else { *joiner }));
            pieces.push(Piece::Clause(clause.clone()));
        }
        for (index, key) in self.order.iter().enumerate() {
            pieces.push(Piece::Keyword(if index == 0 { ORDER_BY } else { SEPARATOR }));
            pieces.push(Piece::Identifier(key.column.clone()));
            if key.descending {
                pieces.push(Piece::Keyword(DESCENDING));
            }
        }
        if let Some(rows) = self.limit {
            pieces.push(Piece::Keyword(LIMIT));
            pieces.push(Piece::Clause(rows.to_string()));
        }
        pieces
    }

    /// Concatenates the pieces into SQL text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for piece in self.pieces() {
            piece.write_to(&mut out);
        }
        out
    }

    fn condition(mut self, joiner: &'static str, clause: String) -> Self {
        self.conditions.push((joiner, clause));
        self
    }

    fn push(mut self, piece: Piece) -> Self {
        self.head.push(piece);
        self
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
