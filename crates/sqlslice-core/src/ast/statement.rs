//! Statement types.

use core::fmt;

use super::field::Field;

/// The statement kind detected from the leading keyword.
///
/// Only `Select` is fully modeled; every other kind is recognized but
/// rejected with a typed fault carrying the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Leading keyword not recognized.
    Unknown,
    /// SELECT statement.
    Select,
    /// UNION outside the supported wrapped-subquery form.
    Union,
    /// SELECT ... INTO.
    SelectInto,
    /// UPDATE statement.
    Update,
    /// INSERT statement.
    Insert,
    /// DELETE statement.
    Delete,
    /// Statement batch.
    Batch,
    /// CREATE statement.
    Create,
    /// DROP statement.
    Drop,
    /// TRUNCATE statement.
    Truncate,
}

impl StatementKind {
    /// Returns the display name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Select => "SELECT",
            Self::Union => "UNION",
            Self::SelectInto => "SELECT INTO",
            Self::Update => "UPDATE",
            Self::Insert => "INSERT",
            Self::Delete => "DELETE",
            Self::Batch => "BATCH",
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Truncate => "TRUNCATE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed statement, tagged by kind.
///
/// Unsupported kinds never construct a `Statement`; they surface as
/// [`ParseError`](crate::ParseError) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A structurally split SELECT.
    Select(SelectStatement),
}

impl Statement {
    /// The kind tag of this statement.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::Select(_) => StatementKind::Select,
        }
    }

    /// The normalized statement text.
    #[must_use]
    pub fn sql(&self) -> &str {
        match self {
            Self::Select(select) => &select.sql,
        }
    }
}

/// The `TOP` clause of a SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopClause {
    /// The row count (or percentage).
    pub value: u64,
    /// Whether `PERCENT` followed the count.
    pub percent: bool,
}

/// Order direction for one ORDER BY item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One ordering key: the expression with any explicit `ASC`/`DESC` suffix
/// stripped, plus the direction it implied.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// The ordering expression.
    pub expression: String,
    /// The direction.
    pub direction: OrderDirection,
}

/// The parsed structure of one SELECT statement.
///
/// Clause texts are verbatim slices of the normalized statement;
/// `Option` fields are `Some` exactly when the clause is present. An absent
/// `FROM` (as in a bare `SELECT 1`) leaves `from_expression` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// The normalized statement text.
    pub sql: String,
    /// Whether DISTINCT is present.
    pub distinct: bool,
    /// The TOP clause, when present.
    pub top: Option<TopClause>,
    /// Raw field-list text.
    pub fields_expression: String,
    /// The resolved fields, uniquely aliased.
    pub fields: Vec<Field>,
    /// Raw FROM text, not decomposed into tables or joins.
    pub from_expression: String,
    /// Raw WHERE text.
    pub where_expression: Option<String>,
    /// Raw GROUP BY text.
    pub group_by_expression: Option<String>,
    /// Grouping keys, when GROUP BY is present.
    pub groups: Vec<String>,
    /// Raw HAVING text.
    pub having_expression: Option<String>,
    /// Raw ORDER BY text.
    pub order_by_expression: Option<String>,
    /// Ordering keys, when ORDER BY is present.
    pub orders: Vec<OrderItem>,
    /// Whether the statement text contains a UNION outside quotes.
    pub union: bool,
}
