//! # sqlslice-core
//!
//! A best-effort structural splitter for SQL `SELECT` statements.
//!
//! The parser extracts the structural components of a textual `SELECT` —
//! fields and their aliases, the raw `FROM`/`WHERE`/`GROUP BY`/`HAVING`/
//! `ORDER BY` clause texts, grouping keys, ordering keys, and recursively
//! parsed sub-selects embedded in the field list — without building a full
//! relational grammar and without executing or validating the query.
//!
//! It tolerates dialect quirks (bracket-quoted identifiers, `TOP n
//! PERCENT`, the wrapped `UNION` form) but does not verify semantic
//! correctness. Parsing fails as a whole on the first structural fault;
//! there is no partial result.
//!
//! ```rust
//! use sqlslice_core::{parse, Statement};
//!
//! let statement = parse("SELECT id, name AS n FROM users WHERE active = 1")?;
//! let Statement::Select(select) = statement;
//! assert_eq!(select.fields.len(), 2);
//! assert_eq!(select.fields[1].alias, "n");
//! assert_eq!(select.where_expression.as_deref(), Some("active = 1"));
//! # Ok::<(), sqlslice_core::ParseError>(())
//! ```

pub mod ast;
pub mod parser;
pub mod scan;
pub mod sink;

pub use ast::{
    Field, OrderDirection, OrderItem, SelectStatement, Statement, StatementKind, TopClause,
};
pub use parser::{ParseError, parse, parse_with_sink};
pub use scan::{normalize, split_fragments};
pub use sink::{ErrorSink, TracingSink};
