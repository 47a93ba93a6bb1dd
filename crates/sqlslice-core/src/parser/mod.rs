//! Structural SELECT parsing
//!
//! Top-level dispatch plus the clause-slicing statement builder and the
//! field/alias resolver. All fatal faults abort the whole parse, including
//! any ancestor statement when they originate inside a sub-select.

mod error;
mod fields;
mod select;

pub use error::ParseError;

use crate::ast::{Statement, StatementKind};
use crate::scan::keyword::{self, starts_with_ignore_case};
use crate::scan::normalize;
use crate::sink::{ErrorSink, TracingSink};

/// Parses one SQL statement, routing advisory failures to [`TracingSink`].
///
/// The text may span multiple physical lines. Only `SELECT` statements are
/// dispatched to the statement builder; every other recognized leading
/// keyword (and the unrecognized case) fails with the detected kind.
///
/// # Errors
///
/// Returns a [`ParseError`] on empty input, unsupported statement kinds,
/// malformed `TOP` counts, `SELECT ... INTO`, or a `UNION` outside the
/// supported wrapped-subquery form.
pub fn parse(sql: &str) -> Result<Statement, ParseError> {
    parse_with_sink(sql, &TracingSink)
}

/// Like [`parse`], with an explicit sink for advisory failures.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with_sink(sql: &str, sink: &dyn ErrorSink) -> Result<Statement, ParseError> {
    if sql.trim().is_empty() {
        return Err(ParseError::MissingInput);
    }

    let sql = normalize(sql);
    if starts_with_ignore_case(&sql, keyword::SELECT) {
        return Ok(Statement::Select(select::parse_select(&sql, sink)?));
    }

    const LEADING: [(&str, StatementKind); 6] = [
        (keyword::INSERT, StatementKind::Insert),
        (keyword::UPDATE, StatementKind::Update),
        (keyword::DELETE, StatementKind::Delete),
        (keyword::CREATE, StatementKind::Create),
        (keyword::DROP, StatementKind::Drop),
        (keyword::TRUNCATE, StatementKind::Truncate),
    ];

    let kind = LEADING
        .iter()
        .find(|(kw, _)| starts_with_ignore_case(&sql, kw))
        .map_or(StatementKind::Unknown, |(_, kind)| *kind);

    Err(ParseError::UnsupportedStatement(kind))
}
