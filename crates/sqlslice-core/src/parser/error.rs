//! Fatal parse faults.

use crate::ast::StatementKind;

/// A fatal parse fault. Any of these aborts the entire parse of the
/// enclosing statement, including ancestors of a failed sub-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was empty or whitespace-only.
    #[error("SQL statement missing")]
    MissingInput,

    /// The leading keyword names a statement kind the parser does not
    /// model, or was not recognized at all.
    #[error("{}", unsupported_message(*.0))]
    UnsupportedStatement(StatementKind),

    /// The token after `TOP` did not parse as a non-negative integer.
    #[error("TOP value expected")]
    MalformedTop,

    /// A recognized but unsupported construct inside a SELECT:
    /// `SELECT ... INTO`, or a `UNION` without the wrapped-subquery FROM.
    #[error("{}", unsupported_message(*.0))]
    UnsupportedConstruct(StatementKind),
}

const fn unsupported_message(kind: StatementKind) -> &'static str {
    match kind {
        StatementKind::Insert | StatementKind::Batch => "BATCH is not supported",
        StatementKind::Update => "UPDATE is not supported",
        StatementKind::Delete => "DELETE is not supported",
        StatementKind::SelectInto => "SELECT INTO is not supported",
        StatementKind::Union => {
            "UNION ONLY SUPPORTED WITH FORMAT: \
             SELECT * FROM \
             (\
             SELECT [fields] FROM [tables] [GROUPBY] [WHERE] [ORDERBY] \
             UNION \
             SELECT [fields] FROM [tables] [GROUPBY] [WHERE] [ORDERBY]\
             ) [GROUPBY] [WHERE] [ORDERBY]"
        }
        _ => "Statement is not supported",
    }
}
