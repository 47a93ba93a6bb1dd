//! The SELECT statement builder.
//!
//! Locates each clause keyword at the top level, slices the statement into
//! clause substrings, and hands the field list and ORDER BY list to their
//! resolvers.

use super::error::ParseError;
use super::fields::resolve_fields;
use crate::ast::{OrderDirection, OrderItem, SelectStatement, StatementKind, TopClause};
use crate::scan::keyword::{self, contains_keyword, ends_with_ignore_case, find_keyword};
use crate::scan::{normalize, split_fragments};
use crate::sink::ErrorSink;

/// Parses one normalized SELECT statement, recursing into sub-selects.
pub(super) fn parse_select(
    sql: &str,
    sink: &dyn ErrorSink,
) -> Result<SelectStatement, ParseError> {
    let sql = normalize(sql);
    let len = sql.len();

    let pos_distinct = find_keyword(&sql, keyword::DISTINCT);
    let pos_top = find_keyword(&sql, keyword::TOP);
    let pos_top_percent = find_keyword(&sql, keyword::PERCENT);
    let pos_from = find_keyword(&sql, keyword::FROM);
    let pos_where = find_keyword(&sql, keyword::WHERE);
    let pos_group_by = find_keyword(&sql, keyword::GROUP_BY);
    let pos_having = find_keyword(&sql, keyword::HAVING);
    let pos_order_by = find_keyword(&sql, keyword::ORDER_BY);

    // Field list starts after SELECT, or after DISTINCT, or after the TOP
    // count (or the PERCENT token when present).
    let mut pos_fields = keyword::SELECT.len();
    if let Some(pd) = pos_distinct {
        pos_fields = pd + keyword::DISTINCT.len();
    }
    let mut top = None;
    if let Some(pt) = pos_top {
        let after = pt + keyword::TOP.len();
        let (token_end, next) = match sql[after..].find(' ') {
            Some(i) => (after + i, after + i + 1),
            None => (len, len),
        };
        let value = sql[after..token_end]
            .trim()
            .parse::<u64>()
            .map_err(|_| ParseError::MalformedTop)?;
        pos_fields = next;

        let percent = pos_top_percent.is_some();
        if let Some(pp) = pos_top_percent {
            // Resume right at the trailing space of the PERCENT keyword.
            pos_fields = pp + keyword::PERCENT.len() - 1;
        }
        top = Some(TopClause { value, percent });
    }

    if contains_keyword(&sql, keyword::INTO) {
        return Err(ParseError::UnsupportedConstruct(StatementKind::SelectInto));
    }
    let union = contains_keyword(&sql, keyword::UNION);

    let end_where = pos_where.unwrap_or(len);
    let end_group_by = pos_group_by.unwrap_or(len);
    let end_having = pos_having.unwrap_or(len);
    let end_order_by = pos_order_by.unwrap_or(len);

    let fields_expression = slice(&sql, pos_fields, pos_from.unwrap_or(len));
    let fields = resolve_fields(&fields_expression, sink)?;

    // Absent FROM is representable: the expression stays empty.
    let from_expression = match pos_from {
        Some(pf) => slice(
            &sql,
            pf + keyword::FROM.len(),
            end_where.min(end_group_by).min(end_order_by),
        ),
        None => String::new(),
    };
    if union && !from_expression.starts_with('(') {
        return Err(ParseError::UnsupportedConstruct(StatementKind::Union));
    }

    let where_expression = pos_where.map(|pw| {
        slice(
            &sql,
            pw + keyword::WHERE.len(),
            end_group_by.min(end_having).min(end_order_by),
        )
    });

    let group_by_expression = pos_group_by.map(|pg| {
        slice(
            &sql,
            pg + keyword::GROUP_BY.len(),
            end_having.min(end_order_by),
        )
    });
    let groups = group_by_expression
        .as_deref()
        .map(|expression| split_fragments(expression, ',', sink))
        .unwrap_or_default();

    let having_expression =
        pos_having.map(|ph| slice(&sql, ph + keyword::HAVING.len(), end_order_by));

    let order_by_expression =
        pos_order_by.map(|po| slice(&sql, po + keyword::ORDER_BY.len(), len));
    let orders = order_by_expression
        .as_deref()
        .map(|expression| resolve_order_items(expression, sink))
        .unwrap_or_default();

    Ok(SelectStatement {
        sql,
        distinct: pos_distinct.is_some(),
        top,
        fields_expression,
        fields,
        from_expression,
        where_expression,
        group_by_expression,
        groups,
        having_expression,
        order_by_expression,
        orders,
        union,
    })
}

/// Splits an ORDER BY slice into items, stripping any explicit trailing
/// `ASC`/`DESC` suffix to set the direction.
fn resolve_order_items(expression: &str, sink: &dyn ErrorSink) -> Vec<OrderItem> {
    split_fragments(expression, ',', sink)
        .iter()
        .map(|fragment| {
            let fragment = fragment.trim();
            if ends_with_ignore_case(fragment, " desc") {
                OrderItem {
                    expression: fragment[..fragment.len() - 5].to_string(),
                    direction: OrderDirection::Desc,
                }
            } else if ends_with_ignore_case(fragment, " asc") {
                OrderItem {
                    expression: fragment[..fragment.len() - 4].to_string(),
                    direction: OrderDirection::Asc,
                }
            } else {
                OrderItem {
                    expression: fragment.to_string(),
                    direction: OrderDirection::Asc,
                }
            }
        })
        .collect()
}

/// Trimmed substring between two byte positions, clamped so degenerate
/// inputs slice to empty instead of panicking.
fn slice(sql: &str, start: usize, end: usize) -> String {
    let start = start.min(sql.len());
    let end = end.min(sql.len());
    if start >= end {
        return String::new();
    }
    sql[start..end].trim().to_string()
}
