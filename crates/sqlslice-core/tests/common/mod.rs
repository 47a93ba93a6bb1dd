#![allow(dead_code)]

use std::sync::Mutex;

use sqlslice_core::{ErrorSink, ParseError, SelectStatement, Statement, parse};

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Ok(Statement::Select(select)) => select,
        Err(e) => panic!("Failed to parse: {sql}\nError: {e:?}"),
    }
}

pub fn parse_err(sql: &str) -> ParseError {
    parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

/// Sink that captures advisory messages for assertions.
#[derive(Default)]
pub struct CaptureSink {
    messages: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorSink for CaptureSink {
    fn log_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Rebuilds the statement from its recorded clause slices. For inputs that
/// are already normalized and use no DISTINCT/TOP, this must reproduce the
/// normalized input exactly.
pub fn reassemble(select: &SelectStatement) -> String {
    let mut out = format!("SELECT {}", select.fields_expression);
    if !select.from_expression.is_empty() {
        out.push_str(" FROM ");
        out.push_str(&select.from_expression);
    }
    if let Some(where_expression) = &select.where_expression {
        out.push_str(" WHERE ");
        out.push_str(where_expression);
    }
    if let Some(group_by) = &select.group_by_expression {
        out.push_str(" GROUP BY ");
        out.push_str(group_by);
    }
    if let Some(having) = &select.having_expression {
        out.push_str(" HAVING ");
        out.push_str(having);
    }
    if let Some(order_by) = &select.order_by_expression {
        out.push_str(" ORDER BY ");
        out.push_str(order_by);
    }
    out
}
