//! Tests for recursive sub-select handling in the field list.

mod common;
use common::{parse_err, parse_select};

use sqlslice_core::ParseError;

#[test]
fn subselect_in_field_list_is_parsed_recursively() {
    let s = parse_select("SELECT ( select * from audit where ok = 1 ) As LastAudit, c FROM t");
    assert_eq!(s.fields.len(), 2);

    let field = &s.fields[0];
    assert_eq!(field.alias, "LastAudit");
    let sub = field.sub_select.as_ref().expect("sub-select missing");
    assert_eq!(sub.from_expression, "audit");
    assert_eq!(sub.where_expression.as_deref(), Some("ok = 1"));

    assert!(s.fields[1].sub_select.is_none());
}

#[test]
fn subselect_without_from_keeps_empty_from() {
    let s = parse_select("SELECT (SELECT 1) AS sub, col2 FROM t WHERE a=1");
    assert_eq!(s.fields.len(), 2);

    let sub = s.fields[0].sub_select.as_ref().expect("sub-select missing");
    assert_eq!(sub.from_expression, "");
    assert_eq!(sub.fields.len(), 1);
    assert_eq!(sub.fields[0].alias, "Expr_1");
    assert_eq!(sub.fields[0].expression, "1");
}

#[test]
fn top_level_select_without_from_parses() {
    let s = parse_select("SELECT 1");
    assert_eq!(s.from_expression, "");
    assert_eq!(s.fields.len(), 1);
}

#[test]
fn nested_subselects_two_levels_deep() {
    let s = parse_select("SELECT (SELECT (SELECT x FROM inner2) AS i FROM inner1) AS o FROM t");
    let outer = s.fields[0].sub_select.as_ref().expect("outer sub missing");
    assert_eq!(outer.from_expression, "inner1");
    let inner = outer.fields[0]
        .sub_select
        .as_ref()
        .expect("inner sub missing");
    assert_eq!(inner.from_expression, "inner2");
    assert_eq!(inner.fields[0].alias, "x");
}

#[test]
fn plain_parenthesized_expression_is_not_a_subselect() {
    let s = parse_select("SELECT (1 - 4), c FROM t");
    assert!(s.fields[0].sub_select.is_none());
    assert_eq!(s.fields[0].expression, "(1 - 4)");
}

#[test]
fn fatal_fault_in_subselect_aborts_the_whole_parse() {
    let err = parse_err("SELECT (SELECT TOP x a FROM u) AS s FROM t");
    assert_eq!(err, ParseError::MalformedTop);
}

#[test]
fn unsupported_construct_in_subselect_propagates() {
    let err = parse_err("SELECT (SELECT a INTO b FROM u) AS s FROM t");
    assert!(matches!(err, ParseError::UnsupportedConstruct(_)));
}
