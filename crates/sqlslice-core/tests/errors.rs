//! Tests for fatal parse faults.

mod common;
use common::{parse_err, parse_select};

use sqlslice_core::{ParseError, StatementKind};

#[test]
fn empty_and_whitespace_input() {
    assert_eq!(parse_err(""), ParseError::MissingInput);
    assert_eq!(parse_err("   \n\t  "), ParseError::MissingInput);
}

#[test]
fn unsupported_statement_kinds_carry_the_kind() {
    for (sql, kind) in [
        ("INSERT INTO t VALUES (1)", StatementKind::Insert),
        ("UPDATE t SET a = 1", StatementKind::Update),
        ("DELETE FROM t WHERE a = 1", StatementKind::Delete),
        ("CREATE TABLE t (a INT)", StatementKind::Create),
        ("DROP TABLE t", StatementKind::Drop),
        ("TRUNCATE TABLE t", StatementKind::Truncate),
    ] {
        assert_eq!(
            parse_err(sql),
            ParseError::UnsupportedStatement(kind),
            "for {sql}"
        );
    }
}

#[test]
fn kind_matching_is_case_insensitive() {
    assert_eq!(
        parse_err("update t set a = 1"),
        ParseError::UnsupportedStatement(StatementKind::Update)
    );
}

#[test]
fn unrecognized_statement_is_unknown() {
    assert_eq!(
        parse_err("EXPLAIN SELECT * FROM t"),
        ParseError::UnsupportedStatement(StatementKind::Unknown)
    );
}

#[test]
fn insert_message_names_batch() {
    let err = parse_err("INSERT INTO t VALUES (1)");
    assert_eq!(err.to_string(), "BATCH is not supported");
}

#[test]
fn select_into_is_rejected() {
    assert_eq!(
        parse_err("SELECT a INTO backup FROM t"),
        ParseError::UnsupportedConstruct(StatementKind::SelectInto)
    );
}

#[test]
fn quoted_into_is_not_misdetected() {
    let s = parse_select("SELECT ' INTO ' AS x FROM t");
    assert_eq!(s.fields[0].alias, "x");
}

#[test]
fn bare_union_is_rejected() {
    let err = parse_err("SELECT * FROM t1 UNION SELECT * FROM t2");
    assert_eq!(err, ParseError::UnsupportedConstruct(StatementKind::Union));
    assert!(err.to_string().starts_with("UNION ONLY SUPPORTED WITH FORMAT"));
}

#[test]
fn wrapped_union_is_accepted() {
    let s = parse_select("SELECT * FROM (SELECT * FROM t1 UNION SELECT * FROM t2) x");
    assert!(s.union);
}

#[test]
fn malformed_top_count() {
    assert_eq!(parse_err("SELECT TOP abc a FROM t"), ParseError::MalformedTop);
}

#[test]
fn negative_top_count_is_malformed() {
    assert_eq!(parse_err("SELECT TOP -5 a FROM t"), ParseError::MalformedTop);
}
