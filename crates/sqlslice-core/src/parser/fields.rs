//! Field/alias resolution.
//!
//! Splits a field list into fragments, derives an alias for each fragment
//! from syntactic cues, deduplicates colliding aliases deterministically,
//! and recursively parses sub-selects embedded in field expressions.

use super::error::ParseError;
use super::select::parse_select;
use crate::ast::Field;
use crate::scan::keyword::{self, rfind_ignore_case, starts_with_ignore_case};
use crate::scan::{is_top_level, split_fragments};
use crate::sink::ErrorSink;

/// Resolves a raw field-list slice into uniquely aliased fields.
pub(super) fn resolve_fields(
    fields_expression: &str,
    sink: &dyn ErrorSink,
) -> Result<Vec<Field>, ParseError> {
    let mut map = FieldMap::new();

    if fields_expression.is_empty() {
        return Ok(Vec::new());
    }

    for fragment in split_fragments(fields_expression, ',', sink) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let (alias, expression) = split_alias(fragment);
        map.add(alias.trim(), expression.trim());
    }

    let mut fields = Vec::with_capacity(map.len());
    for (alias, expression) in map.into_entries() {
        let sub_select = parse_sub_select(&expression, sink)?;
        fields.push(Field {
            expression,
            alias,
            qualified_name: None,
            sub_select,
        });
    }

    Ok(fields)
}

/// Derives `(alias, expression)` from one field fragment.
///
/// The rules apply in priority order, each anchored to the last occurrence
/// of its cue and only when that occurrence sits at the top level:
/// a trailing ` AS ` alias, a trailing bracketed identifier, an alias after
/// the last space, the tail of a qualified name, and finally the fragment
/// itself. The space rule yields an empty alias (later replaced by a
/// synthetic name) when the candidate is all digits or the expression ends
/// in an operator, so `a + b` and `col 1` are not misread as alias splits.
fn split_alias(field: &str) -> (String, String) {
    if let Some(pos) = rfind_ignore_case(field, keyword::AS) {
        if is_top_level(field, pos) {
            let mut alias = field[pos + keyword::AS.len()..].trim();
            if alias.len() >= 2 && alias.starts_with('[') && alias.ends_with(']') {
                alias = &alias[1..alias.len() - 1];
            }
            return (alias.to_string(), field[..pos].trim().to_string());
        }
    }

    if field.ends_with(']') {
        if let Some(pos) = field.rfind('[') {
            if is_top_level(field, pos) {
                let alias = &field[pos + 1..field.len() - 1];
                return (alias.to_string(), field.to_string());
            }
        }
    }

    if let Some(pos) = field.rfind(' ') {
        if is_top_level(field, pos) {
            let alias = &field[pos + 1..];
            let expression = field[..pos].trim();
            if has_digits_only(alias) || ends_with_operator(expression) {
                return (String::new(), field.to_string());
            }
            return (alias.to_string(), expression.to_string());
        }
    }

    if let Some(pos) = field.rfind('.') {
        if is_top_level(field, pos) {
            return (field[pos + 1..].to_string(), field.to_string());
        }
    }

    (field.to_string(), field.to_string())
}

/// Recursively parses the expression when it is a parenthesized SELECT.
///
/// One layer of parentheses is stripped; fatal faults from the inner parse
/// propagate to the enclosing statement.
fn parse_sub_select(
    expression: &str,
    sink: &dyn ErrorSink,
) -> Result<Option<Box<crate::ast::SelectStatement>>, ParseError> {
    if !expression.starts_with('(')
        || !expression.ends_with(')')
        || !starts_with_ignore_case(&expression[1..], keyword::SELECT)
    {
        return Ok(None);
    }
    let inner = expression[1..expression.len() - 1].trim();
    Ok(Some(Box::new(parse_select(inner, sink)?)))
}

fn has_digits_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn ends_with_operator(s: &str) -> bool {
    s.ends_with(['+', '-', '*', '%', '^', '/', '|', '&'])
}

/// Ordered alias → expression map with the collision/naming policy.
///
/// Iteration order is insertion order, except that a displaced occupant
/// keeps its original position under its new name.
pub(super) struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub(super) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Renames `from` to `to`, keeping the entry's position and value.
    fn rename(&mut self, from: &str, to: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == from) {
            entry.0 = to.to_string();
        }
    }

    /// Inserts one field under a unique alias.
    ///
    /// An empty or all-digit alias becomes `Expr_1`; an alias ending in `*`
    /// becomes `StarExpr_1`. An alias ending in `_<integer>` carries an
    /// explicit index: the integer seeds the collision counter and the
    /// prefix is the base name. On collision, the counter increments until
    /// the name is unique. A colliding non-synthetic alias displaces the
    /// first occupant to the freshly numbered name and keeps the name it
    /// asked for; synthetic collisions only increment.
    pub(super) fn add(&mut self, alias: &str, expression: &str) {
        let mut name = alias.trim().to_string();
        let mut base = name.clone();
        let mut index: u64 = 0;
        let mut synthetic = false;

        if name.is_empty() || has_digits_only(&name) {
            base = Field::UNKNOWN_FIELD_NAME.to_string();
            index = 1;
            name = format!("{base}_{index}");
            synthetic = true;
        }
        if name.ends_with('*') {
            base = Field::STAR_FIELD_NAME.to_string();
            index = 1;
            name = format!("{base}_{index}");
            synthetic = true;
        }
        if let Some((prefix, digits)) = name.rsplit_once('_') {
            if let Ok(explicit) = digits.parse::<u64>() {
                base = prefix.to_string();
                index = explicit;
            }
        }

        let mut displaced: Option<String> = None;
        while self.contains(&name) {
            if displaced.is_none() {
                displaced = Some(name.clone());
            }
            index += 1;
            name = format!("{base}_{index}");
        }

        if !synthetic {
            if let Some(occupant) = displaced {
                self.rename(&occupant, &name);
                name = occupant;
            }
        }

        self.entries.push((name, expression.to_string()));
    }
}
