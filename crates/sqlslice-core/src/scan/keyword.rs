//! Keyword constants and the top-level keyword locator.
//!
//! Every keyword constant is pre-padded with spaces: leading keywords carry
//! a trailing space (`"SELECT "`), clause keywords carry both (`" WHERE "`).
//! The padding gives word-boundary-safe matching by construction, so
//! `NOWHERE` never matches `" WHERE "`.

use super::delimiter::DelimiterTracker;

pub(crate) const SELECT: &str = "SELECT ";
pub(crate) const INSERT: &str = "INSERT ";
pub(crate) const UPDATE: &str = "UPDATE ";
pub(crate) const DELETE: &str = "DELETE ";
pub(crate) const CREATE: &str = "CREATE ";
pub(crate) const DROP: &str = "DROP ";
pub(crate) const TRUNCATE: &str = "TRUNCATE ";

pub(crate) const FROM: &str = " FROM ";
pub(crate) const WHERE: &str = " WHERE ";
pub(crate) const INTO: &str = " INTO ";
pub(crate) const UNION: &str = " UNION ";
pub(crate) const DISTINCT: &str = " DISTINCT ";
pub(crate) const TOP: &str = " TOP ";
pub(crate) const PERCENT: &str = " PERCENT ";
pub(crate) const AS: &str = " AS ";
pub(crate) const GROUP_BY: &str = " GROUP BY ";
pub(crate) const HAVING: &str = " HAVING ";
pub(crate) const ORDER_BY: &str = " ORDER BY ";

/// Finds the byte position of the first case-insensitive occurrence of
/// `keyword` that sits at nesting level 0 outside any quote or bracket.
///
/// Occurrences inside parentheses or delimiters are skipped, not fatal.
pub(crate) fn find_keyword(sql: &str, keyword: &str) -> Option<usize> {
    let mut tracker = DelimiterTracker::new();
    for (i, c) in sql.char_indices() {
        if tracker.is_top_level() && starts_with_ignore_case(&sql[i..], keyword) {
            return Some(i);
        }
        tracker.advance(c);
    }
    None
}

/// Whether `keyword` occurs anywhere outside quotes and brackets,
/// regardless of parenthesis nesting.
///
/// `UNION` and `INTO` detection needs this form: the supported wrapped
/// union lives one nesting level down.
pub(crate) fn contains_keyword(sql: &str, keyword: &str) -> bool {
    let mut tracker = DelimiterTracker::new();
    for (i, c) in sql.char_indices() {
        if !tracker.in_delimiter() && starts_with_ignore_case(&sql[i..], keyword) {
            return true;
        }
        tracker.advance(c);
    }
    false
}

/// Byte position of the last case-insensitive occurrence of `needle`.
///
/// `needle` must be ASCII; a match can therefore only start on a character
/// boundary.
pub(crate) fn rfind_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || n.len() > h.len() {
        return None;
    }
    (0..=h.len() - n.len())
        .rev()
        .find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// ASCII case-insensitive prefix test.
pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    debug_assert!(prefix.is_ascii());
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// ASCII case-insensitive suffix test.
pub(crate) fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    debug_assert!(suffix.is_ascii());
    text.len() >= suffix.len()
        && text.as_bytes()[text.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}
