//! Line normalization.

use super::delimiter::DelimiterTracker;

/// Collapses a multi-line statement into a single trimmed line suitable for
/// position-based scanning.
///
/// Line breaks become single spaces. Outside quotes and brackets, redundant
/// spacing collapses: never two consecutive spaces, no space right after
/// `(`, and no space right before `)`. Characters inside a quoted string or
/// bracketed identifier are copied verbatim, spaces and parentheses
/// included.
///
/// Normalizing an already normalized string yields it unchanged.
#[must_use]
pub fn normalize(sql: &str) -> String {
    let sql = sql.replace("\r\n", " ").replace('\n', " ");
    let sql = sql.trim();

    let mut out = String::with_capacity(sql.len());
    let mut tracker = DelimiterTracker::new();
    let mut ignore_next_space = false;

    for c in sql.chars() {
        tracker.advance(c);

        if tracker.in_delimiter() {
            out.push(c);
            continue;
        }
        if c == ' ' && ignore_next_space {
            continue;
        }
        if c == ')' {
            while out.ends_with(' ') {
                out.pop();
            }
        }
        ignore_next_space = c == ' ' || c == '(';
        out.push(c);
    }

    out
}
