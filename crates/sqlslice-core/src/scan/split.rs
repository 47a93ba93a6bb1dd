//! Delimiter-aware fragment splitting.

use super::delimiter::DelimiterTracker;
use crate::sink::ErrorSink;

/// Splits `text` on `separator`, honoring quotes, bracketed identifiers and
/// parenthesis nesting: only separators at the top level split.
///
/// Fragments come back trimmed, in order; empty fragments are kept.
/// Malformed input never fails: when the scan ends inside an unclosed
/// delimiter or unbalanced parentheses, the remainder becomes the final
/// fragment and one advisory message goes to `sink`. This is the only
/// non-fatal failure path in the crate.
pub fn split_fragments(text: &str, separator: char, sink: &dyn ErrorSink) -> Vec<String> {
    let mut fragments = Vec::new();
    let text = text.trim();
    if text.is_empty() {
        return fragments;
    }

    let mut tracker = DelimiterTracker::new();
    let mut buf = String::new();

    for c in text.chars() {
        tracker.advance(c);
        if c == separator && tracker.is_top_level() {
            fragments.push(buf.trim().to_string());
            buf.clear();
        } else {
            buf.push(c);
        }
    }

    if !tracker.is_top_level() {
        sink.log_error(&format!(
            "unbalanced delimiters while splitting fragment list: {text}"
        ));
    }
    fragments.push(buf.trim().to_string());

    fragments
}
