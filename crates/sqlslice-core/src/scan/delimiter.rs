//! Quote/bracket delimiter state and parenthesis nesting.

/// Tracks whether a scan position is inside a quoted string or bracketed
/// identifier, and the parenthesis nesting level outside of those.
///
/// The delimiter set is `'`, `"`, `[` and `]`. Entering a delimiter
/// remembers which opener was seen; while inside, only the matching closer
/// exits (`'`↔`'`, `"`↔`"`, `[`↔`]`) and every other delimiter character is
/// inert. A stray `]` outside any delimiter enters a state that nothing
/// closes, which swallows the rest of the scan; that asymmetry is part of
/// the contract.
///
/// Parentheses are counted only while outside any delimiter.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DelimiterTracker {
    open: Option<char>,
    level: i32,
}

impl DelimiterTracker {
    pub(crate) const fn new() -> Self {
        Self {
            open: None,
            level: 0,
        }
    }

    /// Consumes one character, updating delimiter and nesting state.
    pub(crate) fn advance(&mut self, c: char) {
        match self.open {
            Some(open) => {
                if matches!((open, c), ('\'', '\'') | ('"', '"') | ('[', ']')) {
                    self.open = None;
                }
            }
            None => match c {
                '\'' | '"' | '[' | ']' => self.open = Some(c),
                '(' => self.level += 1,
                ')' => self.level -= 1,
                _ => {}
            },
        }
    }

    /// True while inside a quoted string or bracketed identifier.
    pub(crate) const fn in_delimiter(&self) -> bool {
        self.open.is_some()
    }

    /// True when outside any delimiter and at parenthesis nesting level 0.
    pub(crate) const fn is_top_level(&self) -> bool {
        self.open.is_none() && self.level == 0
    }
}

/// Returns whether the character at byte position `pos` of `text` sits at
/// the top level: nesting level 0 and not inside any quote or bracket.
///
/// `pos` must be a character boundary.
pub(crate) fn is_top_level(text: &str, pos: usize) -> bool {
    let mut tracker = DelimiterTracker::new();
    for c in text[..pos].chars() {
        tracker.advance(c);
    }
    tracker.is_top_level()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_after(text: &str) -> DelimiterTracker {
        let mut tracker = DelimiterTracker::new();
        for c in text.chars() {
            tracker.advance(c);
        }
        tracker
    }

    #[test]
    fn parens_counted_outside_delimiters_only() {
        assert!(!state_after("a(b").in_delimiter());
        assert!(!state_after("a(b").is_top_level());
        assert!(state_after("a(b)").is_top_level());
        assert!(state_after("'('").is_top_level());
        assert!(state_after("[(]").is_top_level());
    }

    #[test]
    fn quote_may_contain_brackets_and_vice_versa() {
        assert!(state_after("'[x'").is_top_level());
        assert!(state_after("[\"x]").is_top_level());
        assert!(state_after("'x").in_delimiter());
    }

    #[test]
    fn stray_closing_bracket_never_closes() {
        let tracker = state_after("a] b ' [ \" ]");
        assert!(tracker.in_delimiter());
    }

    #[test]
    fn is_top_level_at_position() {
        let text = "f(a, b), c";
        assert!(!is_top_level(text, 3)); // the comma inside the call
        assert!(is_top_level(text, 7)); // the comma after the call
    }
}
