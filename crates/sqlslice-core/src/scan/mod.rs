//! Scanner primitives
//!
//! Delimiter-aware, position-based scanning over a normalized single-line
//! statement: quote/bracket state tracking, parenthesis nesting, keyword
//! location, and fragment splitting.

mod delimiter;
pub(crate) mod keyword;
mod normalize;
mod split;

pub(crate) use delimiter::is_top_level;
pub use normalize::normalize;
pub use split::split_fragments;
