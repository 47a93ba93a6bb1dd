//! Advisory logging sink.
//!
//! The parser's pure components carry no logging dependency; the fragment
//! splitter is the single component with an advisory (non-fatal) failure
//! path, and it takes the sink explicitly.

/// Receiver for advisory failure descriptions.
pub trait ErrorSink {
    /// Records one non-fatal failure description.
    fn log_error(&self, message: &str);
}

/// Forwards advisory failures to the `tracing` error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn log_error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
