//! Error types for snapshot construction.
//!
//! Only the outermost payload can fail: [`ParseError`] is returned by
//! [`GameState::new`](crate::GameState::new) when the top-level text is not
//! valid JSON. Every conversion below the top level is total and degrades to
//! empty defaults instead of erroring (see [`crate::raw`]).

/// Errors that can occur when constructing a [`GameState`](crate::GameState).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The top-level payload was non-empty but not valid JSON.
    #[error("malformed game state payload starting {snippet:?}: {source}")]
    MalformedPayload {
        /// The first characters of the offending payload, for diagnostics.
        snippet: String,
        /// The underlying JSON parse error.
        source: serde_json::Error,
    },
}

impl ParseError {
    /// Build a [`ParseError::MalformedPayload`] carrying a truncated snippet
    /// of the offending input.
    pub(crate) fn malformed(raw: &str, source: serde_json::Error) -> Self {
        Self::MalformedPayload {
            snippet: raw.chars().take(64).collect(),
            source,
        }
    }
}
