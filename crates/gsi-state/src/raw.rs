//! The raw fragment substrate underneath every typed node.
//!
//! Each typed node is built from one self-contained JSON fragment of the
//! feed payload. [`RawNode`] stores that fragment verbatim, parses it once,
//! and exposes the total lookups and conversions the typed nodes are built
//! from: absent keys, type mismatches, and unparsable text all resolve to
//! the target type's zero value. The feed routinely omits whole sections
//! depending on game mode and spectator permissions, so partial absence is
//! the normal case here, not an error.
//!
//! The only fallible entry point is [`RawNode::parse`], used for the
//! outermost payload. Sections and collection entries go through
//! [`RawNode::lenient`], which recovers malformed fragments to the empty
//! default under a `warn!`.

use serde_json::Value;
use tracing::warn;

use crate::error::ParseError;

/// The canonical empty-object fragment substituted for absent data.
pub const EMPTY_FRAGMENT: &str = "{}";

/// The shared capability of every typed node in the model.
///
/// Construction is total: any input, including the empty string and
/// malformed text, yields a node (malformed fragments degrade to the empty
/// default). The empty-default instance produced by [`FeedNode::empty`] is
/// what permissive collection accessors hand out for out-of-range or
/// missing entries; it is distinguishable from real data via
/// [`FeedNode::is_empty`].
pub trait FeedNode: Sized {
    /// Build the node from its backing fragment text. Never fails.
    fn from_raw(raw: &str) -> Self;

    /// The raw fragment substrate backing this node.
    fn base(&self) -> &RawNode;

    /// Whether the node was built from an absent, empty, or malformed
    /// fragment.
    fn is_empty(&self) -> bool {
        self.base().is_empty()
    }

    /// The verbatim fragment text this node was built from.
    fn raw(&self) -> &str {
        self.base().raw()
    }

    /// The empty-default instance used as the fallback for absent data.
    fn empty() -> Self {
        Self::from_raw("")
    }
}

/// One parsed JSON fragment: the verbatim text plus its document tree.
///
/// Immutable after construction. The backing text is kept so the caller can
/// retrieve the exact payload for logging and diagnostics.
#[derive(Debug, Clone)]
pub struct RawNode {
    raw: String,
    data: Value,
    empty: bool,
}

impl RawNode {
    /// Parse a fragment, failing on malformed input.
    ///
    /// The empty string is treated as the canonical `{}` fragment. This is
    /// the fatal path used only for the outermost payload.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let effective = if raw.is_empty() { EMPTY_FRAGMENT } else { raw };
        let data: Value =
            serde_json::from_str(effective).map_err(|source| ParseError::malformed(raw, source))?;
        Ok(Self::from_parts(effective.to_owned(), data))
    }

    /// Parse a fragment, recovering malformed input to the empty default.
    ///
    /// The verbatim text is kept even when parsing fails so diagnostics can
    /// still see what arrived. Used for every section and collection entry.
    pub fn lenient(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(node) => node,
            Err(error) => {
                warn!(%error, "malformed fragment recovered to empty default");
                Self {
                    raw: raw.to_owned(),
                    data: Value::Object(serde_json::Map::new()),
                    empty: true,
                }
            }
        }
    }

    fn from_parts(raw: String, data: Value) -> Self {
        let empty = match &data {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        };
        Self { raw, data, empty }
    }

    /// The verbatim fragment text this node was built from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this node was built from an absent or empty fragment.
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    /// The parsed document tree.
    pub(crate) const fn value(&self) -> &Value {
        &self.data
    }

    /// The child's exact text representation, or the empty string when
    /// absent. String scalars are returned unquoted; compound and numeric
    /// children are re-serialized. Never fails.
    pub fn child_raw(&self, key: &str) -> String {
        self.data.get(key).map_or_else(String::new, value_text)
    }

    /// A string field. Absent keys yield the empty string.
    pub fn text(&self, key: &str) -> String {
        self.child_raw(key)
    }

    /// A signed 32-bit field. Accepts JSON numbers and numeric strings;
    /// anything else yields `0`.
    pub fn int(&self, key: &str) -> i32 {
        match self.data.get(key) {
            Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .unwrap_or_default()
    }

    /// A signed 64-bit field. Accepts JSON numbers and numeric strings;
    /// anything else yields `0`.
    pub fn int64(&self, key: &str) -> i64 {
        match self.data.get(key) {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .unwrap_or_default()
    }

    /// An unsigned 64-bit field (steamids, entity ids). Accepts JSON
    /// numbers and numeric strings; anything else yields `0`.
    pub fn uint64(&self, key: &str) -> u64 {
        match self.data.get(key) {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .unwrap_or_default()
    }

    /// A floating-point field. The feed stringifies countdowns, so numeric
    /// strings are accepted alongside JSON numbers; anything else yields
    /// `0.0`.
    pub fn float(&self, key: &str) -> f64 {
        match self.data.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .unwrap_or_default()
    }

    /// A boolean field. Accepts JSON booleans, `"true"` (any casing), and
    /// nonzero integers; anything else yields `false`.
    pub fn boolean(&self, key: &str) -> bool {
        match self.data.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64().is_some_and(|v| v != 0),
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

/// The closest text representation of a document value: string scalars
/// unquoted, everything else re-serialized.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
