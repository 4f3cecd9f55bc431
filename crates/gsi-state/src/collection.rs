//! Ordered keyed collections of homogeneous child nodes.
//!
//! The feed models "many of a thing" as an object whose keys are arbitrary
//! identifiers (`weapon_0`, steamids, entity ids) or, rarely, as an array.
//! [`Collection`] enumerates every immediate child in document order --
//! never sorted, which is why the workspace pins `serde_json` with
//! `preserve_order` -- and builds one typed child per entry.
//!
//! Indexed and keyed access is deliberately permissive: a miss returns the
//! collection's owned empty-default child instead of failing, so callers
//! need no bounds-checking branch. The empty default reports
//! `is_empty() == true`, which is how it is distinguished from real
//! entries.

use serde_json::Value;

use crate::raw::{FeedNode, RawNode, value_text};

/// An ordered sequence of `(key, node)` entries plus the owned
/// empty-default child handed out on permissive misses.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    entries: Vec<(String, T)>,
    fallback: T,
}

impl<T: FeedNode> Collection<T> {
    /// Enumerate the fragment's immediate children and build one typed
    /// child per entry, preserving document order.
    pub fn from_node(base: &RawNode) -> Self {
        Self::from_node_with(base, |_key, raw| T::from_raw(raw))
    }

    /// Like [`Collection::from_node`], but the entry key is passed to the
    /// builder. Used where the key itself carries data (the `allplayers`
    /// section keys entries by steamid).
    ///
    /// Array-valued fragments use the positional index rendered as a
    /// string key. Scalar fragments have no children and yield an empty
    /// collection.
    pub fn from_node_with(base: &RawNode, build: impl Fn(&str, &str) -> T) -> Self {
        let mut entries = Vec::new();
        match base.value() {
            Value::Object(map) => {
                for (key, value) in map {
                    entries.push((key.clone(), build(key.as_str(), &value_text(value))));
                }
            }
            Value::Array(items) => {
                for (index, value) in items.iter().enumerate() {
                    let key = index.to_string();
                    let child = build(key.as_str(), &value_text(value));
                    entries.push((key, child));
                }
            }
            _ => {}
        }
        Self {
            entries,
            fallback: T::empty(),
        }
    }
}

impl<T> Collection<T> {
    /// The number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The entry at `index`, or the empty-default child when out of range.
    /// Never fails.
    pub fn by_index(&self, index: usize) -> &T {
        self.entries
            .get(index)
            .map_or(&self.fallback, |(_, node)| node)
    }

    /// The entry with the given key, or the empty-default child on a miss.
    /// Never fails.
    pub fn by_key(&self, key: &str) -> &T {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(&self.fallback, |(_, node)| node)
    }

    /// The first entry in document order satisfying `predicate`, or the
    /// empty-default child when none does. Strictly first-match-wins; no
    /// secondary ordering.
    pub fn first_matching(&self, predicate: impl Fn(&T) -> bool) -> &T {
        self.entries
            .iter()
            .map(|(_, node)| node)
            .find(|node| predicate(node))
            .unwrap_or(&self.fallback)
    }

    /// The ordered `(key, node)` entries.
    pub fn entries(&self) -> &[(String, T)] {
        &self.entries
    }

    /// Iterate over child nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, node)| node)
    }
}
