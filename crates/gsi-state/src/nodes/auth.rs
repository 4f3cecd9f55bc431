//! The `auth` section: the shared secret configured in the feed's cfg file.

use crate::raw::{FeedNode, RawNode};

/// The auth token the game attaches to every payload so receivers can
/// reject traffic from unexpected senders.
#[derive(Debug, Clone)]
pub struct AuthNode {
    base: RawNode,
    /// The configured token, empty when none is set.
    pub token: String,
}

impl FeedNode for AuthNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            token: base.text("token"),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token() {
        let auth = AuthNode::from_raw(r#"{"token":"s3cret"}"#);
        assert_eq!(auth.token, "s3cret");
        assert!(!auth.is_empty());
    }

    #[test]
    fn absent_token_is_empty_string() {
        assert_eq!(AuthNode::empty().token, "");
    }
}
