//! The `provider` section: which game client sent the payload.

use crate::raw::{FeedNode, RawNode};

/// Information about the game client and the Steam user running it.
#[derive(Debug, Clone)]
pub struct ProviderNode {
    base: RawNode,
    /// Game name as reported by the client.
    pub name: String,
    /// Steam application id of the game.
    pub app_id: i32,
    /// Client version number.
    pub version: i32,
    /// 64-bit steamid of the user running the game.
    pub steam_id: String,
    /// Unix timestamp at which the payload was produced.
    pub timestamp: i64,
}

impl FeedNode for ProviderNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            name: base.text("name"),
            app_id: base.int("appid"),
            version: base.int("version"),
            steam_id: base.text("steamid"),
            timestamp: base.int64("timestamp"),
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
    fn parses_provider_fields() {
        let provider = ProviderNode::from_raw(
            r#"{"name":"Counter-Strike: Global Offensive","appid":730,"version":13694,"steamid":"76561198000000001","timestamp":1688154000}"#,
        );
        assert_eq!(provider.name, "Counter-Strike: Global Offensive");
        assert_eq!(provider.app_id, 730);
        assert_eq!(provider.version, 13694);
        assert_eq!(provider.steam_id, "76561198000000001");
        assert_eq!(provider.timestamp, 1_688_154_000);
        assert!(!provider.is_empty());
    }

    #[test]
    fn empty_fragment_yields_zero_values() {
        let provider = ProviderNode::empty();
        assert!(provider.is_empty());
        assert_eq!(provider.name, "");
        assert_eq!(provider.app_id, 0);
        assert_eq!(provider.timestamp, 0);
    }
}
