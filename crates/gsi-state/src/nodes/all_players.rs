//! The `allplayers` collection: every player in the match, keyed by
//! steamid. Only present when spectating with access to all POVs.

use crate::collection::Collection;
use crate::raw::{FeedNode, RawNode};

use super::player::PlayerNode;

/// All observed players, keyed by steamid in document order.
#[derive(Debug, Clone)]
pub struct AllPlayersNode {
    base: RawNode,
    players: Collection<PlayerNode>,
}

impl AllPlayersNode {
    /// The number of observed players.
    pub fn count(&self) -> usize {
        self.players.count()
    }

    /// The player at `index`, or an empty-default player when out of
    /// range. Never fails.
    pub fn by_index(&self, index: usize) -> &PlayerNode {
        self.players.by_index(index)
    }

    /// The player with the given steamid, or an empty-default player on a
    /// miss.
    pub fn by_steam_id(&self, steam_id: &str) -> &PlayerNode {
        self.players.by_key(steam_id)
    }

    /// The ordered `(steamid, player)` entries.
    pub fn entries(&self) -> &[(String, PlayerNode)] {
        self.players.entries()
    }

    /// Iterate over players in document order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerNode> {
        self.players.iter()
    }
}

impl FeedNode for AllPlayersNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            players: Collection::from_node_with(&base, PlayerNode::from_entry),
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
    use gsi_types::Team;

    const ALL_PLAYERS_JSON: &str = r#"{
        "76561198000000001":{"name":"alpha","team":"CT","observer_slot":1},
        "76561198000000002":{"name":"bravo","team":"T","observer_slot":2}
    }"#;

    #[test]
    fn keys_supply_steamids() {
        let all = AllPlayersNode::from_raw(ALL_PLAYERS_JSON);
        assert_eq!(all.count(), 2);
        let alpha = all.by_steam_id("76561198000000001");
        assert_eq!(alpha.name, "alpha");
        assert_eq!(alpha.steam_id, "76561198000000001");
        assert_eq!(alpha.team, Team::CT);
    }

    #[test]
    fn index_follows_document_order() {
        let all = AllPlayersNode::from_raw(ALL_PLAYERS_JSON);
        assert_eq!(all.by_index(0).name, "alpha");
        assert_eq!(all.by_index(1).name, "bravo");
        assert_eq!(all.by_index(1).steam_id, "76561198000000002");
    }

    #[test]
    fn misses_yield_empty_defaults() {
        let all = AllPlayersNode::from_raw(ALL_PLAYERS_JSON);
        assert!(all.by_steam_id("76561198999999999").is_empty());
        assert!(all.by_index(2).is_empty());
        assert_eq!(all.by_index(2).name, "");
    }

    #[test]
    fn absent_section_is_empty() {
        let all = AllPlayersNode::empty();
        assert!(all.is_empty());
        assert_eq!(all.count(), 0);
    }
}
