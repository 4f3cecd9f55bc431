//! The `grenades` collection: every grenade currently in flight or in
//! effect, keyed by entity id. Spectator-only.

use gsi_types::{GrenadeType, Vector3};

use crate::collection::Collection;
use crate::raw::{FeedNode, RawNode};

/// One live grenade.
#[derive(Debug, Clone)]
pub struct GrenadeNode {
    base: RawNode,
    /// Steamid of the player who threw the grenade.
    pub owner: u64,
    /// Current world position.
    pub position: Vector3,
    /// Current velocity.
    pub velocity: Vector3,
    /// Seconds since the grenade was thrown. Stringified in the feed.
    pub lifetime: f64,
    /// Seconds the grenade's effect has been running (smoke spread, fire),
    /// `0.0` while still in flight. Stringified in the feed.
    pub effect_time: f64,
    /// Kind of grenade.
    pub grenade_type: GrenadeType,
}

impl FeedNode for GrenadeNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            owner: base.uint64("owner"),
            position: Vector3::from_feed(&base.text("position")),
            velocity: Vector3::from_feed(&base.text("velocity")),
            lifetime: base.float("lifetime"),
            effect_time: base.float("effecttime"),
            grenade_type: GrenadeType::from_feed(&base.text("type")),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}

/// The collection of live grenades, keyed by entity id in document order.
#[derive(Debug, Clone)]
pub struct GrenadesNode {
    base: RawNode,
    grenades: Collection<GrenadeNode>,
}

impl GrenadesNode {
    /// The number of live grenades.
    pub fn count(&self) -> usize {
        self.grenades.count()
    }

    /// The grenade at `index`, or an empty-default grenade when out of
    /// range. Never fails.
    pub fn by_index(&self, index: usize) -> &GrenadeNode {
        self.grenades.by_index(index)
    }

    /// The grenade with the given entity id, or an empty-default grenade
    /// on a miss.
    pub fn by_id(&self, id: &str) -> &GrenadeNode {
        self.grenades.by_key(id)
    }

    /// The ordered `(entity id, grenade)` entries.
    pub fn entries(&self) -> &[(String, GrenadeNode)] {
        self.grenades.entries()
    }

    /// Iterate over grenades in document order.
    pub fn iter(&self) -> impl Iterator<Item = &GrenadeNode> {
        self.grenades.iter()
    }
}

impl FeedNode for GrenadesNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            grenades: Collection::from_node(&base),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const GRENADES_JSON: &str = r#"{
        "129":{"owner":"76561198000000001","position":"244.78, 2165.19, 171.59","velocity":"0.00, 0.00, 0.00","lifetime":"2.9","type":"smoke","effecttime":"1.2"},
        "130":{"owner":"76561198000000002","position":"0.00, 10.00, 20.00","velocity":"100.00, 0.00, -50.00","lifetime":"0.4","type":"flashbang","effecttime":"0.0"}
    }"#;

    #[test]
    fn parses_grenades_by_entity_id() {
        let grenades = GrenadesNode::from_raw(GRENADES_JSON);
        assert_eq!(grenades.count(), 2);
        let smoke = grenades.by_id("129");
        assert_eq!(smoke.grenade_type, GrenadeType::Smoke);
        assert_eq!(smoke.owner, 76_561_198_000_000_001);
        assert_eq!(smoke.lifetime, 2.9);
        assert_eq!(smoke.effect_time, 1.2);
        assert_eq!(smoke.position.y, 2165.19);
    }

    #[test]
    fn index_follows_document_order() {
        let grenades = GrenadesNode::from_raw(GRENADES_JSON);
        assert_eq!(grenades.by_index(0).grenade_type, GrenadeType::Smoke);
        assert_eq!(grenades.by_index(1).grenade_type, GrenadeType::Flash);
        assert_eq!(grenades.by_index(1).velocity.x, 100.0);
    }

    #[test]
    fn misses_yield_empty_defaults() {
        let grenades = GrenadesNode::from_raw(GRENADES_JSON);
        assert!(grenades.by_id("999").is_empty());
        assert!(grenades.by_index(2).is_empty());
        assert_eq!(grenades.by_id("999").owner, 0);
    }
}
