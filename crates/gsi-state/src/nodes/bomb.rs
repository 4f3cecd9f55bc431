//! The `bomb` section: live bomb state, position, and countdown.
//!
//! Only present for spectators with full observer access.

use gsi_types::{BombState, Vector3};

use crate::raw::{FeedNode, RawNode};

/// The state of the bomb itself.
#[derive(Debug, Clone)]
pub struct BombNode {
    base: RawNode,
    /// Lifecycle state of the bomb.
    pub state: BombState,
    /// World position of the bomb.
    pub position: Vector3,
    /// Steamid of the player carrying, planting, or defusing the bomb;
    /// `0` when the bomb is on the ground.
    pub player: u64,
    /// Seconds remaining on the current timer (detonation or defuse).
    /// The feed sends this as a numeric string.
    pub countdown: f64,
}

impl FeedNode for BombNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            state: BombState::from_feed(&base.text("state")),
            position: Vector3::from_feed(&base.text("position")),
            player: base.uint64("player"),
            countdown: base.float("countdown"),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}
