//! The root snapshot: one complete game state per received payload.
//!
//! [`GameState`] wraps the parsed top-level document and defers all section
//! construction until first access. A given update usually touches only one
//! or two sections, so materializing the whole tree eagerly would be wasted
//! work; instead each accessor populates a per-section `OnceLock` on first
//! use and returns the cached child thereafter, which also makes repeated
//! accesses referentially stable within one snapshot's lifetime.
//!
//! Two sections are snapshots themselves: `previously` holds the old values
//! of whatever changed since the last update and `added` holds values that
//! were not present before. Both are full [`GameState`] instances built
//! from the corresponding sub-document, recursively and without any
//! assumed depth bound (real feeds nest one level, the model does not care).

use std::sync::OnceLock;

use tracing::trace;

use crate::error::ParseError;
use crate::nodes::{
    AllPlayersNode, AuthNode, BombNode, GrenadesNode, MapNode, PhaseCountdownsNode, PlayerNode,
    ProviderNode, RoundNode,
};
use crate::raw::{FeedNode, RawNode};

/// One complete, immutable game state snapshot.
///
/// Constructed once from a payload, never mutated. Section accessors
/// materialize lazily and are safe to race: the per-section cells
/// serialize first population, and cached reads are plain shared reads of
/// immutable data.
#[derive(Debug)]
pub struct GameState {
    base: RawNode,
    provider: OnceLock<ProviderNode>,
    map: OnceLock<MapNode>,
    round: OnceLock<RoundNode>,
    grenades: OnceLock<GrenadesNode>,
    player: OnceLock<PlayerNode>,
    all_players: OnceLock<AllPlayersNode>,
    bomb: OnceLock<BombNode>,
    phase_countdowns: OnceLock<PhaseCountdownsNode>,
    auth: OnceLock<AuthNode>,
    previously: OnceLock<Box<GameState>>,
    added: OnceLock<Box<GameState>>,
}

impl GameState {
    /// Construct a snapshot from one feed payload.
    ///
    /// This is the model's only fallible entry point: the payload must be
    /// valid JSON or the empty string (treated as `{}`). Malformation
    /// anywhere below the top level is recovered per section instead of
    /// failing the snapshot.
    pub fn new(raw: &str) -> Result<Self, ParseError> {
        Ok(Self::from_base(RawNode::parse(raw)?))
    }

    fn from_base(base: RawNode) -> Self {
        Self {
            base,
            provider: OnceLock::new(),
            map: OnceLock::new(),
            round: OnceLock::new(),
            grenades: OnceLock::new(),
            player: OnceLock::new(),
            all_players: OnceLock::new(),
            bomb: OnceLock::new(),
            phase_countdowns: OnceLock::new(),
            auth: OnceLock::new(),
            previously: OnceLock::new(),
            added: OnceLock::new(),
        }
    }

    /// The verbatim payload text this snapshot was built from.
    pub fn raw_json(&self) -> &str {
        self.base.raw()
    }

    /// Materialize a section on first access; cached thereafter.
    fn section<'a, T: FeedNode>(&'a self, cell: &'a OnceLock<T>, key: &str) -> &'a T {
        cell.get_or_init(|| {
            trace!(section = key, "materializing section");
            T::from_raw(&self.base.child_raw(key))
        })
    }

    /// Who is sending the feed: game client and Steam user.
    pub fn provider(&self) -> &ProviderNode {
        self.section(&self.provider, "provider")
    }

    /// Current map and match state (score, phase, timeouts).
    pub fn map(&self) -> &MapNode {
        self.section(&self.map, "map")
    }

    /// State of the current round (phase, bomb, winner).
    pub fn round(&self) -> &RoundNode {
        self.section(&self.round, "round")
    }

    /// Grenades currently in flight or in effect. Spectator-only.
    pub fn grenades(&self) -> &GrenadesNode {
        self.section(&self.grenades, "grenades")
    }

    /// The current POV player. Changes with the camera while spectating.
    pub fn player(&self) -> &PlayerNode {
        self.section(&self.player, "player")
    }

    /// Every player in the match, keyed by steamid. Only present when
    /// spectating with access to all POVs.
    pub fn all_players(&self) -> &AllPlayersNode {
        self.section(&self.all_players, "allplayers")
    }

    /// The bomb's state, position, and countdown. Spectator-only.
    pub fn bomb(&self) -> &BombNode {
        self.section(&self.bomb, "bomb")
    }

    /// Whichever match clock is currently running.
    pub fn phase_countdowns(&self) -> &PhaseCountdownsNode {
        self.section(&self.phase_countdowns, "phase_countdowns")
    }

    /// The auth token configured for the feed.
    pub fn auth(&self) -> &AuthNode {
        self.section(&self.auth, "auth")
    }

    /// The old values of everything that changed since the previous
    /// update, as a full snapshot of its own.
    pub fn previously(&self) -> &Self {
        self.previously
            .get_or_init(|| Box::new(Self::from_raw(&self.base.child_raw("previously"))))
    }

    /// The values newly present in this update that the previous one
    /// lacked, as a full snapshot of its own.
    pub fn added(&self) -> &Self {
        self.added
            .get_or_init(|| Box::new(Self::from_raw(&self.base.child_raw("added"))))
    }
}

impl FeedNode for GameState {
    /// Lenient construction used for the recursive `previously` / `added`
    /// sections: malformed sub-documents degrade to the empty snapshot.
    fn from_raw(raw: &str) -> Self {
        Self::from_base(RawNode::lenient(raw))
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gsi_types::{RoundPhase, Team};

    #[test]
    fn sections_are_cached_and_reference_stable() {
        let state = GameState::new(r#"{"round":{"phase":"live"}}"#).unwrap();
        assert!(std::ptr::eq(state.round(), state.round()));
        assert!(std::ptr::eq(state.map(), state.map()));
        assert!(std::ptr::eq(state.previously(), state.previously()));
    }

    #[test]
    fn absent_sections_are_empty_defaults() {
        let state = GameState::new(r#"{"player":{"name":"bot","team":"CT"}}"#).unwrap();
        assert_eq!(state.player().name, "bot");
        assert_eq!(state.player().team, Team::CT);
        assert!(state.map().is_empty());
        assert!(state.bomb().is_empty());
        assert!(state.auth().is_empty());
    }

    #[test]
    fn malformed_section_does_not_poison_siblings() {
        // "round" is a bare string here; it degrades to the empty default
        // while "player" still parses.
        let state =
            GameState::new(r#"{"round":"garbage","player":{"name":"bot"}}"#).unwrap();
        assert!(state.round().is_empty());
        assert_eq!(state.round().phase, RoundPhase::Undefined);
        assert_eq!(state.player().name, "bot");
    }

    #[test]
    fn previously_is_a_full_snapshot() {
        let state = GameState::new(
            r#"{"round":{"phase":"over"},"previously":{"round":{"phase":"live"}}}"#,
        )
        .unwrap();
        assert_eq!(state.round().phase, RoundPhase::Over);
        assert_eq!(state.previously().round().phase, RoundPhase::Live);
        assert!(state.previously().added().is_empty());
    }

    #[test]
    fn nesting_depth_is_not_bounded() {
        let state = GameState::new(
            r#"{"previously":{"round":{"phase":"over"},"previously":{"round":{"phase":"live"}}}}"#,
        )
        .unwrap();
        assert_eq!(state.previously().previously().round().phase, RoundPhase::Live);
        assert!(state.previously().previously().previously().is_empty());
    }

    #[test]
    fn top_level_malformation_is_fatal() {
        assert!(GameState::new("{not json").is_err());
        assert!(GameState::new("[1,").is_err());
    }

    #[test]
    fn empty_input_is_the_empty_snapshot() {
        let state = GameState::new("").unwrap();
        assert!(state.is_empty());
        assert!(state.provider().is_empty());
        assert!(state.previously().is_empty());
    }
}
