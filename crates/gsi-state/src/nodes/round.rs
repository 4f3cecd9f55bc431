//! The `round` section: phase, bomb status, and winner of the current round.

use gsi_types::{BombState, RoundPhase, Team};

use crate::raw::{FeedNode, RawNode};

/// The state of the current round.
#[derive(Debug, Clone)]
pub struct RoundNode {
    base: RawNode,
    /// Phase the round is in.
    pub phase: RoundPhase,
    /// Bomb status within the round. The `round` section only ever reports
    /// `planted`, `defused`, or `exploded`; the richer vocabulary lives in
    /// the dedicated `bomb` section.
    pub bomb: BombState,
    /// Side that won the round, reported once the round is over.
    pub win_team: Team,
}

impl FeedNode for RoundNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            phase: RoundPhase::from_feed(&base.text("phase")),
            bomb: BombState::from_feed(&base.text("bomb")),
            win_team: Team::from_feed(&base.text("win_team")),
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
    fn parses_finished_round() {
        let round = RoundNode::from_raw(r#"{"phase":"over","bomb":"defused","win_team":"CT"}"#);
        assert_eq!(round.phase, RoundPhase::Over);
        assert_eq!(round.bomb, BombState::Defused);
        assert_eq!(round.win_team, Team::CT);
    }

    #[test]
    fn live_round_has_no_winner_yet() {
        let round = RoundNode::from_raw(r#"{"phase":"live"}"#);
        assert_eq!(round.phase, RoundPhase::Live);
        assert_eq!(round.bomb, BombState::Undefined);
        assert_eq!(round.win_team, Team::Undefined);
    }

    #[test]
    fn empty_fragment_is_all_undefined() {
        let round = RoundNode::empty();
        assert!(round.is_empty());
        assert_eq!(round.phase, RoundPhase::Undefined);
    }
}
