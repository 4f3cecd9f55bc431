//! The `map` section: current map, match phase, and per-team match stats.

use gsi_types::{MapMode, MapPhase};

use crate::raw::{FeedNode, RawNode};

/// Match statistics for one side, nested under the `map` section as
/// `team_ct` / `team_t`.
#[derive(Debug, Clone)]
pub struct MapTeamNode {
    base: RawNode,
    /// Team name, set in organized play; empty in matchmaking.
    pub name: String,
    /// Team flag code, set in organized play; empty in matchmaking.
    pub flag: String,
    /// Rounds won so far.
    pub score: i32,
    /// Consecutive rounds lost, drives loss-bonus money.
    pub consecutive_round_losses: i32,
    /// Tactical timeouts the team has left.
    pub timeouts_remaining: i32,
    /// Maps won in the current series.
    pub matches_won_this_series: i32,
}

impl FeedNode for MapTeamNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            name: base.text("name"),
            flag: base.text("flag"),
            score: base.int("score"),
            consecutive_round_losses: base.int("consecutive_round_losses"),
            timeouts_remaining: base.int("timeouts_remaining"),
            matches_won_this_series: base.int("matches_won_this_series"),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}

/// Information about the current map and match.
#[derive(Debug, Clone)]
pub struct MapNode {
    base: RawNode,
    /// Game mode the map is being played under.
    pub mode: MapMode,
    /// Map name, e.g. `de_dust2`.
    pub name: String,
    /// Phase of the overall match.
    pub phase: MapPhase,
    /// Current round number.
    pub round: i32,
    /// Counter-terrorist match stats.
    pub team_ct: MapTeamNode,
    /// Terrorist match stats.
    pub team_t: MapTeamNode,
    /// Maps needed to win the series.
    pub num_matches_to_win_series: i32,
    /// Number of connected spectators.
    pub current_spectators: i32,
    /// Souvenir packages dropped this match.
    pub souvenirs_total: i32,
}

impl FeedNode for MapNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            mode: MapMode::from_feed(&base.text("mode")),
            name: base.text("name"),
            phase: MapPhase::from_feed(&base.text("phase")),
            round: base.int("round"),
            team_ct: MapTeamNode::from_raw(&base.child_raw("team_ct")),
            team_t: MapTeamNode::from_raw(&base.child_raw("team_t")),
            num_matches_to_win_series: base.int("num_matches_to_win_series"),
            current_spectators: base.int("current_spectators"),
            souvenirs_total: base.int("souvenirs_total"),
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

    const MAP_JSON: &str = r#"{
        "mode":"competitive",
        "name":"de_inferno",
        "phase":"live",
        "round":12,
        "team_ct":{"score":7,"consecutive_round_losses":1,"timeouts_remaining":1,"matches_won_this_series":0},
        "team_t":{"score":4,"consecutive_round_losses":3,"timeouts_remaining":0,"matches_won_this_series":1},
        "num_matches_to_win_series":2,
        "current_spectators":3,
        "souvenirs_total":0
    }"#;

    #[test]
    fn parses_map_and_nested_teams() {
        let map = MapNode::from_raw(MAP_JSON);
        assert_eq!(map.mode, MapMode::Competitive);
        assert_eq!(map.name, "de_inferno");
        assert_eq!(map.phase, MapPhase::Live);
        assert_eq!(map.round, 12);
        assert_eq!(map.team_ct.score, 7);
        assert_eq!(map.team_ct.timeouts_remaining, 1);
        assert_eq!(map.team_t.score, 4);
        assert_eq!(map.team_t.consecutive_round_losses, 3);
        assert_eq!(map.num_matches_to_win_series, 2);
    }

    #[test]
    fn absent_teams_are_empty_defaults() {
        let map = MapNode::from_raw(r#"{"name":"de_nuke"}"#);
        assert!(!map.is_empty());
        assert!(map.team_ct.is_empty());
        assert!(map.team_t.is_empty());
        assert_eq!(map.team_ct.score, 0);
        assert_eq!(map.mode, MapMode::Undefined);
        assert_eq!(map.phase, MapPhase::Undefined);
    }
}
