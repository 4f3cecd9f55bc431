//! The `player` section: the current point-of-view player.
//!
//! During spectating this is whichever player the camera follows, so its
//! contents change frequently without any player actually changing state.

use gsi_types::{PlayerActivity, Team, Vector3};

use crate::raw::{FeedNode, RawNode};

use super::weapon::WeaponsNode;

/// The player's vital and economic state for the current round.
#[derive(Debug, Clone)]
pub struct PlayerStateNode {
    base: RawNode,
    /// Health points, 0-100.
    pub health: i32,
    /// Armor points, 0-100.
    pub armor: i32,
    /// Whether the player has a helmet.
    pub helmet: bool,
    /// Flash blindness intensity, 0-255.
    pub flashed: i32,
    /// Smoke occlusion intensity, 0-255.
    pub smoked: i32,
    /// Burn intensity, 0-255.
    pub burning: i32,
    /// Money available.
    pub money: i32,
    /// Kills this round.
    pub round_kills: i32,
    /// Headshot kills this round.
    pub round_kill_hs: i32,
    /// Damage dealt this round.
    pub round_total_damage: i32,
    /// Total value of carried equipment.
    pub equip_value: i32,
    /// Whether the player carries a defuse kit.
    pub defuse_kit: bool,
}

impl FeedNode for PlayerStateNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            health: base.int("health"),
            armor: base.int("armor"),
            helmet: base.boolean("helmet"),
            flashed: base.int("flashed"),
            smoked: base.int("smoked"),
            burning: base.int("burning"),
            money: base.int("money"),
            round_kills: base.int("round_kills"),
            round_kill_hs: base.int("round_killhs"),
            round_total_damage: base.int("round_totaldmg"),
            equip_value: base.int("equip_value"),
            defuse_kit: base.boolean("defusekit"),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}

/// The player's whole-match scoreboard line.
#[derive(Debug, Clone)]
pub struct MatchStatsNode {
    base: RawNode,
    /// Total kills.
    pub kills: i32,
    /// Total assists.
    pub assists: i32,
    /// Total deaths.
    pub deaths: i32,
    /// Rounds where the player was MVP.
    pub mvps: i32,
    /// Scoreboard score.
    pub score: i32,
}

impl FeedNode for MatchStatsNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            kills: base.int("kills"),
            assists: base.int("assists"),
            deaths: base.int("deaths"),
            mvps: base.int("mvps"),
            score: base.int("score"),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}

/// One player: identity, activity, vitals, scoreboard, and loadout.
#[derive(Debug, Clone)]
pub struct PlayerNode {
    base: RawNode,
    /// 64-bit steamid. For `allplayers` entries the per-player body omits
    /// this and the collection key supplies it instead.
    pub steam_id: String,
    /// Display name.
    pub name: String,
    /// Clan tag shown before the name.
    pub clan: String,
    /// Observer slot number (0-9) when spectated.
    pub observer_slot: i32,
    /// Side the player is on.
    pub team: Team,
    /// What the player is doing right now.
    pub activity: PlayerActivity,
    /// Vitals and economy for the current round.
    pub state: PlayerStateNode,
    /// Whole-match scoreboard line.
    pub match_stats: MatchStatsNode,
    /// Carried weapons, in document order.
    pub weapons: WeaponsNode,
    /// World position. Spectator-only.
    pub position: Vector3,
    /// Facing direction. Spectator-only.
    pub forward: Vector3,
    /// Steamid of the player being observed, when this client spectates.
    pub spec_target: String,
}

impl PlayerNode {
    /// Build a player from an `allplayers` entry, where the collection key
    /// carries the steamid the per-player body omits.
    pub fn from_entry(steam_id: &str, raw: &str) -> Self {
        let mut player = Self::from_raw(raw);
        if player.steam_id.is_empty() {
            player.steam_id = steam_id.to_owned();
        }
        player
    }
}

impl FeedNode for PlayerNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            steam_id: base.text("steamid"),
            name: base.text("name"),
            clan: base.text("clan"),
            observer_slot: base.int("observer_slot"),
            team: Team::from_feed(&base.text("team")),
            activity: PlayerActivity::from_feed(&base.text("activity")),
            state: PlayerStateNode::from_raw(&base.child_raw("state")),
            match_stats: MatchStatsNode::from_raw(&base.child_raw("match_stats")),
            weapons: WeaponsNode::from_raw(&base.child_raw("weapons")),
            position: Vector3::from_feed(&base.text("position")),
            forward: Vector3::from_feed(&base.text("forward")),
            spec_target: base.text("spectarget"),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}
