//! Enumeration types for every state the game feed reports.
//!
//! Each enumeration carries a designated `Undefined` member and a total
//! [`from_feed`](Team::from_feed) constructor: feed text that does not match
//! the known vocabulary (including the empty string for an absent key)
//! resolves to `Undefined`. Matching is ASCII case-insensitive because the
//! feed is inconsistent about casing across sections (`"CT"` for teams,
//! `"live"` for phases, `"Submachine Gun"` for weapon categories).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// The side a player or round winner belongs to.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Team {
    /// Counter-terrorist side.
    CT,
    /// Terrorist side.
    T,
    /// Absent or unrecognized team value.
    #[default]
    Undefined,
}

impl Team {
    /// Parse a feed value, falling back to [`Team::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "ct" => Self::CT,
            "t" => Self::T,
            _ => Self::Undefined,
        }
    }
}

// ---------------------------------------------------------------------------
// Round
// ---------------------------------------------------------------------------

/// The phase the current round is in.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RoundPhase {
    /// The round is being played out.
    Live,
    /// The round has been decided.
    Over,
    /// Buy-time freeze before the round starts.
    FreezeTime,
    /// Absent or unrecognized round phase.
    #[default]
    Undefined,
}

impl RoundPhase {
    /// Parse a feed value, falling back to [`RoundPhase::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "live" => Self::Live,
            "over" => Self::Over,
            "freezetime" => Self::FreezeTime,
            _ => Self::Undefined,
        }
    }
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

/// The phase the overall match is in.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MapPhase {
    /// Pre-match warmup.
    Warmup,
    /// The match is in progress.
    Live,
    /// Half-time or timeout intermission.
    Intermission,
    /// The match has concluded.
    GameOver,
    /// Absent or unrecognized map phase.
    #[default]
    Undefined,
}

impl MapPhase {
    /// Parse a feed value, falling back to [`MapPhase::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "warmup" => Self::Warmup,
            "live" => Self::Live,
            "intermission" => Self::Intermission,
            "gameover" => Self::GameOver,
            _ => Self::Undefined,
        }
    }
}

/// The game mode the current map is being played under.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MapMode {
    /// Casual matchmaking.
    Casual,
    /// Competitive matchmaking.
    Competitive,
    /// Wingman 2v2 competitive.
    ScrimComp2v2,
    /// 5v5 scrim.
    ScrimComp5v5,
    /// Deathmatch.
    DeathMatch,
    /// Arms race.
    GunGameProgressive,
    /// Demolition.
    GunGameTrBomb,
    /// Co-op strike mission.
    CoopMission,
    /// Custom server mode.
    Custom,
    /// Danger zone survival.
    Survival,
    /// Absent or unrecognized game mode.
    #[default]
    Undefined,
}

impl MapMode {
    /// Parse a feed value, falling back to [`MapMode::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "casual" => Self::Casual,
            "competitive" => Self::Competitive,
            "scrimcomp2v2" => Self::ScrimComp2v2,
            "scrimcomp5v5" => Self::ScrimComp5v5,
            "deathmatch" => Self::DeathMatch,
            "gungameprogressive" => Self::GunGameProgressive,
            "gungametrbomb" => Self::GunGameTrBomb,
            "coopmission" => Self::CoopMission,
            "custom" => Self::Custom,
            "survival" => Self::Survival,
            _ => Self::Undefined,
        }
    }
}

// ---------------------------------------------------------------------------
// Phase countdowns
// ---------------------------------------------------------------------------

/// The timed phase reported by the `phase_countdowns` section.
///
/// Unlike [`RoundPhase`] this vocabulary includes pauses, timeouts, and the
/// bomb/defuse timers, because the section tracks whichever clock is
/// currently running rather than the round state machine.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PhaseCountdown {
    /// The round clock is running.
    Live,
    /// Post-round time before the next round.
    Over,
    /// Buy-time freeze.
    FreezeTime,
    /// The bomb timer is running.
    Bomb,
    /// The defuse timer is running.
    Defuse,
    /// The match is paused.
    Paused,
    /// Counter-terrorist tactical timeout.
    TimeoutCt,
    /// Terrorist tactical timeout.
    TimeoutT,
    /// Pre-match warmup clock.
    Warmup,
    /// Absent or unrecognized countdown phase.
    #[default]
    Undefined,
}

impl PhaseCountdown {
    /// Parse a feed value, falling back to [`PhaseCountdown::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "live" => Self::Live,
            "over" => Self::Over,
            "freezetime" => Self::FreezeTime,
            "bomb" => Self::Bomb,
            "defuse" => Self::Defuse,
            "paused" => Self::Paused,
            "timeout_ct" => Self::TimeoutCt,
            "timeout_t" => Self::TimeoutT,
            "warmup" => Self::Warmup,
            _ => Self::Undefined,
        }
    }
}

// ---------------------------------------------------------------------------
// Bomb
// ---------------------------------------------------------------------------

/// The bomb's lifecycle state.
///
/// Reported both by the dedicated `bomb` section (full vocabulary) and by
/// the `round` section's `bomb` key (`planted`/`defused`/`exploded` only).
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BombState {
    /// A player is carrying the bomb.
    Carried,
    /// The bomb is on the ground.
    Dropped,
    /// A player is planting the bomb.
    Planting,
    /// The bomb has been planted and is ticking.
    Planted,
    /// A player is defusing the planted bomb.
    Defusing,
    /// The bomb has been defused.
    Defused,
    /// The bomb has detonated.
    Exploded,
    /// Absent or unrecognized bomb state.
    #[default]
    Undefined,
}

impl BombState {
    /// Parse a feed value, falling back to [`BombState::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "carried" => Self::Carried,
            "dropped" => Self::Dropped,
            "planting" => Self::Planting,
            "planted" => Self::Planted,
            "defusing" => Self::Defusing,
            "defused" => Self::Defused,
            "exploded" => Self::Exploded,
            _ => Self::Undefined,
        }
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// What the observed player is currently doing.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PlayerActivity {
    /// In a menu screen.
    Menu,
    /// Playing or spectating.
    Playing,
    /// Typing in chat or console.
    TextInput,
    /// Absent or unrecognized activity.
    #[default]
    Undefined,
}

impl PlayerActivity {
    /// Parse a feed value, falling back to [`PlayerActivity::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "menu" => Self::Menu,
            "playing" => Self::Playing,
            "textinput" => Self::TextInput,
            _ => Self::Undefined,
        }
    }
}

// ---------------------------------------------------------------------------
// Weapons
// ---------------------------------------------------------------------------

/// Whether a carried weapon is drawn, stowed, or mid-reload.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WeaponState {
    /// Currently drawn.
    Active,
    /// Carried but stowed.
    Holstered,
    /// Drawn and reloading.
    Reloading,
    /// Absent or unrecognized weapon state.
    #[default]
    Undefined,
}

impl WeaponState {
    /// Parse a feed value, falling back to [`WeaponState::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "holstered" => Self::Holstered,
            "reloading" => Self::Reloading,
            _ => Self::Undefined,
        }
    }
}

/// The category of a carried weapon or piece of equipment.
///
/// The feed reports these with spaces and mixed case (`"Submachine Gun"`,
/// `"SniperRifle"`); parsing normalizes casing but keeps spaces significant.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WeaponType {
    /// Sidearm.
    Pistol,
    /// Assault rifle.
    Rifle,
    /// Submachine gun.
    SubmachineGun,
    /// Machine gun.
    MachineGun,
    /// Shotgun.
    Shotgun,
    /// Bolt-action or semi-automatic sniper rifle.
    SniperRifle,
    /// Knife.
    Knife,
    /// Bare fists.
    Fists,
    /// Generic melee weapon.
    Melee,
    /// Thrown grenade.
    Grenade,
    /// The C4 explosive.
    C4,
    /// Breach charge.
    BreachCharge,
    /// Tablet.
    Tablet,
    /// Stackable utility item (e.g. medi-shot).
    StackableItem,
    /// Absent or unrecognized weapon category.
    #[default]
    Undefined,
}

impl WeaponType {
    /// Parse a feed value, falling back to [`WeaponType::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "pistol" => Self::Pistol,
            "rifle" => Self::Rifle,
            "submachine gun" => Self::SubmachineGun,
            "machine gun" => Self::MachineGun,
            "shotgun" => Self::Shotgun,
            "sniperrifle" => Self::SniperRifle,
            "knife" => Self::Knife,
            "fists" => Self::Fists,
            "melee" => Self::Melee,
            "grenade" => Self::Grenade,
            "c4" => Self::C4,
            "breach charge" => Self::BreachCharge,
            "tablet" => Self::Tablet,
            "stackableitem" => Self::StackableItem,
            _ => Self::Undefined,
        }
    }
}

// ---------------------------------------------------------------------------
// Grenades
// ---------------------------------------------------------------------------

/// The kind of a grenade currently in flight or in effect.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GrenadeType {
    /// Decoy grenade.
    Decoy,
    /// Smoke grenade.
    Smoke,
    /// Flashbang.
    Flash,
    /// High-explosive grenade.
    Frag,
    /// Molotov or incendiary in flight.
    Firebomb,
    /// Burning area left by a firebomb.
    Inferno,
    /// Absent or unrecognized grenade kind.
    #[default]
    Undefined,
}

impl GrenadeType {
    /// Parse a feed value, falling back to [`GrenadeType::Undefined`].
    pub fn from_feed(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "decoy" => Self::Decoy,
            "smoke" => Self::Smoke,
            "flashbang" => Self::Flash,
            "frag" => Self::Frag,
            "firebomb" => Self::Firebomb,
            "inferno" => Self::Inferno,
            _ => Self::Undefined,
        }
    }
}
