//! Shared type definitions for the GSI state model.
//!
//! This crate is the single source of truth for the closed vocabularies the
//! game state feed reports: team sides, round and map phases, weapon, bomb
//! and grenade states, and the spatial triple the feed encodes as an
//! `"x, y, z"` string.
//!
//! Every conversion from feed text is total: unrecognized or absent values
//! map to the designated `Undefined` (or zeroed) member, never to an error.
//! The feed is best-effort and routinely omits or abbreviates values
//! depending on game mode and spectator permissions, so fallibility here
//! would push error handling onto every call site for a routine condition.
//!
//! # Modules
//!
//! - [`enums`] -- Enumeration types for every feed-reported state
//! - [`vector`] -- The `"x, y, z"` spatial triple

pub mod enums;
pub mod vector;

// Re-export all public types at crate root for convenience.
pub use enums::{
    BombState, GrenadeType, MapMode, MapPhase, PhaseCountdown, PlayerActivity, RoundPhase, Team,
    WeaponState, WeaponType,
};
pub use vector::Vector3;
