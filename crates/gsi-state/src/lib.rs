//! Read-only, lazily-materialized object model over the game state
//! integration feed.
//!
//! The game posts one JSON payload per update. This crate turns that text
//! into an immutable, queryable object graph: [`GameState::new`] parses the
//! payload once, and every named section (`provider`, `map`, `round`,
//! `player`, ...) materializes as a typed node on first access. Two
//! sections are snapshots themselves -- `previously` (old values of what
//! changed) and `added` (what is newly present) -- giving the model its
//! recursive diff shape.
//!
//! Error handling is two-tier: only the outermost payload can fail
//! ([`ParseError`]); everything beneath it is total. Absent sections,
//! missing keys, and malformed sub-fragments all degrade to well-defined
//! empty defaults, because the feed routinely omits data depending on game
//! mode and spectator permissions.
//!
//! ```
//! use gsi_state::{FeedNode, GameState};
//!
//! let state = GameState::new(r#"{"player":{"name":"bot","team":"CT"}}"#)?;
//! assert_eq!(state.player().name, "bot");
//! assert!(state.map().is_empty());
//! # Ok::<(), gsi_state::ParseError>(())
//! ```
//!
//! # Modules
//!
//! - [`raw`] -- The raw fragment substrate and total conversions
//! - [`collection`] -- Ordered keyed collections with permissive access
//! - [`nodes`] -- One typed node per named feed section
//! - [`snapshot`] -- The recursive root snapshot
//! - [`error`] -- The single fatal error type

pub mod collection;
pub mod error;
pub mod nodes;
pub mod raw;
pub mod snapshot;

// Re-export the public surface at crate root for convenience.
pub use collection::Collection;
pub use error::ParseError;
pub use nodes::{
    AllPlayersNode, AuthNode, BombNode, GrenadeNode, GrenadesNode, MapNode, MapTeamNode,
    MatchStatsNode, PhaseCountdownsNode, PlayerNode, PlayerStateNode, ProviderNode, RoundNode,
    WeaponNode, WeaponsNode,
};
pub use raw::{EMPTY_FRAGMENT, FeedNode, RawNode};
pub use snapshot::GameState;
