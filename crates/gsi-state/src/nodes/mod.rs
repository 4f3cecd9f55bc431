//! Typed nodes for each named section of the feed payload.
//!
//! Every node here implements [`FeedNode`](crate::FeedNode): construction
//! is total, scalar fields are extracted eagerly through the total getters
//! on [`RawNode`](crate::RawNode), and absent data yields the empty-default
//! instance. Collection-valued sections (`weapons`, `grenades`,
//! `allplayers`) eagerly build one child per entry in document order.

pub mod all_players;
pub mod auth;
pub mod bomb;
pub mod grenade;
pub mod map;
pub mod phase_countdowns;
pub mod player;
pub mod provider;
pub mod round;
pub mod weapon;

pub use all_players::AllPlayersNode;
pub use auth::AuthNode;
pub use bomb::BombNode;
pub use grenade::{GrenadeNode, GrenadesNode};
pub use map::{MapNode, MapTeamNode};
pub use phase_countdowns::PhaseCountdownsNode;
pub use player::{MatchStatsNode, PlayerNode, PlayerStateNode};
pub use provider::ProviderNode;
pub use round::RoundNode;
pub use weapon::{WeaponNode, WeaponsNode};
