//! The `phase_countdowns` section: whichever match clock is running.

use gsi_types::PhaseCountdown;

use crate::raw::{FeedNode, RawNode};

/// The currently running phase clock and its remaining time.
#[derive(Debug, Clone)]
pub struct PhaseCountdownsNode {
    base: RawNode,
    /// Which clock is running.
    pub phase: PhaseCountdown,
    /// Seconds until the phase ends. The feed sends this as a numeric
    /// string.
    pub phase_ends_in: f64,
}

impl FeedNode for PhaseCountdownsNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            phase: PhaseCountdown::from_feed(&base.text("phase")),
            phase_ends_in: base.float("phase_ends_in"),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}
