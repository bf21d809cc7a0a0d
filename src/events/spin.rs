//! Spin events.
//!
//! - [`SpinRequestedEvent`] – the spin button was pressed
//! - [`SpinSettledEvent`] – every reel stopped on the chosen outcome
//!
//! See [`crate::systems::spin`] for the observers that handle them.

use bevy_ecs::prelude::*;

/// Request to start a spin.
///
/// Ignored while a spin is already running. `forced_outcome` selects a
/// specific outcome table index instead of a random draw.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinRequestedEvent {
    pub forced_outcome: Option<usize>,
}

impl SpinRequestedEvent {
    pub fn random() -> Self {
        Self::default()
    }

    pub fn with_outcome(index: usize) -> Self {
        SpinRequestedEvent {
            forced_outcome: Some(index),
        }
    }
}

/// Emitted once the slowest reel stops and the machine is idle again.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinSettledEvent {
    /// Outcome table index the reels show.
    pub outcome: usize,
    pub win: u32,
}
