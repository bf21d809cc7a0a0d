//! Spin state machine resource.
//!
//! The machine is either [`SpinState::Idle`] or [`SpinState::Spinning`].
//! Transitions are computed by the pure [`SpinState::next`] function; the
//! [`SpinMachine`] resource stores the current state plus the outcome the
//! reels are revealing.
//!
//! ```text
//! Idle --Press--> Spinning --ReelStopped--> Spinning --LastReelStopped--> Idle
//!                    ^  |
//!                    +--+ Press (ignored)
//! ```

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning {
        /// Index into the outcome table.
        outcome: usize,
        /// Reels whose tween has not completed yet.
        reels_remaining: usize,
    },
}

/// Inputs that drive [`SpinState`] transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinInput {
    /// The spin button was pressed and `outcome` was drawn.
    Press { outcome: usize, reels: usize },
    /// A reel other than the slowest one finished.
    ReelStopped,
    /// The slowest reel finished.
    LastReelStopped,
}

impl SpinState {
    /// Compute the state that follows `input`.
    pub fn next(self, input: SpinInput) -> SpinState {
        match (self, input) {
            (SpinState::Idle, SpinInput::Press { outcome, reels }) => SpinState::Spinning {
                outcome,
                reels_remaining: reels,
            },
            (spinning @ SpinState::Spinning { .. }, SpinInput::Press { .. }) => spinning,
            (
                SpinState::Spinning {
                    outcome,
                    reels_remaining,
                },
                SpinInput::ReelStopped,
            ) => SpinState::Spinning {
                outcome,
                reels_remaining: reels_remaining.saturating_sub(1),
            },
            (SpinState::Spinning { .. }, SpinInput::LastReelStopped) => SpinState::Idle,
            (SpinState::Idle, _) => SpinState::Idle,
        }
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self, SpinState::Spinning { .. })
    }
}

/// Current spin state and the outcome the reels display.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpinMachine {
    state: SpinState,
    displayed: Option<usize>,
}

impl SpinMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    /// Outcome the reels swap towards.
    ///
    /// Set by the first spin and kept after it settles, so late wraparounds
    /// still resolve to the same grid.
    pub fn displayed_outcome(&self) -> Option<usize> {
        self.displayed
    }

    /// Apply `input` and return the previous state.
    pub fn apply(&mut self, input: SpinInput) -> SpinState {
        let previous = self.state;
        self.state = previous.next(input);
        if let SpinState::Spinning { outcome, .. } = self.state {
            self.displayed = Some(outcome);
        }
        previous
    }
}
