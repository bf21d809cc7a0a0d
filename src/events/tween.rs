//! Tween completion events.
//!
//! When a tween reaches the end of its duration,
//! [`advance_tweens_system`](crate::systems::tween::advance_tweens_system)
//! triggers a [`TweenCompletedEvent`]. It fires exactly once per tween, after
//! the target property has been set to its end value and the tween removed
//! from the scheduler.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<TweenCompletedEvent>| {
//!     match trigger.event().signal.as_deref() {
//!         Some("spin_complete") => { /* all reels stopped */ }
//!         _ => {}
//!     }
//! });
//! ```

use bevy_ecs::prelude::*;

use crate::components::tween::TweenId;

/// Event emitted when a tween finishes.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TweenCompletedEvent {
    pub tween: TweenId,
    /// The entity the tween animated.
    pub target: Entity,
    /// The completion signal given when the tween was scheduled.
    pub signal: Option<String>,
}
