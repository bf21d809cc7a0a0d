//! Tween records for animated interpolation.
//!
//! A [`Tween`] drives one numeric property of a reel entity from a start
//! value to an end value over a fixed duration. Tweens are not attached to
//! entities; they live in the
//! [`AnimationScheduler`](crate::resources::animationscheduler::AnimationScheduler)
//! resource and point at their target by [`Entity`].
//!
//! See [`crate::systems::tween`] for the easing math and the update system.

use bevy_ecs::prelude::Entity;

/// Easing curve applied to a tween's normalized progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Fast start that overshoots the end by an amount and settles back.
    ///
    /// Output exceeds 1.0 for part of the curve.
    BackOut(f32),
}

/// The property of the target a tween writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    /// [`Reel::position`](crate::components::reel::Reel::position).
    Position,
}

/// Opaque identifier handed out by the scheduler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u64);

/// A scheduled, time-bounded interpolation of one property.
#[derive(Clone, Debug)]
pub struct Tween {
    pub id: TweenId,
    /// Entity whose property is animated.
    pub target: Entity,
    pub property: TweenProperty,
    /// Property value when the tween was scheduled.
    pub start_value: f32,
    pub end_value: f32,
    /// Duration in milliseconds. Zero completes on the first advance.
    pub duration_ms: u32,
    pub easing: Easing,
    /// World time in seconds when the tween was scheduled.
    pub start: f64,
    /// Signal carried by the completion event, if any.
    pub on_complete: Option<String>,
}

impl Tween {
    /// Normalized progress at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed_ms = (now - self.start) * 1000.0;
        (elapsed_ms / f64::from(self.duration_ms)).clamp(0.0, 1.0) as f32
    }
}
