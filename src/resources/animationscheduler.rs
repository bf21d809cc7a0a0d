//! Animation scheduler resource.
//!
//! Owns the set of active [`Tween`]s. Systems schedule tweens here and
//! [`advance_tweens_system`](crate::systems::tween::advance_tweens_system)
//! advances them once per frame.
//!
//! The scheduler never touches components itself: [`AnimationScheduler::advance_all`]
//! returns one [`TweenStep`] per active tween and the caller applies it. That
//! keeps the interpolation logic testable without a running schedule.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::tween::{Easing, Tween, TweenId, TweenProperty};
use crate::systems::tween::{ease, lerp_f32};

/// The result of advancing one tween for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenStep {
    pub tween: TweenId,
    pub target: Entity,
    pub property: TweenProperty,
    /// New property value. Exactly `end_value` when `finished`.
    pub value: f32,
    pub finished: bool,
    /// Completion signal, only set when `finished`.
    pub signal: Option<String>,
}

/// Explicitly owned registry of active tweens.
#[derive(Resource, Debug, Default)]
pub struct AnimationScheduler {
    tweens: Vec<Tween>,
    next_id: u64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new tween and return its id.
    ///
    /// `start_value` must be the target's current property value and `now`
    /// the current world time in seconds.
    #[allow(clippy::too_many_arguments)]
    pub fn schedule(
        &mut self,
        target: Entity,
        property: TweenProperty,
        start_value: f32,
        end_value: f32,
        duration_ms: u32,
        easing: Easing,
        now: f64,
        on_complete: Option<String>,
    ) -> TweenId {
        self.next_id += 1;
        let id = TweenId(self.next_id);
        debug!(
            "Scheduling tween {:?} on {:?}: {} -> {} over {}ms",
            id, target, start_value, end_value, duration_ms
        );
        self.tweens.push(Tween {
            id,
            target,
            property,
            start_value,
            end_value,
            duration_ms,
            easing,
            start: now,
            on_complete,
        });
        id
    }

    /// Advance every active tween to `now`.
    ///
    /// Finished tweens are reported with their exact end value and then
    /// pruned after the scan, so the returned steps follow scheduling order.
    pub fn advance_all(&mut self, now: f64) -> Vec<TweenStep> {
        let mut steps = Vec::with_capacity(self.tweens.len());
        for tw in self.tweens.iter_mut() {
            let progress = tw.progress(now);
            if progress >= 1.0 {
                steps.push(TweenStep {
                    tween: tw.id,
                    target: tw.target,
                    property: tw.property,
                    value: tw.end_value,
                    finished: true,
                    signal: tw.on_complete.take(),
                });
            } else {
                steps.push(TweenStep {
                    tween: tw.id,
                    target: tw.target,
                    property: tw.property,
                    value: lerp_f32(tw.start_value, tw.end_value, ease(tw.easing, progress)),
                    finished: false,
                    signal: None,
                });
            }
        }
        self.tweens.retain(|tw| tw.progress(now) < 1.0);
        steps
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|tw| tw.id == id)
    }

    /// Active tweens targeting `target`.
    pub fn active_for(&self, target: Entity) -> impl Iterator<Item = &Tween> {
        self.tweens.iter().filter(move |tw| tw.target == target)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tween> {
        self.tweens.iter()
    }
}
