//! Tween animation system.
//!
//! [`advance_tweens_system`] advances every tween held by the
//! [`AnimationScheduler`](crate::resources::animationscheduler::AnimationScheduler),
//! writes the interpolated value into the target [`Reel`], and triggers a
//! [`TweenCompletedEvent`] for each tween that finished this frame.
//!
//! The easing math lives here too: [`ease`], [`backout`] and [`lerp_f32`].

use crate::components::reel::Reel;
use crate::components::tween::{Easing, TweenProperty};
use crate::events::tween::TweenCompletedEvent;
use crate::resources::animationscheduler::AnimationScheduler;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::{debug, warn};

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0]. The output is not: back-out
/// overshoots past 1.0 before settling.
pub fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::BackOut(amount) => backout(amount)(t),
    }
}

/// Back-out curve: `(t-1)^2 * ((amount+1)*(t-1) + amount) + 1`.
///
/// Rises past 1.0 and settles back to exactly 1.0 at `t = 1`.
pub fn backout(amount: f32) -> impl Fn(f32) -> f32 {
    move |t| {
        let p = t - 1.0;
        p * p * ((amount + 1.0) * p + amount) + 1.0
    }
}

/// Linearly interpolate between two floats.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance all scheduled tweens and apply them to their reels.
///
/// Finished tweens have already been written with their exact end value and
/// removed from the scheduler when their completion event is triggered.
pub fn advance_tweens_system(
    world_time: Res<WorldTime>,
    mut scheduler: ResMut<AnimationScheduler>,
    mut reels: Query<&mut Reel>,
    mut commands: Commands,
) {
    if scheduler.is_empty() {
        return;
    }
    for step in scheduler.advance_all(world_time.elapsed) {
        match reels.get_mut(step.target) {
            Ok(mut reel) => match step.property {
                TweenProperty::Position => reel.position = step.value,
            },
            Err(_) => warn!("Tween {:?} targets missing reel {:?}", step.tween, step.target),
        }
        if step.finished {
            debug!("Tween {:?} finished at {}", step.tween, step.value);
            commands.trigger(TweenCompletedEvent {
                tween: step.tween,
                target: step.target,
                signal: step.signal,
            });
        }
    }
}
