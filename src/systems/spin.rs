//! Spin trigger observers.
//!
//! - [`spin_request_observer`] – starts a spin when the machine is idle
//! - [`tween_completed_observer`] – counts reels down and settles the spin
//!
//! # Spin Flow
//!
//! 1. A [`SpinRequestedEvent`] arrives; if the machine is spinning it is dropped
//! 2. An outcome is drawn uniformly from the [`OutcomeTable`]
//! 3. Each reel gets a back-out tween of `spin_distance()` steps; reel `i` runs
//!    `base_duration_ms + i * stagger_ms`
//! 4. Every reel but the last completes with [`REEL_STOPPED_SIGNAL`]
//! 5. The last reel completes with [`SPIN_COMPLETE_SIGNAL`]: the machine
//!    returns to idle, the [`WinCounter`] is updated and a
//!    [`SpinSettledEvent`] is triggered

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::reel::Reel;
use crate::components::tween::{Easing, TweenProperty};
use crate::events::spin::{SpinRequestedEvent, SpinSettledEvent};
use crate::events::tween::TweenCompletedEvent;
use crate::resources::animationscheduler::AnimationScheduler;
use crate::resources::gameconfig::MachineConfig;
use crate::resources::outcometable::OutcomeTable;
use crate::resources::spinmachine::{SpinInput, SpinMachine, SpinState};
use crate::resources::spinrng::SpinRng;
use crate::resources::wincounter::WinCounter;
use crate::resources::worldtime::WorldTime;

/// Completion signal of every reel tween except the slowest.
pub const REEL_STOPPED_SIGNAL: &str = "reel_stopped";
/// Completion signal of the slowest reel tween.
pub const SPIN_COMPLETE_SIGNAL: &str = "spin_complete";

/// Start a spin unless one is already running.
#[allow(clippy::too_many_arguments)]
pub fn spin_request_observer(
    trigger: On<SpinRequestedEvent>,
    world_time: Res<WorldTime>,
    config: Res<MachineConfig>,
    table: Res<OutcomeTable>,
    mut rng: ResMut<SpinRng>,
    mut machine: ResMut<SpinMachine>,
    mut scheduler: ResMut<AnimationScheduler>,
    reels: Query<(Entity, &Reel)>,
) {
    if machine.is_spinning() {
        debug!("Spin requested while spinning; ignored");
        return;
    }
    if table.is_empty() {
        warn!("Spin requested with an empty outcome table; ignored");
        return;
    }
    let outcome = match trigger.event().forced_outcome {
        Some(index) if index < table.len() => index,
        Some(index) => {
            warn!(
                "Forced outcome {} out of range (table has {}); ignored",
                index,
                table.len()
            );
            return;
        }
        None => rng.pick_outcome(table.len()),
    };

    let mut ordered: Vec<(Entity, usize, f32)> = reels
        .iter()
        .map(|(entity, reel)| (entity, reel.index, reel.position))
        .collect();
    if ordered.is_empty() {
        warn!("Spin requested with no reels spawned; ignored");
        return;
    }
    ordered.sort_by_key(|&(_, index, _)| index);

    let last = ordered.len() - 1;
    for (i, &(entity, index, position)) in ordered.iter().enumerate() {
        let signal = if i == last {
            SPIN_COMPLETE_SIGNAL
        } else {
            REEL_STOPPED_SIGNAL
        };
        scheduler.schedule(
            entity,
            TweenProperty::Position,
            position,
            position + config.spin_distance(),
            config.reel_duration_ms(index),
            Easing::BackOut(config.backout),
            world_time.elapsed,
            Some(signal.to_string()),
        );
    }

    machine.apply(SpinInput::Press {
        outcome,
        reels: ordered.len(),
    });
    info!("Spin started: outcome {} across {} reels", outcome, ordered.len());
}

/// Drive the spin machine from reel tween completions.
pub fn tween_completed_observer(
    trigger: On<TweenCompletedEvent>,
    table: Res<OutcomeTable>,
    mut machine: ResMut<SpinMachine>,
    mut counter: ResMut<WinCounter>,
    mut commands: Commands,
) {
    match trigger.event().signal.as_deref() {
        Some(REEL_STOPPED_SIGNAL) => {
            machine.apply(SpinInput::ReelStopped);
            debug!("Reel {:?} stopped", trigger.event().target);
        }
        Some(SPIN_COMPLETE_SIGNAL) => {
            if let SpinState::Spinning { outcome, .. } = machine.apply(SpinInput::LastReelStopped)
            {
                let win = table.get(outcome).map(|r| r.win).unwrap_or(0);
                counter.record(win);
                info!(
                    "Spin settled on outcome {} (win {}, total {})",
                    outcome, win, counter.total_win
                );
                commands.trigger(SpinSettledEvent { outcome, win });
            }
        }
        _ => {}
    }
}
