//! World setup and the frame loop.
//!
//! [`build_world`] inserts the resources, spawns the reels and registers the
//! observers. [`build_update_schedule`] returns the per-frame schedule:
//! tweens advance first, then the reels are laid out. [`step`] runs one
//! frame and [`run_until_idle`] runs frames until the current spin settles.

use bevy_ecs::prelude::*;
use log::{debug, info};
use smallvec::SmallVec;

use crate::components::reel::{Reel, SLOT_COUNT, VISIBLE_ROWS};
use crate::components::symbol::Symbol;
use crate::resources::animationscheduler::AnimationScheduler;
use crate::resources::gameconfig::MachineConfig;
use crate::resources::outcometable::{OutcomeTable, REEL_COUNT};
use crate::resources::spinmachine::SpinMachine;
use crate::resources::spinrng::SpinRng;
use crate::resources::wincounter::WinCounter;
use crate::resources::worldtime::WorldTime;
use crate::systems::reel::reel_update_system;
use crate::systems::spin::{spin_request_observer, tween_completed_observer};
use crate::systems::time::update_world_time;
use crate::systems::tween::advance_tweens_system;

/// Symbols of one reel's visible window, top to bottom.
pub type Column = SmallVec<[Symbol; VISIBLE_ROWS]>;

/// Create a world with every resource, the reels and the spin observers.
pub fn build_world(config: MachineConfig, table: OutcomeTable, rng: SpinRng) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(config);
    world.insert_resource(table);
    world.insert_resource(rng);
    world.insert_resource(AnimationScheduler::new());
    world.insert_resource(SpinMachine::new());
    world.insert_resource(WinCounter::default());

    spawn_reels(&mut world, REEL_COUNT);

    world.add_observer(spin_request_observer);
    world.add_observer(tween_completed_observer);
    // Ensure the observers are registered before anything triggers events.
    world.flush();
    world
}

/// Spawn `count` reels filled with random symbols.
pub fn spawn_reels(world: &mut World, count: usize) {
    let layout = world.resource::<MachineConfig>().layout();
    for index in 0..count {
        let symbols: [Symbol; SLOT_COUNT] = {
            let mut rng = world.resource_mut::<SpinRng>();
            std::array::from_fn(|_| rng.random_symbol())
        };
        let entity = world.spawn(Reel::new(index, symbols, &layout)).id();
        debug!("Spawned reel {} as {:?}: {:?}", index, entity, symbols);
    }
}

/// The per-frame schedule.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    // Completion observers run at the sync point between the two systems.
    update.add_systems((advance_tweens_system, reel_update_system).chain());
    update
}

/// Run one frame of `dt` seconds.
pub fn step(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

/// Run frames until the machine is idle with no active tweens.
///
/// Returns the number of frames run, or `None` if `max_frames` ran out first.
pub fn run_until_idle(
    world: &mut World,
    schedule: &mut Schedule,
    dt: f32,
    max_frames: u64,
) -> Option<u64> {
    for frame in 0..max_frames {
        if is_idle(world) {
            return Some(frame);
        }
        step(world, schedule, dt);
    }
    is_idle(world).then_some(max_frames)
}

pub fn is_idle(world: &World) -> bool {
    !world.resource::<SpinMachine>().is_spinning()
        && world.resource::<AnimationScheduler>().is_empty()
}

/// Visible symbols of every reel, ordered by reel index.
pub fn visible_columns(world: &mut World) -> Vec<Column> {
    let layout = world.resource::<MachineConfig>().layout();
    let mut query = world.query::<&Reel>();
    let mut reels: Vec<&Reel> = query.iter(world).collect();
    reels.sort_by_key(|r| r.index);
    reels.iter().map(|r| r.visible_symbols(&layout)).collect()
}

/// Render columns as text rows, e.g. `WILD L2   L1`.
pub fn format_grid(columns: &[Column]) -> String {
    let rows = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    (0..rows)
        .map(|row| {
            columns
                .iter()
                .map(|c| c.get(row).map(|s| format!("{:<4}", s)).unwrap_or_else(|| "-   ".into()))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Log the visible grid at debug level. Used by the `--trace` flag.
pub fn trace_frame(world: &mut World) {
    let frame = world.resource::<WorldTime>().frame_count;
    let columns = visible_columns(world);
    let blurs: Vec<f32> = {
        let mut query = world.query::<&Reel>();
        let mut reels: Vec<&Reel> = query.iter(world).collect();
        reels.sort_by_key(|r| r.index);
        reels.iter().map(|r| r.blur).collect()
    };
    debug!("frame {} blur {:?}\n{}", frame, blurs, format_grid(&columns));
}

/// Log a summary line for a settled spin.
pub fn log_settled(world: &mut World) {
    let counter = *world.resource::<WinCounter>();
    info!(
        "Spins: {}, last win: {}, total: {}",
        counter.spins, counter.last_win, counter.total_win
    );
}
