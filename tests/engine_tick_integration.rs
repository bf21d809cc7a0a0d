//! Engine tick integration tests for the tween and reel systems, run one
//! system at a time against a hand-built world.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use reelspin::components::reel::{Reel, ReelLayout};
use reelspin::components::symbol::Symbol;
use reelspin::components::tween::{Easing, TweenProperty};
use reelspin::events::tween::TweenCompletedEvent;
use reelspin::resources::animationscheduler::AnimationScheduler;
use reelspin::resources::gameconfig::MachineConfig;
use reelspin::resources::outcometable::OutcomeTable;
use reelspin::resources::spinmachine::{SpinInput, SpinMachine};
use reelspin::resources::worldtime::WorldTime;
use reelspin::systems::reel::reel_update_system;
use reelspin::systems::time::update_world_time;
use reelspin::systems::tween::advance_tweens_system;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(AnimationScheduler::new());
    world.insert_resource(MachineConfig::new());
    world.insert_resource(OutcomeTable::builtin());
    world.insert_resource(SpinMachine::new());
    world
}

fn spawn_reel(world: &mut World, index: usize) -> Entity {
    let reel = Reel::new(
        index,
        [Symbol::H1, Symbol::H2, Symbol::H3, Symbol::H4],
        &ReelLayout::default(),
    );
    world.spawn(reel).id()
}

fn tick_tweens(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(advance_tweens_system);
    schedule.run(world);
}

fn tick_reels(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(reel_update_system);
    schedule.run(world);
}

fn schedule_linear(world: &mut World, target: Entity, end: f32, duration_ms: u32, signal: Option<&str>) {
    let now = world.resource::<WorldTime>().elapsed;
    let start = world.get::<Reel>(target).unwrap().position;
    world.resource_mut::<AnimationScheduler>().schedule(
        target,
        TweenProperty::Position,
        start,
        end,
        duration_ms,
        Easing::Linear,
        now,
        signal.map(str::to_string),
    );
}

#[test]
fn tween_system_writes_interpolated_position() {
    let mut world = make_world();
    let reel = spawn_reel(&mut world, 0);
    schedule_linear(&mut world, reel, 8.0, 1000, None);

    update_world_time(&mut world, 0.25);
    tick_tweens(&mut world);

    assert!(approx_eq(world.get::<Reel>(reel).unwrap().position, 2.0));
    assert_eq!(world.resource::<AnimationScheduler>().len(), 1);
}

#[test]
fn tween_system_lands_exactly_and_fires_once() {
    let mut world = make_world();
    let reel = spawn_reel(&mut world, 0);

    let signals = Arc::new(Mutex::new(Vec::new()));
    let signals_clone = signals.clone();
    world.add_observer(move |trigger: On<TweenCompletedEvent>| {
        signals_clone
            .lock()
            .unwrap()
            .push(trigger.event().signal.clone());
    });
    world.flush();

    schedule_linear(&mut world, reel, 12.0, 500, Some("landed"));

    update_world_time(&mut world, 0.3);
    tick_tweens(&mut world);
    assert!(signals.lock().unwrap().is_empty());

    update_world_time(&mut world, 0.3);
    tick_tweens(&mut world);
    assert_eq!(world.get::<Reel>(reel).unwrap().position, 12.0);
    assert!(world.resource::<AnimationScheduler>().is_empty());

    // Further ticks leave the reel alone and fire nothing.
    update_world_time(&mut world, 1.0);
    tick_tweens(&mut world);
    assert_eq!(world.get::<Reel>(reel).unwrap().position, 12.0);

    let signals = signals.lock().unwrap();
    assert_eq!(signals.as_slice(), &[Some("landed".to_string())]);
}

#[test]
fn tween_to_despawned_reel_still_completes() {
    let mut world = make_world();
    let reel = spawn_reel(&mut world, 0);
    schedule_linear(&mut world, reel, 4.0, 100, None);
    world.despawn(reel);

    update_world_time(&mut world, 1.0);
    tick_tweens(&mut world);

    assert!(world.resource::<AnimationScheduler>().is_empty());
}

#[test]
fn reel_system_sets_blur_and_layout() {
    let mut world = make_world();
    let reel = spawn_reel(&mut world, 0);
    world.get_mut::<Reel>(reel).unwrap().position = 0.5;

    tick_reels(&mut world);

    let r = world.get::<Reel>(reel).unwrap();
    assert!(approx_eq(r.blur, 4.0));
    assert_eq!(r.previous_position, 0.5);
    assert!(approx_eq(r.slots[1].y, 192.0));
}

#[test]
fn reel_system_swaps_from_displayed_outcome() {
    let mut world = make_world();
    let reel = spawn_reel(&mut world, 2);
    world
        .resource_mut::<SpinMachine>()
        .apply(SpinInput::Press { outcome: 3, reels: 3 });

    // Slot 3 wraps once the reel passes one full step.
    world.get_mut::<Reel>(reel).unwrap().position = 1.05;
    tick_reels(&mut world);

    let r = world.get::<Reel>(reel).unwrap();
    // Row 2 of reel 2 in outcome 3.
    assert_eq!(r.slots[3].symbol, Symbol::H4);
    assert_eq!(r.slots[1].symbol, Symbol::H2);
}

#[test]
fn reel_system_without_outcome_keeps_symbols() {
    let mut world = make_world();
    let reel = spawn_reel(&mut world, 0);
    world.get_mut::<Reel>(reel).unwrap().position = 1.05;

    tick_reels(&mut world);

    let r = world.get::<Reel>(reel).unwrap();
    assert_eq!(r.slots[3].symbol, Symbol::H4);
}
