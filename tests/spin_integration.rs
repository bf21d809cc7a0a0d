//! Spin tick integration tests: the full world is built, spins are triggered
//! through events, and the frame schedule is ticked at 60 fps.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use reelspin::components::reel::Reel;
use reelspin::components::tween::TweenId;
use reelspin::events::spin::{SpinRequestedEvent, SpinSettledEvent};
use reelspin::events::tween::TweenCompletedEvent;
use reelspin::game::{
    build_update_schedule, build_world, is_idle, run_until_idle, step, visible_columns,
};
use reelspin::resources::animationscheduler::AnimationScheduler;
use reelspin::resources::gameconfig::MachineConfig;
use reelspin::resources::outcometable::OutcomeTable;
use reelspin::resources::spinmachine::{SpinMachine, SpinState};
use reelspin::resources::spinrng::SpinRng;
use reelspin::resources::wincounter::WinCounter;
use reelspin::resources::worldtime::WorldTime;

const DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u64 = 10_000;

fn make_world(seed: u64) -> World {
    build_world(MachineConfig::new(), OutcomeTable::builtin(), SpinRng::with_seed(seed))
}

fn step_until(world: &mut World, schedule: &mut Schedule, seconds: f64) {
    while world.resource::<WorldTime>().elapsed < seconds {
        step(world, schedule, DT);
    }
}

fn reel_positions(world: &mut World) -> Vec<f32> {
    let mut query = world.query::<&Reel>();
    let mut reels: Vec<&Reel> = query.iter(world).collect();
    reels.sort_by_key(|r| r.index);
    reels.iter().map(|r| r.position).collect()
}

fn tween_snapshot(world: &World) -> Vec<(TweenId, f32, u32)> {
    world
        .resource::<AnimationScheduler>()
        .iter()
        .map(|tw| (tw.id, tw.end_value, tw.duration_ms))
        .collect()
}

#[test]
fn forced_wild_outcome_lands_on_every_reel() {
    let mut world = make_world(11);
    let mut schedule = build_update_schedule();

    world.trigger(SpinRequestedEvent::with_outcome(3));
    assert!(world.resource::<SpinMachine>().is_spinning());

    let frames = run_until_idle(&mut world, &mut schedule, DT, MAX_FRAMES);
    assert!(frames.is_some());
    // The slowest reel runs 4.2s.
    assert!(world.resource::<WorldTime>().elapsed > 4.1);

    let expected = *OutcomeTable::builtin().get(3).unwrap();
    let columns = visible_columns(&mut world);
    for (reel, column) in columns.iter().enumerate() {
        assert_eq!(column.as_slice(), &expected.column(reel).unwrap());
        assert_eq!(column[0], expected.reels[0][reel]);
    }
    assert_eq!(world.resource::<WinCounter>().last_win, 500);
    assert_eq!(reel_positions(&mut world), vec![12.0, 12.0, 12.0]);
}

#[test]
fn reels_settle_with_no_blur_after_landing() {
    let mut world = make_world(2);
    let mut schedule = build_update_schedule();

    world.trigger(SpinRequestedEvent::with_outcome(0));
    run_until_idle(&mut world, &mut schedule, DT, MAX_FRAMES).unwrap();
    step(&mut world, &mut schedule, DT);

    let mut query = world.query::<&Reel>();
    for reel in query.iter(&world) {
        assert_eq!(reel.blur, 0.0);
        assert!(reel.is_at_rest());
    }
}

#[test]
fn blur_is_positive_mid_spin() {
    let mut world = make_world(2);
    let mut schedule = build_update_schedule();

    world.trigger(SpinRequestedEvent::with_outcome(0));
    step_until(&mut world, &mut schedule, 0.5);

    let mut query = world.query::<&Reel>();
    for reel in query.iter(&world) {
        assert!(reel.blur > 0.0, "reel {} blur {}", reel.index, reel.blur);
    }
}

#[test]
fn spin_request_while_spinning_is_ignored() {
    let mut world = make_world(5);
    let mut schedule = build_update_schedule();

    world.trigger(SpinRequestedEvent::with_outcome(1));
    step_until(&mut world, &mut schedule, 1.0);
    let before = tween_snapshot(&world);
    assert_eq!(before.len(), 3);

    world.trigger(SpinRequestedEvent::with_outcome(7));
    world.trigger(SpinRequestedEvent::random());

    assert_eq!(tween_snapshot(&world), before);
    assert_eq!(world.resource::<SpinMachine>().displayed_outcome(), Some(1));
}

#[test]
fn only_slowest_reel_returns_machine_to_idle() {
    let mut world = make_world(8);
    let mut schedule = build_update_schedule();

    world.trigger(SpinRequestedEvent::with_outcome(5));

    step_until(&mut world, &mut schedule, 3.05);
    assert!(matches!(
        world.resource::<SpinMachine>().state(),
        SpinState::Spinning {
            reels_remaining: 2,
            ..
        }
    ));
    assert_eq!(world.resource::<AnimationScheduler>().len(), 2);

    step_until(&mut world, &mut schedule, 3.65);
    assert!(matches!(
        world.resource::<SpinMachine>().state(),
        SpinState::Spinning {
            reels_remaining: 1,
            ..
        }
    ));

    step_until(&mut world, &mut schedule, 4.25);
    assert_eq!(world.resource::<SpinMachine>().state(), SpinState::Idle);
    assert!(is_idle(&world));
}

#[test]
fn settle_event_fires_once_per_spin() {
    let mut world = make_world(4);
    let mut schedule = build_update_schedule();

    let settled = Arc::new(Mutex::new(Vec::new()));
    let settled_clone = settled.clone();
    world.add_observer(move |trigger: On<SpinSettledEvent>| {
        settled_clone.lock().unwrap().push(*trigger.event());
    });
    world.flush();

    world.trigger(SpinRequestedEvent::with_outcome(2));
    run_until_idle(&mut world, &mut schedule, DT, MAX_FRAMES).unwrap();
    for _ in 0..30 {
        step(&mut world, &mut schedule, DT);
    }

    let settled = settled.lock().unwrap();
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].outcome, 2);
    assert_eq!(settled[0].win, 400);
}

#[test]
fn zero_duration_spin_completes_on_next_frame() {
    let mut config = MachineConfig::new();
    config.base_duration_ms = 0;
    config.stagger_ms = 0;
    let mut world = build_world(config, OutcomeTable::builtin(), SpinRng::with_seed(1));
    let mut schedule = build_update_schedule();

    let completed = Arc::new(Mutex::new(0));
    let completed_clone = completed.clone();
    world.add_observer(move |_trigger: On<TweenCompletedEvent>| {
        *completed_clone.lock().unwrap() += 1;
    });
    world.flush();

    world.trigger(SpinRequestedEvent::with_outcome(4));
    step(&mut world, &mut schedule, DT);

    assert!(is_idle(&world));
    assert_eq!(*completed.lock().unwrap(), 3);
    assert_eq!(reel_positions(&mut world), vec![12.0, 12.0, 12.0]);

    step(&mut world, &mut schedule, DT);
    assert_eq!(*completed.lock().unwrap(), 3);
}

#[test]
fn settled_reels_do_not_move_on_later_frames() {
    let mut world = make_world(6);
    let mut schedule = build_update_schedule();

    world.trigger(SpinRequestedEvent::with_outcome(9));
    run_until_idle(&mut world, &mut schedule, DT, MAX_FRAMES).unwrap();
    let positions = reel_positions(&mut world);
    let columns = visible_columns(&mut world);

    for _ in 0..120 {
        step(&mut world, &mut schedule, DT);
    }

    assert_eq!(reel_positions(&mut world), positions);
    assert_eq!(visible_columns(&mut world), columns);
}

#[test]
fn consecutive_spins_advance_by_twelve_and_count_wins() {
    let mut world = make_world(13);
    let mut schedule = build_update_schedule();

    for outcome in [3, 1, 0] {
        world.trigger(SpinRequestedEvent::with_outcome(outcome));
        run_until_idle(&mut world, &mut schedule, DT, MAX_FRAMES).unwrap();

        let expected = *OutcomeTable::builtin().get(outcome).unwrap();
        let columns = visible_columns(&mut world);
        for (reel, column) in columns.iter().enumerate() {
            assert_eq!(column.as_slice(), &expected.column(reel).unwrap());
        }
    }

    assert_eq!(reel_positions(&mut world), vec![36.0, 36.0, 36.0]);
    let counter = *world.resource::<WinCounter>();
    assert_eq!(counter.spins, 3);
    assert_eq!(counter.last_win, 0);
    assert_eq!(counter.total_win, 550);
}

#[test]
fn random_spin_shows_the_drawn_outcome() {
    let mut world = make_world(99);
    let mut schedule = build_update_schedule();

    world.trigger(SpinRequestedEvent::random());
    let drawn = world
        .resource::<SpinMachine>()
        .displayed_outcome()
        .expect("spin should have drawn an outcome");
    run_until_idle(&mut world, &mut schedule, DT, MAX_FRAMES).unwrap();

    let expected = *OutcomeTable::builtin().get(drawn).unwrap();
    let columns = visible_columns(&mut world);
    for (reel, column) in columns.iter().enumerate() {
        assert_eq!(column.as_slice(), &expected.column(reel).unwrap());
    }
    assert_eq!(world.resource::<WinCounter>().last_win, expected.win);
}

#[test]
fn same_seed_draws_same_outcomes() {
    let draws = |seed| {
        let mut world = make_world(seed);
        let mut schedule = build_update_schedule();
        let mut out = Vec::new();
        for _ in 0..4 {
            world.trigger(SpinRequestedEvent::random());
            out.push(world.resource::<SpinMachine>().displayed_outcome());
            run_until_idle(&mut world, &mut schedule, DT, MAX_FRAMES).unwrap();
        }
        out
    };
    assert_eq!(draws(21), draws(21));
}

#[test]
fn out_of_range_forced_outcome_is_ignored() {
    let mut world = make_world(3);

    world.trigger(SpinRequestedEvent::with_outcome(10));

    assert!(!world.resource::<SpinMachine>().is_spinning());
    assert!(world.resource::<AnimationScheduler>().is_empty());
}

#[test]
fn staggered_durations_follow_reel_index() {
    let mut world = make_world(3);

    world.trigger(SpinRequestedEvent::with_outcome(0));

    let mut query = world.query::<(Entity, &Reel)>();
    let reels: Vec<(Entity, usize)> = query.iter(&world).map(|(e, r)| (e, r.index)).collect();
    let scheduler = world.resource::<AnimationScheduler>();
    for (entity, index) in reels {
        let tweens: Vec<_> = scheduler.active_for(entity).collect();
        assert_eq!(tweens.len(), 1);
        assert_eq!(tweens[0].duration_ms, 3000 + 600 * index as u32);
        assert_eq!(tweens[0].end_value, 12.0);
    }
}

#[test]
fn off_cycle_step_counts_still_land_on_the_outcome() {
    for steps in [10, 13, 8, 16] {
        let mut config = MachineConfig::new();
        config.spin_steps = steps;
        let mut world = build_world(config, OutcomeTable::builtin(), SpinRng::with_seed(17));
        let mut schedule = build_update_schedule();

        for outcome in 0..OutcomeTable::builtin().len() {
            world.trigger(SpinRequestedEvent::with_outcome(outcome));
            run_until_idle(&mut world, &mut schedule, DT, MAX_FRAMES).unwrap();

            let expected = *OutcomeTable::builtin().get(outcome).unwrap();
            let columns = visible_columns(&mut world);
            for (reel, column) in columns.iter().enumerate() {
                assert_eq!(
                    column.as_slice(),
                    &expected.column(reel).unwrap(),
                    "steps {steps}, outcome {outcome}, reel {reel}"
                );
            }
        }
        for position in reel_positions(&mut world) {
            assert_eq!(position % 4.0, 0.0, "steps {steps}");
        }
    }
}
