//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance `elapsed` on the `WorldTime` resource by one frame.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The current
/// `time_scale` is applied before it is added.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.max(0.0) * wt.time_scale;
    wt.elapsed += f64::from(scaled_dt);
    wt.frame_count += 1;
}
