//! Simulation time resource.
//!
//! Updated once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time). Tweens
//! record `elapsed` when scheduled and measure progress against it.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds since the world started, scaled.
    ///
    /// Kept in `f64` so long runs keep advancing at 60 fps.
    pub elapsed: f64,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
