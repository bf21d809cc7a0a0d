//! Win counter resource.
//!
//! Backs the counter display: updated once per settled spin.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinCounter {
    /// Win of the most recently settled spin.
    pub last_win: u32,
    /// Sum of all wins so far.
    pub total_win: u64,
    /// Number of settled spins.
    pub spins: u64,
}

impl WinCounter {
    pub fn record(&mut self, win: u32) {
        self.last_win = win;
        self.total_win += u64::from(win);
        self.spins += 1;
    }
}
