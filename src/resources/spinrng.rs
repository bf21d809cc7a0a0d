//! Random source for spins.
//!
//! Wraps a [`fastrand::Rng`] so runs can be reproduced from a seed. It draws
//! the outcome index for each spin and the random symbols reels start with.

use bevy_ecs::prelude::Resource;

use crate::components::symbol::Symbol;

#[derive(Resource, Debug, Clone)]
pub struct SpinRng {
    rng: fastrand::Rng,
}

impl Default for SpinRng {
    fn default() -> Self {
        SpinRng {
            rng: fastrand::Rng::new(),
        }
    }
}

impl SpinRng {
    pub fn with_seed(seed: u64) -> Self {
        SpinRng {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn pick_outcome(&mut self, len: usize) -> usize {
        self.rng.usize(..len)
    }

    pub fn random_symbol(&mut self) -> Symbol {
        Symbol::ALL[self.rng.usize(..Symbol::ALL.len())]
    }
}
