//! Reel update system.
//!
//! Runs every frame after the tween pass, whether or not a spin is active:
//!
//! 1. Blur follows the distance scrolled since the previous frame
//! 2. Each slot's y offset is recomputed from the scroll position
//! 3. Slots that wrapped from the bottom back to the top take their symbol
//!    from the displayed outcome
//!
//! The per-reel math lives in [`Reel::advance_frame`].

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::reel::Reel;
use crate::resources::gameconfig::MachineConfig;
use crate::resources::outcometable::OutcomeTable;
use crate::resources::spinmachine::SpinMachine;

pub fn reel_update_system(
    config: Res<MachineConfig>,
    machine: Res<SpinMachine>,
    table: Res<OutcomeTable>,
    mut reels: Query<&mut Reel>,
) {
    let layout = config.layout();
    let outcome = machine.displayed_outcome().and_then(|i| table.get(i));
    for mut reel in reels.iter_mut() {
        let swapped = reel.advance_frame(&layout, outcome);
        if swapped > 0 {
            trace!("Reel {} swapped {} symbol(s)", reel.index, swapped);
        }
    }
}
