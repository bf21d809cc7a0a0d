//! Reel component.
//!
//! A [`Reel`] is one vertical strip of symbol slots. Its `position` is a
//! continuous scroll offset measured in symbol steps; tweens push it forward
//! and [`Reel::advance_frame`] maps it onto slot y offsets once per frame.
//!
//! The component holds everything a renderer needs: per-slot y and symbol id,
//! the blur amount, and (through [`ReelLayout::reel_x`]) the reel's x offset.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

use crate::components::symbol::Symbol;
use crate::resources::outcometable::MachineResult;

/// Visible rows per reel.
pub const VISIBLE_ROWS: usize = 3;
/// Slots per reel: the visible rows plus one hidden slot above them.
pub const SLOT_COUNT: usize = VISIBLE_ROWS + 1;

/// Pixel geometry and motion constants shared by all reels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReelLayout {
    /// Height of a symbol in pixels.
    pub symbol_size: f32,
    /// Vertical gap between symbols in pixels.
    pub symbol_margin: f32,
    /// Horizontal distance between reels in pixels.
    pub reel_width: f32,
    /// Blur per unit of scroll velocity (steps per frame).
    pub blur_factor: f32,
}

impl Default for ReelLayout {
    fn default() -> Self {
        ReelLayout {
            symbol_size: 334.0,
            symbol_margin: 50.0,
            reel_width: 430.0,
            blur_factor: 8.0,
        }
    }
}

impl ReelLayout {
    /// Distance between the tops of two consecutive slots.
    pub fn stride(&self) -> f32 {
        self.symbol_size + self.symbol_margin
    }

    /// Y offset of slot `slot` for a reel scrolled to `position`.
    pub fn slot_y(&self, position: f32, slot: usize, slot_count: usize) -> f32 {
        let cycle = (position + slot as f32).rem_euclid(slot_count as f32);
        cycle * self.stride() - self.stride()
    }

    pub fn reel_x(&self, index: usize) -> f32 {
        index as f32 * self.reel_width
    }
}

/// One displayed symbol on a reel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymbolSlot {
    pub symbol: Symbol,
    /// Vertical offset in pixels, relative to the top of the reel window.
    pub y: f32,
}

#[derive(Component, Clone, Debug)]
pub struct Reel {
    /// Column of this reel in the outcome grid.
    pub index: usize,
    pub slots: SmallVec<[SymbolSlot; SLOT_COUNT]>,
    /// Scroll offset in symbol steps.
    pub position: f32,
    /// `position` as of the previous frame.
    pub previous_position: f32,
    pub blur: f32,
}

impl Reel {
    /// Create a reel at position 0 with the given slot symbols, top to bottom.
    pub fn new(index: usize, symbols: [Symbol; SLOT_COUNT], layout: &ReelLayout) -> Self {
        let slots = symbols
            .iter()
            .enumerate()
            .map(|(j, &symbol)| SymbolSlot {
                symbol,
                y: layout.slot_y(0.0, j, SLOT_COUNT),
            })
            .collect();
        Reel {
            index,
            slots,
            position: 0.0,
            previous_position: 0.0,
            blur: 0.0,
        }
    }

    /// Run the per-frame update and return how many slots were swapped.
    ///
    /// Blur follows the scroll distance since the last frame. Each slot is
    /// repositioned from `position`, and a slot that just wrapped from the
    /// bottom back to the top takes its symbol from `outcome`. Slot 0 is
    /// never swapped: it is the hidden slot when the reel is at rest.
    pub fn advance_frame(&mut self, layout: &ReelLayout, outcome: Option<&MachineResult>) -> usize {
        self.blur = (self.position - self.previous_position) * layout.blur_factor;
        self.previous_position = self.position;

        let (position, index) = (self.position, self.index);
        let slot_count = self.slots.len();
        let mut swapped = 0;
        for (j, slot) in self.slots.iter_mut().enumerate() {
            let prev_y = slot.y;
            slot.y = layout.slot_y(position, j, slot_count);
            if slot.y < 0.0 && prev_y > layout.symbol_size && j != 0 {
                if let Some(symbol) = outcome.and_then(|o| o.symbol_at(j - 1, index)) {
                    slot.symbol = symbol;
                    swapped += 1;
                }
            }
        }
        swapped
    }

    /// Symbols inside the visible window, top to bottom.
    pub fn visible_symbols(&self, layout: &ReelLayout) -> SmallVec<[Symbol; VISIBLE_ROWS]> {
        let window = layout.stride() * VISIBLE_ROWS as f32;
        let mut visible: SmallVec<[SymbolSlot; SLOT_COUNT]> = self
            .slots
            .iter()
            .copied()
            .filter(|s| s.y >= 0.0 && s.y < window)
            .collect();
        visible.sort_by(|a, b| a.y.total_cmp(&b.y));
        visible.into_iter().map(|s| s.symbol).collect()
    }

    /// True when the reel is not moving.
    pub fn is_at_rest(&self) -> bool {
        self.position == self.previous_position
    }
}
