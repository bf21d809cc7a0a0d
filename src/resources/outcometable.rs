//! Outcome table resource.
//!
//! The machine never computes results: every spin lands on one of a fixed
//! list of pre-authored [`MachineResult`]s, drawn uniformly. The built-in
//! table holds ten results; a replacement can be loaded from JSON.
//!
//! # File Format
//!
//! ```json
//! [
//!   { "reels": [["WILD", "L2", "L1"], ["WILD", "H1", "L1"], ["WILD", "H2", "H4"]], "win": 500 }
//! ]
//! ```
//!
//! `reels[row][reel]`: the first inner array is the top visible row.

use bevy_ecs::prelude::Resource;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::reel::VISIBLE_ROWS;
use crate::components::symbol::Symbol;
use crate::components::symbol::Symbol::{H1, H2, H3, H4, L1, L2, L3, L4, Wild};
use crate::error::{ReelError, ReelResult};

/// Number of reels in every result.
pub const REEL_COUNT: usize = 3;

/// A pre-authored spin result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineResult {
    /// Symbol grid indexed `[row][reel]`.
    pub reels: [[Symbol; REEL_COUNT]; VISIBLE_ROWS],
    pub win: u32,
}

impl MachineResult {
    /// Symbol shown at `row` (0 = top) of reel `reel`.
    pub fn symbol_at(&self, row: usize, reel: usize) -> Option<Symbol> {
        self.reels.get(row).and_then(|r| r.get(reel)).copied()
    }

    /// The symbols of one reel, top to bottom.
    pub fn column(&self, reel: usize) -> Option<[Symbol; VISIBLE_ROWS]> {
        if reel >= REEL_COUNT {
            return None;
        }
        Some(std::array::from_fn(|row| self.reels[row][reel]))
    }
}

/// Read-only list of results a spin can land on.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OutcomeTable {
    results: Vec<MachineResult>,
}

impl Default for OutcomeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl OutcomeTable {
    /// Wrap a list of results. The list must not be empty.
    pub fn new(results: Vec<MachineResult>) -> ReelResult<Self> {
        if results.is_empty() {
            return Err(ReelError::EmptyOutcomeTable);
        }
        Ok(OutcomeTable { results })
    }

    /// The ten results the machine ships with.
    pub fn builtin() -> Self {
        let r = |reels, win| MachineResult { reels, win };
        OutcomeTable {
            results: vec![
                r([[H1, L2, L1], [L2, H1, L1], [L3, H2, H4]], 0),
                r([[H1, L2, L4], [L2, H1, L1], [L3, L2, H4]], 50),
                r([[H1, L2, L1], [L2, H1, L1], [L3, H2, Wild]], 400),
                r([[Wild, L2, L1], [Wild, H1, L1], [Wild, H2, H4]], 500),
                r([[L1, L2, L4], [L1, H1, L3], [L1, H2, H4]], 75),
                r([[H1, H3, L1], [L2, H3, L1], [L3, H3, H4]], 125),
                r([[H1, L2, H4], [L2, H1, H4], [L3, H2, H4]], 100),
                r([[L1, H4, H1], [H1, L3, L2], [L3, H2, H3]], 0),
                r([[L4, H1, L1], [H3, L2, H2], [Wild, H2, L1]], 0),
                r([[H3, L4, Wild], [H3, H1, L1], [L1, H3, L2]], 0),
            ],
        }
    }

    /// Parse a table from its JSON representation.
    pub fn from_json(json: &str) -> ReelResult<Self> {
        let results: Vec<MachineResult> = serde_json::from_str(json)?;
        Self::new(results)
    }

    pub fn to_json(&self) -> ReelResult<String> {
        Ok(serde_json::to_string_pretty(&self.results)?)
    }

    /// Load a table from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ReelError::OutcomeRead {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&json)?;
        info!("Loaded {} outcomes from {:?}", table.len(), path);
        Ok(table)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> ReelResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|source| ReelError::OutcomeWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, index: usize) -> Option<&MachineResult> {
        self.results.get(index)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MachineResult> {
        self.results.iter()
    }
}
