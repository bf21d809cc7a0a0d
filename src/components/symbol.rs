//! Reel symbol identifiers.
//!
//! A [`Symbol`] is the identity of the image a slot displays. Rendering maps
//! each id to a texture (`assets/symbols/<id>.png`); the core only swaps ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine symbols that can appear on a reel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    H1,
    H2,
    H3,
    H4,
    L1,
    L2,
    L3,
    L4,
    #[serde(rename = "WILD")]
    Wild,
}

impl Symbol {
    /// Every symbol, in declaration order.
    pub const ALL: [Symbol; 9] = [
        Symbol::H1,
        Symbol::H2,
        Symbol::H3,
        Symbol::H4,
        Symbol::L1,
        Symbol::L2,
        Symbol::L3,
        Symbol::L4,
        Symbol::Wild,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::H1 => "H1",
            Symbol::H2 => "H2",
            Symbol::H3 => "H3",
            Symbol::H4 => "H4",
            Symbol::L1 => "L1",
            Symbol::L2 => "L2",
            Symbol::L3 => "L3",
            Symbol::L4 => "L4",
            Symbol::Wild => "WILD",
        }
    }

    /// Texture key a renderer would look up for this symbol.
    pub fn texture_key(self) -> String {
        format!("./assets/symbols/{}.png", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
