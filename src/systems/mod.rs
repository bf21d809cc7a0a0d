//! Frame systems and observers.
//!
//! Submodules overview
//! - [`reel`] – lay out reel slots and swap symbols on wraparound
//! - [`spin`] – start spins and settle them when the reels stop
//! - [`time`] – update simulation time and delta
//! - [`tween`] – easing math and the tween advance system

pub mod reel;
pub mod spin;
pub mod time;
pub mod tween;
