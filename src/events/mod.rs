//! Event types exchanged between systems and observers.
//!
//! Submodules:
//! - [`spin`] – spin requests from the button and settle notifications
//! - [`tween`] – completion of a scheduled tween
pub mod spin;
pub mod tween;
