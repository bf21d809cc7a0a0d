//! ECS components and the data records they are built from.
//!
//! Submodules overview:
//! - [`reel`] – one reel strip: scroll position, blur and symbol slots
//! - [`symbol`] – the symbol identifiers a slot can display
//! - [`tween`] – easing curves and the tween record held by the scheduler

pub mod reel;
pub mod symbol;
pub mod tween;
