//! reelspin library.
//!
//! This module exposes the reel animation's ECS components, resources,
//! systems, and events for use in integration tests and by a renderer.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
