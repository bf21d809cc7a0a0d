//! ECS resources made available to systems.
//!
//! Overview
//! - `animationscheduler` – the owned list of active tweens
//! - `gameconfig` – reel geometry and spin timing loaded from INI
//! - `outcometable` – the fixed list of results a spin can land on
//! - `spinmachine` – idle/spinning state machine
//! - `spinrng` – seedable random source for draws
//! - `wincounter` – last and total win for the counter display
//! - `worldtime` – simulation time and delta
pub mod animationscheduler;
pub mod gameconfig;
pub mod outcometable;
pub mod spinmachine;
pub mod spinrng;
pub mod wincounter;
pub mod worldtime;
