//! Machine configuration resource.
//!
//! Holds reel geometry, spin timing and the frame rate of the headless loop.
//! Values come from an INI file; anything missing keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [layout]
//! symbol_size = 334
//! symbol_margin = 50
//! reel_width = 430
//!
//! [spin]
//! steps = 12
//! base_duration_ms = 3000
//! stagger_ms = 600
//! backout = 1.0
//! blur_factor = 8.0
//!
//! [loop]
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::reel::{ReelLayout, SLOT_COUNT};
use crate::error::{ReelError, ReelResult};

/// Default safe values for startup
const DEFAULT_SYMBOL_SIZE: f32 = 334.0;
const DEFAULT_SYMBOL_MARGIN: f32 = 50.0;
const DEFAULT_REEL_WIDTH: f32 = 430.0;
const DEFAULT_SPIN_STEPS: u32 = 12;
const DEFAULT_BASE_DURATION_MS: u32 = 3000;
const DEFAULT_STAGGER_MS: u32 = 600;
const DEFAULT_BACKOUT: f32 = 1.0;
const DEFAULT_BLUR_FACTOR: f32 = 8.0;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MachineConfig {
    pub symbol_size: f32,
    pub symbol_margin: f32,
    pub reel_width: f32,
    /// Symbol steps each reel advances per spin.
    ///
    /// Reels only land on the drawn outcome after whole slot cycles, so this
    /// is a non-zero multiple of [`SLOT_COUNT`]. See [`Self::spin_distance`].
    pub spin_steps: u32,
    /// Spin duration of the first reel.
    pub base_duration_ms: u32,
    /// Extra duration per reel index.
    pub stagger_ms: u32,
    /// Overshoot amount of the back-out easing.
    pub backout: f32,
    pub blur_factor: f32,
    /// Frames per second of the headless loop.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            symbol_size: DEFAULT_SYMBOL_SIZE,
            symbol_margin: DEFAULT_SYMBOL_MARGIN,
            reel_width: DEFAULT_REEL_WIDTH,
            spin_steps: DEFAULT_SPIN_STEPS,
            base_duration_ms: DEFAULT_BASE_DURATION_MS,
            stagger_ms: DEFAULT_STAGGER_MS,
            backout: DEFAULT_BACKOUT,
            blur_factor: DEFAULT_BLUR_FACTOR,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> ReelResult<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|reason| ReelError::ConfigLoad {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply_ini(&config);

        info!(
            "Loaded config: symbol {}+{}px, {} steps, {}ms + {}ms/reel, backout={}, fps={}",
            self.symbol_size,
            self.symbol_margin,
            self.spin_steps,
            self.base_duration_ms,
            self.stagger_ms,
            self.backout,
            self.target_fps
        );

        Ok(())
    }

    /// Parse configuration from INI text. Used for embedded defaults and tests.
    pub fn load_from_str(&mut self, text: &str) -> ReelResult<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|reason| ReelError::ConfigLoad {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();
        let uint = |section: &str, key: &str| {
            let v = config.getuint(section, key).ok().flatten()?;
            match u32::try_from(v) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("Config [{section}] {key} = {v} is too large; ignored");
                    None
                }
            }
        };

        // [layout] section
        if let Some(v) = float("layout", "symbol_size") {
            self.symbol_size = v as f32;
        }
        if let Some(v) = float("layout", "symbol_margin") {
            self.symbol_margin = v as f32;
        }
        if let Some(v) = float("layout", "reel_width") {
            self.reel_width = v as f32;
        }

        // [spin] section
        if let Some(v) = uint("spin", "steps") {
            let aligned = align_steps(v);
            if aligned != v {
                warn!(
                    "Config [spin] steps = {v} is not a non-zero multiple of {SLOT_COUNT}; using {aligned}"
                );
            }
            self.spin_steps = aligned;
        }
        if let Some(v) = uint("spin", "base_duration_ms") {
            self.base_duration_ms = v;
        }
        if let Some(v) = uint("spin", "stagger_ms") {
            self.stagger_ms = v;
        }
        if let Some(v) = float("spin", "backout") {
            self.backout = v as f32;
        }
        if let Some(v) = float("spin", "blur_factor") {
            self.blur_factor = v as f32;
        }

        // [loop] section
        if let Some(v) = uint("loop", "target_fps") {
            self.target_fps = v.max(1);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> ReelResult<()> {
        let mut config = Ini::new();

        // [layout] section
        config.set("layout", "symbol_size", Some(self.symbol_size.to_string()));
        config.set("layout", "symbol_margin", Some(self.symbol_margin.to_string()));
        config.set("layout", "reel_width", Some(self.reel_width.to_string()));

        // [spin] section
        config.set("spin", "steps", Some(self.spin_steps.to_string()));
        config.set("spin", "base_duration_ms", Some(self.base_duration_ms.to_string()));
        config.set("spin", "stagger_ms", Some(self.stagger_ms.to_string()));
        config.set("spin", "backout", Some(self.backout.to_string()));
        config.set("spin", "blur_factor", Some(self.blur_factor.to_string()));

        // [loop] section
        config.set("loop", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|source| ReelError::ConfigSave {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Geometry handed to the reel update loop.
    pub fn layout(&self) -> ReelLayout {
        ReelLayout {
            symbol_size: self.symbol_size,
            symbol_margin: self.symbol_margin,
            reel_width: self.reel_width,
            blur_factor: self.blur_factor,
        }
    }

    /// Distance in symbol steps each reel travels per spin.
    ///
    /// Same as `spin_steps` once aligned to whole slot cycles, so a value set
    /// in code still lands the reels on the drawn outcome.
    pub fn spin_distance(&self) -> f32 {
        align_steps(self.spin_steps) as f32
    }

    /// Tween duration of reel `index`; later reels run longer.
    pub fn reel_duration_ms(&self, index: usize) -> u32 {
        self.base_duration_ms
            .saturating_add(self.stagger_ms.saturating_mul(index as u32))
    }

    /// Frame delta of the headless loop in seconds.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}

/// Round `steps` to the nearest non-zero multiple of [`SLOT_COUNT`].
fn align_steps(steps: u32) -> u32 {
    let cycle = SLOT_COUNT as u32;
    (steps.saturating_add(cycle / 2) / cycle).max(1) * cycle
}
