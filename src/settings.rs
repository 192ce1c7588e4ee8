//! World settings
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::fs;
use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::{Bounds, Tuning, WorldState};

/// World size, ball and physics tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Initial client width
    pub world_width: f64,
    /// Initial client height
    pub world_height: f64,

    // === Ball ===
    pub ball_radius: f64,
    /// Starting horizontal speed (positive = right)
    pub horizontal_speed: f64,
    /// Starting vertical speed (positive = down)
    pub vertical_speed: f64,

    // === Physics ===
    pub resistance: f64,
    pub repulsion_intensity: f64,
    pub jump_force: f64,
    pub min_speed: f64,
    pub gravity: f64,

    // === Timer ===
    /// Host timer interval
    pub tick_interval_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            ball_radius: BALL_RADIUS,
            horizontal_speed: BALL_START_VX,
            vertical_speed: BALL_START_VY,

            resistance: RESISTANCE,
            repulsion_intensity: REPULSION_INTENSITY,
            jump_force: JUMP_FORCE,
            min_speed: MIN_SPEED,
            gravity: GRAVITY,

            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Read and validate settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings as pretty-printed JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ball_radius", self.ball_radius),
            ("horizontal_speed", self.horizontal_speed),
            ("vertical_speed", self.vertical_speed),
            ("resistance", self.resistance),
            ("repulsion_intensity", self.repulsion_intensity),
            ("jump_force", self.jump_force),
            ("min_speed", self.min_speed),
            ("gravity", self.gravity),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::invalid(name, format!("{value} is not a finite number")));
            }
        }

        for (name, value) in [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ball_radius", self.ball_radius),
        ] {
            if value <= 0.0 {
                return Err(Error::invalid(name, format!("must be positive, got {value}")));
            }
        }

        for (name, value) in [
            ("resistance", self.resistance),
            ("repulsion_intensity", self.repulsion_intensity),
            ("jump_force", self.jump_force),
            ("min_speed", self.min_speed),
        ] {
            if value < 0.0 {
                return Err(Error::invalid(name, format!("must not be negative, got {value}")));
            }
        }

        if !self.bounds().fits(self.ball_radius) {
            return Err(Error::invalid(
                "ball_radius",
                format!(
                    "ball of radius {} does not fit a {}x{} world",
                    self.ball_radius, self.world_width, self.world_height
                ),
            ));
        }

        if self.tick_interval_ms == 0 {
            return Err(Error::invalid("tick_interval_ms", "must be at least 1"));
        }

        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.world_width, self.world_height)
    }

    pub fn tuning(&self) -> Tuning {
        Tuning {
            resistance: self.resistance,
            repulsion_intensity: self.repulsion_intensity,
            jump_force: self.jump_force,
            min_speed: self.min_speed,
            gravity: self.gravity,
        }
    }

    /// Timer interval in seconds
    pub fn tick_dt(&self) -> f64 {
        f64::from(self.tick_interval_ms) / 1000.0
    }

    /// Initial world for these settings
    pub fn build_world(&self) -> WorldState {
        WorldState::new(
            self.bounds(),
            self.ball_radius,
            DVec2::new(self.horizontal_speed, self.vertical_speed),
            self.tuning(),
        )
    }
}
