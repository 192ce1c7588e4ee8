//! World state and core simulation types
//!
//! Everything the physics step reads or writes lives here. The state is a
//! small `Copy` value: every update produces a new one.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fill colour of the ball shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallColor {
    #[default]
    GreenYellow,
    /// Set by a secondary click
    Beige,
}

impl BallColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallColor::GreenYellow => "GreenYellow",
            BallColor::Beige => "Beige",
        }
    }
}

/// The ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position (screen coordinates, y down)
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    #[serde(default)]
    pub color: BallColor,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64) -> Self {
        Self {
            pos,
            vel,
            radius,
            color: BallColor::default(),
        }
    }
}

/// Size of the rectangular world, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a ball of this radius fits on both axes
    pub fn fits(&self, radius: f64) -> bool {
        self.width >= 2.0 * radius && self.height >= 2.0 * radius
    }

    /// Nearest legal centre for a ball of `radius`.
    ///
    /// On an axis too small for the ball the centre sits in the middle.
    pub fn clamp_center(&self, pos: DVec2, radius: f64) -> DVec2 {
        DVec2::new(
            clamp_axis(pos.x, radius, self.width),
            clamp_axis(pos.y, radius, self.height),
        )
    }

    /// Whether `pos` is a legal centre for a ball of `radius`
    pub fn contains(&self, pos: DVec2, radius: f64) -> bool {
        self.clamp_center(pos, radius) == pos
    }
}

#[inline]
fn clamp_axis(value: f64, radius: f64, extent: f64) -> f64 {
    if extent < 2.0 * radius {
        extent / 2.0
    } else {
        // No panic on a NaN extent
        value.max(radius).min(extent - radius)
    }
}

/// Tunable physics coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Fraction of velocity lost per second
    pub resistance: f64,
    pub repulsion_intensity: f64,
    pub jump_force: f64,
    /// Horizontal speed snapped to zero below this
    pub min_speed: f64,
    pub gravity: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            resistance: RESISTANCE,
            repulsion_intensity: REPULSION_INTENSITY,
            jump_force: JUMP_FORCE,
            min_speed: MIN_SPEED,
            gravity: GRAVITY,
        }
    }
}

/// Where the host should place the ball shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSprite {
    pub left: f64,
    pub top: f64,
    /// Width and height of the ellipse
    pub size: f64,
    pub color: BallColor,
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub ball: Ball,
    pub bounds: Bounds,
    pub tuning: Tuning,
    /// Timeframes simulated so far
    #[serde(default)]
    pub time_ticks: u64,
}

impl WorldState {
    /// Create a world with the ball horizontally centred, touching the top edge
    pub fn new(bounds: Bounds, radius: f64, start_vel: DVec2, tuning: Tuning) -> Self {
        let pos = bounds.clamp_center(DVec2::new(bounds.width / 2.0, radius), radius);
        Self {
            ball: Ball::new(pos, start_vel, radius),
            bounds,
            tuning,
            time_ticks: 0,
        }
    }

    pub fn sprite(&self) -> BallSprite {
        let r = self.ball.radius;
        BallSprite {
            left: self.ball.pos.x - r,
            top: self.ball.pos.y - r,
            size: r * 2.0,
            color: self.ball.color,
        }
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(
            Bounds::default(),
            BALL_RADIUS,
            DVec2::new(BALL_START_VX, BALL_START_VY),
            Tuning::default(),
        )
    }
}
