//! Gravity Balls - a ball that falls, bounces and runs from the cursor
//!
//! Core modules:
//! - `sim`: Pure simulation (world state, physics steps, wall collisions)
//! - `session`: Host adapter turning timer ticks and pointer events into sim calls
//! - `settings`: JSON configuration for the world and its tuning
//! - `error`: Crate error type

pub mod error;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use session::{PointerButton, PointerEvent, Session, Snapshot};
pub use settings::Settings;

/// Simulation defaults
pub mod consts {
    /// Host timer interval in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 30;
    /// Maximum ticks run per `Session::advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default world size (host client area)
    pub const WORLD_WIDTH: f64 = 800.0;
    pub const WORLD_HEIGHT: f64 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    pub const BALL_START_VX: f64 = 158.0;
    pub const BALL_START_VY: f64 = 200.0;

    /// Downward acceleration (pixels/s², y grows downward)
    pub const GRAVITY: f64 = 9.8;
    /// Velocity damping per second
    pub const RESISTANCE: f64 = 0.1;
    /// Numerator of the inverse-distance cursor repulsion
    pub const REPULSION_INTENSITY: f64 = 100.0;
    /// Instant upward velocity change on jump
    pub const JUMP_FORCE: f64 = 100.0;
    /// Horizontal speed below which the ball stops sliding
    pub const MIN_SPEED: f64 = 5.0;
}
