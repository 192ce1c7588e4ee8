//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure:
//! - State in, state out
//! - Caller-supplied timestep only
//! - No rendering, windowing or timer dependencies

pub mod collision;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{WallContact, bounce_floor_and_ceiling, bounce_side_walls, contain};
pub use physics::repulsion_impulse;
pub use state::{Ball, BallColor, BallSprite, Bounds, Tuning, WorldState};
pub use tick::{TickInput, jump, recolor, repel, resize, tick};
