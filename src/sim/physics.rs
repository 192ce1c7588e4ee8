//! Force and integration steps
//!
//! Each step is a pure function over vectors so the tick can compose them
//! in a fixed order.

use glam::DVec2;

/// Below this distance the cursor is treated as sitting on the ball centre
pub const MIN_REPULSION_DISTANCE: f64 = f64::EPSILON;

/// Damp velocity proportionally to `dt`, stopping slow horizontal drift
pub fn apply_damping(vel: DVec2, resistance: f64, min_speed: f64, dt: f64) -> DVec2 {
    let mut damped = vel - vel * dt * resistance;
    if damped.x.abs() < min_speed {
        damped.x = 0.0;
    }
    damped
}

/// Explicit Euler position step
#[inline]
pub fn integrate(pos: DVec2, vel: DVec2, dt: f64) -> DVec2 {
    pos + vel * dt
}

/// Gravity pulls toward larger y (screen coordinates)
#[inline]
pub fn apply_gravity(vel: DVec2, gravity: f64, dt: f64) -> DVec2 {
    vel + DVec2::new(0.0, gravity * dt)
}

/// Velocity change pushing the ball away from the cursor.
///
/// Magnitude is `intensity / distance`. Returns `None` when the cursor sits
/// on the ball centre and the direction is undefined, or when the impulse
/// overflows.
pub fn repulsion_impulse(ball_pos: DVec2, cursor: DVec2, intensity: f64) -> Option<DVec2> {
    let away = ball_pos - cursor;
    let distance = away.length();
    if !distance.is_finite() || distance < MIN_REPULSION_DISTANCE {
        return None;
    }
    let impulse = away / distance * (intensity / distance);
    impulse.is_finite().then_some(impulse)
}

/// Instant upward kick
#[inline]
pub fn jump(vel: DVec2, jump_force: f64) -> DVec2 {
    vel - DVec2::new(0.0, jump_force)
}
