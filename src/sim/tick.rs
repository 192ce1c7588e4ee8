//! Fixed timestep simulation tick
//!
//! Advances the world by one timeframe. Pointer actions are separate entry
//! points so hosts can apply them as their events arrive.

use glam::DVec2;

use super::collision::{bounce_floor_and_ceiling, bounce_side_walls, contain};
use super::physics;
use super::state::{BallColor, Bounds, WorldState};

/// Input commands batched for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest cursor position, repels the ball
    pub cursor: Option<DVec2>,
    /// Primary click
    pub jump: bool,
    /// Secondary click
    pub recolor: bool,
    /// New client size
    pub resize: Option<Bounds>,
}

/// Apply `input`, then advance the world by `dt` seconds
pub fn tick(state: &WorldState, input: &TickInput, dt: f64) -> WorldState {
    let mut next = *state;

    if let Some(bounds) = input.resize {
        next = resize(&next, bounds);
    }
    if let Some(cursor) = input.cursor {
        next = repel(&next, cursor);
    }
    if input.jump {
        next = jump(&next);
    }
    if input.recolor {
        next = recolor(&next);
    }

    if dt > 0.0 && dt.is_finite() {
        simulate_timeframe(&mut next, dt);
        next.time_ticks += 1;
    } else {
        log::debug!("Skipping timeframe with dt = {dt}");
    }

    log::trace!(
        "tick {}: pos=({:.2}, {:.2}) vel=({:.2}, {:.2})",
        next.time_ticks,
        next.ball.pos.x,
        next.ball.pos.y,
        next.ball.vel.x,
        next.ball.vel.y
    );

    next
}

fn simulate_timeframe(state: &mut WorldState, dt: f64) {
    let tuning = state.tuning;
    let bounds = state.bounds;
    let ball = &mut state.ball;

    ball.vel = physics::apply_damping(ball.vel, tuning.resistance, tuning.min_speed, dt);
    ball.pos = physics::integrate(ball.pos, ball.vel, dt);

    let contact = bounce_side_walls(ball, &bounds).merge(bounce_floor_and_ceiling(ball, &bounds));
    if contact.any() {
        log::trace!("Wall contact {contact:?}");
    }

    // Gravity gets its own position step after the bounce
    ball.vel = physics::apply_gravity(ball.vel, tuning.gravity, dt);
    ball.pos.y += ball.vel.y * dt;

    contain(ball, &bounds);
}

/// Push the ball away from the cursor
pub fn repel(state: &WorldState, cursor: DVec2) -> WorldState {
    let mut next = *state;
    match physics::repulsion_impulse(next.ball.pos, cursor, next.tuning.repulsion_intensity) {
        Some(impulse) => next.ball.vel += impulse,
        None => log::debug!(
            "Cursor at ({:.2}, {:.2}) gives no usable repulsion",
            cursor.x,
            cursor.y
        ),
    }
    next
}

/// Kick the ball upward by the jump force
pub fn jump(state: &WorldState) -> WorldState {
    let mut next = *state;
    next.ball.vel = physics::jump(next.ball.vel, next.tuning.jump_force);
    next
}

/// Switch the ball to its alternate colour
pub fn recolor(state: &WorldState) -> WorldState {
    let mut next = *state;
    next.ball.color = BallColor::Beige;
    next
}

/// Change world bounds, keeping the ball inside.
///
/// Non-finite sizes are ignored.
pub fn resize(state: &WorldState, bounds: Bounds) -> WorldState {
    let mut next = *state;
    if !bounds.width.is_finite() || !bounds.height.is_finite() {
        log::debug!(
            "Ignoring resize to {}x{}, keeping {}x{}",
            bounds.width,
            bounds.height,
            next.bounds.width,
            next.bounds.height
        );
        return next;
    }
    next.bounds = bounds;
    contain(&mut next.ball, &bounds);
    log::debug!("World resized to {}x{}", bounds.width, bounds.height);
    next
}
