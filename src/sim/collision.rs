//! Wall collision detection and response
//!
//! The ball is a circle inside an axis-aligned box. On contact the velocity
//! component is reflected to point away from the wall and the centre is
//! pulled back so the ball only touches the edge.

use super::state::{Ball, Bounds};

/// Which walls the ball touched during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    pub fn merge(self, other: WallContact) -> WallContact {
        WallContact {
            left: self.left || other.left,
            right: self.right || other.right,
            top: self.top || other.top,
            bottom: self.bottom || other.bottom,
        }
    }
}

/// Reflect off the left and right edges
pub fn bounce_side_walls(ball: &mut Ball, bounds: &Bounds) -> WallContact {
    let mut contact = WallContact::default();
    let r = ball.radius;

    if ball.pos.x + r >= bounds.width {
        contact.right = true;
        ball.vel.x = -ball.vel.x.abs();
        ball.pos.x = bounds.width - r;
    }

    if ball.pos.x - r <= 0.0 {
        contact.left = true;
        ball.vel.x = ball.vel.x.abs();
        ball.pos.x = r;
    }

    contact
}

/// Reflect off the floor and ceiling
pub fn bounce_floor_and_ceiling(ball: &mut Ball, bounds: &Bounds) -> WallContact {
    let mut contact = WallContact::default();
    let r = ball.radius;

    if ball.pos.y + r >= bounds.height {
        contact.bottom = true;
        ball.vel.y = -ball.vel.y.abs();
        ball.pos.y = bounds.height - r;
    }

    if ball.pos.y - r <= 0.0 {
        contact.top = true;
        ball.vel.y = ball.vel.y.abs();
        ball.pos.y = r;
    }

    contact
}

/// Pull the centre back inside the world without touching velocity.
///
/// Returns true if the position changed.
pub fn contain(ball: &mut Ball, bounds: &Bounds) -> bool {
    let clamped = bounds.clamp_center(ball.pos, ball.radius);
    let moved = clamped != ball.pos;
    ball.pos = clamped;
    moved
}
