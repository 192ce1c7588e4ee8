//! Host adapter
//!
//! Owns the current world and maps host callbacks onto the simulation:
//! a fixed-interval timer drives `tick`, pointer events call the pointer
//! entry points immediately, and size changes update the bounds.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_SUBSTEPS;
use crate::error::Result;
use crate::settings::Settings;
use crate::sim::{
    BallColor, BallSprite, Bounds, TickInput, WorldState, jump, recolor, repel, resize, tick,
};

/// Mouse button reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button, makes the ball jump
    Primary,
    /// Right button, recolours the ball
    Secondary,
    Other,
}

/// Pointer callback from the host window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(DVec2),
    Pressed(PointerButton),
}

/// Per-tick record for tracing a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: BallColor,
}

impl From<&WorldState> for Snapshot {
    fn from(state: &WorldState) -> Self {
        Self {
            tick: state.time_ticks,
            x: state.ball.pos.x,
            y: state.ball.pos.y,
            vx: state.ball.vel.x,
            vy: state.ball.vel.y,
            color: state.ball.color,
        }
    }
}

/// A running world bound to a host timer
#[derive(Debug, Clone)]
pub struct Session {
    state: WorldState,
    /// Timer interval in seconds
    dt: f64,
    /// Elapsed time not yet simulated
    accumulator: f64,
    /// Last pointer position seen
    cursor: Option<DVec2>,
}

impl Session {
    /// Validate settings and create the initial world
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let state = settings.build_world();
        log::info!(
            "Session created: world {}x{}, ball r={} at ({:.1}, {:.1}), tick {} ms",
            state.bounds.width,
            state.bounds.height,
            state.ball.radius,
            state.ball.pos.x,
            state.ball.pos.y,
            settings.tick_interval_ms
        );
        Ok(Self {
            state,
            dt: settings.tick_dt(),
            accumulator: 0.0,
            cursor: None,
        })
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Timer interval in seconds
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn cursor(&self) -> Option<DVec2> {
        self.cursor
    }

    /// Window title showing the cursor position
    pub fn title(&self) -> String {
        match self.cursor {
            Some(c) => format!("Cursor ({}, {})", c.x, c.y),
            None => "Gravity Balls".to_string(),
        }
    }

    /// Placement of the ball shape for the host to draw
    pub fn sprite(&self) -> BallSprite {
        self.state.sprite()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    /// Apply a pointer event right away
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(pos) => {
                self.cursor = Some(pos);
                self.state = repel(&self.state, pos);
            }
            PointerEvent::Pressed(PointerButton::Primary) => {
                self.state = jump(&self.state);
            }
            PointerEvent::Pressed(PointerButton::Secondary) => {
                self.state = recolor(&self.state);
            }
            PointerEvent::Pressed(PointerButton::Other) => {}
        }
    }

    /// Host client size changed
    pub fn resize(&mut self, width: f64, height: f64) {
        self.state = resize(&self.state, Bounds::new(width, height));
    }

    /// One timer tick
    pub fn on_timer(&mut self) -> &WorldState {
        self.state = tick(&self.state, &TickInput::default(), self.dt);
        &self.state
    }

    /// Run as many whole ticks as fit in the elapsed time.
    ///
    /// Leftover time carries into the next call. Returns the number of
    /// ticks run, at most `MAX_SUBSTEPS`.
    pub fn advance(&mut self, elapsed_secs: f64) -> u32 {
        if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.accumulator += elapsed_secs;
        }

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < MAX_SUBSTEPS {
            self.on_timer();
            self.accumulator -= self.dt;
            steps += 1;
        }

        if self.accumulator >= self.dt {
            log::debug!(
                "Dropping {:.3}s of simulation after {} substeps",
                self.accumulator,
                steps
            );
            self.accumulator %= self.dt;
        }

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn session() -> Session {
        Session::new(&Settings::default()).expect("default settings are valid")
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            ball_radius: -1.0,
            ..Default::default()
        };
        assert!(Session::new(&settings).is_err());
    }

    #[test]
    fn test_primary_click_jumps() {
        let mut s = session();
        let vy = s.state().ball.vel.y;
        s.handle_pointer(PointerEvent::Pressed(PointerButton::Primary));
        assert_eq!(s.state().ball.vel.y, vy - JUMP_FORCE);
    }

    #[test]
    fn test_secondary_click_recolours() {
        let mut s = session();
        s.handle_pointer(PointerEvent::Pressed(PointerButton::Other));
        assert_eq!(s.sprite().color, BallColor::GreenYellow);
        s.handle_pointer(PointerEvent::Pressed(PointerButton::Secondary));
        assert_eq!(s.sprite().color, BallColor::Beige);
    }

    #[test]
    fn test_pointer_move_repels_and_sets_title() {
        let mut s = session();
        assert_eq!(s.title(), "Gravity Balls");
        let ball = s.state().ball.pos;
        let vx = s.state().ball.vel.x;

        // Cursor to the right of the ball pushes it left
        s.handle_pointer(PointerEvent::Moved(ball + DVec2::new(20.0, 0.0)));
        assert!(s.state().ball.vel.x < vx);
        assert_eq!(s.title(), format!("Cursor ({}, {})", ball.x + 20.0, ball.y));
    }

    #[test]
    fn test_advance_runs_whole_ticks() {
        let mut s = session();
        assert_eq!(s.advance(0.02), 0);
        assert_eq!(s.advance(0.02), 1);
        assert_eq!(s.state().time_ticks, 1);
        assert_eq!(s.advance(0.065), 2);
        assert_eq!(s.state().time_ticks, 3);
    }

    #[test]
    fn test_advance_caps_substeps() {
        let mut s = session();
        assert_eq!(s.advance(10.0), MAX_SUBSTEPS);
        assert!(s.accumulator < s.dt());
        assert_eq!(s.advance(f64::NAN), 0);
    }

    #[test]
    fn test_resize_updates_bounds() {
        let mut s = session();
        s.resize(300.0, 200.0);
        assert_eq!(s.state().bounds, Bounds::new(300.0, 200.0));
        for _ in 0..100 {
            s.on_timer();
        }
        let ball = s.state().ball;
        assert!(s.state().bounds.contains(ball.pos, ball.radius));
    }

    #[test]
    fn test_resize_with_nan_keeps_bounds() {
        let mut s = session();
        let before = *s.state();
        s.resize(f64::NAN, 600.0);
        assert_eq!(*s.state(), before);
        s.on_timer();
        let ball = s.state().ball;
        assert!(s.state().bounds.contains(ball.pos, ball.radius));
    }

    #[test]
    fn test_snapshot_tracks_state() {
        let mut s = session();
        s.on_timer();
        let snap = s.snapshot();
        assert_eq!(snap.tick, 1);
        assert_eq!(snap.x, s.state().ball.pos.x);
        assert_eq!(snap.vy, s.state().ball.vel.y);
    }
}
