//! Property tests for the world physics

use glam::DVec2;
use proptest::prelude::*;

use gravity_balls::sim::{Bounds, TickInput, Tuning, WorldState, jump, repulsion_impulse, tick};
use gravity_balls::{PointerButton, PointerEvent, Session, Settings};

const DT: f64 = 0.03;

fn world(width: f64, height: f64, radius: f64) -> WorldState {
    WorldState::new(
        Bounds::new(width, height),
        radius,
        DVec2::new(158.0, 200.0),
        Tuning::default(),
    )
}

fn input_strategy() -> impl Strategy<Value = (Option<(f64, f64)>, bool)> {
    (
        proptest::option::of((-100.0f64..2100.0, -100.0f64..2100.0)),
        any::<bool>(),
    )
}

proptest! {
    #[test]
    fn ball_stays_inside_world(
        width in 50.0f64..2000.0,
        height in 50.0f64..2000.0,
        radius in 1.0f64..20.0,
        inputs in proptest::collection::vec(input_strategy(), 1..200),
    ) {
        let mut state = world(width, height, radius);
        for (cursor, jump) in inputs {
            let input = TickInput {
                cursor: cursor.map(|(x, y)| DVec2::new(x, y)),
                jump,
                ..Default::default()
            };
            state = tick(&state, &input, DT);
            let pos = state.ball.pos;
            prop_assert!(pos.x >= radius && pos.x <= width - radius, "x = {}", pos.x);
            prop_assert!(pos.y >= radius && pos.y <= height - radius, "y = {}", pos.y);
        }
    }

    #[test]
    fn side_wall_reverses_horizontal_velocity(
        speed in 50.0f64..1000.0,
        gap in 0.0f64..1.0,
        y in 100.0f64..500.0,
    ) {
        let mut state = WorldState::default();
        let r = state.ball.radius;
        state.ball.pos = DVec2::new(state.bounds.width - r - gap, y);
        state.ball.vel = DVec2::new(speed, 0.0);
        let next = tick(&state, &TickInput::default(), DT);
        prop_assert!(next.ball.vel.x < 0.0);

        state.ball.pos = DVec2::new(r + gap, y);
        state.ball.vel = DVec2::new(-speed, 0.0);
        let next = tick(&state, &TickInput::default(), DT);
        prop_assert!(next.ball.vel.x > 0.0);
    }

    #[test]
    fn floor_reverses_vertical_velocity(
        speed in 50.0f64..1000.0,
        gap in 0.0f64..1.0,
        x in 100.0f64..700.0,
    ) {
        let mut state = WorldState::default();
        let r = state.ball.radius;
        state.ball.pos = DVec2::new(x, state.bounds.height - r - gap);
        state.ball.vel = DVec2::new(0.0, speed);
        let next = tick(&state, &TickInput::default(), DT);
        prop_assert!(next.ball.vel.y < 0.0);
    }

    #[test]
    fn repulsion_weakens_with_distance(
        near in 0.01f64..1000.0,
        stretch in 0.01f64..10.0,
        angle in 0.0f64..std::f64::consts::TAU,
        intensity in 1.0f64..1000.0,
    ) {
        let ball = DVec2::new(400.0, 300.0);
        let dir = DVec2::new(angle.cos(), angle.sin());
        let far = near * (1.0 + stretch);

        let strong = repulsion_impulse(ball, ball + dir * near, intensity).unwrap();
        let weak = repulsion_impulse(ball, ball + dir * far, intensity).unwrap();
        prop_assert!(strong.length() > weak.length());
        // Both push away from the cursor
        prop_assert!(strong.dot(dir) < 0.0);
        prop_assert!(weak.dot(dir) < 0.0);
    }

    #[test]
    fn jump_subtracts_jump_force(vx in -500.0f64..500.0, vy in -500.0f64..500.0) {
        let mut state = WorldState::default();
        state.ball.vel = DVec2::new(vx, vy);
        let next = jump(&state);
        prop_assert_eq!(next.ball.vel.y, vy - state.tuning.jump_force);
        prop_assert_eq!(next.ball.vel.x, vx);
    }
}

#[test]
fn sessions_fed_same_events_match() {
    let settings = Settings::default();
    let mut a = Session::new(&settings).unwrap();
    let mut b = Session::new(&settings).unwrap();

    let events = [
        PointerEvent::Moved(DVec2::new(390.0, 40.0)),
        PointerEvent::Pressed(PointerButton::Primary),
        PointerEvent::Moved(DVec2::new(100.0, 550.0)),
        PointerEvent::Pressed(PointerButton::Secondary),
    ];

    for event in events {
        a.handle_pointer(event);
        b.handle_pointer(event);
        a.advance(0.045);
        b.advance(0.045);
    }

    assert_eq!(a.state(), b.state());
    assert_eq!(a.snapshot(), b.snapshot());
}
