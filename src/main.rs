//! Gravity Balls headless runner
//!
//! Drives a session with a seeded wandering cursor and prints one JSON
//! snapshot per tick. Drawing is left to a host GUI.
//!
//! Usage: `gravity-balls [SETTINGS.json] [--ticks N] [--seed S]`

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use gravity_balls::sim::Bounds;
use gravity_balls::{PointerButton, PointerEvent, Session, Settings};

const DEFAULT_TICKS: u64 = 300;
const DEFAULT_SEED: u64 = 0x6261_6c6c;
/// Chance per tick of a primary click
const JUMP_CHANCE: f64 = 0.025;
/// Chance per tick of a secondary click
const RECOLOR_CHANCE: f64 = 0.002;
/// Largest cursor step per tick, in pixels
const CURSOR_STEP: f64 = 25.0;

struct Args {
    settings_path: Option<String>,
    ticks: u64,
    seed: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        settings_path: None,
        ticks: DEFAULT_TICKS,
        seed: DEFAULT_SEED,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ticks" => {
                let value = iter.next().ok_or("--ticks needs a value")?;
                args.ticks = value
                    .parse()
                    .map_err(|e| format!("bad --ticks value {value:?}: {e}"))?;
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value
                    .parse()
                    .map_err(|e| format!("bad --seed value {value:?}: {e}"))?;
            }
            _ if arg.starts_with("--") => return Err(format!("unknown option {arg}")),
            _ => args.settings_path = Some(arg),
        }
    }

    Ok(args)
}

/// Random-walk cursor standing in for a user's mouse
struct ScriptedPointer {
    rng: Pcg32,
    pos: DVec2,
}

impl ScriptedPointer {
    fn new(seed: u64, bounds: &Bounds) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            pos: DVec2::new(bounds.width / 2.0, bounds.height / 2.0),
        }
    }

    /// Pointer events for the next tick
    fn events(&mut self, bounds: &Bounds) -> Vec<PointerEvent> {
        let step = DVec2::new(
            self.rng.random_range(-CURSOR_STEP..=CURSOR_STEP),
            self.rng.random_range(-CURSOR_STEP..=CURSOR_STEP),
        );
        self.pos = (self.pos + step).clamp(DVec2::ZERO, DVec2::new(bounds.width, bounds.height));

        let mut events = vec![PointerEvent::Moved(self.pos)];
        if self.rng.random_bool(JUMP_CHANCE) {
            events.push(PointerEvent::Pressed(PointerButton::Primary));
        }
        if self.rng.random_bool(RECOLOR_CHANCE) {
            events.push(PointerEvent::Pressed(PointerButton::Secondary));
        }
        events
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match &args.settings_path {
        Some(path) => Settings::load_from(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let mut session = Session::new(&settings)?;
    let mut pointer = ScriptedPointer::new(args.seed, &session.state().bounds);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for _ in 0..args.ticks {
        let bounds = session.state().bounds;
        for event in pointer.events(&bounds) {
            session.handle_pointer(event);
        }
        session.on_timer();
        serde_json::to_writer(&mut out, &session.snapshot())?;
        writeln!(out)?;
    }
    out.flush()?;

    let snap = session.snapshot();
    log::info!(
        "Finished {} ticks, {} ball at ({:.1}, {:.1}), {}",
        snap.tick,
        snap.color.as_str(),
        snap.x,
        snap.y,
        session.title()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Gravity Balls (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            log::error!("{msg}");
            eprintln!("usage: gravity-balls [SETTINGS.json] [--ticks N] [--seed S]");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
