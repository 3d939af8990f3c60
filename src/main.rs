//! Bounce Tycoon headless entry point
//!
//! Runs an autopilot session for a number of simulated seconds and prints the
//! final HUD as JSON.
//!
//! Usage: `bounce-tycoon [seconds] [tuning.json]`

use std::process::ExitCode;

use bounce_tycoon::sim::Command;
use bounce_tycoon::{Session, Tuning};

/// Simulated seconds when none are given
const DEFAULT_SECONDS: f32 = 600.0;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seconds = match args.next() {
        Some(arg) => match arg.parse::<f32>() {
            Ok(s) if s >= 0.0 => s,
            _ => {
                log::error!("Invalid duration: {arg}");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_SECONDS,
    };

    let tuning = match args.next() {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("Could not load {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Bounce Tycoon starting with seed {seed} for {seconds}s");

    let mut session = Session::with_tuning(seed, &tuning);
    session.autopilot = true;
    session.push(Command::ToggleBoss);
    session.run_for(seconds);

    let stats = &session.state.stats;
    log::info!(
        "Finished {} ticks: {} purchases, {} stars, {} bosses",
        stats.ticks,
        stats.purchases,
        stats.stars_collected,
        stats.bosses_defeated
    );

    match serde_json::to_string_pretty(&session.hud()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Could not encode HUD: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_tuning(path: &str) -> Result<Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(Tuning::from_json(&json)?)
}
