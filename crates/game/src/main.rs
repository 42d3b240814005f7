//! Rotorstrike - headless helicopter strafing run

use anyhow::{Context, Result};
use game::{driver, GameConfig};
use input::{Action, Keymap};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => GameConfig::load_from(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::load(),
    };

    let keymap = Keymap::default();
    println!("Rotorstrike controls:");
    for action in Action::ALL {
        println!("  {:<10} {:?}", action.name(), keymap.key_for(action));
    }

    log::info!(
        "Starting Rotorstrike: {} frames at {:.4}s, {} scripted actions",
        config.scenario.frames,
        config.scenario.dt,
        config.scenario.script.len()
    );

    let summary = driver::run(&config);

    log::info!(
        "Session over after {} frames ({:.2}s): {} shots, {} hits, {} expired",
        summary.frames,
        summary.elapsed_seconds,
        summary.shots,
        summary.hits,
        summary.expired
    );
    log::info!(
        "{} targets left, {} projectiles in flight, vehicle at {:?}, {} visuals",
        summary.targets_left,
        summary.projectiles_live,
        summary.vehicle_position,
        summary.instances
    );

    Ok(())
}
