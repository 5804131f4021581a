//! Particle Arena entry point
//!
//! Headless driver: builds a simulation from an optional JSON config and
//! advances it at a fixed timestep, logging diagnostics as it goes.

use std::env;

use particle_arena::consts::SIM_DT;
use particle_arena::sim::{Simulation, TickInput, tick};
use particle_arena::{Result, SimConfig};

/// Diagnostics cadence in ticks
const LOG_EVERY: u64 = 60;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => SimConfig::load(&path)?,
        None => {
            log::info!("No config path given, using defaults");
            SimConfig::default()
        }
    };

    let mut sim = Simulation::new(&config)?;
    log::info!(
        "Running {} ticks over a {}x{} arena, mode {}",
        config.ticks,
        config.width,
        config.height,
        config.mode.as_str()
    );

    for _ in 0..config.ticks {
        let input = TickInput { mode: config.mode };
        tick(&mut sim, &input, SIM_DT);

        if sim.ticks() % LOG_EVERY == 0 {
            log_stats(&sim);
        }
    }

    let momentum = sim.momentum();
    log::info!(
        "Done: {} ticks, {} collisions, kinetic energy {:.3}, momentum ({:.3}, {:.3})",
        sim.ticks(),
        sim.collisions(),
        sim.kinetic_energy(),
        momentum.x,
        momentum.y
    );

    Ok(())
}

fn log_stats(sim: &Simulation) {
    let momentum = sim.momentum();
    log::info!(
        "tick {:5}: kinetic energy {:.3}, momentum ({:.3}, {:.3}), collisions {}",
        sim.ticks(),
        sim.kinetic_energy(),
        momentum.x,
        momentum.y,
        sim.collisions()
    );
}
