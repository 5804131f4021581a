//! Particle Arena - a 2D particle collision sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spatial grid, collision resolution)
//! - `config`: Runtime configuration with JSON loading and validation
//! - `error`: Crate-wide error type

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::{Error, Result};
pub use sim::{CollisionMode, Particle, Simulation, TickInput, tick};

/// Simulation tuning constants
pub mod consts {
    /// Time advanced per tick, in frame-units
    pub const SIM_DT: f32 = 1.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Spatial grid cell edge length
    pub const CELL_SIZE: f32 = 20.0;

    /// Default population size
    pub const NUM_PARTICLES: usize = 20;
    /// Wall inset for spawn positions
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Velocity components spawn in [-MAX_SPEED, MAX_SPEED]
    pub const MAX_SPEED: f32 = 2.0;
    /// Radius spawn range
    pub const RADIUS_MIN: f32 = 10.0;
    pub const RADIUS_MAX: f32 = 20.0;
    /// Mass spawn range
    pub const MASS_MIN: f32 = 1.0;
    pub const MASS_MAX: f32 = 5.0;
    /// Color channel floor; spawned colors stay visible on a dark background
    pub const COLOR_CHANNEL_MIN: u8 = 50;

    /// Default driver run length in ticks
    pub const DEFAULT_TICKS: u64 = 600;
}
