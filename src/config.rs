//! Runtime simulation configuration
//!
//! Everything the driver needs to build and run a simulation: arena bounds,
//! grid cell size, spawn ranges, collision mode, seed, and run length.
//! Loadable from a JSON file; the defaults reproduce the classic 800x600
//! twenty-particle setup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::CollisionMode;

/// Simulation configuration. Fields missing from a JSON file fall back to
/// their defaults, so partial configs are fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width in world units
    pub width: f32,
    /// Arena height in world units
    pub height: f32,
    /// Spatial grid cell edge length
    pub cell_size: f32,
    /// Number of particles to spawn
    pub count: usize,
    /// Wall inset for spawn positions
    pub spawn_margin: f32,
    /// Velocity components spawn in [-max_speed, max_speed]
    pub max_speed: f32,
    /// Radius spawn range
    pub radius_min: f32,
    pub radius_max: f32,
    /// Mass spawn range
    pub mass_min: f32,
    pub mass_max: f32,
    /// Collision mode applied each tick
    pub mode: CollisionMode,
    /// Spawn seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Number of ticks the driver runs
    pub ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            cell_size: CELL_SIZE,
            count: NUM_PARTICLES,
            spawn_margin: SPAWN_MARGIN,
            max_speed: MAX_SPEED,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            mass_min: MASS_MIN,
            mass_max: MASS_MAX,
            mode: CollisionMode::default(),
            seed: None,
            ticks: DEFAULT_TICKS,
        }
    }
}

impl SimConfig {
    /// Check that every parameter can produce a well-formed simulation.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::InvalidParam(format!(
                "width must be > 0, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidParam(format!(
                "height must be > 0, got {}",
                self.height
            )));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(Error::InvalidParam(format!(
                "cell_size must be > 0, got {}",
                self.cell_size
            )));
        }
        if self.count == 0 {
            return Err(Error::InvalidParam("count must be > 0".into()));
        }
        if !(self.spawn_margin.is_finite() && self.spawn_margin >= 0.0) {
            return Err(Error::InvalidParam(format!(
                "spawn_margin must be >= 0, got {}",
                self.spawn_margin
            )));
        }
        if 2.0 * self.spawn_margin > self.width.min(self.height) {
            return Err(Error::InvalidParam(format!(
                "spawn_margin {} leaves no spawn area inside a {}x{} arena",
                self.spawn_margin, self.width, self.height
            )));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(Error::InvalidParam(format!(
                "max_speed must be >= 0, got {}",
                self.max_speed
            )));
        }
        if !(self.radius_min.is_finite()
            && self.radius_max.is_finite()
            && self.radius_min > 0.0
            && self.radius_min <= self.radius_max)
        {
            return Err(Error::InvalidParam(format!(
                "radius range [{}, {}] must satisfy 0 < min <= max",
                self.radius_min, self.radius_max
            )));
        }
        if !(self.mass_min.is_finite()
            && self.mass_max.is_finite()
            && self.mass_min > 0.0
            && self.mass_min <= self.mass_max)
        {
            return Err(Error::InvalidParam(format!(
                "mass range [{}, {}] must satisfy 0 < min <= max",
                self.mass_min, self.mass_max
            )));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }
}
