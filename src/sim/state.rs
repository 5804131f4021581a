//! Simulation state and core types
//!
//! The particle population, arena bounds, and everything a frontend needs to
//! draw a frame live here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::grid::SpatialGrid;
use crate::config::SimConfig;
use crate::consts::COLOR_CHANNEL_MIN;
use crate::error::{Error, Result};

/// An RGB display tag. Physics never reads it; a frontend does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fixed rectangular arena bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// A circular body with constant velocity between collisions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub color: Rgb,
}

impl Particle {
    /// Create a particle, rejecting parameters that cannot collide sensibly.
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, mass: f32, color: Rgb) -> Result<Self> {
        if !pos.is_finite() || !vel.is_finite() {
            return Err(Error::InvalidParam(format!(
                "position and velocity must be finite, got pos {pos}, vel {vel}"
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidParam(format!(
                "radius must be > 0, got {radius}"
            )));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(Error::InvalidParam(format!("mass must be > 0, got {mass}")));
        }
        Ok(Self {
            pos,
            vel,
            radius,
            mass,
            color,
        })
    }

    /// Advance position by one timestep, then reflect off arena walls.
    ///
    /// Wall contact only negates the velocity component on the touched axis;
    /// the position stays where integration put it, so a fast particle can
    /// overhang a wall for a tick before the flipped velocity carries it back
    /// inside.
    pub fn integrate(&mut self, dt: f32, arena: Arena) {
        self.pos += self.vel * dt;

        if self.pos.x - self.radius < 0.0 || self.pos.x + self.radius > arena.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - self.radius < 0.0 || self.pos.y + self.radius > arena.height {
            self.vel.y = -self.vel.y;
        }
    }

    /// Kinetic energy, m/2 * v^2
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// Complete simulation state: population, spatial grid, arena, counters.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) particles: Vec<Particle>,
    pub(crate) grid: SpatialGrid,
    pub(crate) arena: Arena,
    /// Spawn seed for reproducibility
    seed: u64,
    pub(crate) ticks: u64,
    /// Cumulative count of resolved pairs
    pub(crate) collisions: u64,
}

impl Simulation {
    /// Build a simulation from a validated config, spawning `config.count`
    /// particles with a seeded RNG. Identical seeds produce identical
    /// populations.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Pcg32::seed_from_u64(seed);
        let arena = Arena {
            width: config.width,
            height: config.height,
        };

        let mut particles = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let pos = Vec2::new(
                rng.random_range(config.spawn_margin..=config.width - config.spawn_margin),
                rng.random_range(config.spawn_margin..=config.height - config.spawn_margin),
            );
            let vel = Vec2::new(
                rng.random_range(-config.max_speed..=config.max_speed),
                rng.random_range(-config.max_speed..=config.max_speed),
            );
            let radius = rng.random_range(config.radius_min..=config.radius_max);
            let mass = rng.random_range(config.mass_min..=config.mass_max);
            let color = Rgb {
                r: rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
                g: rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
                b: rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
            };
            particles.push(Particle::new(pos, vel, radius, mass, color)?);
        }

        if config.cell_size < 2.0 * config.radius_max {
            log::warn!(
                "cell size {} is below the largest possible diameter {}; pairs spanning non-adjacent cells can go unseen",
                config.cell_size,
                2.0 * config.radius_max
            );
        }
        log::info!("Spawned {} particles with seed {}", particles.len(), seed);

        Ok(Self {
            particles,
            grid: SpatialGrid::new(config.cell_size),
            arena,
            seed,
            ticks: 0,
            collisions: 0,
        })
    }

    /// Read-only view of the population, in stable spawn order. This is the
    /// per-tick snapshot a frontend draws from.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Arena bounds
    #[inline]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Spawn seed
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ticks advanced so far
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Pairs resolved since construction
    #[inline]
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Total kinetic energy of the population
    pub fn kinetic_energy(&self) -> f32 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Total momentum of the population
    pub fn momentum(&self) -> Vec2 {
        self.particles.iter().map(|p| p.vel * p.mass).sum()
    }
}
