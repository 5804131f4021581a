//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (spawning is the sole source of randomness)
//! - Stable iteration order (population order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{CollisionMode, overlaps, resolve};
pub use grid::SpatialGrid;
pub use state::{Arena, Particle, Rgb, Simulation};
pub use tick::{TickInput, tick};
