//! Pairwise collision detection and resolution
//!
//! Two-body circle contact: an exact distance test, then a normal/tangential
//! velocity decomposition with the 1-D collision formulas applied along the
//! contact normal. Tangential components pass through unchanged, so contact
//! is frictionless.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::state::Particle;
use crate::error::Error;

/// How overlapping pairs exchange momentum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionMode {
    /// Kinetic energy along the contact normal is conserved.
    #[default]
    Elastic,
    /// Both bodies leave with the shared momentum-weighted normal velocity.
    Inelastic,
}

impl CollisionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionMode::Elastic => "elastic",
            CollisionMode::Inelastic => "inelastic",
        }
    }
}

impl FromStr for CollisionMode {
    type Err = Error;

    /// Parse a mode name, case-insensitively. Unknown names are rejected,
    /// never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "elastic" => Ok(CollisionMode::Elastic),
            "inelastic" => Ok(CollisionMode::Inelastic),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// True when two particles touch or overlap: center distance no greater than
/// the radius sum. Tangent circles count as colliding; there is no epsilon.
#[inline]
pub fn overlaps(a: &Particle, b: &Particle) -> bool {
    a.pos.distance(b.pos) <= a.radius + b.radius
}

/// Exchange momentum between an overlapping pair, in place.
///
/// Velocities are split into components along the center-to-center normal
/// and the perpendicular tangent. Only the normal components change;
/// recomposing with the untouched tangential parts yields the outgoing
/// velocities. Positions are never adjusted here, so a pair can stay
/// overlapped for several ticks until the new velocities separate it.
///
/// Coincident centers leave both particles untouched: with no usable contact
/// normal the pair stays unresolved until integration moves the centers
/// apart.
pub fn resolve(a: &mut Particle, b: &mut Particle, mode: CollisionMode) {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    if dist == 0.0 {
        return;
    }

    let normal = delta / dist;
    let tangent = normal.perp();

    let v1n = normal.dot(a.vel);
    let v1t = tangent.dot(a.vel);
    let v2n = normal.dot(b.vel);
    let v2t = tangent.dot(b.vel);

    let (m1, m2) = (a.mass, b.mass);
    let (v1n_out, v2n_out) = match mode {
        CollisionMode::Elastic => (
            (v1n * (m1 - m2) + 2.0 * m2 * v2n) / (m1 + m2),
            (v2n * (m2 - m1) + 2.0 * m1 * v1n) / (m1 + m2),
        ),
        CollisionMode::Inelastic => {
            let shared = (v1n * m1 + v2n * m2) / (m1 + m2);
            (shared, shared)
        }
    };

    a.vel = normal * v1n_out + tangent * v1t;
    b.vel = normal * v2n_out + tangent * v2t;
}
