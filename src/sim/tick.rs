//! Fixed timestep simulation tick
//!
//! Advances the whole population by one frame: grid rebuild, motion
//! integration, then grid-guided pair resolution.

use std::collections::HashSet;

use super::collision::{CollisionMode, overlaps, resolve};
use super::state::{Particle, Simulation};

/// Input for a single tick.
///
/// The collision mode is caller state (a UI selection, a config field); it
/// is handed in fresh every tick rather than stored on the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub mode: CollisionMode,
}

/// Advance the simulation by one fixed timestep.
///
/// Phase order within a tick: rebuild the grid from the positions particles
/// currently hold, integrate motion (including wall reflection) for every
/// particle, then resolve overlaps discovered through the grid. Neighbor
/// queries in the last phase therefore run against buckets built from
/// pre-integration positions, and a pair may surface from either member's
/// walk or from just one of them; each unordered pair resolves at most once
/// per tick, whichever side finds it.
pub fn tick(sim: &mut Simulation, input: &TickInput, dt: f32) {
    sim.grid.clear();
    for (i, p) in sim.particles.iter().enumerate() {
        sim.grid.insert(i, p.pos);
    }

    let arena = sim.arena;
    for p in &mut sim.particles {
        p.integrate(dt, arena);
    }

    let mut resolved: HashSet<(usize, usize)> = HashSet::new();
    for i in 0..sim.particles.len() {
        let pos = sim.particles[i].pos;
        for j in sim.grid.neighbors(pos) {
            if j == i {
                continue;
            }
            // Stale buckets can hide a pair from one member's walk while the
            // other still sees it, so both directions are tested; the set
            // caps each unordered pair at a single resolution per tick.
            let pair = (i.min(j), i.max(j));
            if resolved.contains(&pair) {
                continue;
            }
            let (a, b) = pair_mut(&mut sim.particles, pair.0, pair.1);
            if overlaps(a, b) {
                resolve(a, b, input.mode);
                resolved.insert(pair);
                sim.collisions += 1;
            }
        }
    }

    sim.ticks += 1;
}

/// Disjoint mutable borrows of two population slots, `i < j`.
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert!(i < j);
    let (head, tail) = particles.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::SimConfig;
    use crate::sim::state::Rgb;

    fn particle(pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Particle {
        let color = Rgb {
            r: 120,
            g: 180,
            b: 240,
        };
        Particle::new(pos, vel, radius, mass, color).unwrap()
    }

    /// Simulation with a hand-placed population on the default 800x600 arena.
    fn test_sim(particles: Vec<Particle>) -> Simulation {
        let config = SimConfig {
            seed: Some(1),
            count: particles.len().max(1),
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(&config).unwrap();
        sim.particles = particles;
        sim
    }

    #[test]
    fn test_head_on_elastic_pair_swaps_velocities() {
        let mut sim = test_sim(vec![
            particle(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), 10.0, 1.0),
            particle(Vec2::new(119.0, 100.0), Vec2::new(-1.0, 0.0), 10.0, 1.0),
        ]);
        let input = TickInput {
            mode: CollisionMode::Elastic,
        };
        tick(&mut sim, &input, 1.0);

        assert_eq!(sim.particles()[0].pos, Vec2::new(101.0, 100.0));
        assert_eq!(sim.particles()[1].pos, Vec2::new(118.0, 100.0));
        assert_eq!(sim.particles()[0].vel, Vec2::new(-1.0, 0.0));
        assert_eq!(sim.particles()[1].vel, Vec2::new(1.0, 0.0));
        assert_eq!(sim.collisions(), 1);
    }

    #[test]
    fn test_head_on_inelastic_pair_stops_dead() {
        let mut sim = test_sim(vec![
            particle(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), 10.0, 1.0),
            particle(Vec2::new(119.0, 100.0), Vec2::new(-1.0, 0.0), 10.0, 1.0),
        ]);
        let input = TickInput {
            mode: CollisionMode::Inelastic,
        };
        tick(&mut sim, &input, 1.0);

        assert_eq!(sim.particles()[0].vel, Vec2::ZERO);
        assert_eq!(sim.particles()[1].vel, Vec2::ZERO);
        assert_eq!(sim.collisions(), 1);
    }

    #[test]
    fn test_a_lone_particle_never_collides_with_itself() {
        let mut sim = test_sim(vec![particle(
            Vec2::new(400.0, 300.0),
            Vec2::new(1.5, -0.5),
            10.0,
            2.0,
        )]);
        tick(&mut sim, &TickInput::default(), 1.0);

        assert_eq!(sim.particles()[0].vel, Vec2::new(1.5, -0.5));
        assert_eq!(sim.collisions(), 0);
    }

    #[test]
    fn test_distant_particles_pass_untouched() {
        let mut sim = test_sim(vec![
            particle(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), 5.0, 1.0),
            particle(Vec2::new(500.0, 400.0), Vec2::new(0.0, 1.0), 5.0, 1.0),
        ]);
        tick(&mut sim, &TickInput::default(), 1.0);

        assert_eq!(sim.particles()[0].vel, Vec2::new(1.0, 0.0));
        assert_eq!(sim.particles()[1].vel, Vec2::new(0.0, 1.0));
        assert_eq!(sim.collisions(), 0);
    }

    #[test]
    fn test_multiple_simultaneous_contacts_all_resolve() {
        // The middle particle overlaps both outer ones; both pairs resolve
        // within the same tick.
        let mut sim = test_sim(vec![
            particle(Vec2::new(100.0, 300.0), Vec2::new(1.0, 0.0), 10.0, 1.0),
            particle(Vec2::new(118.0, 300.0), Vec2::ZERO, 10.0, 1.0),
            particle(Vec2::new(136.0, 300.0), Vec2::new(-1.0, 0.0), 10.0, 1.0),
        ]);
        let input = TickInput {
            mode: CollisionMode::Elastic,
        };
        tick(&mut sim, &input, 1.0);
        assert_eq!(sim.collisions(), 2);
    }

    #[test]
    fn test_neighbor_buckets_reflect_tick_start_positions() {
        // Both movers close a multi-cell gap within one tick. The overlap
        // exists at the post-integration positions, but queries run against
        // buckets filled at tick start, so nothing resolves this tick.
        let mut sim = test_sim(vec![
            particle(Vec2::new(99.0, 300.0), Vec2::new(26.0, 0.0), 9.0, 1.0),
            particle(Vec2::new(165.0, 300.0), Vec2::new(-26.0, 0.0), 9.0, 1.0),
        ]);
        tick(&mut sim, &TickInput::default(), 1.0);

        let p = sim.particles();
        assert!(p[0].pos.distance(p[1].pos) <= p[0].radius + p[1].radius);
        assert_eq!(sim.collisions(), 0);
    }

    #[test]
    fn test_pair_seen_from_one_side_only_still_resolves() {
        // The mover crosses a cell boundary during integration, so its own
        // stale bucket hides it from the resting particle's walk; only the
        // mover's walk reaches the pair. It must still resolve, once.
        let mut sim = test_sim(vec![
            particle(Vec2::new(95.0, 300.0), Vec2::ZERO, 13.0, 1.0),
            particle(Vec2::new(120.5, 300.0), Vec2::new(-0.6, 0.0), 13.0, 1.0),
        ]);
        let input = TickInput {
            mode: CollisionMode::Elastic,
        };
        tick(&mut sim, &input, 1.0);

        let p = sim.particles();
        assert!(p[0].pos.distance(p[1].pos) <= p[0].radius + p[1].radius);
        assert_eq!(sim.particles()[0].vel, Vec2::new(-0.6, 0.0));
        assert_eq!(sim.particles()[1].vel, Vec2::ZERO);
        assert_eq!(sim.collisions(), 1);
    }

    #[test]
    fn test_tick_counter_advances() {
        let mut sim = test_sim(vec![particle(
            Vec2::new(400.0, 300.0),
            Vec2::ZERO,
            10.0,
            1.0,
        )]);
        let input = TickInput::default();
        tick(&mut sim, &input, 1.0);
        tick(&mut sim, &input, 1.0);
        assert_eq!(sim.ticks(), 2);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimConfig {
            seed: Some(99),
            ..SimConfig::default()
        };
        let input = TickInput::default();

        let mut a = Simulation::new(&config).unwrap();
        let mut b = Simulation::new(&config).unwrap();
        for _ in 0..120 {
            tick(&mut a, &input, 1.0);
            tick(&mut b, &input, 1.0);
        }
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.collisions(), b.collisions());
    }

    #[test]
    fn test_elastic_run_preserves_kinetic_energy() {
        // Wall reflections and elastic pair resolution both preserve speed
        // magnitudes, so total kinetic energy drifts only by rounding.
        let config = SimConfig {
            seed: Some(99),
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(&config).unwrap();
        let before = sim.kinetic_energy();

        let input = TickInput {
            mode: CollisionMode::Elastic,
        };
        for _ in 0..300 {
            tick(&mut sim, &input, 1.0);
        }

        let after = sim.kinetic_energy();
        assert!((before - after).abs() <= 1e-2 * before.max(1.0));
    }
}
