//! Uniform spatial grid for neighbor queries
//!
//! Bucketing particles into fixed-size square cells cuts the collision pass
//! from O(n^2) pairwise tests to O(n*k), with k the local occupancy of the
//! 3x3 cell block around each particle. The grid is rebuilt from scratch
//! every tick and stores population indices, never references.

use std::collections::HashMap;

use glam::Vec2;

/// The 3x3 Moore neighborhood, own cell included.
const NEIGHBOR_OFFSETS: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Maps integer cell coordinates to the indices of particles whose centers
/// fall inside that cell. Coordinates are signed: wall penetration is never
/// clamped, so a center can sit at negative world coordinates for a tick.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<(i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    /// Cell coordinate containing a point (floor division on both axes).
    #[inline]
    fn cell_of(&self, pos: Vec2) -> (i32, i32) {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    /// Drop every bucket. Called once per tick before reinserting the
    /// population.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Bucket a particle index by its center position.
    pub fn insert(&mut self, index: usize, pos: Vec2) {
        let cell = self.cell_of(pos);
        self.cells.entry(cell).or_default().push(index);
    }

    /// All particle indices bucketed in the 3x3 cell block around `pos`.
    ///
    /// The query particle's own index is part of the result once inserted;
    /// callers filter self-pairs. Cell arithmetic saturates at the ends of
    /// the i32 range, so extreme coordinates stay queryable.
    pub fn neighbors(&self, pos: Vec2) -> impl Iterator<Item = usize> + '_ {
        let (col, row) = self.cell_of(pos);
        NEIGHBOR_OFFSETS.iter().flat_map(move |&(dx, dy)| {
            self.cells
                .get(&(col.saturating_add(dx), row.saturating_add(dy)))
                .map(|bucket| bucket.as_slice())
                .unwrap_or(&[])
                .iter()
                .copied()
        })
    }
}
