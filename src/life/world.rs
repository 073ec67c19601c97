//! Grid representation and utilities for the toroidal world

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-size rectangular Game of Life grid with wrap-around topology.
///
/// Cells are stored row-major; `true` is alive. Storage accessors
/// (`get`/`set`) take `(row, col)`, while the rule-facing operations
/// (`neighbours`/`next`) take `(x, y)` = (column, row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub height: usize,
    pub width: usize,
    pub cells: Vec<bool>,
}

impl World {
    /// Create a new all-dead world, fully allocated.
    pub fn new(height: i64, width: i64) -> Result<Self> {
        if height < 0 || width < 0 {
            return Err(Error::InvalidDimension { height, width });
        }

        let height = height as usize;
        let width = width as usize;

        Ok(Self {
            height,
            width,
            cells: vec![false; height * width],
        })
    }

    /// Build a world from a row-of-rows shape, validating rectangularity.
    ///
    /// Empty input yields the 0x0 world. Dimensions are derived from the
    /// data: row count and first-row length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::InconsistentRowLength {
                    row: i,
                    actual: row.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Convert 2D coordinates to the flat index.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell value at coordinates. Out-of-bounds cells read as dead.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::InvalidArgument(format!(
                "coordinates ({}, {}) out of bounds for {}x{} grid",
                row, col, self.height, self.width
            )));
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count live cells among the 8 Moore neighbours of `(x, y)`,
    /// wrapping each axis independently across the grid edges.
    ///
    /// The cell itself is excluded. On degenerate grids (a dimension of 1)
    /// wrapped offsets can land on the same cell more than once; the count
    /// is still the pure per-axis modulo result.
    pub fn neighbours(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let row = (y as isize + dy).rem_euclid(self.height as isize) as usize;
                let col = (x as isize + dx).rem_euclid(self.width as isize) as usize;

                if self.cells[self.index(row, col)] {
                    count += 1;
                }
            }
        }

        count
    }

    /// Seed the world so that `floor(percentage * height * width / 100)`
    /// cells are alive, uniformly distributed.
    ///
    /// The target count of live cells is placed at the front of the flat
    /// cell space and then shuffled. The randomness source is supplied by
    /// the caller; a fixed-seed RNG gives reproducible layouts.
    pub fn rand_init<R: Rng + ?Sized>(&mut self, percentage: u32, rng: &mut R) {
        let alive = percentage as usize * self.height * self.width / 100;

        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = i < alive;
        }

        self.cells.shuffle(rng);
    }

    /// Count total living cells.
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the world has no living cells.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Human-readable rendering: one line per row, every row
    /// newline-terminated, a green square per live cell and a fire glyph
    /// per dead cell.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col) { "🟩" } else { "🔥" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_world_creation() {
        let world = World::new(3, 4).unwrap();
        assert_eq!(world.height, 3);
        assert_eq!(world.width, 4);
        assert_eq!(world.cells.len(), 12);
        assert!(world.is_empty());
    }

    #[test]
    fn test_zero_dimensions() {
        let world = World::new(0, 0).unwrap();
        assert_eq!(world.height, 0);
        assert_eq!(world.width, 0);
        assert!(world.cells.is_empty());
    }

    #[test]
    fn test_negative_dimensions() {
        assert!(matches!(
            World::new(-1, 5),
            Err(Error::InvalidDimension { height: -1, width: 5 })
        ));
        assert!(matches!(
            World::new(5, -1),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let world = World::from_rows(rows).unwrap();
        assert_eq!(world.height, 2);
        assert_eq!(world.width, 3);
        assert_eq!(world.living_count(), 3);
        assert!(world.get(0, 0));
        assert!(world.get(1, 1));
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![true, false], vec![false]];
        assert!(matches!(
            World::from_rows(rows),
            Err(Error::InconsistentRowLength {
                row: 1,
                actual: 1,
                expected: 2,
            })
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut world = World::new(2, 2).unwrap();
        world.set(1, 0, true).unwrap();
        assert!(world.get(1, 0));
        assert!(!world.get(0, 1));
        assert!(world.set(2, 0, true).is_err());
    }

    #[test]
    fn test_neighbours_full_torus() {
        // On a fully-alive torus every cell has 8 live neighbours,
        // corners and edges included.
        let world = World::from_rows(vec![vec![true; 3]; 3]).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(world.neighbours(x, y), 8, "cell ({}, {})", x, y);
            }
        }

        let world = World::from_rows(vec![vec![true; 5]; 4]).unwrap();
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(world.neighbours(x, y), 8, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_neighbours_wrapping() {
        let rows = vec![
            vec![true, false],
            vec![false, true],
        ];
        let world = World::from_rows(rows).unwrap();

        // Offsets from (0, 0) wrap onto the diagonal cell four times.
        assert_eq!(world.neighbours(0, 0), 4);
        assert_eq!(world.neighbours(1, 1), 4);
    }

    #[test]
    fn test_neighbours_excludes_self() {
        let mut world = World::new(3, 3).unwrap();
        world.set(1, 1, true).unwrap();
        assert_eq!(world.neighbours(1, 1), 0);
        assert_eq!(world.neighbours(0, 0), 1);
    }

    #[test]
    fn test_rand_init_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut world = World::new(6, 6).unwrap();
        world.rand_init(0, &mut rng);
        assert_eq!(world.living_count(), 0);

        world.rand_init(100, &mut rng);
        assert_eq!(world.living_count(), 36);
    }

    #[test]
    fn test_rand_init_target_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut world = World::new(10, 10).unwrap();
        world.rand_init(37, &mut rng);
        assert_eq!(world.living_count(), 37);
    }

    #[test]
    fn test_rand_init_reproducible() {
        let mut a = World::new(8, 8).unwrap();
        let mut b = World::new(8, 8).unwrap();

        a.rand_init(50, &mut ChaCha8Rng::seed_from_u64(1234));
        b.rand_init(50, &mut ChaCha8Rng::seed_from_u64(1234));

        assert_eq!(a, b);
    }

    #[test]
    fn test_render_glyphs() {
        let world = World::from_rows(vec![vec![true, false]]).unwrap();
        assert_eq!(world.render(), "🟩🔥\n");

        let world = World::from_rows(vec![vec![false], vec![true]]).unwrap();
        assert_eq!(world.render(), "🔥\n🟩\n");
    }
}
