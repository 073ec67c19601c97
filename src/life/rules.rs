//! Generation transition rules

use super::World;
use crate::error::{Error, Result};

/// Next-generation state of a cell given its current state and live
/// neighbour count: survival on 2 or 3, birth on exactly 3, death otherwise.
pub fn should_be_alive(alive: bool, neighbours: u8) -> bool {
    match (alive, neighbours) {
        (true, 2) | (true, 3) | (false, 3) => true,
        _ => false,
    }
}

impl World {
    /// Next-generation state of the cell at column `x`, row `y`.
    pub fn next(&self, x: usize, y: usize) -> bool {
        should_be_alive(self.get(y, x), self.neighbours(x, y))
    }
}

/// Compute the next generation of `source` into `destination`.
///
/// The whole generation is read from the stable `source` snapshot
/// (simultaneous-update semantics); the borrow rules already rule out
/// aliasing. Shapes must match exactly.
pub fn next_state(source: &World, destination: &mut World) -> Result<()> {
    if source.height != destination.height || source.width != destination.width {
        return Err(Error::DimensionMismatch {
            src_height: source.height,
            src_width: source.width,
            dst_height: destination.height,
            dst_width: destination.width,
        });
    }

    for y in 0..source.height {
        for x in 0..source.width {
            let idx = destination.index(y, x);
            destination.cells[idx] = source.next(x, y);
        }
    }

    Ok(())
}

/// Advance one generation, returning the new world.
pub fn evolve(world: &World) -> World {
    let mut next = World {
        height: world.height,
        width: world.width,
        cells: vec![false; world.cells.len()],
    };
    // Shapes are identical by construction.
    next_state(world, &mut next).expect("freshly allocated destination matches source shape");
    next
}

/// Advance the world a number of generations.
pub fn evolve_generations(mut world: World, generations: usize) -> World {
    for _ in 0..generations {
        world = evolve(&world);
    }
    world
}
