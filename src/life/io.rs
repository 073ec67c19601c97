//! File I/O for world state
//!
//! Format: one line per row, '1' for alive and '0' for dead, rows separated
//! by a single newline with no trailing newline after the final row.

use super::World;
use crate::error::{Error, Result};
use itertools::Itertools;
use std::path::Path;

impl World {
    /// Serialize the grid to the persisted text format.
    pub fn to_save_string(&self) -> String {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| if self.get(row, col) { '1' } else { '0' })
                    .collect::<String>()
            })
            .join("\n")
    }

    /// Parse a world from the persisted text format.
    ///
    /// Each line becomes one row; '1' maps to alive and any other character
    /// to dead. All rows must have equal length. Empty content yields the
    /// 0x0 world; a trailing newline is tolerated.
    pub fn from_save_string(content: &str) -> Result<Self> {
        let rows = content
            .lines()
            .map(|line| line.chars().map(|ch| ch == '1').collect())
            .collect();

        Self::from_rows(rows)
    }

    /// Write the grid to a file in the persisted text format.
    pub fn save_state<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("save path is empty".to_string()));
        }

        std::fs::write(path, self.to_save_string())?;
        Ok(())
    }

    /// Replace this world with the state loaded from a file.
    ///
    /// Height and width are derived from the loaded data. On any failure
    /// (unreadable file, ragged rows) the current grid is left untouched.
    pub fn load_state<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        *self = Self::from_save_string(&content)?;
        Ok(())
    }
}

/// Create example seed state files for experimentation.
pub fn create_example_states<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)?;

    // Glider (moving pattern)
    std::fs::write(dir.join("glider.txt"), "00100\n10100\n01100\n00000\n00000")?;

    // Blinker (period-2 oscillator), padded so wraparound stays out of play
    std::fs::write(dir.join("blinker.txt"), "00000\n00000\n01110\n00000\n00000")?;

    // Block (still life)
    std::fs::write(dir.join("block.txt"), "0000\n0110\n0110\n0000")?;

    // Beacon (period-2 oscillator)
    std::fs::write(dir.join("beacon.txt"), "110000\n110000\n001100\n001100")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_to_save_string() {
        let world = World::from_rows(vec![
            vec![false, true, false],
            vec![true, false, true],
        ])
        .unwrap();

        // No trailing newline after the final row.
        assert_eq!(world.to_save_string(), "010\n101");
    }

    #[test]
    fn test_from_save_string() {
        let world = World::from_save_string("010\n101\n010").unwrap();
        assert_eq!(world.height, 3);
        assert_eq!(world.width, 3);
        assert_eq!(world.living_count(), 4);
        assert!(world.get(0, 1));
        assert!(world.get(1, 0));
        assert!(world.get(1, 2));
        assert!(world.get(2, 1));
    }

    #[test]
    fn test_from_save_string_permissive_characters() {
        // Anything that is not '1' reads as dead.
        let world = World::from_save_string("1x0\n.1 ").unwrap();
        assert_eq!(world.living_count(), 2);
        assert!(world.get(0, 0));
        assert!(world.get(1, 1));
    }

    #[test]
    fn test_from_save_string_tolerates_trailing_newline() {
        let with = World::from_save_string("01\n10\n").unwrap();
        let without = World::from_save_string("01\n10").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_from_save_string_empty() {
        let world = World::from_save_string("").unwrap();
        assert_eq!(world.height, 0);
        assert_eq!(world.width, 0);
    }

    #[test]
    fn test_from_save_string_ragged() {
        assert!(matches!(
            World::from_save_string("010\n11\n010"),
            Err(Error::InconsistentRowLength {
                row: 1,
                actual: 2,
                expected: 3,
            })
        ));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.txt");

        let original = World::from_save_string("101\n010\n101").unwrap();
        original.save_state(&path).unwrap();

        let mut loaded = World::new(0, 0).unwrap();
        loaded.load_state(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_save_empty_path() {
        let world = World::new(2, 2).unwrap();
        assert!(matches!(
            world.save_state(""),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempdir().unwrap();
        let mut world = World::from_save_string("11\n00").unwrap();
        let before = world.clone();

        let result = world.load_state(temp_dir.path().join("no_such_file.txt"));

        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(world, before);
    }

    #[test]
    fn test_failed_load_leaves_grid_untouched() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("ragged.txt");
        std::fs::write(&path, "010\n11\n010").unwrap();

        let mut world = World::from_save_string("11\n00").unwrap();
        let before = world.clone();

        let result = world.load_state(&path);

        assert!(matches!(result, Err(Error::InconsistentRowLength { .. })));
        assert_eq!(world, before);
    }

    #[test]
    fn test_create_example_states() {
        let temp_dir = tempdir().unwrap();
        create_example_states(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let mut glider = World::new(0, 0).unwrap();
        glider.load_state(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.height, 5);
        assert_eq!(glider.width, 5);
        assert_eq!(glider.living_count(), 5);
    }
}
