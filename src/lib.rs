//! Toroidal Game of Life
//!
//! Conway's Game of Life on a fixed-size rectangular grid with wrap-around
//! (toroidal) topology: each cell's Moore neighbourhood wraps across the
//! grid edges, so the grid behaves as a torus. The library covers world
//! construction, toroidal neighbour counting, generation stepping, random
//! seeding, text persistence, and human-readable rendering; the binary is a
//! thin driver over those operations.

pub mod config;
pub mod error;
pub mod life;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use life::{evolve, evolve_generations, next_state, World};
