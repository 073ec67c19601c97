//! Toroidal Game of Life core

pub mod io;
pub mod rules;
pub mod world;

pub use io::create_example_states;
pub use rules::{evolve, evolve_generations, next_state, should_be_alive};
pub use world::World;
