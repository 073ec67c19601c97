//! Shared driver utilities

pub mod display;

pub use display::{format_world_summary, Color, ColorOutput, WorldSummary};
