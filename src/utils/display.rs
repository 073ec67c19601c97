//! Display and output formatting utilities

use crate::life::World;
use serde::Serialize;

/// Grid statistics for the driver's summary output.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub height: usize,
    pub width: usize,
    pub living_cells: usize,
    pub density_percent: f64,
}

impl WorldSummary {
    /// Collect statistics from a world.
    pub fn of(world: &World) -> Self {
        let total = world.height * world.width;
        let living_cells = world.living_count();
        let density_percent = if total > 0 {
            living_cells as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            height: world.height,
            width: world.width,
            living_cells,
            density_percent,
        }
    }
}

/// Format a short statistics block for console output.
pub fn format_world_summary(world: &World) -> String {
    let summary = WorldSummary::of(world);
    let mut output = String::new();

    output.push_str(&format!("Grid: {}x{}\n", summary.height, summary.width));
    output.push_str(&format!("Living cells: {}\n", summary.living_cells));
    output.push_str(&format!("Density: {:.1}%\n", summary.density_percent));

    output
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
