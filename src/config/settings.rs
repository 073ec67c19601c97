//! Configuration settings for the simulation driver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seeding: SeedingConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub height: i64,
    pub width: i64,
    pub generations: usize,
    pub tick_millis: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedingConfig {
    /// Percentage of cells seeded alive when no initial state file is given.
    pub fill_percentage: u32,
    /// Fixed RNG seed; omit for a fresh seed per run.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub initial_state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub final_state_file: Option<PathBuf>,
    pub render: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                height: 20,
                width: 40,
                generations: 100,
                tick_millis: 100,
            },
            seeding: SeedingConfig {
                fill_percentage: 30,
                seed: None,
            },
            input: InputConfig {
                initial_state_file: None,
            },
            output: OutputConfig {
                final_state_file: None,
                render: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.height < 0 || self.simulation.width < 0 {
            anyhow::bail!(
                "Grid dimensions must be non-negative, got {}x{}",
                self.simulation.height,
                self.simulation.width
            );
        }

        if self.seeding.fill_percentage > 100 {
            anyhow::bail!(
                "Fill percentage must be at most 100, got {}",
                self.seeding.fill_percentage
            );
        }

        if let Some(ref file) = self.input.initial_state_file {
            if !file.exists() {
                anyhow::bail!("Initial state file does not exist: {}", file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(height) = cli_overrides.height {
            self.simulation.height = height;
        }
        if let Some(width) = cli_overrides.width {
            self.simulation.width = width;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(fill_percentage) = cli_overrides.fill_percentage {
            self.seeding.fill_percentage = fill_percentage;
        }
        if let Some(seed) = cli_overrides.seed {
            self.seeding.seed = Some(seed);
        }
        if let Some(ref input_file) = cli_overrides.initial_state_file {
            self.input.initial_state_file = Some(input_file.clone());
        }
        if let Some(ref output_file) = cli_overrides.final_state_file {
            self.output.final_state_file = Some(output_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub generations: Option<usize>,
    pub fill_percentage: Option<u32>,
    pub seed: Option<u64>,
    pub initial_state_file: Option<PathBuf>,
    pub final_state_file: Option<PathBuf>,
}
