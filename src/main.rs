//! Command line driver for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::time::Duration;
use toroidal_life::{
    config::{CliOverrides, Settings},
    life::{create_example_states, next_state, World},
    utils::{format_world_summary, ColorOutput, WorldSummary},
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<i64>,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<i64>,

        /// Number of generations to advance (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Percentage of cells seeded alive (overrides config)
        #[arg(short, long)]
        fill: Option<u32>,

        /// Fixed RNG seed for reproducible runs (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Initial state file to load instead of random seeding
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// File to save the final state to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable per-generation rendering
        #[arg(long)]
        no_render: bool,
    },

    /// Create example configuration and seed state files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print the rendering of a saved state
    Render {
        /// State file to render
        #[arg(short, long)]
        state: PathBuf,
    },

    /// Show statistics for a saved state
    Analyze {
        /// State file to analyze
        #[arg(short, long)]
        state: PathBuf,

        /// Emit the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            height,
            width,
            generations,
            fill,
            seed,
            input,
            output,
            no_render,
        } => run_command(
            config, height, width, generations, fill, seed, input, output, no_render,
        ),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Render { state } => render_command(state),
        Commands::Analyze { state, json } => analyze_command(state, json),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_command(
    config_path: PathBuf,
    height: Option<i64>,
    width: Option<i64>,
    generations: Option<usize>,
    fill: Option<u32>,
    seed: Option<u64>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    no_render: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        height,
        width,
        generations,
        fill_percentage: fill,
        seed,
        initial_state_file: input,
        final_state_file: output,
    };
    settings.merge_with_cli(&cli_overrides);
    if no_render {
        settings.output.render = false;
    }

    settings.validate().context("Configuration validation failed")?;

    // Build the initial world: load a saved state or seed randomly
    let mut world = match settings.input.initial_state_file {
        Some(ref path) => {
            let mut world = World::new(0, 0)?;
            world
                .load_state(path)
                .with_context(|| format!("Failed to load state from {}", path.display()))?;
            world
        }
        None => {
            let mut world = World::new(settings.simulation.height, settings.simulation.width)?;
            let mut rng = match settings.seeding.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            world.rand_init(settings.seeding.fill_percentage, &mut rng);
            world
        }
    };

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Running {}x{} world for {} generation(s)",
            world.height, world.width, settings.simulation.generations
        ))
    );

    // Double-buffered stepping: compute into the spare grid, then swap.
    let mut buffer = World::new(world.height as i64, world.width as i64)?;
    for generation in 0..settings.simulation.generations {
        if settings.output.render {
            print!("\x1b[2J\x1b[H");
            println!("Generation {}:", generation);
            print!("{}", world.render());
            std::thread::sleep(Duration::from_millis(settings.simulation.tick_millis));
        }

        next_state(&world, &mut buffer)?;
        std::mem::swap(&mut world, &mut buffer);
    }

    if settings.output.render {
        print!("\x1b[2J\x1b[H");
        println!("Generation {}:", settings.simulation.generations);
        print!("{}", world.render());
    }

    if let Some(ref path) = settings.output.final_state_file {
        world
            .save_state(path)
            .with_context(|| format!("Failed to save state to {}", path.display()))?;
        println!(
            "{}",
            ColorOutput::success(&format!("Final state saved to {}", path.display()))
        );
    }

    println!("\n{}", format_world_summary(&world));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let states_dir = directory.join("input/states");

    for dir in [&config_dir, &states_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_states(&states_dir).context("Failed to create example states")?;
    println!("Created example states in: {}", states_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration in {}", config_path.display());
    println!("2. Run: cargo run -- run --config {}", config_path.display());
    println!(
        "3. Or start from a pattern: cargo run -- run --input {}",
        states_dir.join("glider.txt").display()
    );

    Ok(())
}

fn render_command(state_path: PathBuf) -> Result<()> {
    let mut world = World::new(0, 0)?;
    world
        .load_state(&state_path)
        .with_context(|| format!("Failed to load state from {}", state_path.display()))?;

    print!("{}", world.render());
    Ok(())
}

fn analyze_command(state_path: PathBuf, json: bool) -> Result<()> {
    let mut world = World::new(0, 0)?;
    world
        .load_state(&state_path)
        .with_context(|| format!("Failed to load state from {}", state_path.display()))?;

    if json {
        let summary = WorldSummary::of(&world);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", world.render());
        println!("{}", format_world_summary(&world));
    }

    Ok(())
}
