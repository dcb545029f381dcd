//! Heartlock CLI - headless runs of the Heartlock presentation

mod commands;
mod raster;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{render, simulate, walkthrough};
use heartlock_particles::ParticleMode;
use heartlock_scene::PresentationConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "heartlock")]
#[command(about = "Lock puzzle, scene sequence, and ambient particle field, driven headless", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a presentation config file (TOML)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the particle field for a number of frames and report statistics
    Simulate {
        /// Frames to run
        #[arg(long, default_value = "600")]
        frames: u32,

        /// Viewport width in logical units
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Viewport height in logical units
        #[arg(long, default_value = "720")]
        height: f32,

        /// Behavior mode (wander or heart)
        #[arg(long, value_parser = parse_mode, default_value = "wander")]
        mode: ParticleMode,

        /// RNG seed (overrides the config)
        #[arg(long)]
        seed: Option<u32>,

        /// Print a progress line every N frames (0 disables)
        #[arg(long, default_value = "120")]
        report_every: u32,
    },

    /// Run the particle field and write the last frame to a PNG image
    Render {
        /// Output image path
        #[arg(short, long, default_value = "particles.png")]
        output: String,

        /// Frames to run before capturing
        #[arg(long, default_value = "300")]
        frames: u32,

        /// Image width in pixels
        #[arg(long, default_value = "1280")]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value = "720")]
        height: u32,

        /// Behavior mode (wander or heart)
        #[arg(long, value_parser = parse_mode, default_value = "heart")]
        mode: ParticleMode,

        /// RNG seed (overrides the config)
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Dial a combination, then step through the scenes against a recording host
    Walkthrough {
        /// Combination to dial (comma-separated, e.g. 5,2,9); defaults to the configured one
        #[arg(long, value_parser = parse_combination)]
        combination: Option<[u8; 3]>,

        /// "Next" presses after the unlock
        #[arg(long, default_value = "8")]
        advances: u32,

        /// Frames to run between presses
        #[arg(long, default_value = "30")]
        frames_per_scene: u32,

        /// Viewport width in logical units
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Viewport height in logical units
        #[arg(long, default_value = "720")]
        height: f32,
    },
}

fn parse_mode(s: &str) -> Result<ParticleMode, String> {
    s.parse::<ParticleMode>().map_err(|e| e.to_string())
}

fn parse_combination(s: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 comma-separated digits, got {}", parts.len()));
    }
    let mut digits = [0u8; 3];
    for (digit, part) in digits.iter_mut().zip(&parts) {
        let value: u8 = part
            .trim()
            .parse()
            .map_err(|e| format!("invalid digit '{}': {}", part.trim(), e))?;
        if value > 9 {
            return Err(format!("digit {} is out of range 0-9", value));
        }
        *digit = value;
    }
    Ok(digits)
}

/// Filter used when RUST_LOG is unset; the target prefix covers every heartlock_* crate
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "heartlock=debug"
    } else {
        "heartlock=info"
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_target(false)
        .init();
}

fn load_config(path: Option<&str>) -> Result<PresentationConfig> {
    match path {
        Some(p) => PresentationConfig::load(Path::new(p))
            .with_context(|| format!("Failed to load config {}", p)),
        None => Ok(PresentationConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Simulate {
            frames,
            width,
            height,
            mode,
            seed,
            report_every,
        } => simulate::run(simulate::SimulateArgs {
            config,
            frames,
            width,
            height,
            mode,
            seed,
            report_every,
        }),
        Commands::Render {
            output,
            frames,
            width,
            height,
            mode,
            seed,
        } => render::run(render::RenderArgs {
            config,
            output,
            frames,
            width,
            height,
            mode,
            seed,
        }),
        Commands::Walkthrough {
            combination,
            advances,
            frames_per_scene,
            width,
            height,
        } => walkthrough::run(walkthrough::WalkthroughArgs {
            config,
            combination,
            advances,
            frames_per_scene,
            width,
            height,
        }),
    }
}
