//! Render command - rasterize the particle field to a PNG

use super::particle_driver;
use crate::raster::{ImageSurface, BACKGROUND};
use anyhow::{Context, Result};
use heartlock_particles::ParticleMode;
use heartlock_scene::PresentationConfig;
use std::path::Path;
use std::time::Duration;

pub struct RenderArgs {
    pub config: PresentationConfig,
    pub output: String,
    pub frames: u32,
    pub width: u32,
    pub height: u32,
    pub mode: ParticleMode,
    pub seed: Option<u32>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        anyhow::bail!("Image size must be non-zero, got {}x{}", args.width, args.height);
    }

    println!("Rendering: {} frames ({} mode)", args.frames, args.mode);
    println!("  Output: {}", args.output);
    println!("  Size: {}x{}", args.width, args.height);

    let mut surface = ImageSurface::new(args.width, args.height, BACKGROUND);
    let mut driver = particle_driver(&args.config, surface.viewport(), args.mode, args.seed)?;

    // Nominal 60Hz timestamps
    for frame in 0..args.frames {
        let now = Duration::from_secs_f64(frame as f64 / 60.0);
        driver.frame(now, &mut surface);
    }

    surface
        .into_image()
        .save(Path::new(&args.output))
        .with_context(|| format!("Failed to write {}", args.output))?;

    println!("Saved to {}", args.output);
    Ok(())
}
