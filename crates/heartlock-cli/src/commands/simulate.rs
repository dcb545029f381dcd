//! Simulate command - headless particle run with statistics

use super::particle_driver;
use anyhow::Result;
use heartlock_core::Viewport;
use heartlock_particles::ParticleMode;
use heartlock_runtime::RecordingSurface;
use heartlock_scene::PresentationConfig;
use std::time::Instant;

pub struct SimulateArgs {
    pub config: PresentationConfig,
    pub frames: u32,
    pub width: f32,
    pub height: f32,
    pub mode: ParticleMode,
    pub seed: Option<u32>,
    pub report_every: u32,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let viewport = Viewport::new(args.width, args.height);
    println!(
        "Simulating {} frames at {}x{} ({} mode)",
        args.frames, args.width, args.height, args.mode
    );

    let mut driver = particle_driver(&args.config, viewport, args.mode, args.seed)?;
    let mut surface = RecordingSurface::new();
    let particles = &args.config.particles;

    // Wall-clock timestamps, so the clock reports the real cost of each tick
    let start = Instant::now();
    for frame in 1..=args.frames {
        driver.frame(start.elapsed(), &mut surface);

        if args.report_every > 0 && frame % args.report_every == 0 {
            let distance = driver
                .system()
                .field()
                .mean_heart_distance(viewport, particles)
                .unwrap_or(0.0);
            println!("  frame {:>6}: mean heart distance {:>9.2}", frame, distance);
        }
    }

    let system = driver.system();
    let field = system.field();
    let inside = field
        .particles()
        .iter()
        .filter(|p| viewport.contains(p.position))
        .count();
    let clock = driver.clock();

    println!();
    println!("Particles:            {}", field.len());
    println!("Mode:                 {}", system.mode());
    println!("Frames drawn:         {}", surface.clear_count());
    println!("Draw calls:           {}", surface.circle_count());
    println!(
        "Mean heart distance:  {:.2}",
        field.mean_heart_distance(viewport, particles).unwrap_or(0.0)
    );
    println!("Inside viewport:      {}/{}", inside, field.len());
    println!(
        "Frame rate:           {:.0} fps ({} over budget)",
        clock.average_fps(),
        clock.frames_over_budget
    );

    Ok(())
}
