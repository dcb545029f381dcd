//! CLI command implementations

pub mod render;
pub mod simulate;
pub mod walkthrough;

use heartlock_core::Viewport;
use heartlock_particles::{ParticleMode, ParticleSystem};
use heartlock_runtime::RenderDriver;
use heartlock_scene::PresentationConfig;

/// A started driver with a populated field in `mode`
pub(crate) fn particle_driver(
    config: &PresentationConfig,
    viewport: Viewport,
    mode: ParticleMode,
    seed: Option<u32>,
) -> heartlock_core::Result<RenderDriver<ParticleSystem>> {
    let mut particles = config.particles.clone();
    if seed.is_some() {
        particles.seed = seed;
    }
    let mut driver = RenderDriver::new(ParticleSystem::new(particles), viewport, &config.driver);
    driver.initialize_system()?;
    driver.system_mut().set_mode(mode);
    driver.start();
    Ok(driver)
}
