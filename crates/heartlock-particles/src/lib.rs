//! Heartlock Particles - ambient background particle field
//!
//! Provides the per-frame simulation behind the presentation's ambient scenes:
//! - Free wandering with velocity reflection at the viewport edges
//! - Spring-damper attraction toward fixed points on a parametric heart curve
//! - Breakpoint-based population sizing, rebuilt on (debounced) resize
//! - Circle draw calls against any `DrawSurface`

pub mod config;
pub mod field;
pub mod heart;
pub mod particle;
pub mod rand;

use heartlock_core::{Result, Viewport};
use heartlock_runtime::{DrawSurface, RuntimeSystem};
use tracing::info;

pub use config::ParticleConfig;
pub use field::{population_for, ParticleField};
pub use heart::{heart_point, heart_scale};
pub use particle::{Particle, ParticleMode, HEART_COLOR};
pub use rand::{ParticleRng, RandomSource};

/// The particle system, ticked by the render driver through `RuntimeSystem`
pub struct ParticleSystem<R: RandomSource = ParticleRng> {
    field: ParticleField,
    rng: R,
    config: ParticleConfig,
}

impl ParticleSystem<ParticleRng> {
    /// Seeded from `config.seed` when set, otherwise from the clock
    pub fn new(config: ParticleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ParticleRng::new(seed),
            None => ParticleRng::from_time(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> ParticleSystem<R> {
    pub fn with_rng(config: ParticleConfig, rng: R) -> Self {
        Self {
            field: ParticleField::new(),
            rng,
            config,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn mode(&self) -> ParticleMode {
        self.field.mode()
    }

    pub fn set_mode(&mut self, mode: ParticleMode) {
        if mode != self.field.mode() {
            info!(%mode, "[particles] mode changed");
        }
        self.field.set_mode(mode);
    }
}

impl Default for ParticleSystem<ParticleRng> {
    fn default() -> Self {
        Self::new(ParticleConfig::default())
    }
}

impl<R: RandomSource> RuntimeSystem for ParticleSystem<R> {
    fn initialize(&mut self, viewport: Viewport) -> Result<()> {
        self.field.initialize(viewport, &mut self.rng, &self.config);
        info!(
            count = self.field.len(),
            width = viewport.width,
            height = viewport.height,
            "[particles] field populated"
        );
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        !self.field.is_empty()
    }

    fn update(&mut self, viewport: Viewport, surface: &mut dyn DrawSurface) -> Result<()> {
        self.field.tick(viewport, surface, &mut self.rng, &self.config);
        Ok(())
    }

    fn name(&self) -> &str {
        "particles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartlock_runtime::{DriverConfig, RecordingSurface, RenderDriver};
    use std::time::Duration;

    fn seeded() -> ParticleSystem {
        ParticleSystem::new(ParticleConfig {
            seed: Some(42),
            ..ParticleConfig::default()
        })
    }

    #[test]
    fn seeded_systems_are_reproducible() {
        let vp = Viewport::new(1024.0, 768.0);
        let mut a = seeded();
        let mut b = seeded();
        a.initialize(vp).unwrap();
        b.initialize(vp).unwrap();
        let pa: Vec<_> = a.field().particles().iter().map(|p| p.position).collect();
        let pb: Vec<_> = b.field().particles().iter().map(|p| p.position).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn driver_runs_particle_frames() {
        let mut driver = RenderDriver::new(
            seeded(),
            Viewport::new(1024.0, 768.0),
            &DriverConfig::default(),
        );
        let mut surface = RecordingSurface::new();
        driver.initialize_system().unwrap();
        driver.start();

        for i in 0..5 {
            driver.frame(Duration::from_millis(i * 16), &mut surface);
        }
        assert_eq!(surface.clear_count(), 5);
        assert_eq!(surface.circle_count(), 5 * 150);
    }

    #[test]
    fn resize_repopulates_for_new_breakpoint() {
        let mut driver = RenderDriver::new(
            seeded(),
            Viewport::new(1024.0, 768.0),
            &DriverConfig::default(),
        );
        driver.initialize_system().unwrap();
        assert_eq!(driver.system().field().len(), 150);

        driver.resize(Duration::from_millis(1000), Viewport::new(414.0, 896.0));
        assert_eq!(driver.system().field().len(), 150);
        assert!(driver.poll(Duration::from_millis(1300)));
        assert_eq!(driver.system().field().len(), 75);
    }

    #[test]
    fn mode_survives_repopulation() {
        let mut system = seeded();
        system.set_mode(ParticleMode::Heart);
        system.initialize(Viewport::new(800.0, 600.0)).unwrap();
        assert_eq!(system.mode(), ParticleMode::Heart);
        assert!(system.is_initialized());
    }
}
