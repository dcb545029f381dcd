//! The particle collection: population policy, shared mode, bulk tick

use crate::config::ParticleConfig;
use crate::particle::{Particle, ParticleMode};
use crate::rand::RandomSource;
use heartlock_core::Viewport;
use heartlock_runtime::DrawSurface;

/// Population for `viewport`: the mobile count below the breakpoint width
pub fn population_for(viewport: Viewport, config: &ParticleConfig) -> usize {
    if viewport.width < config.mobile_breakpoint {
        config.mobile_count
    } else {
        config.desktop_count
    }
}

/// Ordered particles sharing one behavior mode
///
/// Order only affects draw sequence. The population is fixed between
/// `initialize` calls; there is no partial add or remove.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    mode: ParticleMode,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every particle with a fresh one sized for `viewport`
    pub fn initialize(
        &mut self,
        viewport: Viewport,
        rng: &mut dyn RandomSource,
        config: &ParticleConfig,
    ) {
        let count = population_for(viewport, config);
        self.particles = (0..count)
            .map(|_| Particle::spawn(viewport, rng, config))
            .collect();
    }

    /// Switch every particle's behavior from the next tick on.
    /// Particle state is left alone so the motion blends into the new mode.
    pub fn set_mode(&mut self, mode: ParticleMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> ParticleMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Clear the surface, then update and draw each particle in order
    pub fn tick(
        &mut self,
        viewport: Viewport,
        surface: &mut dyn DrawSurface,
        rng: &mut dyn RandomSource,
        config: &ParticleConfig,
    ) {
        surface.clear(viewport);
        for particle in &mut self.particles {
            particle.update(self.mode, viewport, rng, config);
            particle.draw(surface);
        }
    }

    /// Mean distance from each particle to its heart target, `None` when empty
    pub fn mean_heart_distance(&self, viewport: Viewport, config: &ParticleConfig) -> Option<f32> {
        if self.particles.is_empty() {
            return None;
        }
        let total: f32 = self
            .particles
            .iter()
            .map(|p| p.position.distance(p.heart_target(viewport, config)))
            .sum();
        Some(total / self.particles.len() as f32)
    }
}
