//! `[particles]` configuration (parsed from TOML)

use heartlock_core::{HeartlockError, Result};
use serde::Deserialize;

/// Tunables for population, wander motion, and the heart attractor
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Viewports narrower than this get the mobile population
    pub mobile_breakpoint: f32,
    pub mobile_count: usize,
    pub desktop_count: usize,
    /// Initial velocity per axis is uniform in [-wander_speed/2, wander_speed/2)
    pub wander_speed: f32,
    /// Per-tick chance of a velocity perturbation in wander mode
    pub jitter_chance: f32,
    /// Perturbation per axis is uniform in [-jitter_strength/2, jitter_strength/2)
    pub jitter_strength: f32,
    /// Speed cap applied after a perturbation. `None` leaves drift unbounded.
    pub max_wander_speed: Option<f32>,
    pub size_min: f32,
    pub size_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Fraction of the offset to the heart target added to velocity each tick
    pub spring: f32,
    /// Velocity multiplier applied each heart tick
    pub damping: f32,
    /// Heart scale is `min(width, height) / heart_scale_divisor`
    pub heart_scale_divisor: f32,
    /// Fixed RNG seed; time-derived when absent
    pub seed: Option<u32>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            mobile_count: 75,
            desktop_count: 150,
            wander_speed: 1.0,
            jitter_chance: 0.01,
            jitter_strength: 0.5,
            max_wander_speed: None,
            size_min: 1.0,
            size_max: 3.0,
            opacity_min: 0.2,
            opacity_max: 0.7,
            spring: 0.03,
            damping: 0.9,
            heart_scale_divisor: 40.0,
            seed: None,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.mobile_count == 0 || self.desktop_count == 0 {
            return Err(HeartlockError::Config(
                "particles.mobile_count and particles.desktop_count must be positive".into(),
            ));
        }
        if !(self.size_min > 0.0 && self.size_max >= self.size_min) {
            return Err(HeartlockError::Config(format!(
                "particles.size_min must be positive and not above size_max ({} > {})",
                self.size_min, self.size_max
            )));
        }
        check_non_negative("particles.mobile_breakpoint", self.mobile_breakpoint)?;
        check_non_negative("particles.wander_speed", self.wander_speed)?;
        check_non_negative("particles.jitter_strength", self.jitter_strength)?;
        // Keeps the heart spring-damper convergent for any allowed damping
        check_range("particles.spring", self.spring, 0.0, 1.0)?;
        check_range("particles.damping", self.damping, 0.0, 1.0)?;
        check_range("particles.jitter_chance", self.jitter_chance, 0.0, 1.0)?;
        check_range("particles.opacity_min", self.opacity_min, 0.0, 1.0)?;
        check_range("particles.opacity_max", self.opacity_max, 0.0, 1.0)?;
        if self.heart_scale_divisor <= 0.0 {
            return Err(HeartlockError::Config(
                "particles.heart_scale_divisor must be positive".into(),
            ));
        }
        if let Some(max) = self.max_wander_speed {
            if max <= 0.0 {
                return Err(HeartlockError::Config(
                    "particles.max_wander_speed must be positive when set".into(),
                ));
            }
        }
        Ok(())
    }
}

fn check_non_negative(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HeartlockError::Config(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )))
    }
}

fn check_range(field: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(HeartlockError::ValueOutOfRange {
            field: field.to_string(),
            min: min as f64,
            max: max as f64,
            value: value as f64,
        })
    }
}
