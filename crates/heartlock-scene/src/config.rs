//! Presentation configuration, loaded from TOML
//!
//! Every section is optional and every field falls back to its default, so a
//! config file only needs to name what it changes:
//!
//! ```toml
//! [lock]
//! combination = [5, 2, 9]
//! unlock_delay_ms = 1500
//!
//! [scenes]
//! total = 9
//! ambient_scene = 8
//! ambient_mode = "wander"
//!
//! [particles]
//! desktop_count = 150
//! seed = 42
//!
//! [driver]
//! resize_debounce_ms = 300
//! ```

use heartlock_core::{HeartlockError, Result};
use heartlock_particles::{ParticleConfig, ParticleMode};
use heartlock_runtime::DriverConfig;
use serde::Deserialize;
use std::path::Path;

use crate::lock::DIAL_COUNT;

/// `[lock]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    pub combination: [u8; DIAL_COUNT],
    pub error_message: String,
    pub success_message: String,
    /// Delay between unlocking and advancing to the next scene
    pub unlock_delay_ms: u64,
    pub audio_volume: f32,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            combination: [5, 2, 9],
            error_message: "Try again, my love".to_string(),
            success_message: "Welcome to our universe".to_string(),
            unlock_delay_ms: 1500,
            audio_volume: 0.5,
        }
    }
}

/// `[scenes]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub total: u32,
    /// Scene that switches on the particle background
    pub ambient_scene: u32,
    pub ambient_mode: ParticleMode,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            total: 9,
            ambient_scene: 8,
            ambient_mode: ParticleMode::Wander,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub lock: LockConfig,
    pub scenes: SceneConfig,
    pub particles: ParticleConfig,
    pub driver: DriverConfig,
}

impl PresentationConfig {
    /// Read, parse, and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(digit) = self.lock.combination.iter().find(|d| **d > 9) {
            return Err(HeartlockError::ValueOutOfRange {
                field: "lock.combination".into(),
                min: 0.0,
                max: 9.0,
                value: *digit as f64,
            });
        }
        if !(0.0..=1.0).contains(&self.lock.audio_volume) {
            return Err(HeartlockError::ValueOutOfRange {
                field: "lock.audio_volume".into(),
                min: 0.0,
                max: 1.0,
                value: self.lock.audio_volume as f64,
            });
        }
        if self.scenes.total == 0 {
            return Err(HeartlockError::Config("scenes.total must be at least 1".into()));
        }
        if !(1..=self.scenes.total).contains(&self.scenes.ambient_scene) {
            return Err(HeartlockError::ValueOutOfRange {
                field: "scenes.ambient_scene".into(),
                min: 1.0,
                max: self.scenes.total as f64,
                value: self.scenes.ambient_scene as f64,
            });
        }
        self.particles.validate()
    }
}
