//! A single simulated particle and its two behavior modes

use crate::config::ParticleConfig;
use crate::heart::{heart_point, heart_scale};
use crate::rand::RandomSource;
use heartlock_core::{Color, HeartlockError, Vec2, Viewport};
use heartlock_runtime::DrawSurface;
use serde::Deserialize;
use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// Color every particle takes on while seeking the heart: rgba(255, 100, 150, 0.8)
pub const HEART_COLOR: Color = Color::new(1.0, 100.0 / 255.0, 150.0 / 255.0, 0.8);

/// Field-wide behavior mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleMode {
    /// Free drift, reflecting velocity at the viewport edges
    #[default]
    Wander,
    /// Spring-damper pull toward a fixed point on the heart curve
    Heart,
}

impl fmt::Display for ParticleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticleMode::Wander => write!(f, "wander"),
            ParticleMode::Heart => write!(f, "heart"),
        }
    }
}

impl FromStr for ParticleMode {
    type Err = HeartlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wander" => Ok(ParticleMode::Wander),
            "heart" => Ok(ParticleMode::Heart),
            other => Err(HeartlockError::InvalidEnumValue {
                value: other.to_string(),
                allowed: vec!["wander".into(), "heart".into()],
            }),
        }
    }
}

/// CPU-side particle state
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    size: f32,
    /// Current draw color
    pub color: Color,
    /// Wander color, restored when leaving heart mode
    base_color: Color,
    /// Fixed parameter on the heart curve, in [0, 2π)
    phase: f32,
}

impl Particle {
    /// Build a particle from explicit state. `size` is floored to a tiny positive value.
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: Color, phase: f32) -> Self {
        Self {
            position,
            velocity,
            size: size.max(f32::EPSILON),
            color,
            base_color: color,
            phase: phase.rem_euclid(TAU),
        }
    }

    /// Random particle somewhere inside `viewport`
    pub fn spawn(viewport: Viewport, rng: &mut dyn RandomSource, config: &ParticleConfig) -> Self {
        let position = Vec2::new(
            rng.next_f32() * viewport.width,
            rng.next_f32() * viewport.height,
        );
        let velocity = Vec2::new(
            (rng.next_f32() - 0.5) * config.wander_speed,
            (rng.next_f32() - 0.5) * config.wander_speed,
        );
        let size = rng.range(config.size_min, config.size_max);
        let alpha = rng.range(config.opacity_min, config.opacity_max);
        let phase = rng.next_f32() * TAU;
        Self::new(position, velocity, size, Color::WHITE.with_alpha(alpha), phase)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// This particle's fixed target on the heart curve for `viewport`
    pub fn heart_target(&self, viewport: Viewport, config: &ParticleConfig) -> Vec2 {
        heart_point(
            self.phase,
            heart_scale(viewport, config.heart_scale_divisor),
            viewport,
        )
    }

    /// Advance one tick (unit timestep)
    pub fn update(
        &mut self,
        mode: ParticleMode,
        viewport: Viewport,
        rng: &mut dyn RandomSource,
        config: &ParticleConfig,
    ) {
        match mode {
            ParticleMode::Wander => self.wander(viewport, rng, config),
            ParticleMode::Heart => self.seek_heart(viewport, config),
        }
    }

    fn wander(&mut self, viewport: Viewport, rng: &mut dyn RandomSource, config: &ParticleConfig) {
        self.color = self.base_color;
        self.position += self.velocity;

        // Reflect velocity only; the position may overshoot the edge by one step
        if self.position.x < 0.0 || self.position.x > viewport.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > viewport.height {
            self.velocity.y = -self.velocity.y;
        }

        if rng.next_f32() < config.jitter_chance {
            self.velocity.x += (rng.next_f32() - 0.5) * config.jitter_strength;
            self.velocity.y += (rng.next_f32() - 0.5) * config.jitter_strength;
            if let Some(max) = config.max_wander_speed {
                self.velocity = self.velocity.clamp_length(max);
            }
        }
    }

    fn seek_heart(&mut self, viewport: Viewport, config: &ParticleConfig) {
        let target = self.heart_target(viewport, config);
        self.velocity += (target - self.position) * config.spring;
        self.velocity *= config.damping;
        self.position += self.velocity;
        self.color = HEART_COLOR;
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.fill_circle(self.position, self.size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::ParticleRng;
    use heartlock_runtime::{DrawCommand, RecordingSurface};

    /// Replays `values` in a loop
    struct Scripted {
        values: Vec<f32>,
        next: usize,
    }

    impl Scripted {
        fn new(values: &[f32]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_f32(&mut self) -> f32 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    fn still(position: Vec2, velocity: Vec2) -> Particle {
        Particle::new(position, velocity, 2.0, Color::WHITE.with_alpha(0.5), 1.0)
    }

    #[test]
    fn spawn_respects_ranges() {
        let config = ParticleConfig::default();
        let vp = Viewport::new(640.0, 480.0);
        let mut rng = ParticleRng::new(1234);
        for _ in 0..500 {
            let p = Particle::spawn(vp, &mut rng, &config);
            assert!(vp.contains(p.position));
            assert!((-0.5..0.5).contains(&p.velocity.x));
            assert!((-0.5..0.5).contains(&p.velocity.y));
            assert!((1.0..3.0).contains(&p.size()));
            assert!((0.2..0.7).contains(&p.color.a));
            assert_eq!(p.color.r, 1.0);
            assert!((0.0..TAU).contains(&p.phase()));
        }
    }

    #[test]
    fn wander_without_jitter_is_linear() {
        let config = ParticleConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        let mut rng = Scripted::new(&[0.5]);
        let start = Vec2::new(100.0, 100.0);
        let velocity = Vec2::new(0.25, -0.5);
        let mut p = still(start, velocity);

        for _ in 0..40 {
            p.update(ParticleMode::Wander, vp, &mut rng, &config);
        }
        assert_eq!(p.position, start + velocity * 40.0);
        assert_eq!(p.velocity, velocity);
    }

    #[test]
    fn wander_reflects_at_near_edge_without_clamping() {
        let config = ParticleConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        let mut rng = Scripted::new(&[0.5]);
        let mut p = still(Vec2::new(1.0, 50.0), Vec2::new(-0.5, 0.0));

        for _ in 0..3 {
            p.update(ParticleMode::Wander, vp, &mut rng, &config);
        }
        // Overshoots to -0.5, then heads back in
        assert_eq!(p.position.x, -0.5);
        assert_eq!(p.velocity.x, 0.5);

        for _ in 0..2 {
            p.update(ParticleMode::Wander, vp, &mut rng, &config);
        }
        assert_eq!(p.position.x, 0.5);
        assert_eq!(p.velocity.x, 0.5);
    }

    #[test]
    fn wander_reflects_at_far_edge() {
        let config = ParticleConfig::default();
        let vp = Viewport::new(10.0, 10.0);
        let mut rng = Scripted::new(&[0.5]);
        let mut p = still(Vec2::new(9.5, 9.75), Vec2::new(0.75, 0.5));

        p.update(ParticleMode::Wander, vp, &mut rng, &config);
        assert_eq!(p.position, Vec2::new(10.25, 10.25));
        assert_eq!(p.velocity, Vec2::new(-0.75, -0.5));

        p.update(ParticleMode::Wander, vp, &mut rng, &config);
        assert_eq!(p.position, Vec2::new(9.5, 9.75));
    }

    #[test]
    fn wander_jitter_perturbs_velocity() {
        let config = ParticleConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        // chance hit, then +0.4 * 0.5 on x and -0.4 * 0.5 on y
        let mut rng = Scripted::new(&[0.0, 0.9, 0.1]);
        let mut p = still(Vec2::new(100.0, 100.0), Vec2::ZERO);

        p.update(ParticleMode::Wander, vp, &mut rng, &config);
        assert!((p.velocity.x - 0.2).abs() < 1e-6);
        assert!((p.velocity.y + 0.2).abs() < 1e-6);
    }

    #[test]
    fn wander_speed_cap_applies_when_configured() {
        let config = ParticleConfig {
            max_wander_speed: Some(0.1),
            ..ParticleConfig::default()
        };
        let vp = Viewport::new(800.0, 600.0);
        let mut rng = Scripted::new(&[0.0, 0.9, 0.1]);
        let mut p = still(Vec2::new(100.0, 100.0), Vec2::ZERO);

        p.update(ParticleMode::Wander, vp, &mut rng, &config);
        assert!((p.velocity.length() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn heart_converges_to_target() {
        let config = ParticleConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        let mut rng = Scripted::new(&[0.5]);
        let mut p = still(Vec2::ZERO, Vec2::ZERO);
        let target = p.heart_target(vp, &config);
        let initial = p.position.distance(target);

        // The spring-damper is underdamped: track the envelope per ~one period
        let mut window_peaks = Vec::new();
        for _ in 0..5 {
            let mut peak = 0.0f32;
            for _ in 0..40 {
                p.update(ParticleMode::Heart, vp, &mut rng, &config);
                peak = peak.max(p.position.distance(target));
            }
            window_peaks.push(peak);
        }
        for pair in window_peaks.windows(2) {
            assert!(pair[1] < pair[0], "envelope grew: {window_peaks:?}");
        }

        for _ in 0..200 {
            p.update(ParticleMode::Heart, vp, &mut rng, &config);
        }
        assert!(p.position.distance(target) < 0.01 * initial);
        assert_eq!(p.color, HEART_COLOR);
    }

    #[test]
    fn phase_is_fixed_across_modes() {
        let config = ParticleConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        let mut rng = ParticleRng::new(5);
        let mut p = Particle::spawn(vp, &mut rng, &config);
        let phase = p.phase();
        for i in 0..100 {
            let mode = if i % 2 == 0 {
                ParticleMode::Heart
            } else {
                ParticleMode::Wander
            };
            p.update(mode, vp, &mut rng, &config);
        }
        assert_eq!(p.phase(), phase);
    }

    #[test]
    fn wander_restores_base_color() {
        let config = ParticleConfig::default();
        let vp = Viewport::new(800.0, 600.0);
        let mut rng = Scripted::new(&[0.5]);
        let mut p = still(Vec2::new(10.0, 10.0), Vec2::ZERO);

        p.update(ParticleMode::Heart, vp, &mut rng, &config);
        assert_eq!(p.color, HEART_COLOR);
        p.update(ParticleMode::Wander, vp, &mut rng, &config);
        assert_eq!(p.color, Color::WHITE.with_alpha(0.5));
    }

    #[test]
    fn draw_emits_one_circle() {
        let p = still(Vec2::new(3.0, 4.0), Vec2::ZERO);
        let mut surface = RecordingSurface::new();
        p.draw(&mut surface);
        assert_eq!(
            surface.frame_commands(),
            &[DrawCommand::Circle {
                center: Vec2::new(3.0, 4.0),
                radius: 2.0,
                color: Color::WHITE.with_alpha(0.5),
            }]
        );
    }

    #[test]
    fn mode_parses_from_str() {
        assert_eq!("heart".parse::<ParticleMode>().unwrap(), ParticleMode::Heart);
        assert_eq!(ParticleMode::Wander.to_string(), "wander");
        assert!("spiral".parse::<ParticleMode>().is_err());
    }
}
