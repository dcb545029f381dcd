//! Render/animation driver: the self-rescheduling frame loop

use crate::clock::FrameClock;
use crate::debounce::ResizeDebouncer;
use crate::surface::DrawSurface;
use crate::system::RuntimeSystem;
use heartlock_core::{Result, Viewport};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// `[driver]` section of the presentation config
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Quiet period after the last resize before the system is rebuilt
    pub resize_debounce_ms: u64,
    /// Frame time above which a frame counts as over budget
    pub frame_budget_ms: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 300,
            frame_budget_ms: 16.0,
        }
    }
}

/// Driver lifecycle. There is no way back to `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
}

/// Owns one runtime system plus the viewport it renders into
///
/// The host calls [`RenderDriver::frame`] on every display refresh; the driver
/// only runs a tick when the previous tick asked for another frame, which is
/// how the loop reschedules itself without ever being re-entered.
pub struct RenderDriver<S: RuntimeSystem> {
    system: S,
    viewport: Viewport,
    state: DriverState,
    frame_requested: bool,
    clock: FrameClock,
    resize: ResizeDebouncer,
}

impl<S: RuntimeSystem> RenderDriver<S> {
    pub fn new(system: S, viewport: Viewport, config: &DriverConfig) -> Self {
        Self {
            system,
            viewport,
            state: DriverState::Stopped,
            frame_requested: false,
            clock: FrameClock::with_budget_ms(config.frame_budget_ms),
            resize: ResizeDebouncer::new(Duration::from_millis(config.resize_debounce_ms)),
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut S {
        &mut self.system
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Whether a frame callback is outstanding
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Populate the system for the current viewport
    pub fn initialize_system(&mut self) -> Result<()> {
        self.system.initialize(self.viewport)
    }

    /// Begin the frame loop. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            debug!(system = self.system.name(), "driver already running");
            return false;
        }
        self.state = DriverState::Running;
        self.frame_requested = true;
        info!(system = self.system.name(), "render driver started");
        true
    }

    /// Frame callback. Runs one tick if a frame was requested and
    /// requests the next one. Returns whether a tick ran.
    ///
    /// A failing system is logged and the loop keeps going.
    pub fn frame(&mut self, now: Duration, surface: &mut dyn DrawSurface) -> bool {
        if !self.is_running() || !self.frame_requested {
            return false;
        }
        self.frame_requested = false;
        self.clock.tick(now);

        if let Err(e) = self.system.update(self.viewport, surface) {
            warn!(system = self.system.name(), error = %e, "frame update failed");
        }

        self.frame_requested = true;
        true
    }

    /// Viewport resize notification. Dimensions apply immediately; the
    /// rebuild waits for the debounce period.
    pub fn resize(&mut self, now: Duration, viewport: Viewport) {
        self.viewport = viewport;
        self.resize.notify(now);
    }

    /// Fire the resize rebuild if its quiet period has elapsed.
    /// Returns true if the system was rebuilt.
    pub fn poll(&mut self, now: Duration) -> bool {
        if !self.resize.poll(now) || !self.system.is_initialized() {
            return false;
        }
        info!(
            system = self.system.name(),
            width = self.viewport.width,
            height = self.viewport.height,
            "rebuilding after resize"
        );
        if let Err(e) = self.system.initialize(self.viewport) {
            warn!(system = self.system.name(), error = %e, "rebuild after resize failed");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use heartlock_core::{Color, HeartlockError, Vec2};

    #[derive(Default)]
    struct Dots {
        count: usize,
        initialized_with: Vec<Viewport>,
        updates: usize,
        fail_updates: bool,
    }

    impl RuntimeSystem for Dots {
        fn initialize(&mut self, viewport: Viewport) -> Result<()> {
            self.count = 3;
            self.initialized_with.push(viewport);
            Ok(())
        }

        fn is_initialized(&self) -> bool {
            self.count > 0
        }

        fn update(&mut self, viewport: Viewport, surface: &mut dyn DrawSurface) -> Result<()> {
            self.updates += 1;
            if self.fail_updates {
                return Err(HeartlockError::RuntimeError("boom".into()));
            }
            surface.clear(viewport);
            for i in 0..self.count {
                surface.fill_circle(Vec2::new(i as f32, 0.0), 1.0, Color::WHITE);
            }
            Ok(())
        }

        fn name(&self) -> &str {
            "dots"
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn driver() -> RenderDriver<Dots> {
        RenderDriver::new(
            Dots::default(),
            Viewport::new(800.0, 600.0),
            &DriverConfig::default(),
        )
    }

    #[test]
    fn stopped_driver_ignores_frames() {
        let mut d = driver();
        let mut surface = RecordingSurface::new();
        assert_eq!(d.state(), DriverState::Stopped);
        assert!(!d.frame(ms(0), &mut surface));
        assert_eq!(d.system().updates, 0);
    }

    #[test]
    fn running_driver_reschedules_every_frame() {
        let mut d = driver();
        let mut surface = RecordingSurface::new();
        d.initialize_system().unwrap();
        assert!(d.start());

        for i in 0..10 {
            assert!(d.frame(ms(i * 16), &mut surface));
            assert!(d.frame_requested());
        }
        assert_eq!(d.system().updates, 10);
        assert_eq!(surface.clear_count(), 10);
        assert_eq!(d.clock().frame_count, 10);
    }

    #[test]
    fn start_is_idempotent() {
        let mut d = driver();
        assert!(d.start());
        assert!(!d.start());
        assert!(d.is_running());
    }

    #[test]
    fn failing_update_does_not_stop_loop() {
        let mut d = driver();
        let mut surface = RecordingSurface::new();
        d.system_mut().fail_updates = true;
        d.start();
        assert!(d.frame(ms(0), &mut surface));
        assert!(d.frame(ms(16), &mut surface));
        assert_eq!(d.system().updates, 2);
        assert!(d.is_running());
    }

    #[test]
    fn resize_rebuilds_after_debounce() {
        let mut d = driver();
        d.initialize_system().unwrap();

        d.resize(ms(0), Viewport::new(500.0, 900.0));
        assert_eq!(d.viewport(), Viewport::new(500.0, 900.0));
        d.resize(ms(100), Viewport::new(400.0, 900.0));
        assert!(!d.poll(ms(350)));
        assert!(d.poll(ms(400)));

        assert_eq!(
            d.system().initialized_with,
            vec![Viewport::new(800.0, 600.0), Viewport::new(400.0, 900.0)]
        );
    }

    #[test]
    fn resize_before_population_only_updates_viewport() {
        let mut d = driver();
        d.resize(ms(0), Viewport::new(320.0, 640.0));
        assert!(!d.poll(ms(1000)));
        assert!(d.system().initialized_with.is_empty());
        assert_eq!(d.viewport(), Viewport::new(320.0, 640.0));
    }

    #[test]
    fn config_from_toml_keeps_defaults() {
        let config: DriverConfig = toml::from_str("resize_debounce_ms = 120").unwrap();
        assert_eq!(config.resize_debounce_ms, 120);
        assert!((config.frame_budget_ms - 16.0).abs() < 1e-9);
    }
}
