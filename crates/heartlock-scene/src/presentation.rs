//! The presentation controller: lock, scenes, and the particle render loop

use crate::config::PresentationConfig;
use crate::host::{ElementId, HostError, HostPage, HostResult, Tone};
use crate::lock::{CombinationLock, DialDirection, LockOutcome};
use crate::sequence::SceneSequence;
use heartlock_core::Viewport;
use heartlock_particles::{ParticleMode, ParticleRng, ParticleSystem, RandomSource};
use heartlock_runtime::{DrawSurface, EventBus, RenderDriver, TimerQueue};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Inputs from the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    IncrementDial(usize),
    DecrementDial(usize),
    /// The "next" trigger
    AdvanceScene,
    /// Carries no size; the new viewport is queried from the host
    ViewportResized,
    SetParticleMode(ParticleMode),
}

/// Work scheduled for later on the same loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    /// Advance past the lock scene and reveal navigation
    RevealAfterUnlock,
}

/// All mutable presentation state, owned in one place
///
/// Single-threaded by construction: the host feeds events, advances time, and
/// runs frames through `&mut self`, in that order, from one loop.
pub struct Presentation<R: RandomSource = ParticleRng> {
    config: PresentationConfig,
    lock: CombinationLock,
    scenes: SceneSequence,
    driver: RenderDriver<ParticleSystem<R>>,
    timers: TimerQueue<Deferred>,
    events: EventBus<HostEvent>,
    /// The "next" trigger only exists once navigation is revealed
    navigation_shown: bool,
}

impl Presentation<ParticleRng> {
    pub fn new(config: PresentationConfig, viewport: Viewport) -> Self {
        let particles = ParticleSystem::new(config.particles.clone());
        Self::with_particles(config, viewport, particles)
    }
}

impl<R: RandomSource> Presentation<R> {
    pub fn with_particles(
        config: PresentationConfig,
        viewport: Viewport,
        particles: ParticleSystem<R>,
    ) -> Self {
        Self {
            lock: CombinationLock::new(config.lock.combination),
            scenes: SceneSequence::new(config.scenes.total),
            driver: RenderDriver::new(particles, viewport, &config.driver),
            timers: TimerQueue::new(),
            events: EventBus::new(),
            navigation_shown: false,
            config,
        }
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn lock(&self) -> &CombinationLock {
        &self.lock
    }

    pub fn current_scene(&self) -> u32 {
        self.scenes.current()
    }

    pub fn driver(&self) -> &RenderDriver<ParticleSystem<R>> {
        &self.driver
    }

    pub fn particles(&self) -> &ParticleSystem<R> {
        self.driver.system()
    }

    /// Queue an input; it is handled on the next `advance_time`
    pub fn push_event(&mut self, event: HostEvent) {
        self.events.push(event);
    }

    /// Handle queued inputs, then anything whose delay has run out
    pub fn advance_time(&mut self, now: Duration, host: &mut dyn HostPage) {
        for event in self.events.drain() {
            self.handle(now, event, host);
        }
        for deferred in self.timers.drain_due(now) {
            match deferred {
                Deferred::RevealAfterUnlock => {
                    self.advance_scene(host);
                    tolerate(host.set_visible(ElementId::Navigation, true));
                    self.navigation_shown = true;
                }
            }
        }
        self.driver.poll(now);
    }

    /// Display-refresh callback. Returns whether a frame was drawn.
    pub fn frame(&mut self, now: Duration, surface: &mut dyn DrawSurface) -> bool {
        self.driver.frame(now, surface)
    }

    /// Handle one input immediately
    pub fn handle(&mut self, now: Duration, event: HostEvent, host: &mut dyn HostPage) {
        match event {
            HostEvent::IncrementDial(dial) => self.turn_dial(now, dial, DialDirection::Up, host),
            HostEvent::DecrementDial(dial) => self.turn_dial(now, dial, DialDirection::Down, host),
            HostEvent::AdvanceScene => {
                if self.navigation_shown {
                    self.advance_scene(host);
                } else {
                    debug!("advance ignored before navigation is shown");
                }
            }
            HostEvent::ViewportResized => self.driver.resize(now, host.viewport()),
            HostEvent::SetParticleMode(mode) => self.driver.system_mut().set_mode(mode),
        }
    }

    fn turn_dial(
        &mut self,
        now: Duration,
        dial: usize,
        direction: DialDirection,
        host: &mut dyn HostPage,
    ) {
        let outcome = self.lock.turn(dial, direction);
        if outcome == LockOutcome::Ignored {
            return;
        }
        if let Some(value) = self.lock.dial(dial) {
            tolerate(host.set_text(ElementId::Dial(dial), &value.to_string(), None));
        }

        match outcome {
            LockOutcome::Mismatch => tolerate(host.set_text(
                ElementId::Status,
                &self.config.lock.error_message,
                Some(Tone::Error),
            )),
            LockOutcome::Unlocked => self.unlock(now, host),
            LockOutcome::Ignored => {}
        }
    }

    fn unlock(&mut self, now: Duration, host: &mut dyn HostPage) {
        info!(combination = ?self.lock.dials(), "lock opened");
        tolerate(host.set_text(
            ElementId::Status,
            &self.config.lock.success_message,
            Some(Tone::Success),
        ));
        tolerate(host.play_animation(ElementId::LockWrapper, "unlock-anim"));
        tolerate(host.play_audio(ElementId::Music, self.config.lock.audio_volume));

        self.timers.schedule_after(
            now,
            Duration::from_millis(self.config.lock.unlock_delay_ms),
            Deferred::RevealAfterUnlock,
        );
    }

    fn advance_scene(&mut self, host: &mut dyn HostPage) {
        let Some(transition) = self.scenes.advance() else {
            debug!(scene = self.scenes.current(), "already at last scene");
            return;
        };
        tolerate(host.set_visible(ElementId::Scene(transition.from), false));
        tolerate(host.set_visible(ElementId::Scene(transition.to), true));
        info!(scene = transition.to, "scene advanced");

        if transition.to == self.config.scenes.ambient_scene {
            self.enter_ambient(host);
        }
    }

    fn enter_ambient(&mut self, host: &mut dyn HostPage) {
        tolerate(host.set_visible(ElementId::Canvas, true));
        if let Err(e) = self.driver.initialize_system() {
            warn!(error = %e, "particle field failed to initialize");
        }
        self.driver
            .system_mut()
            .set_mode(self.config.scenes.ambient_mode);
        self.driver.start();
    }
}

/// Host failures never interrupt the presentation
fn tolerate(result: HostResult) {
    match result {
        Ok(()) => {}
        Err(HostError::MissingElement(element)) => {
            debug!(%element, "element missing, skipped");
        }
        Err(e @ HostError::PlaybackRejected(_)) => {
            warn!(error = %e, "host refused playback, continuing without it");
        }
    }
}
