//! Heartlock Runtime - Frame loop infrastructure
//!
//! Provides the building blocks of the cooperative, host-driven frame loop:
//! - `RenderDriver`: stopped/running state machine that ticks one system per frame
//! - `FrameClock`: frame timing from host timestamps
//! - `ResizeDebouncer` / `TimerQueue`: the loop's only delayed work
//! - `EventBus`: typed event queue between the host and the presentation
//! - `DrawSurface`: the 2D drawing target systems render into
//! - `RuntimeSystem`: trait for systems ticked by the driver

mod clock;
mod debounce;
mod driver;
mod event_bus;
mod surface;
mod system;
mod timer;

pub use clock::FrameClock;
pub use debounce::ResizeDebouncer;
pub use driver::{DriverConfig, DriverState, RenderDriver};
pub use event_bus::EventBus;
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
pub use system::RuntimeSystem;
pub use timer::TimerQueue;
