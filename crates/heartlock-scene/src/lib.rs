//! Heartlock Scene - lock puzzle and scene sequencing
//!
//! The combination lock gates a fixed run of full-screen scenes. Reaching the
//! ambient scene switches on the particle field and starts the render driver.
//! Everything the page itself does (text, visibility, animation, audio) goes
//! through the [`HostPage`] trait.

mod config;
mod host;
mod lock;
mod presentation;
mod sequence;

pub use config::{LockConfig, PresentationConfig, SceneConfig};
pub use host::{ElementId, HeadlessHost, HostCommand, HostError, HostPage, HostResult, Tone};
pub use lock::{CombinationLock, DialDirection, LockOutcome, DIAL_COUNT};
pub use presentation::{HostEvent, Presentation};
pub use sequence::{SceneSequence, SceneTransition};
