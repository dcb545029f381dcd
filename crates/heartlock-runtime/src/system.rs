//! Runtime system trait

use crate::surface::DrawSurface;
use heartlock_core::{Result, Viewport};

/// A system that can be ticked by the render driver
///
/// The driver owns the viewport and hands the current value to every call,
/// so systems never cache dimensions across frames.
pub trait RuntimeSystem {
    /// (Re)build all state for the given viewport, discarding anything prior
    fn initialize(&mut self, viewport: Viewport) -> Result<()>;

    /// Whether `initialize` has produced any state yet
    fn is_initialized(&self) -> bool;

    /// Called once per animation frame: advance the simulation and draw it
    fn update(&mut self, viewport: Viewport, surface: &mut dyn DrawSurface) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
