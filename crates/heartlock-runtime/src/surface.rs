//! 2D drawing surface abstraction

use heartlock_core::{Color, Vec2, Viewport};

/// The canvas-like target particles draw into
///
/// Only the two primitives the animation needs: a full clear and a filled circle.
pub trait DrawSurface {
    /// Clear the region covered by `viewport`
    fn clear(&mut self, viewport: Viewport);

    /// Fill a circle of `radius` centered at `center`
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Viewport),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Headless surface that records the current frame's draw calls
///
/// Commands are dropped on each `clear`, so memory stays bounded over long runs;
/// the counters keep totals across frames.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clear_count: u64,
    circle_count: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls since (and including) the most recent clear
    pub fn frame_commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Circles drawn since the most recent clear
    pub fn frame_circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            DrawCommand::Clear(_) => None,
        })
    }

    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }

    pub fn circle_count(&self) -> u64 {
        self.circle_count
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(viewport));
        self.clear_count += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
        self.circle_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_starts_a_new_frame() {
        let mut surface = RecordingSurface::new();
        let vp = Viewport::new(100.0, 100.0);

        surface.clear(vp);
        surface.fill_circle(Vec2::new(1.0, 1.0), 2.0, Color::WHITE);
        surface.fill_circle(Vec2::new(3.0, 3.0), 1.0, Color::WHITE);
        assert_eq!(surface.frame_commands().len(), 3);

        surface.clear(vp);
        surface.fill_circle(Vec2::new(5.0, 5.0), 1.5, Color::BLACK);
        assert_eq!(surface.frame_commands()[0], DrawCommand::Clear(vp));
        assert_eq!(surface.frame_circles().count(), 1);
        assert_eq!(surface.clear_count(), 2);
        assert_eq!(surface.circle_count(), 3);
    }
}
