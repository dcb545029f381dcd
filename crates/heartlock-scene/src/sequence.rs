//! Fixed, forward-only scene sequence

/// One step of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTransition {
    pub from: u32,
    pub to: u32,
}

/// Scene index counting from 1 up to `total`, never past it
#[derive(Debug, Clone)]
pub struct SceneSequence {
    current: u32,
    total: u32,
}

impl SceneSequence {
    pub fn new(total: u32) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.total
    }

    /// Step forward. `None` (and no change) at the last scene.
    pub fn advance(&mut self) -> Option<SceneTransition> {
        if self.is_last() {
            return None;
        }
        let from = self.current;
        self.current += 1;
        Some(SceneTransition {
            from,
            to: self.current,
        })
    }
}
