//! Three-dial combination lock

use tracing::debug;

/// Number of dials on the lock
pub const DIAL_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialDirection {
    Up,
    Down,
}

/// Result of turning a dial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// Lock already open, or no such dial; nothing changed
    Ignored,
    /// Dial moved, combination still wrong
    Mismatch,
    /// Dial moved and the combination now matches. Returned once.
    Unlocked,
}

/// Dials in 0..=9 compared against a fixed target after every turn
///
/// Unlocking is one-way: once open, turns are ignored.
#[derive(Debug, Clone)]
pub struct CombinationLock {
    dials: [u8; DIAL_COUNT],
    target: [u8; DIAL_COUNT],
    unlocked: bool,
}

impl CombinationLock {
    /// All dials start at 0. Target digits are taken mod 10.
    pub fn new(target: [u8; DIAL_COUNT]) -> Self {
        Self {
            dials: [0; DIAL_COUNT],
            target: target.map(|d| d % 10),
            unlocked: false,
        }
    }

    pub fn dials(&self) -> [u8; DIAL_COUNT] {
        self.dials
    }

    pub fn dial(&self, index: usize) -> Option<u8> {
        self.dials.get(index).copied()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn turn(&mut self, index: usize, direction: DialDirection) -> LockOutcome {
        if self.unlocked {
            return LockOutcome::Ignored;
        }
        let Some(value) = self.dials.get_mut(index) else {
            debug!(dial = index, "no such dial");
            return LockOutcome::Ignored;
        };

        *value = match direction {
            DialDirection::Up => (*value + 1) % 10,
            DialDirection::Down => (*value + 9) % 10,
        };

        if self.dials == self.target {
            self.unlocked = true;
            LockOutcome::Unlocked
        } else {
            LockOutcome::Mismatch
        }
    }

    pub fn increment(&mut self, index: usize) -> LockOutcome {
        self.turn(index, DialDirection::Up)
    }

    pub fn decrement(&mut self, index: usize) -> LockOutcome {
        self.turn(index, DialDirection::Down)
    }
}
