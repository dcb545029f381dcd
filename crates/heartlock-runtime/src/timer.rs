//! One-shot timers keyed on host time

use std::time::Duration;

/// Ordered queue of events waiting for a deadline
///
/// Events with equal deadlines come out in scheduling order.
pub struct TimerQueue<E> {
    pending: Vec<(Duration, u64, E)>,
    next_seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire at or after `at`
    pub fn schedule(&mut self, at: Duration, event: E) {
        self.pending.push((at, self.next_seq, event));
        self.next_seq += 1;
    }

    /// Schedule `event` to fire `delay` after `now`
    pub fn schedule_after(&mut self, now: Duration, delay: Duration, event: E) {
        self.schedule(now + delay, event);
    }

    /// Remove and return every event due at `now`, earliest first
    pub fn drain_due(&mut self, now: Duration) -> Vec<E> {
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(at, _, _)| *at <= now);
        self.pending = rest;
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, event)| event).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn nothing_due_before_deadline() {
        let mut q = TimerQueue::new();
        q.schedule_after(ms(100), ms(1500), "advance");
        assert!(q.drain_due(ms(1599)).is_empty());
        assert_eq!(q.len(), 1);
        assert_eq!(q.drain_due(ms(1600)), vec!["advance"]);
        assert!(q.is_empty());
    }

    #[test]
    fn due_events_are_ordered() {
        let mut q = TimerQueue::new();
        q.schedule(ms(30), 3);
        q.schedule(ms(10), 1);
        q.schedule(ms(30), 4);
        q.schedule(ms(20), 2);
        q.schedule(ms(99), 5);
        assert_eq!(q.drain_due(ms(50)), vec![1, 2, 3, 4]);
        assert_eq!(q.len(), 1);
    }
}
