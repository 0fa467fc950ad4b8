// Timer Slots
// Single-slot scheduled callbacks driven by an explicit clock

use std::time::{Duration, Instant};

/// A cancellable deadline with replacement semantics.
///
/// Scheduling while a deadline is pending replaces it, so at most one
/// firing is ever outstanding per slot. The owner polls the slot with the
/// current time; nothing runs in the background.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    deadline: Option<Instant>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the slot to fire `delay` after `now`, dropping any pending deadline
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when the deadline has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let start = Instant::now();
        let mut slot = TimerSlot::new();
        slot.schedule(start, Duration::from_millis(50));

        assert!(!slot.fire_if_due(start + Duration::from_millis(49)));
        assert!(slot.fire_if_due(start + Duration::from_millis(50)));
        assert!(!slot.fire_if_due(start + Duration::from_millis(100)));
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending_deadline() {
        let start = Instant::now();
        let mut slot = TimerSlot::new();
        slot.schedule(start, Duration::from_millis(250));
        slot.schedule(start + Duration::from_millis(200), Duration::from_millis(250));

        assert!(!slot.fire_if_due(start + Duration::from_millis(300)));
        assert!(slot.fire_if_due(start + Duration::from_millis(450)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut slot = TimerSlot::new();
        slot.schedule(start, Duration::ZERO);
        slot.cancel();
        assert!(!slot.fire_if_due(start + Duration::from_secs(1)));
    }
}
