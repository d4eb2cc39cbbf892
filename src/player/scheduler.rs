//! Timer sources for auto-play
//!
//! The player never sleeps or reads a clock itself. It asks a [`Scheduler`] for a
//! one-shot tick and is later handed the tick's [`TimerId`] back. Tests drive a
//! [`ManualScheduler`]; the terminal front end polls a [`DeadlineScheduler`] from
//! its event loop.

use std::time::{Duration, Instant};

/// Identifies one scheduled tick
pub type TimerId = u64;

/// One-shot timer source
pub trait Scheduler {
    /// Arm a tick that fires once after `after`
    fn schedule(&mut self, after: Duration) -> TimerId;

    /// Drop a pending tick; unknown ids are ignored
    fn cancel(&mut self, id: TimerId);
}

/// Deterministic scheduler: ticks fire only when the test says so
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: TimerId,
    pending: Vec<(TimerId, Duration)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        ManualScheduler::default()
    }

    /// Ticks that are armed and not cancelled, oldest first
    pub fn pending(&self) -> Vec<TimerId> {
        self.pending.iter().map(|(id, _)| *id).collect()
    }

    /// Delay requested for a pending tick
    pub fn delay_of(&self, id: TimerId) -> Option<Duration> {
        self.pending
            .iter()
            .find(|(pending, _)| *pending == id)
            .map(|(_, after)| *after)
    }

    /// Remove and return the oldest pending tick
    pub fn fire_next(&mut self) -> Option<TimerId> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0).0)
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, after: Duration) -> TimerId {
        self.next_id += 1;
        self.pending.push((self.next_id, after));
        self.next_id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(pending, _)| *pending != id);
    }
}

/// Wall-clock scheduler backed by monotonic deadlines
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_id: TimerId,
    armed: Vec<(TimerId, Instant)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        DeadlineScheduler::default()
    }

    /// Remove and return every tick whose deadline is at or before `now`
    pub fn due(&mut self, now: Instant) -> Vec<TimerId> {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.armed)
            .into_iter()
            .partition(|(_, deadline)| *deadline <= now);
        self.armed = waiting;
        due.into_iter().map(|(id, _)| id).collect()
    }

    /// Time left until the nearest deadline
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.armed
            .iter()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
            .min()
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, after: Duration) -> TimerId {
        self.next_id += 1;
        self.armed.push((self.next_id, Instant::now() + after));
        self.next_id
    }

    fn cancel(&mut self, id: TimerId) {
        self.armed.retain(|(armed, _)| *armed != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_fires_in_order() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.schedule(Duration::from_millis(10));
        let second = scheduler.schedule(Duration::from_millis(20));
        assert_ne!(first, second);
        assert_eq!(scheduler.delay_of(second), Some(Duration::from_millis(20)));

        scheduler.cancel(first);
        assert_eq!(scheduler.pending(), vec![second]);
        assert_eq!(scheduler.fire_next(), Some(second));
        assert_eq!(scheduler.fire_next(), None);
    }

    #[test]
    fn test_deadline_scheduler_due() {
        let mut scheduler = DeadlineScheduler::new();
        let soon = scheduler.schedule(Duration::ZERO);
        let later = scheduler.schedule(Duration::from_secs(3600));

        let due = scheduler.due(Instant::now());
        assert_eq!(due, vec![soon]);
        assert!(scheduler.until_next(Instant::now()).is_some());

        scheduler.cancel(later);
        assert!(scheduler.due(Instant::now() + Duration::from_secs(7200)).is_empty());
        assert_eq!(scheduler.until_next(Instant::now()), None);
    }
}
