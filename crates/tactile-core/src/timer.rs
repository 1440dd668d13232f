//! One-shot timers for cooperative, single-threaded scheduling.
//!
//! A [`TimerManager`] never spawns threads or sleeps. The owner asks it for
//! the next deadline, waits however its host waits, and then calls
//! [`TimerManager::process_expired`] with the current instant.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, TimerError};

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer fires.
    deadline: Instant,
}

/// An entry in the timer queue (min-heap by deadline).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    deadline: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.deadline.cmp(&self.deadline)
    }
}

/// Manages pending one-shot timers.
///
/// Stopped timers are removed from the slot map immediately; their heap
/// entries are discarded lazily when they reach the front of the queue.
#[derive(Debug, Default)]
pub struct TimerManager {
    /// All pending timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending deadlines.
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, now: Instant, duration: Duration) -> TimerId {
        let deadline = now + duration;
        let id = self.timers.insert(TimerData { deadline });
        self.queue.push(TimerQueueEntry { id, deadline });

        tracing::trace!(target: "tactile_core::timer", ?id, ?duration, "timer started");
        id
    }

    /// Stop and remove a timer.
    ///
    /// Returns an error if the timer already fired or was never started here.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if self.timers.remove(id).is_some() {
            tracing::trace!(target: "tactile_core::timer", ?id, "timer stopped");
            Ok(())
        } else {
            crate::tactile_debug!(?id, "stop requested for unknown timer");
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// The deadline of a pending timer.
    pub fn deadline(&self, id: TimerId) -> Option<Instant> {
        self.timers.get(id).map(|t| t.deadline)
    }

    /// The earliest pending deadline, if any.
    pub fn next_deadline(&mut self) -> Option<Instant> {
        self.discard_stale();
        self.queue.peek().map(|entry| entry.deadline)
    }

    /// Time remaining until the earliest deadline, saturating at zero.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Remove and return every timer whose deadline is at or before `now`,
    /// earliest first.
    #[tracing::instrument(skip(self), target = "tactile_core::timer", level = "trace")]
    pub fn process_expired(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.deadline > now {
                break;
            }
            self.queue.pop();

            // Stopped timers leave their heap entry behind.
            if self.timers.remove(entry.id).is_some() {
                tracing::trace!(target: "tactile_core::timer", id = ?entry.id, "timer fired");
                fired.push(entry.id);
            }
        }

        fired
    }

    /// Get the number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    fn discard_stale(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TactileError;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_one_shot_fires_once() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(start, ms(100));

        assert!(timers.process_expired(start + ms(99)).is_empty());
        assert_eq!(timers.process_expired(start + ms(100)), vec![id]);
        assert!(timers.process_expired(start + ms(500)).is_empty());
        assert!(!timers.is_active(id));
    }

    #[test]
    fn test_stop_prevents_firing() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(start, ms(100));

        timers.stop(id).unwrap();
        assert!(timers.process_expired(start + ms(200)).is_empty());
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_stop_unknown_timer_is_error() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(start, ms(10));
        timers.process_expired(start + ms(10));

        assert!(matches!(
            timers.stop(id),
            Err(TactileError::Timer(TimerError::InvalidTimerId))
        ));
    }

    #[test]
    fn test_expired_in_deadline_order() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let late = timers.start_one_shot(start, ms(300));
        let early = timers.start_one_shot(start, ms(100));

        assert_eq!(timers.process_expired(start + ms(400)), vec![early, late]);
    }

    #[test]
    fn test_next_deadline_skips_stopped() {
        let start = Instant::now();
        let mut timers = TimerManager::new();
        let early = timers.start_one_shot(start, ms(100));
        timers.start_one_shot(start, ms(300));

        timers.stop(early).unwrap();
        assert_eq!(timers.next_deadline(), Some(start + ms(300)));
        assert_eq!(timers.time_until_next(start + ms(250)), Some(ms(50)));
        assert_eq!(timers.time_until_next(start + ms(350)), Some(Duration::ZERO));
    }

    #[test]
    fn test_no_timers() {
        let mut timers = TimerManager::new();
        assert_eq!(timers.next_deadline(), None);
        assert_eq!(timers.active_count(), 0);
    }
}
