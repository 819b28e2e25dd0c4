//! Timer Queue Module
//! One-shot timeouts and repeating intervals on a caller-supplied clock.
//!
//! The queue never reads the wall clock. The owner passes the current time
//! (a `Duration` since startup) to [`TimerQueue::pop_due`], which hands back
//! due payloads one at a time in deadline order. While a payload is being
//! handled, [`TimerQueue::now`] equals its deadline, so timers scheduled from
//! inside a callback are anchored to the moment the callback fired.

use std::time::Duration;

/// Handle to a scheduled timer, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    handle: TimerHandle,
    deadline: Duration,
    period: Option<Duration>,
    payload: T,
}

/// Single-threaded timer queue.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current queue time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to fire once after `delay`.
    pub fn set_timeout(&mut self, delay: Duration, payload: T) -> TimerHandle {
        self.push(delay, None, payload)
    }

    /// Schedule `payload` to fire every `period`, first after one period.
    pub fn set_interval(&mut self, period: Duration, payload: T) -> TimerHandle {
        // A zero period would fire forever within one poll
        let period = period.max(Duration::from_millis(1));
        self.push(period, Some(period), payload)
    }

    /// Cancel a timer. Returns false when it had already fired or was cleared.
    pub fn clear(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Number of outstanding repeating timers.
    pub fn interval_count(&self) -> usize {
        self.entries.iter().filter(|e| e.period.is_some()).count()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Move the clock forward without firing anything.
    ///
    /// Call after draining [`pop_due`](Self::pop_due) so later timers are
    /// scheduled relative to `until`. Time never moves backwards.
    pub fn advance_to(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            deadline: self.now + delay,
            period,
            payload,
        });
        handle
    }

    fn earliest_due(&self, until: Duration) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= until)
            .min_by_key(|(_, e)| (e.deadline, e.handle))
            .map(|(idx, _)| idx)
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Pop the next timer due at or before `until`.
    ///
    /// Intervals are re-armed one period after the deadline that just fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, T)> {
        let idx = self.earliest_due(until)?;
        let deadline = self.entries[idx].deadline;
        self.advance_to(deadline);

        match self.entries[idx].period {
            Some(period) => {
                let entry = &mut self.entries[idx];
                entry.deadline = deadline + period;
                Some((entry.handle, entry.payload.clone()))
            }
            None => {
                let entry = self.entries.swap_remove(idx);
                Some((entry.handle, entry.payload))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn drain(queue: &mut TimerQueue<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some((_, payload)) = queue.pop_due(until) {
            fired.push(payload);
        }
        queue.advance_to(until);
        fired
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut queue = TimerQueue::new();
        queue.set_timeout(ms(100), "render");

        assert!(drain(&mut queue, ms(99)).is_empty());
        assert_eq!(drain(&mut queue, ms(100)), vec!["render"]);
        assert!(drain(&mut queue, ms(1000)).is_empty());
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn test_interval_repeats_until_cleared() {
        let mut queue = TimerQueue::new();
        let handle = queue.set_interval(ms(30), "tick");

        assert_eq!(drain(&mut queue, ms(95)), vec!["tick", "tick", "tick"]);
        assert!(queue.is_pending(handle));
        assert_eq!(queue.interval_count(), 1);
        assert_eq!(queue.next_deadline(), Some(ms(120)));

        assert!(queue.clear(handle));
        assert!(!queue.clear(handle));
        assert!(drain(&mut queue, ms(500)).is_empty());
    }

    #[test]
    fn test_fires_in_deadline_then_creation_order() {
        let mut queue = TimerQueue::new();
        queue.set_timeout(ms(50), "late");
        queue.set_timeout(ms(10), "first");
        queue.set_timeout(ms(10), "second");

        assert_eq!(drain(&mut queue, ms(50)), vec!["first", "second", "late"]);
    }

    #[test]
    fn test_now_tracks_firing_deadline() {
        let mut queue = TimerQueue::new();
        queue.set_timeout(ms(40), "a");

        let (_, payload) = queue.pop_due(ms(1000)).unwrap();
        assert_eq!(payload, "a");
        assert_eq!(queue.now(), ms(40));

        // Scheduled from inside the callback, relative to its deadline
        queue.set_timeout(ms(10), "b");
        assert_eq!(queue.next_deadline(), Some(ms(50)));
    }

    #[test]
    fn test_advance_never_moves_backwards() {
        let mut queue: TimerQueue<()> = TimerQueue::new();
        queue.advance_to(ms(200));
        queue.advance_to(ms(100));
        assert_eq!(queue.now(), ms(200));
    }
}
