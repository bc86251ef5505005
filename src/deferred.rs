//! Delayed events for the single-threaded event loop
//!
//! Items are scheduled with a due instant and handed back by `drain_due`
//! once that instant has passed. There is no cancellation.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Deferred<T> {
    pending: Vec<(Instant, T)>,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> Deferred<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: Duration, item: T) {
        self.schedule_at(Instant::now() + delay, item);
    }

    pub fn schedule_at(&mut self, due: Instant, item: T) {
        self.pending.push((due, item));
    }

    /// Remove and return every item due at or before `now`, earliest first.
    /// Items due at the same instant come out in scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(at, _)| *at <= now);
        self.pending = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, item)| item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_yet() {
        let now = Instant::now();
        let mut queue = Deferred::new();
        queue.schedule_at(now + Duration::from_millis(500), "later");

        assert!(queue.drain_due(now).is_empty());
        assert_eq!(queue.drain_due(now + Duration::from_secs(1)), vec!["later"]);
    }

    #[test]
    fn test_drains_in_due_order() {
        let now = Instant::now();
        let mut queue = Deferred::new();
        queue.schedule_at(now + Duration::from_millis(300), "third");
        queue.schedule_at(now + Duration::from_millis(100), "first");
        queue.schedule_at(now + Duration::from_millis(100), "second");
        queue.schedule_at(now + Duration::from_secs(5), "pending");

        let due = queue.drain_due(now + Duration::from_secs(1));
        assert_eq!(due, vec!["first", "second", "third"]);
        assert_eq!(queue.drain_due(now + Duration::from_secs(10)), vec!["pending"]);
    }

    #[test]
    fn test_drained_items_are_removed() {
        let now = Instant::now();
        let mut queue = Deferred::new();
        queue.schedule_at(now, 1);

        assert_eq!(queue.drain_due(now), vec![1]);
        assert!(queue.drain_due(now + Duration::from_secs(60)).is_empty());
    }
}
