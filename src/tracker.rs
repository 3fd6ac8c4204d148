use chrono::Utc;
use dashmap::DashMap;

// Per-client failure record. lock_until == 0.0 means not locked.
#[derive(Debug, Default, Clone)]
pub struct AttemptState {
    pub fails: Vec<f64>,
    pub lock_until: f64,
}

// Tracks failed sends per client id and hands out lockouts.
// DashMap gives per-key locking, so each operation below is atomic
// for a given client.
pub struct AttemptTracker {
    entries: DashMap<String, AttemptState>,
    fail_limit: usize,
    fail_window: f64,
    lock_duration: f64,
}

impl AttemptTracker {
    pub fn new(fail_limit: usize, fail_window: u64, lock_duration: u64) -> Self {
        Self {
            entries: DashMap::new(),
            fail_limit,
            fail_window: fail_window as f64,
            lock_duration: lock_duration as f64,
        }
    }

    // Seconds left on the lock, if any. Creates the entry lazily so the
    // client is tracked from its first request.
    pub fn lock_remaining(&self, client_id: &str, now: f64) -> Option<f64> {
        let entry = self
            .entries
            .entry(client_id.to_string())
            .or_insert_with(AttemptState::default);
        if now < entry.lock_until {
            Some(entry.lock_until - now)
        } else {
            None
        }
    }

    // Prunes timestamps older than the window, appends this failure and
    // returns true if that tipped the client into a lockout.
    // Pruning only ever happens here, matching send-time semantics: a
    // client that never sends again keeps its stale timestamps.
    pub fn record_failure(&self, client_id: &str, now: f64) -> bool {
        let mut entry = self
            .entries
            .entry(client_id.to_string())
            .or_insert_with(AttemptState::default);
        entry.fails.retain(|ts| now - ts <= self.fail_window);
        entry.fails.push(now);
        if entry.fails.len() >= self.fail_limit {
            entry.lock_until = now + self.lock_duration;
            true
        } else {
            false
        }
    }

    // Operator path: wipe the history and drop any lock.
    pub fn clear(&self, client_id: &str) {
        let mut entry = self
            .entries
            .entry(client_id.to_string())
            .or_insert_with(AttemptState::default);
        entry.fails.clear();
        entry.lock_until = 0.0;
    }

    pub fn lock_duration_secs(&self) -> u64 {
        self.lock_duration as u64
    }

    pub fn tracked_clients(&self) -> usize {
        self.entries.len()
    }
}

// Seconds since epoch with sub-second precision
pub fn epoch_now() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> AttemptTracker {
        AttemptTracker::new(5, 60, 30)
    }

    #[test]
    fn fresh_client_is_not_locked() {
        let t = tracker();
        assert_eq!(t.lock_remaining("1.2.3.4", 1000.0), None);
        assert_eq!(t.tracked_clients(), 1);
    }

    #[test]
    fn locks_on_fifth_failure_within_window() {
        let t = tracker();
        for i in 0..4 {
            assert!(!t.record_failure("1.2.3.4", 1000.0 + i as f64));
        }
        assert!(t.record_failure("1.2.3.4", 1004.0));
        assert_eq!(t.lock_remaining("1.2.3.4", 1005.0), Some(29.0));
    }

    #[test]
    fn lock_expires_with_time() {
        let t = tracker();
        for i in 0..5 {
            t.record_failure("1.2.3.4", 1000.0 + i as f64);
        }
        assert!(t.lock_remaining("1.2.3.4", 1033.0).is_some());
        assert_eq!(t.lock_remaining("1.2.3.4", 1034.0), None);
    }

    #[test]
    fn stale_failures_are_pruned() {
        let t = tracker();
        // four failures, then a fifth well past the window: the old four
        // fall out of the count and no lock triggers
        for i in 0..4 {
            t.record_failure("1.2.3.4", 1000.0 + i as f64);
        }
        assert!(!t.record_failure("1.2.3.4", 1100.0));
        assert_eq!(t.lock_remaining("1.2.3.4", 1100.0), None);
    }

    #[test]
    fn failures_spread_past_window_never_lock() {
        let t = tracker();
        for i in 0..20 {
            assert!(!t.record_failure("1.2.3.4", 1000.0 + (i * 61) as f64));
        }
    }

    #[test]
    fn clear_resets_history_and_lock() {
        let t = tracker();
        for i in 0..5 {
            t.record_failure("1.2.3.4", 1000.0 + i as f64);
        }
        assert!(t.lock_remaining("1.2.3.4", 1005.0).is_some());
        t.clear("1.2.3.4");
        assert_eq!(t.lock_remaining("1.2.3.4", 1005.0), None);
        // history is gone too, so four more failures stay unlocked
        for i in 0..4 {
            assert!(!t.record_failure("1.2.3.4", 1005.0 + i as f64));
        }
    }

    #[test]
    fn clients_are_tracked_independently() {
        let t = tracker();
        for i in 0..5 {
            t.record_failure("1.2.3.4", 1000.0 + i as f64);
        }
        assert!(t.lock_remaining("1.2.3.4", 1005.0).is_some());
        assert_eq!(t.lock_remaining("5.6.7.8", 1005.0), None);
        assert_eq!(t.tracked_clients(), 2);
    }
}
