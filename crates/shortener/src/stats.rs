//! Per-user counters of successful shortenings.
//!
//! Lives for the process lifetime only. Construct one explicitly and share it with
//! handlers through an `Arc`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// User id → number of successful shortenings. Increments are atomic across tasks.
#[derive(Debug, Default)]
pub struct UserStats {
    counts: Mutex<HashMap<i64, u64>>,
}

impl UserStats {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned map only means another task panicked mid-increment; the counts are still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<i64, u64>> {
        self.counts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Increments the count for `user_id` (creating it on first success) and returns the new value.
    pub fn record_success(&self, user_id: i64) -> u64 {
        let mut counts = self.lock();
        let count = counts.entry(user_id).or_insert(0);
        *count += 1;
        *count
    }

    /// Current count for `user_id`; zero for users never seen.
    pub fn get_count(&self, user_id: i64) -> u64 {
        self.lock().get(&user_id).copied().unwrap_or(0)
    }

    /// Sum over all users.
    pub fn total(&self) -> u64 {
        self.lock().values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_unseen_user_is_zero() {
        let stats = UserStats::new();
        assert_eq!(stats.get_count(42), 0);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_record_success_twice() {
        let stats = UserStats::new();
        assert_eq!(stats.record_success(1), 1);
        assert_eq!(stats.record_success(1), 2);
        assert_eq!(stats.get_count(1), 2);
    }

    #[test]
    fn test_users_are_independent() {
        let stats = UserStats::new();
        stats.record_success(1);
        stats.record_success(1);
        stats.record_success(2);
        assert_eq!(stats.get_count(1), 2);
        assert_eq!(stats.get_count(2), 1);
        assert_eq!(stats.total(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let stats = Arc::new(UserStats::new());
        let mut tasks = Vec::new();
        for _ in 0..50 {
            let stats = stats.clone();
            tasks.push(tokio::spawn(async move {
                for _ in 0..20 {
                    stats.record_success(7);
                }
            }));
        }
        for t in tasks {
            t.await.unwrap();
        }
        assert_eq!(stats.get_count(7), 1000);
    }
}
