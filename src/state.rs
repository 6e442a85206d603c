use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared server state: an insert counter and the process start instant.
///
/// Cloning is cheap; all clones observe the same counter.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    started: Instant,
    inserts: AtomicU64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                started: Instant::now(),
                inserts: AtomicU64::new(0),
            }),
        }
    }

    /// Record one insert and return the new count.
    pub fn record_insert(&self) -> u64 {
        self.inner.inserts.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn insert_count(&self) -> u64 {
        self.inner.inserts.load(Ordering::Relaxed)
    }

    /// Whole seconds since the server started.
    pub fn uptime_secs(&self) -> u64 {
        self.inner.started.elapsed().as_secs()
    }

    /// Inserts per second since startup, 0.0 while elapsed rounds to zero.
    pub fn insert_rate(&self, count: u64) -> f64 {
        let elapsed = self.uptime_secs();
        if elapsed == 0 {
            0.0
        } else {
            count as f64 / elapsed as f64
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_increments() {
        let state = AppState::new();
        assert_eq!(state.insert_count(), 0);
        assert_eq!(state.record_insert(), 1);
        assert_eq!(state.record_insert(), 2);
        assert_eq!(state.insert_count(), 2);
    }

    #[test]
    fn clones_share_the_counter() {
        let state = AppState::new();
        let other = state.clone();
        other.record_insert();
        assert_eq!(state.insert_count(), 1);
    }

    #[test]
    fn rate_is_zero_immediately_after_start() {
        let state = AppState::new();
        assert_eq!(state.insert_rate(100), 0.0);
    }

    #[test]
    fn concurrent_inserts_each_count_once() {
        let state = AppState::new();
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        state.record_insert();
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        assert_eq!(state.insert_count(), 800);
    }
}
