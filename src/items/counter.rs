//! Process-lifetime id allocation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source. Starts at 0; the first issued id is 1.
#[derive(Debug, Default)]
pub struct IdCounter {
    last: AtomicU64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Last id handed out (0 if none).
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_sequential_ids() {
        let counter = IdCounter::new();
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.next_id(), 1);
        assert_eq!(counter.next_id(), 2);
        assert_eq!(counter.current(), 2);
    }

    #[test]
    fn test_concurrent_ids_unique() {
        let counter = Arc::new(IdCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = counter.clone();
                std::thread::spawn(move || (0..1000).map(|_| counter.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 8000);
        assert_eq!(counter.current(), 8000);
        assert!((1..=8000).all(|id| seen.contains(&id)));
    }
}
