use std::sync::atomic::{AtomicU64, Ordering};

/// A counter with its own private tally.
///
/// Every instance starts at zero and hands out 1, 2, 3, ... on successive
/// calls to [`Counter::next`]. Two counters never see each other's state.
#[derive(Debug, Default)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Counter { count: 0 }
    }

    /// Bump the tally and return the new value.
    pub fn next(&mut self) -> u64 {
        self.count += 1;
        log::trace!("counter advanced to {}", self.count);
        self.count
    }

    /// Last value handed out, 0 if `next` was never called.
    pub fn current(&self) -> u64 {
        self.count
    }
}

/// Build a fresh counter. Cannot fail.
pub fn create_counter() -> Counter {
    log::debug!("creating new counter");
    Counter::new()
}

/// Same contract as [`create_counter`], but the tally lives inside a `move`
/// closure instead of a named struct.
pub fn counter_closure() -> impl FnMut() -> u64 {
    let mut count = 0u64;
    move || {
        count += 1;
        count
    }
}

/// Counter that can be shared between threads. Each value in `1..=n` is
/// handed out exactly once across all callers.
#[derive(Debug, Default)]
pub struct SharedCounter {
    count: AtomicU64,
}

impl SharedCounter {
    pub fn new() -> Self {
        SharedCounter {
            count: AtomicU64::new(0),
        }
    }

    pub fn next(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn current(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
