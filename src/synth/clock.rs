use std::{cell::Cell, rc::Rc, time::Instant};

/// Milliseconds on a monotonic timeline. Only compared, never converted.
pub type Timestamp = u64;

/// Source of note-on trigger times used to rank voices for stealing.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall-clock milliseconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        self.origin.elapsed().as_millis() as Timestamp
    }
}

/// Hand-driven clock for offline drivers and tests.
///
/// Clones share the same counter, so a test can keep one handle and give
/// the other to the voice manager.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Timestamp>>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    pub fn advance(&self, millis: Timestamp) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_is_shared_between_clones() {
        let clock = ManualClock::new(5);
        let handle = clock.clone();
        handle.advance(10);
        assert_eq!(clock.now(), 15);
        clock.set(3);
        assert_eq!(handle.now(), 3);
    }

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
