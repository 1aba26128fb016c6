use std::time::{Duration, Instant};

/// Collapses bursts of filesystem events into single rebuild triggers.
///
/// Accepting a trigger opens a window; every event inside the window is
/// swallowed. The decision is made before a rebuild starts and rebuilds run
/// on the caller's thread, so two rebuilds can never overlap.
#[derive(Debug)]
pub struct Debouncer {
    interval: Duration,
    last_trigger: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given window
    pub fn new(interval: Duration) -> Self {
        Debouncer {
            interval,
            last_trigger: None,
        }
    }

    /// Decide whether an event arriving at `now` should trigger a rebuild,
    /// opening a new window if so
    pub fn should_trigger(&mut self, now: Instant) -> bool {
        match self.last_trigger {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_trigger = Some(now);
                true
            }
        }
    }
}
