use std::time::{Duration, Instant};

/// Recommended delay for search-as-you-type callers.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Single-slot cancel-and-reschedule timer for settling rapid input.
///
/// Each `trigger` replaces any pending deadline, so a burst of
/// keystrokes yields exactly one `fire` once the input settles. Time is
/// passed in and the slot is polled, which keeps the primitive
/// synchronous; callers check `fire` from their event loop the same way
/// a backend is polled each frame.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the slot to fire `delay` after `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Consumes the slot once its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
