use std::time::{Duration, Instant};

/// Single-slot debounce for deferred saves.
///
/// Arming while already armed refreshes the deadline, so a burst of
/// mutations collapses into one pending save rather than queueing writes.
/// The app polls `due` after each render pass, which guarantees the save
/// runs strictly after the display has settled.
#[derive(Debug)]
pub struct SaveScheduler {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl SaveScheduler {
    pub fn new(quiet: Duration) -> Self {
        SaveScheduler {
            quiet,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the pending save, `quiet` from now.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the quiet period has elapsed. Does not disarm.
    pub fn due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }
}
