use std::time::{Duration, Instant};

/// Delays widening the score bars so the width change animates.
#[derive(Default)]
pub struct BarReveal {
    reveal_at: Option<Instant>,
}

impl BarReveal {
    pub fn schedule(&mut self, delay: Duration) {
        self.reveal_at = Some(Instant::now() + delay);
    }

    pub fn reset(&mut self) {
        self.reveal_at = None;
    }

    pub fn is_revealed(&self, now: Instant) -> bool {
        self.reveal_at.is_some_and(|t| now >= t)
    }

    /// Time left until the bars should widen, if still waiting.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.reveal_at
            .and_then(|t| t.checked_duration_since(now))
            .filter(|d| !d.is_zero())
    }
}
