//! Trailing-edge debouncer for search input
//!
//! Coalesces a stream of per-keystroke values into a single settled value,
//! emitted only after the quiet window elapses with no further input. Each
//! new value supersedes the pending one and restarts the window, so at most
//! one emission is ever pending. Holds no search semantics; the event loop
//! polls `settle()` on its tick.

use std::time::{Duration, Instant};

/// Quiet window before a typed query is considered settled
pub const QUIET_WINDOW: Duration = Duration::from_millis(300);

pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(QUIET_WINDOW)
    }
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a new input value, superseding any pending emission
    pub fn touch(&mut self, value: &str) {
        self.touch_at(value, Instant::now());
    }

    /// Emit the pending value if the quiet window has elapsed
    pub fn settle(&mut self) -> Option<String> {
        self.settle_at(Instant::now())
    }

    /// Discard any pending emission
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn touch_at(&mut self, value: &str, now: Instant) {
        self.pending = Some((value.to_string(), now));
    }

    fn settle_at(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, armed)) if now.duration_since(*armed) >= self.quiet => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_emits_only_the_last_value_once() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));

        // Keystrokes at t = 0, 50, 100, 350
        debouncer.touch_at("r", start);
        debouncer.touch_at("re", start + ms(50));
        debouncer.touch_at("rea", start + ms(100));
        assert_eq!(debouncer.settle_at(start + ms(350)), None);
        debouncer.touch_at("reac", start + ms(350));

        // Window restarted at t = 350; nothing settles before t = 650
        assert_eq!(debouncer.settle_at(start + ms(649)), None);
        assert_eq!(
            debouncer.settle_at(start + ms(650)),
            Some("reac".to_string())
        );

        // Exactly one emission per burst
        assert_eq!(debouncer.settle_at(start + ms(10_000)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn each_touch_restarts_the_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));

        debouncer.touch_at("a", start);
        debouncer.touch_at("ab", start + ms(299));

        assert_eq!(debouncer.settle_at(start + ms(598)), None);
        assert_eq!(debouncer.settle_at(start + ms(599)), Some("ab".to_string()));
    }

    #[test]
    fn cancel_discards_the_pending_emission() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));

        debouncer.touch_at("abc", start);
        debouncer.cancel();

        assert_eq!(debouncer.settle_at(start + ms(1_000)), None);
    }
}
