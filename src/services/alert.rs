//! Transient validation banner
//!
//! A banner shows one warning at a time and hides itself after a delay. Each
//! distinct warning gets a new generation; a scheduled dismissal only hides
//! the banner if it still belongs to the generation it was scheduled for.

use std::time::{Duration, Instant};

/// A pending dismissal for one banner generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismissal {
    pub generation: u64,
    pub at: Instant,
}

#[derive(Debug, Clone)]
pub struct TransientAlert {
    message: Option<String>,
    generation: u64,
    pending: Option<Dismissal>,
    dismiss_after: Duration,
}

impl TransientAlert {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            message: None,
            generation: 0,
            pending: None,
            dismiss_after,
        }
    }

    /// Currently visible message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> Option<Dismissal> {
        self.pending
    }

    /// Show a message
    ///
    /// Showing the text that is already visible keeps the current schedule.
    /// Any other text starts a new generation and a fresh dismissal.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) -> Dismissal {
        let message = message.into();
        if let (Some(current), Some(pending)) = (&self.message, self.pending) {
            if *current == message {
                return pending;
            }
        }

        self.generation += 1;
        self.message = Some(message);
        let dismissal = Dismissal {
            generation: self.generation,
            at: now + self.dismiss_after,
        };
        self.pending = Some(dismissal);
        dismissal
    }

    /// Hide the banner and cancel its dismissal
    pub fn clear(&mut self) {
        if self.message.take().is_some() || self.pending.is_some() {
            self.generation += 1;
        }
        self.pending = None;
    }

    /// Fire a dismissal; a stale generation does nothing
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        self.pending = None;
        true
    }

    /// Fire the pending dismissal if it is due
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.at => self.dismiss(pending.generation),
            _ => false,
        }
    }
}

impl Default for TransientAlert {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_dismiss_after_delay() {
        let start = Instant::now();
        let mut alert = TransientAlert::new(Duration::from_secs(5));
        alert.show("Weekly must be ≤ 7 days.", start);

        assert!(!alert.tick(start + Duration::from_secs(4)));
        assert!(alert.is_visible());
        assert!(alert.tick(start + Duration::from_secs(5)));
        assert!(!alert.is_visible());
    }

    #[test]
    fn test_stale_dismissal_is_ignored() {
        let start = Instant::now();
        let mut alert = TransientAlert::new(Duration::from_secs(5));
        let first = alert.show("Weekly must be ≤ 7 days.", start);
        alert.show("Monthly must be 8-31 days.", start + Duration::from_secs(3));

        assert!(!alert.dismiss(first.generation));
        assert_eq!(alert.message(), Some("Monthly must be 8-31 days."));

        // The old deadline has passed but the new warning was rescheduled
        assert!(!alert.tick(start + Duration::from_secs(6)));
        assert!(alert.tick(start + Duration::from_secs(8)));
    }

    #[test]
    fn test_same_text_keeps_schedule() {
        let start = Instant::now();
        let mut alert = TransientAlert::new(Duration::from_secs(5));
        let first = alert.show("Annual must be > 180 days.", start);
        let again = alert.show("Annual must be > 180 days.", start + Duration::from_secs(2));
        assert_eq!(first, again);
    }

    #[test]
    fn test_clear_cancels_pending() {
        let start = Instant::now();
        let mut alert = TransientAlert::new(Duration::from_secs(5));
        let scheduled = alert.show("Select the date from starting date.", start);
        alert.clear();

        assert!(alert.pending().is_none());
        assert!(!alert.dismiss(scheduled.generation));
        assert!(!alert.tick(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_reshow_after_dismiss_gets_new_generation() {
        let start = Instant::now();
        let mut alert = TransientAlert::new(Duration::from_secs(1));
        let first = alert.show("Weekly must be ≤ 7 days.", start);
        alert.tick(start + Duration::from_secs(1));

        let second = alert.show("Weekly must be ≤ 7 days.", start + Duration::from_secs(2));
        assert!(second.generation > first.generation);
        assert!(alert.is_visible());
    }
}
