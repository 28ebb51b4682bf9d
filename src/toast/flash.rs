//! Flash messages
//!
//! Messages queued before a host is available (startup, config loading,
//! a previous screen) and turned into toasts once it is.

use std::collections::VecDeque;

use super::toast_host::ToastHost;
use crate::scheduler::Clock;
use crate::severity::Severity;

/// FIFO of `(category, message)` pairs waiting to be shown
#[derive(Debug, Default)]
pub struct FlashQueue {
    pending: VecDeque<(String, String)>,
}

impl FlashQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message. The category is parsed leniently when drained.
    pub fn flash(&mut self, message: impl Into<String>, category: impl Into<String>) {
        self.pending.push_back((category.into(), message.into()));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Show every queued message on `host` in the order queued.
    /// Returns how many toasts were created.
    pub fn drain_into<C: Clock>(&mut self, host: &mut ToastHost<C>) -> usize {
        let count = self.pending.len();
        let duration = host.config().duration();
        for (category, message) in self.pending.drain(..) {
            host.notify(&message, Severity::from_name(&category), duration);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;
    use crate::scheduler::ManualClock;

    #[test]
    fn test_drain_preserves_order_and_categories() {
        let mut flashes = FlashQueue::new();
        flashes.flash("Account created successfully!", "success");
        flashes.flash("Your cart is empty!", "error");
        flashes.flash("Heads up", "message");
        assert_eq!(flashes.len(), 3);

        let mut host = ToastHost::with_clock(ManualClock::new(), ToastConfig::default());
        assert_eq!(flashes.drain_into(&mut host), 3);
        assert!(flashes.is_empty());

        let toasts = host.toasts();
        let shown: Vec<_> = toasts
            .iter()
            .map(|t| (host.severity_of(*t), host.message_of(*t)))
            .collect();
        assert_eq!(
            shown,
            vec![
                (Some(Severity::Success), Some("Account created successfully!")),
                (Some(Severity::Error), Some("Your cart is empty!")),
                (Some(Severity::Info), Some("Heads up")),
            ]
        );
    }

    #[test]
    fn test_drain_empty_queue_creates_nothing() {
        let mut flashes = FlashQueue::new();
        let mut host = ToastHost::with_clock(ManualClock::new(), ToastConfig::default());

        assert_eq!(flashes.drain_into(&mut host), 0);
        assert_eq!(host.container(), None);
    }

    #[test]
    fn test_drained_toasts_use_configured_duration() {
        let clock = ManualClock::new();
        let config = ToastConfig {
            duration_ms: 100,
            ..ToastConfig::default()
        };
        let mut host = ToastHost::with_clock(clock.clone(), config);
        let mut flashes = FlashQueue::new();
        flashes.flash("short", "info");
        flashes.drain_into(&mut host);

        clock.set(std::time::Duration::from_millis(400));
        host.tick();
        assert!(host.toasts().is_empty());
    }
}
