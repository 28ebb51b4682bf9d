//! Notification values
//!
//! A `Notification` is what a caller asks to show. It only lives on screen
//! as elements in the host's display tree.

use std::time::Duration;

use crate::severity::Severity;

/// A message to show as a toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    severity: Severity,
    /// None = use the host's configured duration
    duration: Option<Duration>,
}

impl Notification {
    /// Create an info notification with the default duration
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
            duration: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Error)
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Override how long the toast stays before its exit begins
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}
