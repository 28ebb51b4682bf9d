//! toaster library - Transient toast notifications
//!
//! A notification host that owns a small display tree, a cooperative
//! scheduler and a clock. Toasts appear after a short enter delay, leave
//! after their duration and can be closed by hand at any time.

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod scheduler;
pub mod severity;
pub mod theme;
pub mod toast;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use severity::Severity;
pub use toast::{FlashQueue, Notification, ToastHost};
