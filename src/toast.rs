//! Toast module for toaster
//!
//! Transient notifications: a host that builds toast elements in a single
//! lazily created container, times their enter and exit, and lets them be
//! dismissed by hand; plus rendering and a queue for early messages.

mod flash;
mod notification;
mod toast_host;
mod toast_render;

pub use flash::FlashQueue;
pub use notification::Notification;
pub use toast_host::{
    CLOSE_CLASS, CONTAINER_CLASS, CONTAINER_ID, MESSAGE_CLASS, TOAST_CLASS, ToastHost,
    VISIBLE_CLASS,
};
pub use toast_render::{CloseArea, ToastHitAreas, render_toasts};
