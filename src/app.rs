//! Interactive demo application
//!
//! A full-screen terminal view where keys raise toasts of each severity and
//! mouse clicks on a close control dismiss them.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::App;
