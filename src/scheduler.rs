//! Scheduler module for toaster
//!
//! Deferred tasks on a cooperative, single-threaded loop. Nothing runs on
//! its own: the owner asks for due tasks with the current time and applies
//! them, which keeps ordering deterministic and testable with a manual clock.

mod clock;
mod task_queue;

pub use clock::{Clock, ManualClock, SystemClock};
pub use task_queue::Scheduler;
