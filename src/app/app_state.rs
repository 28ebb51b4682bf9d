use crate::config::Config;
use crate::scheduler::{Clock, SystemClock};
use crate::severity::Severity;
use crate::toast::{FlashQueue, ToastHitAreas, ToastHost};

pub struct App<C: Clock = SystemClock> {
    pub toasts: ToastHost<C>,
    pub flashes: FlashQueue,
    /// Close controls from the last render, for routing clicks
    pub hit_areas: ToastHitAreas,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App<SystemClock> {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(clock: C, config: &Config) -> Self {
        Self {
            toasts: ToastHost::with_clock(clock, config.toast.clone()),
            flashes: FlashQueue::new(),
            hit_areas: ToastHitAreas::default(),
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Show a toast with the configured duration
    pub fn spawn_toast(&mut self, message: &str, severity: Severity) {
        let duration = self.toasts.config().duration();
        self.toasts.notify(message, severity, duration);
        self.mark_dirty();
    }

    /// Move queued flash messages onto the screen
    pub fn drain_flashes(&mut self) {
        if self.flashes.drain_into(&mut self.toasts) > 0 {
            self.mark_dirty();
        }
    }

    /// Dismiss the oldest toast still on screen
    pub fn dismiss_oldest(&mut self) -> bool {
        let Some(oldest) = self.toasts.toasts().first().copied() else {
            return false;
        };
        let dismissed = self.toasts.dismiss(oldest);
        if dismissed {
            self.mark_dirty();
        }
        dismissed
    }

    /// Run due toast timers
    pub fn tick(&mut self) {
        if self.toasts.tick() {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
