use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use super::app_state::App;
use crate::error::ToasterError;
use crate::scheduler::Clock;
use crate::severity::Severity;

/// Upper bound on event polling so timers are serviced even when idle
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Sample message shown for each severity key
fn sample_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "Loading complete",
        Severity::Success => "Item added to cart!",
        Severity::Error => "Something went wrong",
        Severity::Warning => "Please check your input",
    }
}

impl<C: Clock> App<C> {
    /// Wait for at most the time until the next toast timer, then handle
    /// one terminal event if there is one
    pub fn handle_events(&mut self) -> Result<(), ToasterError> {
        let timeout = match self.toasts.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(self.toasts.clock().now())
                .min(EVENT_POLL_TIMEOUT),
            None => EVENT_POLL_TIMEOUT,
        };

        if event::poll(timeout)? {
            self.handle_event(event::read()?);
        }
        self.tick();
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        let severity = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('d') => {
                self.dismiss_oldest();
                return;
            }
            KeyCode::Char('i') => Severity::Info,
            KeyCode::Char('s') => Severity::Success,
            KeyCode::Char('e') => Severity::Error,
            KeyCode::Char('w') => Severity::Warning,
            _ => return,
        };
        self.spawn_toast(sample_message(severity), severity);
    }

    /// Left click on a close control dismisses its toast
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(area) = self.hit_areas.hit(mouse.column, mouse.row) else {
            return;
        };
        if self.toasts.activate_close(area.close) {
            #[cfg(debug_assertions)]
            log::debug!("Toast {} closed by click", area.toast.raw());
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
