use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::scheduler::Clock;
use crate::theme;
use crate::toast::render_toasts;
use crate::widgets::popup;

const KEY_HINTS: [(&str, &str); 6] = [
    ("i", "info"),
    ("s", "success"),
    ("e", "error"),
    ("w", "warning"),
    ("d", "dismiss oldest"),
    ("q", "quit"),
];

impl<C: Clock> App<C> {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" toaster ", theme::demo::TITLE))
            .style(theme::demo::BACKGROUND);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from("Press a key to raise a toast, click [x] to close one."),
            Line::default(),
        ];
        lines.extend(KEY_HINTS.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{:>3}  ", key), Style::new().fg(theme::demo::KEY)),
                Span::styled(*desc, Style::new().fg(theme::demo::DESCRIPTION)),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), popup::inset_rect(area, 2, 1));

        // Toasts last so they draw on top
        self.hit_areas = render_toasts(frame, &self.toasts);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::Config;
    use crate::scheduler::ManualClock;
    use crate::severity::Severity;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_draws_hints_and_records_hit_areas() {
        let mut app = App::with_clock(ManualClock::new(), &Config::default());
        app.spawn_toast("Item added to cart!", Severity::Success);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let output = terminal.backend().to_string();
        assert!(output.contains("toaster"));
        assert!(output.contains("dismiss oldest"));
        assert!(output.contains("Item added to cart!"));
        assert_eq!(app.hit_areas.len(), 1);
    }
}
