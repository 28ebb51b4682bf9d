//! Toast rendering
//!
//! Draws the host's container as a stack of boxes in a corner of the frame
//! and reports where each close control landed so clicks can be routed.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::toast_host::ToastHost;
use crate::display::NodeId;
use crate::scheduler::Clock;
use crate::theme;
use crate::widgets::popup;

const TOAST_HEIGHT: u16 = 3;
const MARGIN: u16 = 1;
const MIN_WIDTH: u16 = 12;
const CLOSE_LABEL: &str = "[x]";
/// Close label plus one column of padding after it
const CLOSE_SPAN: u16 = 4;

/// Screen area of one rendered close control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseArea {
    pub rect: Rect,
    pub toast: NodeId,
    pub close: NodeId,
}

/// Close controls drawn in the last frame
#[derive(Debug, Clone, Default)]
pub struct ToastHitAreas {
    areas: Vec<CloseArea>,
}

impl ToastHitAreas {
    /// Close control under the given cell, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<CloseArea> {
        self.areas.iter().copied().find(|a| {
            column >= a.rect.x
                && column < a.rect.right()
                && row >= a.rect.y
                && row < a.rect.bottom()
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CloseArea> {
        self.areas.iter()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Render every toast in the host's container, in display order.
///
/// Call after the main UI so toasts draw on top. Toasts that do not fit
/// in the frame are skipped.
pub fn render_toasts<C: Clock>(frame: &mut Frame, host: &ToastHost<C>) -> ToastHitAreas {
    let mut hits = ToastHitAreas::default();
    let frame_area = frame.area();
    let config = host.config();

    for (index, toast) in host.toasts().into_iter().enumerate() {
        let severity = host.severity_of(toast).unwrap_or_default();
        let message = host.message_of(toast).unwrap_or("");
        let colors = severity.colors();

        let glyph = Span::raw(severity.glyph());
        let text = Span::raw(message);
        // borders + padding + glyph + space + message + space + close label + padding
        let wanted = glyph.width().saturating_add(text.width()).saturating_add(9);
        let width = (wanted.min(config.max_width as usize) as u16).max(MIN_WIDTH);

        let Some(area) = popup::corner_stack_slot(
            frame_area,
            config.position,
            width,
            TOAST_HEIGHT,
            MARGIN,
            index as u16,
        ) else {
            break;
        };
        if area.width < MIN_WIDTH {
            break;
        }

        let (body_style, icon_style, border_style) = if host.is_visible(toast) {
            let body = Style::default().fg(colors.fg).bg(colors.bg);
            (
                body,
                body.fg(colors.icon),
                Style::default().fg(colors.border).bg(colors.bg),
            )
        } else {
            let faded = theme::toast::FADED;
            (faded, faded, faded)
        };

        popup::clear_area(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(body_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let message_area = Rect {
            width: inner.width.saturating_sub(CLOSE_SPAN),
            ..inner
        };
        let line = Line::from(vec![
            Span::styled(" ", body_style),
            Span::styled(severity.glyph(), icon_style),
            Span::styled(format!(" {}", message), body_style),
        ]);
        frame.render_widget(Paragraph::new(line), message_area);

        let close_area = Rect {
            x: inner.x + inner.width.saturating_sub(CLOSE_SPAN),
            y: inner.y,
            width: CLOSE_SPAN - 1,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(CLOSE_LABEL, body_style.patch(theme::toast::CLOSE))),
            close_area,
        );

        if let Some(close) = host.close_control(toast) {
            hits.areas.push(CloseArea {
                rect: close_area,
                toast,
                close,
            });
        }
    }

    hits
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;
