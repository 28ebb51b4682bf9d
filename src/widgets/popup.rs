use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::config::ToastPosition;

/// Rect for the `index`-th box of a stack anchored to a corner of
/// `frame_area`. Boxes grow away from the corner, stacked back to back
/// (`height` rows per box), with `margin` cells kept clear at the frame edge.
///
/// Returns None when the box would not fit inside the frame.
pub fn corner_stack_slot(
    frame_area: Rect,
    position: ToastPosition,
    width: u16,
    height: u16,
    margin: u16,
    index: u16,
) -> Option<Rect> {
    let width = width.min(frame_area.width.saturating_sub(margin * 2));
    if width == 0 || height == 0 {
        return None;
    }

    let offset = margin as u32 + index as u32 * height as u32;
    if offset + height as u32 + margin as u32 > frame_area.height as u32 {
        return None;
    }
    let offset = offset as u16;

    let x = if position.is_right() {
        frame_area.x + frame_area.width.saturating_sub(width + margin)
    } else {
        frame_area.x + margin
    };
    let y = if position.is_top() {
        frame_area.y + offset
    } else {
        frame_area.y + frame_area.height - offset - height
    };

    Some(Rect {
        x,
        y,
        width,
        height,
    })
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
