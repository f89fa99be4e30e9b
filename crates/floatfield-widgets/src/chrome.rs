//! Convenience helpers for framing fields.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Padding};

/// A borderless block with a one-cell left gutter that shows a bar while
/// focused.  Keeps the floating label aligned across a column of fields.
pub fn focus_gutter(focused: bool) -> Block<'static> {
    let color = if focused { Color::Cyan } else { Color::Reset };
    Block::new()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(color))
        .padding(Padding::left(1))
}

/// Rows a hosted field needs: label, text and underline.
pub const FIELD_HEIGHT: u16 = 3;

/// Split `area` into consecutive [`FIELD_HEIGHT`] slots separated by `gap`
/// blank rows, stopping at the bottom of `area`.
pub fn field_slots(area: Rect, count: usize, gap: u16) -> Vec<Rect> {
    let mut slots = Vec::with_capacity(count);
    let mut y = area.y;
    for _ in 0..count {
        if y.saturating_add(FIELD_HEIGHT) > area.bottom() {
            break;
        }
        slots.push(Rect::new(area.x, y, area.width, FIELD_HEIGHT));
        y = y.saturating_add(FIELD_HEIGHT + gap);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_stack_with_gaps() {
        let slots = field_slots(Rect::new(0, 0, 20, 12), 3, 1);
        assert_eq!(
            slots,
            vec![
                Rect::new(0, 0, 20, 3),
                Rect::new(0, 4, 20, 3),
                Rect::new(0, 8, 20, 3),
            ]
        );
    }

    #[test]
    fn slots_stop_at_the_bottom() {
        let slots = field_slots(Rect::new(0, 0, 20, 7), 3, 1);
        assert_eq!(slots.len(), 2);
    }
}
