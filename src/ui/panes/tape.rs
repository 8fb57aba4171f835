//! Tape pane rendering
//!
//! Cells are laid out in rows of [`CELLS_PER_ROW`], starting from the row that
//! puts the head roughly in the middle of the pane. The cell under the head is
//! highlighted; non-zero cells are brighter than zero ones.

use super::border_style;
use crate::memory::{Position, Tape};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const CELLS_PER_ROW: usize = 8;

/// First row to show so that the head's row sits near the middle
fn first_row(head: Position, total_rows: usize, visible_rows: usize) -> usize {
    let head_row = head.max(0) as usize / CELLS_PER_ROW;
    let start = head_row.saturating_sub(visible_rows / 2);
    start.min(total_rows.saturating_sub(visible_rows))
}

pub fn render_tape_pane(frame: &mut Frame, area: Rect, tape: &dyn Tape, is_focused: bool) {
    let head = tape.head();
    let block = Block::default()
        .title(format!(" Tape (head {}, cell {}) ", head, tape.read()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let visible_rows = area.height.saturating_sub(2).max(1) as usize;
    let total_rows = tape.capacity().div_ceil(CELLS_PER_ROW);
    let start = first_row(head, total_rows, visible_rows);

    let lines: Vec<Line> = (start..total_rows.min(start + visible_rows))
        .map(|row| {
            let base = (row * CELLS_PER_ROW) as Position;
            let mut spans = vec![Span::styled(
                format!("{:>6} ", base),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            for offset in 0..CELLS_PER_ROW as Position {
                let position = base + offset;
                let Some(value) = tape.cell_at(position) else {
                    break;
                };
                let style = if position == head {
                    Style::default()
                        .bg(DEFAULT_THEME.head_bg)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else if value != 0 {
                    Style::default().fg(DEFAULT_THEME.fg)
                } else {
                    Style::default().fg(DEFAULT_THEME.comment)
                };
                spans.push(Span::styled(format!("{:>5}", value), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_centers_head() {
        assert_eq!(first_row(0, 3750, 10), 0);
        assert_eq!(first_row(800, 3750, 10), 95);
        assert_eq!(first_row(29999, 3750, 10), 3740);
    }
}
