//! Source pane rendering
//!
//! Shows the program text with command characters colored by kind and the
//! next character to be fed highlighted. Characters that are not commands are
//! dimmed; under the default policy they are skipped when whitespace and
//! rejected otherwise.

use super::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn command_style(ch: char) -> Style {
    match ch {
        '[' | ']' => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        '+' | '-' => Style::default().fg(DEFAULT_THEME.number),
        '<' | '>' => Style::default().fg(DEFAULT_THEME.fg),
        '.' | ',' => Style::default().fg(DEFAULT_THEME.string),
        _ => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Split `source` into styled lines and return the line holding `cursor`
fn build_lines(source: &[char], cursor: usize, is_error: bool) -> (Vec<Line<'static>>, usize) {
    let cursor_style = if is_error {
        Style::default()
            .bg(DEFAULT_THEME.error)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(DEFAULT_THEME.head_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut cursor_line = 0;

    for (index, &ch) in source.iter().enumerate() {
        if index == cursor {
            cursor_line = lines.len();
        }
        if ch == '\n' {
            if index == cursor {
                // Make the cursor visible on a line break
                spans.push(Span::styled(" ", cursor_style));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
            continue;
        }
        let style = if index == cursor {
            cursor_style
        } else {
            command_style(ch)
        };
        spans.push(Span::styled(ch.to_string(), style));
    }
    if cursor >= source.len() {
        cursor_line = lines.len();
    }
    lines.push(Line::from(spans));

    (lines, cursor_line)
}

/// Render the source pane, keeping the cursor line in view
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &[char],
    cursor: usize,
    is_error: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Source ({}/{}) ", cursor.min(source.len()), source.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let (lines, cursor_line) = build_lines(source, cursor, is_error);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if cursor_line < *scroll_offset {
        *scroll_offset = cursor_line;
    } else if cursor_line >= *scroll_offset + visible_height {
        *scroll_offset = cursor_line + 1 - visible_height;
    }
    super::clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_line_tracks_newlines() {
        let source: Vec<char> = "++\n[-]\n.".chars().collect();
        let (lines, cursor_line) = build_lines(&source, 4, false);
        assert_eq!(lines.len(), 3);
        assert_eq!(cursor_line, 1);

        let (_, end_line) = build_lines(&source, source.len(), false);
        assert_eq!(end_line, 2);
    }
}
