//! Context stack pane rendering

use super::border_style;
use crate::interpreter::context::ContextSummary;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn describe(summary: &ContextSummary) -> (String, Style) {
    match summary {
        ContextSummary::Plain { commands } => (
            format!("root ({} commands)", commands),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        ContextSummary::Recording {
            recorded,
            open: true,
        } => (
            format!("loop, recording ({} chars)", recorded),
            Style::default().fg(DEFAULT_THEME.recording),
        ),
        ContextSummary::Recording {
            recorded,
            open: false,
        } => (
            format!("loop, replaying ({} chars)", recorded),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
        ContextSummary::Skip { depth } => (
            format!("loop, skipping (depth {})", depth),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    }
}

/// Render the stack with the active context at the top
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    contexts: &[ContextSummary],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Contexts ({}) ", contexts.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    super::clamp_scroll(scroll_offset, contexts.len(), visible_height);

    let lines: Vec<Line> = contexts
        .iter()
        .enumerate()
        .rev()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(index, summary)| {
            let (text, style) = describe(summary);
            let marker = if index + 1 == contexts.len() {
                Span::styled(
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("  ")
            };
            Line::from(vec![
                marker,
                Span::styled(
                    format!("#{:<3}", index),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(text, style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
