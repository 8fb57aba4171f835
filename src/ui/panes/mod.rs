//! TUI pane rendering modules
//!
//! - [`source`]: program text with the feed cursor on the next character
//! - [`tape`]: cells around the head
//! - [`stack`]: the execution context stack, active context first
//! - [`terminal`]: bytes the program has written
//! - [`status`]: status bar with keybindings and run state
//!
//! Each pane module exports a single `render_*` function and keeps no state
//! of its own beyond the scroll offset it is handed.

pub mod source;
pub mod stack;
pub mod status;
pub mod tape;
pub mod terminal;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub use source::render_source_pane;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
pub use tape::render_tape_pane;
pub use terminal::render_terminal_pane;

/// Border style shared by all panes
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so that `visible` rows starting there stay within `total`
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
