//! Terminal stepper built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, auto-play
//! - **[`panes`]** — stateless render functions for each visible pane (source,
//!   tape, context stack, output, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Runner`] and
//! the program source, then call [`App::run`] to start the event loop. Each
//! step feeds exactly one source character to the runner.
//!
//! [`Runner`]: crate::interpreter::engine::Runner
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
