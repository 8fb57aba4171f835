//! Main TUI application state and logic

use crate::interpreter::engine::Runner;
use crate::interpreter::errors::EngineError;
use crate::interpreter::feed::FeedError;
use crate::streams::OutputCapture;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(100);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tape,
    Stack,
    Terminal,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> terminal -> tape -> stack)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Terminal,
            FocusedPane::Terminal => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Source,
        }
    }
}

/// Result of feeding one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepResult {
    Stepped,
    EndOfSource,
    Halted,
    Failed,
}

/// The main application state
pub struct App {
    /// The runner being stepped
    pub runner: Runner,

    /// Program source, fed one character per step
    pub source: Vec<char>,

    /// Shared handle on the runner's output sink
    pub output: OutputCapture,

    /// Index of the next character to feed
    pub position: usize,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub stack_scroll: usize,
    pub terminal_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Set when a character failed; stepping stops
    pub error: Option<FeedError>,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    /// Create a new app around `runner`, whose sink must be a clone of `output`
    pub fn new(runner: Runner, source: &str, output: OutputCapture) -> Self {
        App {
            runner,
            source: source.chars().collect(),
            output,
            position: 0,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            stack_scroll: 0,
            terminal_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            error: None,
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.step() != StepResult::Stepped {
                    self.is_playing = false;
                }
                self.last_play_time = Instant::now();
            }

            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Tape (top) | Contexts (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source,
            self.position,
            self.error.is_some(),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_terminal_pane(
            frame,
            left_rows[1],
            &self.output.text(),
            self.focused_pane == FocusedPane::Terminal,
            &mut self.terminal_scroll,
        );

        super::panes::render_tape_pane(
            frame,
            right_rows[0],
            self.runner.tape(),
            self.focused_pane == FocusedPane::Tape,
        );

        super::panes::render_stack_pane(
            frame,
            right_rows[1],
            &self.runner.contexts(),
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.position,
            self.source.len(),
            self.error.is_some(),
            self.is_playing,
            self.runner.is_finished(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                while stepped < n && self.step() == StepResult::Stepped {
                    stepped += 1;
                }
                if self.error.is_none() {
                    self.status_message = format!("Stepped forward {} char(s)", stepped);
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.step() == StepResult::Stepped {
                    self.status_message = "Stepped forward".to_string();
                }
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => self.source_scroll = self.source_scroll.saturating_sub(1),
                FocusedPane::Stack => self.stack_scroll = self.stack_scroll.saturating_sub(1),
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_sub(1)
                }
                FocusedPane::Tape => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => self.source_scroll = self.source_scroll.saturating_add(1),
                FocusedPane::Stack => self.stack_scroll = self.stack_scroll.saturating_add(1),
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_add(1)
                }
                FocusedPane::Tape => {}
            },
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                self.last_play_time = Instant::now();
                self.status_message = if self.is_playing {
                    "Playing...".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            KeyCode::Enter => {
                // Feed the rest of the source
                self.is_playing = false;
                while self.step() == StepResult::Stepped {}
            }
            _ => {}
        }
    }

    /// Feed the next source character to the runner
    fn step(&mut self) -> StepResult {
        if self.error.is_some() {
            return StepResult::Failed;
        }
        if self.runner.is_finished() {
            return StepResult::Halted;
        }
        let Some(&ch) = self.source.get(self.position) else {
            self.status_message = "End of source".to_string();
            return StepResult::EndOfSource;
        };

        // Keep the output pane pinned to the newest line
        self.terminal_scroll = usize::MAX;

        match self.runner.execute(ch) {
            Ok(()) => {
                self.position += 1;
                StepResult::Stepped
            }
            Err(EngineError::RunOver) => {
                self.position += 1;
                self.status_message = "Run is over".to_string();
                StepResult::Halted
            }
            Err(error) => {
                let failure = FeedError {
                    position: self.position,
                    ch,
                    error,
                };
                self.status_message = failure.to_string();
                self.error = Some(failure);
                StepResult::Failed
            }
        }
    }
}
