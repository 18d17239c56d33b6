//! Main TUI application state and logic

use crate::playback::{Playback, DEFAULT_INTERVAL};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Code,
    Console,
    Trace,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: code -> console -> trace)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Code => FocusedPane::Console,
            FocusedPane::Console => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Code,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Code => FocusedPane::Trace,
            FocusedPane::Console => FocusedPane::Code,
            FocusedPane::Trace => FocusedPane::Console,
        }
    }
}

/// The main application state
pub struct App {
    /// The playback controller driving the trace
    pub playback: Playback,

    /// The rendered code listing, one entry per line
    pub listing: Vec<String>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub trace_scroll: usize,
    pub console_scroll: usize,

    /// Number of steps applied since the last reset
    pub step_count: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a configured playback controller
    pub fn new(playback: Playback) -> Self {
        let listing = match playback.params() {
            Some(params) => (playback.spec().source)(params)
                .lines()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        App {
            playback,
            listing,
            focused_pane: FocusedPane::Code,
            trace_scroll: 0,
            console_scroll: 0,
            step_count: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Fire an autoplay tick when due
            let ticked = self
                .playback
                .poll(Instant::now())
                .map_err(io::Error::other)?;
            if ticked {
                self.step_count += 1;
                self.console_scroll = usize::MAX;
                if self.playback.state().is_some_and(|s| s.done) {
                    self.status_message = "Playback complete".to_string();
                } else {
                    self.status_message = "Playing...".to_string();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
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

        // Panes above, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: Code (top) | Console (bottom); right column: Trace
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        let highlights = self.playback.highlights();
        super::panes::render_code_pane(
            frame,
            left_rows[0],
            self.playback.spec().title,
            &self.listing,
            &highlights,
            self.focused_pane == FocusedPane::Code,
        );

        let (output, state) = match self.playback.state() {
            Some(state) => (state.output.clone(), Some(state.clone())),
            None => (Vec::new(), None),
        };

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            &output,
            self.focused_pane == FocusedPane::Console,
            &mut self.console_scroll,
        );

        if let Some(state) = &state {
            super::panes::render_trace_pane(
                frame,
                columns[1],
                self.playback.spec(),
                state,
                self.focused_pane == FocusedPane::Trace,
                &mut self.trace_scroll,
            );
        }

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.playback.spec().name,
            self.step_count,
            self.playback.is_playing(),
            state.as_ref().map(|s| s.done).unwrap_or(false),
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
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.step_forward() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Right | KeyCode::Char('n') => {
                if self.step_forward() {
                    self.status_message = "Stepped forward".to_string();
                } else {
                    self.status_message = "Trace complete - press r to reset".to_string();
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.playback.is_playing() {
                        self.playback.pause();
                        self.status_message = "Paused".to_string();
                    } else if self.playback.state().is_some_and(|s| s.done) {
                        self.status_message = "Trace complete - press r to reset".to_string();
                    } else if self
                        .playback
                        .play(DEFAULT_INTERVAL, Instant::now())
                        .is_ok()
                    {
                        self.status_message = "Playing...".to_string();
                    }
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.playback.reset().is_ok() {
                    self.step_count = 0;
                    self.console_scroll = 0;
                    self.status_message = "Reset".to_string();
                }
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_sub(1);
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_sub(1);
                }
                FocusedPane::Code => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_add(1);
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_add(1);
                }
                FocusedPane::Code => {}
            },
            _ => {}
        }
    }

    /// Apply one manual step. Returns false once the trace is done.
    fn step_forward(&mut self) -> bool {
        match self.playback.state() {
            Some(state) if !state.done => {}
            _ => return false,
        }
        if self.playback.step_once().is_err() {
            return false;
        }
        self.step_count += 1;
        self.console_scroll = usize::MAX;
        true
    }
}
