//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and
//! rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use tokio::sync::mpsc::{self, UnboundedSender};
use triptych_protocol::Message;

use crate::{
    AppState,
    event::{event_to_message, poll_event, schedule_tick, spawn_pretend_work},
    layout::BAR_HEIGHT,
    terminal::AppTerminal,
    widgets::{render_content, render_footer, render_header},
};

/// Follow-up work a message asks the host loop to start.
///
/// [`App::update`] never blocks and never spawns; anything timed it
/// wants done comes back as one of these for the run loop to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Arm the timer for the next spinner tick.
    ScheduleTick,
}

/// The main application struct.
///
/// Owns the application state and provides the main event loop.
#[derive(Debug, Default)]
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new application in its startup state: busy, with the
    /// terminal dimensions still unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use triptych_tui::App;
    ///
    /// let app = App::new();
    /// assert!(app.state().busy);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Updates the application state based on a message.
    ///
    /// Returns the follow-up command the message asks for, if any. The
    /// only follow-up is re-arming the spinner tick: requested for
    /// every tick that arrives while the pretend work is running, and
    /// never again once it completes, which is what freezes the glyph.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process.
    pub fn update(&mut self, msg: Message) -> Option<Command> {
        match msg {
            Message::Resize { width, height } => {
                self.state.resize(width, height);
                None
            }
            Message::Tick => {
                if self.state.busy {
                    self.state.spinner.advance();
                    Some(Command::ScheduleTick)
                } else {
                    // Late ticks are dropped, not rescheduled
                    None
                }
            }
            Message::WorkDone => {
                self.state.finish_work();
                None
            }
            Message::Quit => {
                self.should_quit = true;
                None
            }
        }
    }

    /// Renders the three-row frame.
    ///
    /// The top and bottom bars keep their fixed height; the content
    /// row takes whatever remains. No minimum size is enforced: on a
    /// tiny terminal the content row simply collapses to nothing.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render into.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BAR_HEIGHT), // Header bar
                Constraint::Min(0),             // Content area
                Constraint::Length(BAR_HEIGHT), // Footer bar
            ])
            .split(area);

        let buf = frame.buffer_mut();
        render_header(chunks[0], buf);
        render_content(&self.state, chunks[1], buf);
        render_footer(chunks[2], buf);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application. It
    /// draws a frame, polls for terminal events, drains background
    /// messages (spinner ticks and the pretend-work completion), and
    /// executes any follow-up commands. Before the first iteration it
    /// kicks off the pretend work and the first spinner tick.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use triptych_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new();
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();

        // Startup batch: the pretend work and the first spinner tick
        spawn_pretend_work(tx.clone());
        schedule_tick(tx.clone());

        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Poll for terminal events (keys, resizes)
            if let Some(event) = poll_event()? {
                if let Some(msg) = event_to_message(&event) {
                    self.dispatch(msg, &tx);
                }
            }

            // Drain background messages without blocking; once quit is
            // signalled no further messages are processed
            while !self.should_quit {
                match rx.try_recv() {
                    Ok(msg) => {
                        self.dispatch(msg, &tx);
                    }
                    Err(_) => break,
                }
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Applies one message and executes its follow-up command, if any.
    fn dispatch(&mut self, msg: Message, tx: &UnboundedSender<Message>) {
        match self.update(msg) {
            Some(Command::ScheduleTick) => schedule_tick(tx.clone()),
            None => {}
        }
    }
}
