//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management, and the
//! event source for the main loop: key presses, interleaved with tick
//! events carrying the measured time step that drives gauge animation.

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Event yielded by the terminal loop
#[derive(Debug)]
pub enum TuiEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// A tick elapsed; carries the time since the previous tick
    Tick(Duration),
}

/// Terminal wrapper that manages the crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    last_tick: Instant,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            last_tick: Instant::now(),
            // 20 FPS keeps the gauge easing smooth without busy-polling
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Block until the next key press or tick
    pub fn next_event(&mut self) -> io::Result<TuiEvent> {
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(TuiEvent::Key(key));
                    }
                }
                // Resize and release events fall through to the tick check
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                let dt = self.last_tick.elapsed();
                self.last_tick = Instant::now();
                return Ok(TuiEvent::Tick(dt));
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}
