//! Main application controller
//!
//! Wires the terminal, the tracker state and the screens together and
//! runs the draw/input loop. Every event is handled synchronously within
//! one loop iteration.

use crate::{
    app::{
        screens::{entry, OverviewScreen},
        state::{Mode, TrackerState},
        tui::{Tui, TuiEvent},
    },
    config::TrackerConfig,
    models::Ledger,
    util::Labels,
    Result,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// All mutable view-state and the session ledger
    state: TrackerState,
    /// Overview screen with its animated gauges
    overview: OverviewScreen,
    /// Label table for the configured locale
    labels: &'static Labels,
}

impl App {
    /// Create a new application instance from configuration
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        Ok(Self {
            tui: Tui::new()?,
            state: TrackerState::new(Ledger::new(config.goals())),
            overview: OverviewScreen::new(),
            labels: config.locale.labels(),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        while !self.state.should_quit() {
            self.overview.update_targets(self.state.ledger());
            self.draw()?;

            match self.tui.next_event()? {
                TuiEvent::Key(key) => self.state.handle_key_event(key),
                TuiEvent::Tick(dt) => self.overview.tick(dt),
            }
        }
        Ok(())
    }

    /// Restore the terminal
    pub fn shutdown(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the overview and, when open, the entry modal on top
    fn draw(&mut self) -> Result<()> {
        let labels = self.labels;
        let Self {
            tui,
            state,
            overview,
            ..
        } = self;

        tui.draw(|f| {
            overview.render(f, state, labels);
            if let Mode::Entry(kind) = state.mode() {
                entry::render(f, kind, state, labels);
            }
        })?;
        Ok(())
    }
}
