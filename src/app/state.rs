//! Application state management
//!
//! Holds the screen mode (overview vs. entry modal), the shared input
//! buffer, and the session ledger, and processes keyboard events into
//! state transitions. Everything here is synchronous and testable
//! without a terminal.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};

use crate::models::Ledger;
use crate::util::{parse_amount, Labels};

/// Which state slice an entry modal submission updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Adds to the running gas expense total
    Gas,
    /// Replaces the mileage scalar
    Mileage,
    /// Appends a trip with the parsed amount as earnings
    Trip,
}

impl EntryKind {
    /// Prompt text for the entry modal
    pub fn prompt(&self, labels: &Labels) -> &'static str {
        match self {
            EntryKind::Gas => labels.gas_prompt,
            EntryKind::Mileage => labels.mileage_prompt,
            EntryKind::Trip => labels.trip_prompt,
        }
    }
}

/// Screen mode: the overview, or the shared entry modal tagged with the
/// kind of entry being made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Overview,
    Entry(EntryKind),
}

/// All mutable view-state for the tracker screen
#[derive(Debug, Default)]
pub struct TrackerState {
    ledger: Ledger,
    mode: Mode,
    input_buffer: String,
    input_error: bool,
    should_quit: bool,
}

impl TrackerState {
    /// Create the state around an initial ledger
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            ..Self::default()
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Raw text typed into the entry modal
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Whether the last submit attempt failed to parse
    pub fn has_input_error(&self) -> bool {
        self.input_error
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open the entry modal for the given kind with a fresh buffer
    pub fn open_entry(&mut self, kind: EntryKind) {
        self.mode = Mode::Entry(kind);
        self.input_buffer.clear();
        self.input_error = false;
    }

    /// Append a typed character to the input buffer
    pub fn push_char(&mut self, c: char) {
        self.input_buffer.push(c);
        self.input_error = false;
    }

    /// Remove the last character from the input buffer
    pub fn backspace(&mut self) {
        self.input_buffer.pop();
        self.input_error = false;
    }

    /// Submit the entry modal using the current wall-clock time
    pub fn submit_entry(&mut self) {
        self.submit_entry_at(Local::now());
    }

    /// Submit the entry modal with an explicit timestamp.
    ///
    /// Parses the buffer as a decimal amount and routes it by entry kind:
    /// gas accumulates, mileage replaces, trip appends a record. A parse
    /// failure keeps the modal open with the buffer intact and raises the
    /// inline error flag; nothing in the ledger is touched.
    pub fn submit_entry_at(&mut self, at: DateTime<Local>) {
        let Mode::Entry(kind) = self.mode else {
            return;
        };

        let amount = match parse_amount(&self.input_buffer) {
            Ok(amount) => amount,
            Err(_) => {
                self.input_error = true;
                return;
            }
        };

        match kind {
            EntryKind::Gas => self.ledger.add_gas(amount),
            EntryKind::Mileage => self.ledger.set_mileage(amount),
            EntryKind::Trip => {
                self.ledger.add_trip(amount, at);
            }
        }

        self.mode = Mode::Overview;
        self.input_buffer.clear();
        self.input_error = false;
    }

    /// Close the entry modal, discarding the buffer without touching any
    /// accumulator
    pub fn cancel_entry(&mut self) {
        self.mode = Mode::Overview;
        self.input_buffer.clear();
        self.input_error = false;
    }

    /// Process a keyboard event against the current mode
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Overview => match key.code {
                KeyCode::Char('g') => self.open_entry(EntryKind::Gas),
                KeyCode::Char('m') => self.open_entry(EntryKind::Mileage),
                KeyCode::Char('t') => self.open_entry(EntryKind::Trip),
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                _ => {}
            },
            Mode::Entry(_) => match key.code {
                KeyCode::Enter => self.submit_entry(),
                KeyCode::Esc => self.cancel_entry(),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Char(c) => self.push_char(c),
                _ => {}
            },
        }
    }
}
