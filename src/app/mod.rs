//! TUI application module
//!
//! Contains the application controller, terminal wrapper, screen
//! components, gauge animation, and the tracker view-state.

pub mod anim;
pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use anim::AnimatedGauge;
pub use app::App;
pub use screens::OverviewScreen;
pub use state::{EntryKind, Mode, TrackerState};
pub use tui::{Tui, TuiEvent};
