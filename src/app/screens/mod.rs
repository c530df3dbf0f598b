//! TUI screen components
//!
//! The overview screen and the entry modal drawn over it.

pub mod entry;
pub mod overview;

pub use overview::OverviewScreen;
