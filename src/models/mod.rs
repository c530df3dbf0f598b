//! Data models module
//!
//! Contains the trip record, time-of-day bucketing, and the session
//! ledger that holds everything the tracker measures.

pub mod ledger;
pub mod trip;

// Re-export commonly used types
pub use ledger::{Goals, Ledger};
pub use trip::{TimeOfDay, Trip};
