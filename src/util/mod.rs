//! Utility functions module
//!
//! Contains locale/label tables and money parsing and formatting helpers.

pub mod locale;
pub mod money;

// Re-export commonly used items
pub use locale::{Labels, Locale};
pub use money::{format_money, parse_amount};
