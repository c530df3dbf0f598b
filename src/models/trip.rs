//! Trip records
//!
//! A trip is an immutable, session-scoped record of a single fare:
//! sequential id, formatted local time of entry, earnings, and the
//! time-of-day bucket the entry hour falls into.

use chrono::{DateTime, Local, Timelike};
use rust_decimal::Decimal;

/// Time-of-day bucket derived from the wall-clock hour at trip creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// Hours 0-5
    Dawn,
    /// Hours 6-11
    Morning,
    /// Hours 12-17
    Afternoon,
    /// Hours 18-23
    Night,
}

impl TimeOfDay {
    /// Bucket an hour (0-23). Boundaries at 6, 12 and 18, lower bound
    /// inclusive; hours before 6 fall into Dawn.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => TimeOfDay::Dawn,
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Night,
        }
    }
}

/// A single logged trip
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Sequential 1-based id, unique within the session
    pub id: u32,
    /// Local time of entry, formatted for display
    pub time: String,
    /// Earnings for this trip
    pub earnings: Decimal,
    /// Bucket of the entry hour
    pub time_of_day: TimeOfDay,
}

impl Trip {
    /// Create a trip record from an id, earnings amount and entry timestamp
    pub fn new(id: u32, earnings: Decimal, at: DateTime<Local>) -> Self {
        Self {
            id,
            time: at.format("%H:%M:%S").to_string(),
            earnings,
            time_of_day: TimeOfDay::from_hour(at.hour()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Dawn);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Dawn);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Night);
    }

    #[test]
    fn test_trip_creation() {
        let at = Local.with_ymd_and_hms(2024, 3, 14, 14, 30, 0).unwrap();
        let trip = Trip::new(1, dec!(25), at);

        assert_eq!(trip.id, 1);
        assert_eq!(trip.earnings, dec!(25));
        assert_eq!(trip.time_of_day, TimeOfDay::Afternoon);
        assert_eq!(trip.time, "14:30:00");
    }

    #[test]
    fn test_trip_at_midnight_is_dawn() {
        let at = Local.with_ymd_and_hms(2024, 3, 14, 0, 0, 1).unwrap();
        let trip = Trip::new(7, dec!(12.50), at);
        assert_eq!(trip.time_of_day, TimeOfDay::Dawn);
    }
}
