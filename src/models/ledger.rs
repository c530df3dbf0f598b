//! Session ledger
//!
//! Holds all tracked amounts for the current session: the running gas
//! expense total, the last recorded mileage, the trip list and the three
//! earnings goals. Pure data and arithmetic, no UI concerns. Everything
//! here is discarded when the application exits.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Trip;

/// Earnings goal thresholds, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goals {
    pub daily: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            daily: dec!(200),
            weekly: dec!(1000),
            monthly: dec!(4000),
        }
    }
}

/// In-memory tracking state for one session
#[derive(Debug, Clone)]
pub struct Ledger {
    gas_total: Decimal,
    mileage: Decimal,
    trips: Vec<Trip>,
    goals: Goals,
    next_trip_id: u32,
}

impl Ledger {
    /// Create an empty ledger with the given goals
    pub fn new(goals: Goals) -> Self {
        Self {
            gas_total: Decimal::ZERO,
            mileage: Decimal::ZERO,
            trips: Vec::new(),
            goals,
            next_trip_id: 1,
        }
    }

    /// Running gas expense total
    pub fn gas_total(&self) -> Decimal {
        self.gas_total
    }

    /// Last recorded mileage
    pub fn mileage(&self) -> Decimal {
        self.mileage
    }

    /// All trips logged this session, in submission order
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Add a gas payment to the running total. Accumulates, never replaces.
    pub fn add_gas(&mut self, amount: Decimal) {
        self.gas_total += amount;
    }

    /// Record the latest mileage reading. Replaces, never accumulates.
    pub fn set_mileage(&mut self, miles: Decimal) {
        self.mileage = miles;
    }

    /// Append a trip with the next sequential id. Ids start at 1 and are
    /// never reused within a session.
    pub fn add_trip(&mut self, earnings: Decimal, at: DateTime<Local>) -> &Trip {
        let trip = Trip::new(self.next_trip_id, earnings, at);
        self.next_trip_id += 1;
        self.trips.push(trip);
        self.trips.last().unwrap()
    }

    /// Sum of all trip earnings this session
    pub fn total_earnings(&self) -> Decimal {
        self.trips.iter().map(|t| t.earnings).sum()
    }

    /// Progress toward a goal as an unclamped percentage.
    /// A zero goal yields 0 rather than dividing by zero.
    pub fn progress_percent(&self, goal: Decimal) -> Decimal {
        if goal.is_zero() {
            return Decimal::ZERO;
        }
        self.total_earnings() / goal * dec!(100)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Goals::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeOfDay;
    use chrono::TimeZone;

    fn at_hour(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 14, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_total_earnings_is_exact_sum() {
        let mut ledger = Ledger::default();
        ledger.add_trip(dec!(10.10), at_hour(8));
        ledger.add_trip(dec!(20.20), at_hour(13));
        ledger.add_trip(dec!(0.70), at_hour(22));

        assert_eq!(ledger.total_earnings(), dec!(31.00));
    }

    #[test]
    fn test_trip_ids_are_sequential_from_one() {
        let mut ledger = Ledger::default();
        for _ in 0..4 {
            ledger.add_trip(dec!(5), at_hour(9));
        }

        let ids: Vec<u32> = ledger.trips().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_gas_accumulates() {
        let mut ledger = Ledger::default();
        ledger.add_gas(dec!(30));
        assert_eq!(ledger.gas_total(), dec!(30));
        ledger.add_gas(dec!(20));
        assert_eq!(ledger.gas_total(), dec!(50));
    }

    #[test]
    fn test_mileage_replaces() {
        let mut ledger = Ledger::default();
        ledger.set_mileage(dec!(100));
        ledger.set_mileage(dec!(250));
        assert_eq!(ledger.mileage(), dec!(250));
    }

    #[test]
    fn test_progress_percent() {
        let mut ledger = Ledger::default();
        ledger.add_trip(dec!(150), at_hour(10));

        assert_eq!(ledger.progress_percent(dec!(200)), dec!(75));
        assert_eq!(ledger.progress_percent(dec!(1000)), dec!(15));
    }

    #[test]
    fn test_progress_percent_is_unclamped() {
        let mut ledger = Ledger::default();
        ledger.add_trip(dec!(500), at_hour(10));
        assert_eq!(ledger.progress_percent(dec!(200)), dec!(250));
    }

    #[test]
    fn test_progress_percent_zero_goal() {
        let mut ledger = Ledger::default();
        ledger.add_trip(dec!(150), at_hour(10));
        assert_eq!(ledger.progress_percent(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_trip_records_time_of_day() {
        let mut ledger = Ledger::default();
        let trip = ledger.add_trip(dec!(25), at_hour(14));
        assert_eq!(trip.time_of_day, TimeOfDay::Afternoon);
    }
}
