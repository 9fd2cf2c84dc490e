//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type defining the inclusive date
//! window a timesheet covers, with business-day counting for the monthly
//! summary.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// An inclusive date range for one timesheet.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::models::PayPeriod;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()));
/// assert_eq!(period.business_days(), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates every date in the period, oldest first.
    ///
    /// An inverted period (start after end) yields nothing.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }

    /// Counts the Monday-to-Friday days in the period.
    pub fn business_days(&self) -> u32 {
        self.days().filter(|d| Self::is_business_day(*d)).count() as u32
    }

    /// Returns true for Monday through Friday.
    ///
    /// Weekends are the standard non-working days of the monthly time
    /// sheet; holidays are entered by clearing the day's template instead.
    pub fn is_business_day(date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
