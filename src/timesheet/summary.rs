//! Period summary aggregation.
//!
//! This module rolls a period's day records up into the monthly totals
//! shown on the report header: total worked time, days worked and
//! absences against the business-day count.

use serde::Serialize;

use crate::models::{DayRecord, PayPeriod};

use super::duration::WorkedDuration;

/// Aggregated totals for one timesheet period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    /// Sum of all derived day durations.
    pub total_worked: WorkedDuration,
    /// Number of days with a non-zero derived duration.
    pub days_worked: u32,
    /// Number of Monday-to-Friday days in the period.
    pub business_days: u32,
    /// Business days minus days worked, floored at zero.
    pub absences: u32,
}

/// Aggregates a period's day records into a summary.
///
/// A day counts as worked iff its derived duration is non-zero, so days
/// with missing punches count as absences even when partially filled.
/// Days worked can exceed the business-day count when weekend days carry a
/// working template; absences are floored at zero in that case.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::models::{DayPunches, DayRecord, PayPeriod, ShiftTemplate};
/// use ponto_engine::timesheet::{NegativeDurationPolicy, summarize_period};
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
/// };
/// let template: ShiftTemplate = "07:12 10:30 12:00 17:30".parse().unwrap();
/// let records = vec![
///     DayRecord::new(
///         period.start_date,
///         template,
///         DayPunches::parse("07:12", "10:30", "12:00", "17:30"),
///         NegativeDurationPolicy::ClampToZero,
///     ),
///     DayRecord::new(
///         period.end_date,
///         template,
///         DayPunches::unset(),
///         NegativeDurationPolicy::ClampToZero,
///     ),
/// ];
///
/// let summary = summarize_period(&period, &records);
/// assert_eq!(summary.total_worked.to_string(), "08:48");
/// assert_eq!(summary.days_worked, 1);
/// assert_eq!(summary.absences, 1);
/// ```
pub fn summarize_period(period: &PayPeriod, records: &[DayRecord]) -> PeriodSummary {
    let total_minutes: u32 = records.iter().map(|r| r.worked().minutes()).sum();
    let days_worked = records.iter().filter(|r| !r.worked().is_zero()).count() as u32;
    let business_days = period.business_days();

    PeriodSummary {
        total_worked: WorkedDuration::from_minutes(total_minutes),
        days_worked,
        business_days,
        absences: business_days.saturating_sub(days_worked),
    }
}
