//! Worked-duration computation.
//!
//! This module derives the total worked minutes of a day from its four
//! recorded punches. The computation is fail-soft: any missing punch yields
//! a zero duration, and a negative raw total (exit recorded before entry)
//! is guarded by an explicit policy instead of underflowing into a
//! nonsensical time string.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::DayPunches;

/// A non-negative worked duration in minutes, rendered as `HH:MM`.
///
/// Durations can exceed 24 hours when aggregated over a period; the hour
/// field widens as needed (`"176:00"`).
///
/// # Example
///
/// ```
/// use ponto_engine::timesheet::WorkedDuration;
///
/// assert_eq!(WorkedDuration::from_minutes(528).to_string(), "08:48");
/// assert_eq!(WorkedDuration::ZERO.to_string(), "00:00");
/// assert_eq!(WorkedDuration::from_minutes(10560).to_string(), "176:00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkedDuration {
    minutes: u32,
}

impl WorkedDuration {
    /// The zero duration.
    pub const ZERO: WorkedDuration = WorkedDuration { minutes: 0 };

    /// Creates a duration from a minute count.
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Returns the total minutes.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns true for the zero duration.
    pub fn is_zero(&self) -> bool {
        self.minutes == 0
    }
}

impl fmt::Display for WorkedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl Serialize for WorkedDuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkedDuration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| serde::de::Error::custom(format!("invalid duration '{s}'")))?;
        let hours: u32 = hours
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid duration '{s}'")))?;
        let minutes: u32 = minutes
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid duration '{s}'")))?;
        if minutes > 59 {
            return Err(serde::de::Error::custom(format!("invalid duration '{s}'")));
        }
        Ok(Self::from_minutes(hours * 60 + minutes))
    }
}

/// Policy for handling a negative raw worked total.
///
/// A punch sequence like exit-before-entry produces a negative block sum.
/// The stored duration is clamped to zero under both policies, so the
/// `HH:MM` rendering can never underflow; the policies differ in whether
/// the anomaly is surfaced to the exception list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeDurationPolicy {
    /// Silently clamp the duration to zero.
    #[default]
    ClampToZero,
    /// Clamp to zero and flag the day with an inconsistent-record
    /// exception carrying the magnitude of the deficit.
    FlagAnomaly,
}

/// The outcome of a worked-duration computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationOutcome {
    /// The derived duration, clamped to zero when the raw total was
    /// negative.
    pub duration: WorkedDuration,
    /// Magnitude of a negative raw total, present only under
    /// [`NegativeDurationPolicy::FlagAnomaly`].
    pub anomaly: Option<u32>,
}

impl DurationOutcome {
    /// A zero duration with no anomaly.
    pub fn zero() -> Self {
        Self {
            duration: WorkedDuration::ZERO,
            anomaly: None,
        }
    }
}

/// Computes the worked duration of a day from its four punches.
///
/// The duration is the sum of the two block spans,
/// `(exit1 - entry1) + (exit2 - entry2)`, in minutes. If any of the four
/// punches is unset the result is zero: partial data degrades rather than
/// erroring.
///
/// A negative raw total is handled per `policy`; see
/// [`NegativeDurationPolicy`].
///
/// # Example
///
/// ```
/// use ponto_engine::models::DayPunches;
/// use ponto_engine::timesheet::{compute_worked_duration, NegativeDurationPolicy};
///
/// let punches = DayPunches::parse("07:12", "10:30", "12:00", "17:30");
/// let outcome = compute_worked_duration(&punches, NegativeDurationPolicy::ClampToZero);
/// assert_eq!(outcome.duration.to_string(), "08:48");
/// ```
pub fn compute_worked_duration(
    punches: &DayPunches,
    policy: NegativeDurationPolicy,
) -> DurationOutcome {
    let (Some(entry1), Some(exit1), Some(entry2), Some(exit2)) = (
        punches.entry1.minute_of_day(),
        punches.exit1.minute_of_day(),
        punches.entry2.minute_of_day(),
        punches.exit2.minute_of_day(),
    ) else {
        return DurationOutcome::zero();
    };

    let raw = (exit1 - entry1) + (exit2 - entry2);
    if raw >= 0 {
        return DurationOutcome {
            duration: WorkedDuration::from_minutes(raw as u32),
            anomaly: None,
        };
    }

    match policy {
        NegativeDurationPolicy::ClampToZero => DurationOutcome::zero(),
        NegativeDurationPolicy::FlagAnomaly => DurationOutcome {
            duration: WorkedDuration::ZERO,
            anomaly: Some(raw.unsigned_abs() as u32),
        },
    }
}
