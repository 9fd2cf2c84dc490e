//! Day record model.
//!
//! This module defines [`DayPunches`] (the four recorded times of a day)
//! and [`DayRecord`] (a calendar day with its template, punches and derived
//! worked duration and exceptions).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timesheet::{
    AttendanceException, DurationOutcome, NegativeDurationPolicy, WorkedDuration,
    compute_exceptions, compute_worked_duration, join_exceptions,
};

use super::{ClockTime, ShiftTemplate};

/// The four recorded punch times of a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPunches {
    /// First entry (start of the morning block).
    #[serde(default)]
    pub entry1: ClockTime,
    /// First exit (start of the break).
    #[serde(default)]
    pub exit1: ClockTime,
    /// Second entry (return from the break).
    #[serde(default)]
    pub entry2: ClockTime,
    /// Final exit (end of the afternoon block).
    #[serde(default)]
    pub exit2: ClockTime,
}

impl DayPunches {
    /// Creates punches from four time strings, each parsed leniently.
    ///
    /// # Example
    ///
    /// ```
    /// use ponto_engine::models::{ClockTime, DayPunches};
    ///
    /// let punches = DayPunches::parse("07:12", "", "12:00", "bad");
    /// assert!(punches.entry1.is_set());
    /// assert_eq!(punches.exit1, ClockTime::Unset);
    /// assert_eq!(punches.exit2, ClockTime::Unset);
    /// ```
    pub fn parse(entry1: &str, exit1: &str, entry2: &str, exit2: &str) -> Self {
        Self {
            entry1: ClockTime::parse(entry1),
            exit1: ClockTime::parse(exit1),
            entry2: ClockTime::parse(entry2),
            exit2: ClockTime::parse(exit2),
        }
    }

    /// Returns the all-unset punch set.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Returns true when all four punches are recorded.
    pub fn all_set(&self) -> bool {
        self.entry1.is_set() && self.exit1.is_set() && self.entry2.is_set() && self.exit2.is_set()
    }
}

/// One calendar day of a timesheet: template, punches and derived fields.
///
/// The worked duration and exception list are a pure function of the
/// template and punches; they are recomputed on every edit and never stored
/// independently. Days whose template is the non-working sentinel always
/// derive a zero duration and an empty exception list, regardless of any
/// punches present.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::models::{DayPunches, DayRecord, ShiftTemplate};
/// use ponto_engine::timesheet::NegativeDurationPolicy;
///
/// let template: ShiftTemplate = "07:12 10:30 12:00 17:30".parse().unwrap();
/// let record = DayRecord::new(
///     NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
///     template,
///     DayPunches::parse("07:12", "10:30", "12:00", "17:30"),
///     NegativeDurationPolicy::ClampToZero,
/// );
/// assert_eq!(record.worked().to_string(), "08:48");
/// assert!(record.exceptions().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    date: NaiveDate,
    template: ShiftTemplate,
    punches: DayPunches,
    worked: WorkedDuration,
    exceptions: Vec<AttendanceException>,
}

impl DayRecord {
    /// Creates a day record and derives its worked duration and exceptions.
    pub fn new(
        date: NaiveDate,
        template: ShiftTemplate,
        punches: DayPunches,
        policy: NegativeDurationPolicy,
    ) -> Self {
        let mut record = Self {
            date,
            template,
            punches,
            worked: WorkedDuration::ZERO,
            exceptions: Vec::new(),
        };
        record.recompute(policy);
        record
    }

    /// Creates a non-working day with no punches.
    pub fn off_day(date: NaiveDate) -> Self {
        Self::new(
            date,
            ShiftTemplate::off(),
            DayPunches::unset(),
            NegativeDurationPolicy::ClampToZero,
        )
    }

    /// The calendar date of this record.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The expected shift template for this day.
    pub fn template(&self) -> &ShiftTemplate {
        &self.template
    }

    /// The recorded punches for this day.
    pub fn punches(&self) -> &DayPunches {
        &self.punches
    }

    /// The derived worked duration.
    pub fn worked(&self) -> WorkedDuration {
        self.worked
    }

    /// The derived exceptions, in fixed evaluation order.
    pub fn exceptions(&self) -> &[AttendanceException] {
        &self.exceptions
    }

    /// The exceptions joined into a single report note.
    pub fn notes(&self) -> String {
        join_exceptions(&self.exceptions)
    }

    /// Replaces the punches and recomputes the derived fields.
    pub fn set_punches(&mut self, punches: DayPunches, policy: NegativeDurationPolicy) {
        self.punches = punches;
        self.recompute(policy);
    }

    /// Replaces the template and recomputes the derived fields.
    pub fn set_template(&mut self, template: ShiftTemplate, policy: NegativeDurationPolicy) {
        self.template = template;
        self.recompute(policy);
    }

    fn recompute(&mut self, policy: NegativeDurationPolicy) {
        if !self.template.is_working_day() {
            self.worked = WorkedDuration::ZERO;
            self.exceptions = Vec::new();
            return;
        }
        let outcome: DurationOutcome = compute_worked_duration(&self.punches, policy);
        self.worked = outcome.duration;
        self.exceptions = compute_exceptions(&self.punches, &self.template, &outcome);
    }
}
