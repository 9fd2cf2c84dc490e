//! Attendance exception detection.
//!
//! This module compares a day's recorded punches against its shift template
//! and annotates deviations: late arrivals, early departures, overtime and
//! shortfall. Exceptions are informational; they never block saving a day.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{ClockTime, DayPunches, ShiftTemplate};

use super::duration::{DurationOutcome, WorkedDuration};

/// A single attendance deviation for a day, carrying its minute magnitude.
///
/// Exceptions render as `label (HH:MM)` using the report labels of the
/// time-clock domain, e.g. `Entrada atrasada (00:10)` for a ten-minute
/// late arrival.
///
/// # Example
///
/// ```
/// use ponto_engine::timesheet::AttendanceException;
///
/// let late = AttendanceException::LateArrival(10);
/// assert_eq!(late.to_string(), "Entrada atrasada (00:10)");
/// assert_eq!(late.minutes(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "snake_case")]
pub enum AttendanceException {
    /// First entry later than expected ("Entrada atrasada").
    LateArrival(u32),
    /// First exit earlier than expected ("Saída antecipada").
    EarlyBreak(u32),
    /// Second entry later than expected ("Retorno atrasado").
    LateReturn(u32),
    /// Final exit earlier than expected ("Saída final antecipada").
    EarlyFinish(u32),
    /// Worked total above the template baseline ("Horas extras").
    Overtime(u32),
    /// Worked total below the template baseline ("Horas faltantes").
    Shortfall(u32),
    /// Punch sequence produced a negative raw total
    /// ("Registro inconsistente").
    InconsistentRecord(u32),
}

impl AttendanceException {
    /// Returns the minute magnitude of the deviation.
    pub fn minutes(&self) -> u32 {
        match self {
            Self::LateArrival(m)
            | Self::EarlyBreak(m)
            | Self::LateReturn(m)
            | Self::EarlyFinish(m)
            | Self::Overtime(m)
            | Self::Shortfall(m)
            | Self::InconsistentRecord(m) => *m,
        }
    }

    /// Returns the report label for this exception.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LateArrival(_) => "Entrada atrasada",
            Self::EarlyBreak(_) => "Saída antecipada",
            Self::LateReturn(_) => "Retorno atrasado",
            Self::EarlyFinish(_) => "Saída final antecipada",
            Self::Overtime(_) => "Horas extras",
            Self::Shortfall(_) => "Horas faltantes",
            Self::InconsistentRecord(_) => "Registro inconsistente",
        }
    }
}

impl fmt::Display for AttendanceException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.label(),
            WorkedDuration::from_minutes(self.minutes())
        )
    }
}

/// Joins exceptions into the single note string used by report rows.
pub fn join_exceptions(exceptions: &[AttendanceException]) -> String {
    exceptions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Derives all attendance exceptions for a day.
///
/// Evaluation order is fixed: entry1, exit1, entry2, exit2, then the
/// worked-total comparison. All applicable exceptions are reported, not
/// just the first.
///
/// Per-punch comparisons fire only when both the expected and the recorded
/// time are set; partial data never produces an exception on its own. The
/// overtime/shortfall comparison fires only when the day's first and last
/// punches (entry1 and exit2) are both recorded, regardless of the middle
/// two, and the template yields a baseline. When the duration computation
/// flagged an inconsistent record, that flag replaces the overtime check:
/// a garbage total should not masquerade as a shortfall.
///
/// # Example
///
/// ```
/// use ponto_engine::models::{DayPunches, ShiftTemplate};
/// use ponto_engine::timesheet::{
///     compute_exceptions, compute_worked_duration, NegativeDurationPolicy,
/// };
///
/// let template: ShiftTemplate = "07:12 10:30 12:00 17:30".parse().unwrap();
/// let punches = DayPunches::parse("07:22", "10:30", "12:00", "17:30");
/// let outcome = compute_worked_duration(&punches, NegativeDurationPolicy::ClampToZero);
/// let exceptions = compute_exceptions(&punches, &template, &outcome);
///
/// assert_eq!(exceptions[0].to_string(), "Entrada atrasada (00:10)");
/// assert_eq!(exceptions[1].to_string(), "Horas faltantes (00:10)");
/// ```
pub fn compute_exceptions(
    punches: &DayPunches,
    template: &ShiftTemplate,
    outcome: &DurationOutcome,
) -> Vec<AttendanceException> {
    let mut exceptions = Vec::new();

    if let Some(minutes) = lateness(template.entry1, punches.entry1) {
        exceptions.push(AttendanceException::LateArrival(minutes));
    }
    if let Some(minutes) = earliness(template.exit1, punches.exit1) {
        exceptions.push(AttendanceException::EarlyBreak(minutes));
    }
    if let Some(minutes) = lateness(template.entry2, punches.entry2) {
        exceptions.push(AttendanceException::LateReturn(minutes));
    }
    if let Some(minutes) = earliness(template.exit2, punches.exit2) {
        exceptions.push(AttendanceException::EarlyFinish(minutes));
    }

    if let Some(deficit) = outcome.anomaly {
        exceptions.push(AttendanceException::InconsistentRecord(deficit));
    } else if punches.entry1.is_set() && punches.exit2.is_set() {
        if let Some(baseline) = template.baseline_minutes() {
            let worked = i64::from(outcome.duration.minutes());
            if worked > baseline {
                exceptions.push(AttendanceException::Overtime((worked - baseline) as u32));
            } else if worked < baseline {
                exceptions.push(AttendanceException::Shortfall((baseline - worked) as u32));
            }
        }
    }

    exceptions
}

/// Minutes by which `recorded` trails `expected`, when both are set.
fn lateness(expected: ClockTime, recorded: ClockTime) -> Option<u32> {
    let expected = expected.minute_of_day()?;
    let recorded = recorded.minute_of_day()?;
    (recorded > expected).then_some((recorded - expected) as u32)
}

/// Minutes by which `recorded` precedes `expected`, when both are set.
fn earliness(expected: ClockTime, recorded: ClockTime) -> Option<u32> {
    let expected = expected.minute_of_day()?;
    let recorded = recorded.minute_of_day()?;
    (recorded < expected).then_some((expected - recorded) as u32)
}
