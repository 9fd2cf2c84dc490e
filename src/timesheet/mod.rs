//! Timesheet calculations.
//!
//! This module converts a day's recorded punches and shift template into a
//! worked duration and a list of attendance exceptions, and aggregates day
//! records into a period summary. All functions are pure and fail-soft:
//! missing or malformed data degrades to zero/empty outputs.

mod duration;
mod exceptions;
mod summary;

pub use duration::{
    DurationOutcome, NegativeDurationPolicy, WorkedDuration, compute_worked_duration,
};
pub use exceptions::{AttendanceException, compute_exceptions, join_exceptions};
pub use summary::{PeriodSummary, summarize_period};
