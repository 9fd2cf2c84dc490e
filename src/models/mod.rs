//! Data models for the timesheet and payroll engine.
//!
//! This module contains the value types shared by the two calculation
//! components: clock times and shift templates, per-day records, pay
//! periods, and the salary input/breakdown pair.

mod clock_time;
mod day_record;
mod pay_period;
mod salary;
mod shift_template;

pub use clock_time::{ClockTime, UNSET_MARKER};
pub use day_record::{DayPunches, DayRecord};
pub use pay_period::PayPeriod;
pub use salary::{SalaryBreakdown, SalaryInput};
pub use shift_template::ShiftTemplate;
