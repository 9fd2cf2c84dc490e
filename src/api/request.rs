//! Request types for the timesheet and payroll API.
//!
//! This module defines the JSON request structures for the `/timesheet`
//! and `/salary` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayPunches, PayPeriod, SalaryInput};

/// Request body for the `/timesheet` endpoint.
///
/// Carries the period to materialize, an optional shift template override
/// in its four-token string form, and the recorded punches per day. Days
/// of the period without an entry derive an empty punch set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// The period the timesheet covers.
    pub period: PeriodRequest,
    /// Optional business-day template override, e.g.
    /// `"08:00 12:00 13:00 17:00"`. Defaults to the configured template.
    #[serde(default)]
    pub template: Option<String>,
    /// Recorded punches, at most one entry per day.
    #[serde(default)]
    pub days: Vec<DayEntryRequest>,
}

/// Period information in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

/// One day's recorded punches in a timesheet request.
///
/// Punch strings are parsed leniently: anything that is not a strict
/// `HH:MM` time is treated as an unrecorded punch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntryRequest {
    /// The calendar date the punches belong to.
    pub date: NaiveDate,
    /// First entry.
    #[serde(default)]
    pub entry1: String,
    /// First exit.
    #[serde(default)]
    pub exit1: String,
    /// Second entry.
    #[serde(default)]
    pub entry2: String,
    /// Final exit.
    #[serde(default)]
    pub exit2: String,
}

impl DayEntryRequest {
    /// Parses the four punch strings into a punch set.
    pub fn punches(&self) -> DayPunches {
        DayPunches::parse(&self.entry1, &self.exit1, &self.entry2, &self.exit2)
    }
}

impl From<PeriodRequest> for PayPeriod {
    fn from(req: PeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

/// Request body for the `/salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Gross monthly salary.
    pub gross: Decimal,
    /// Number of days worked in the period.
    pub worked_days: u32,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Night-shift allowance.
    #[serde(default)]
    pub night_allowance: Decimal,
    /// Other benefits.
    #[serde(default)]
    pub other_benefits: Decimal,
    /// Other deductions.
    #[serde(default)]
    pub other_deductions: Decimal,
    /// Number of dependents.
    #[serde(default)]
    pub dependents: u32,
}

impl From<SalaryRequest> for SalaryInput {
    fn from(req: SalaryRequest) -> Self {
        SalaryInput {
            gross: req.gross,
            worked_days: req.worked_days,
            overtime_hours: req.overtime_hours,
            night_allowance: req.night_allowance,
            other_benefits: req.other_benefits,
            other_deductions: req.other_deductions,
            dependents: req.dependents,
        }
    }
}
