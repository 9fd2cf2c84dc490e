//! HTTP API module for the timesheet and payroll engine.
//!
//! This module provides the REST API endpoints wrapping the two
//! calculation components: `/timesheet` for worked-duration and exception
//! derivation over a period, and `/salary` for the net-pay breakdown.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayEntryRequest, PeriodRequest, SalaryRequest, TimesheetRequest};
pub use response::{ApiError, DayResponse, FormattedBreakdown, SalaryResponse, TimesheetResponse};
pub use state::AppState;
