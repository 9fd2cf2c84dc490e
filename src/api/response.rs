//! Response types for the timesheet and payroll API.
//!
//! This module defines the success payloads for both endpoints and the
//! error response structures shared across the API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CurrencyFormat;
use crate::error::EngineError;
use crate::models::{DayRecord, SalaryBreakdown};
use crate::timesheet::{AttendanceException, PeriodSummary};

/// Response body for the `/timesheet` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TimesheetResponse {
    /// One entry per day of the period, oldest first.
    pub days: Vec<DayResponse>,
    /// Aggregated totals over the period.
    pub summary: PeriodSummary,
}

/// One materialized day in a timesheet response.
#[derive(Debug, Clone, Serialize)]
pub struct DayResponse {
    /// The calendar date.
    pub date: NaiveDate,
    /// The template applied to the day, in its four-token string form.
    pub template: String,
    /// First entry, normalized.
    pub entry1: String,
    /// First exit, normalized.
    pub exit1: String,
    /// Second entry, normalized.
    pub entry2: String,
    /// Final exit, normalized.
    pub exit2: String,
    /// Derived worked duration as `HH:MM`.
    pub worked: String,
    /// Derived exceptions in evaluation order.
    pub exceptions: Vec<AttendanceException>,
    /// The exceptions joined into a single report note.
    pub notes: String,
}

impl From<&DayRecord> for DayResponse {
    fn from(record: &DayRecord) -> Self {
        let punches = record.punches();
        Self {
            date: record.date(),
            template: record.template().to_string(),
            entry1: punches.entry1.to_string(),
            exit1: punches.exit1.to_string(),
            entry2: punches.entry2.to_string(),
            exit2: punches.exit2.to_string(),
            worked: record.worked().to_string(),
            exceptions: record.exceptions().to_vec(),
            notes: record.notes(),
        }
    }
}

/// Response body for the `/salary` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryResponse {
    /// The numeric breakdown.
    pub breakdown: SalaryBreakdown,
    /// The breakdown rendered with the configured currency format.
    pub formatted: FormattedBreakdown,
}

/// The salary breakdown rendered for people.
///
/// Produced at the rendering boundary with the injected currency-format
/// policy; the numeric breakdown stays locale-free.
#[derive(Debug, Clone, Serialize)]
pub struct FormattedBreakdown {
    /// Gross monthly salary.
    pub gross: String,
    /// Proportional pay.
    pub proportional: String,
    /// Overtime pay.
    pub overtime_pay: String,
    /// Night-shift allowance.
    pub night_allowance: String,
    /// Other benefits.
    pub other_benefits: String,
    /// Total earnings.
    pub total_earnings: String,
    /// Social-security contribution.
    pub social_security: String,
    /// Income-tax withholding.
    pub income_tax: String,
    /// Other deductions.
    pub other_deductions: String,
    /// Total deductions.
    pub total_deductions: String,
    /// Net pay.
    pub net: String,
}

impl FormattedBreakdown {
    /// Renders a breakdown with the given currency format.
    pub fn render(breakdown: &SalaryBreakdown, format: &CurrencyFormat) -> Self {
        Self {
            gross: format.format(breakdown.gross),
            proportional: format.format(breakdown.proportional),
            overtime_pay: format.format(breakdown.overtime_pay),
            night_allowance: format.format(breakdown.night_allowance),
            other_benefits: format.format(breakdown.other_benefits),
            total_earnings: format.format(breakdown.total_earnings),
            social_security: format.format(breakdown.social_security),
            income_tax: format.format(breakdown.income_tax),
            other_deductions: format.format(breakdown.other_deductions),
            total_deductions: format.format(breakdown.total_deductions),
            net: format.format(breakdown.net),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::ConfigInvalid { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::InvalidTemplate { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TEMPLATE",
                    format!("Invalid shift template '{}'", value),
                    message,
                ),
            },
            EngineError::InvalidSalaryInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SALARY_INPUT",
                    format!("Invalid salary input field '{}'", field),
                    message,
                ),
            },
        }
    }
}
