//! HTTP request handlers for the timesheet and payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{DayPunches, DayRecord, PayPeriod, SalaryInput, ShiftTemplate};
use crate::payroll::calculate_salary;
use crate::timesheet::summarize_period;

use super::request::{SalaryRequest, TimesheetRequest};
use super::response::{
    ApiError, ApiErrorResponse, DayResponse, FormattedBreakdown, SalaryResponse, TimesheetResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheet", post(timesheet_handler))
        .route("/salary", post(salary_handler))
        .with_state(state)
}

/// Handler for the POST /timesheet endpoint.
///
/// Materializes one day record per date of the period: business days get
/// the working template (request override or configured default), weekends
/// get the off template. Recorded punches are matched by date; days without
/// an entry derive an empty punch set.
async fn timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let period: PayPeriod = request.period.into();
    if period.start_date > period.end_date {
        warn!(
            correlation_id = %correlation_id,
            start_date = %period.start_date,
            end_date = %period.end_date,
            "Inverted period"
        );
        return bad_request(ApiError::validation_error(
            "period start_date must not be after end_date",
        ));
    }

    let config = state.config();
    let template = match request.template {
        Some(raw) => match raw.parse::<ShiftTemplate>() {
            Ok(template) => template,
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Invalid template");
                let api_error: ApiErrorResponse = err.into();
                return api_error.into_response();
            }
        },
        None => config.workday().template,
    };

    let mut punches_by_date: HashMap<NaiveDate, DayPunches> = HashMap::new();
    for entry in &request.days {
        if !period.contains_date(entry.date) {
            warn!(
                correlation_id = %correlation_id,
                date = %entry.date,
                "Ignoring punches outside the period"
            );
            continue;
        }
        punches_by_date.insert(entry.date, entry.punches());
    }

    let policy = config.workday().negative_duration;
    let records: Vec<DayRecord> = period
        .days()
        .map(|date| {
            let day_template = if PayPeriod::is_business_day(date) {
                template
            } else {
                ShiftTemplate::off()
            };
            let punches = punches_by_date.get(&date).copied().unwrap_or_default();
            DayRecord::new(date, day_template, punches, policy)
        })
        .collect();

    let summary = summarize_period(&period, &records);
    info!(
        correlation_id = %correlation_id,
        days = records.len(),
        days_worked = summary.days_worked,
        total_worked = %summary.total_worked,
        "Timesheet materialized"
    );

    let response = TimesheetResponse {
        days: records.iter().map(DayResponse::from).collect(),
        summary,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for the POST /salary endpoint.
///
/// Validates the salary input and returns the calculated breakdown along
/// with its rendering under the configured currency format.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input: SalaryInput = request.into();
    if let Err(err) = input.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid salary input");
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let config = state.config();
    let breakdown = calculate_salary(&input, config);
    info!(
        correlation_id = %correlation_id,
        worked_days = breakdown.worked_days,
        net = %breakdown.net,
        "Salary calculated"
    );

    let response = SalaryResponse {
        formatted: FormattedBreakdown::render(&breakdown, &config.workday().currency),
        breakdown,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Maps a JSON extraction rejection to the API error shape.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    bad_request(error)
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
