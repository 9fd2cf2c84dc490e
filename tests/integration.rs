//! Comprehensive integration tests for the timesheet and payroll engine.
//!
//! This test suite covers both endpoints end to end:
//! - Timesheet materialization over a period
//! - Attendance exception derivation and ordering
//! - Period summary totals
//! - Salary breakdown with statutory deductions
//! - Currency-formatted rendering
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use ponto_engine::api::{AppState, create_router};
use ponto_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/clt-2023").expect("Failed to load config");
    AppState::new(config.into_config())
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    let d = Decimal::from_str(s).unwrap();
    d.normalize().to_string()
}

fn assert_decimal_eq(actual: &Value, expected: &str) {
    let actual = actual.as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "expected {}, got {}",
        expected,
        actual
    );
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_day(date: &str, entry1: &str, exit1: &str, entry2: &str, exit2: &str) -> Value {
    json!({
        "date": date,
        "entry1": entry1,
        "exit1": exit1,
        "entry2": entry2,
        "exit2": exit2
    })
}

/// One working week, Monday 2025-08-04 through Sunday 2025-08-10.
fn week_request(days: Vec<Value>) -> Value {
    json!({
        "period": {"start_date": "2025-08-04", "end_date": "2025-08-10"},
        "days": days
    })
}

fn full_day(date: &str) -> Value {
    create_day(date, "07:12", "10:30", "12:00", "17:30")
}

// =============================================================================
// Timesheet: materialization and summary
// =============================================================================

/// TS-001: a fully punched week derives 8h48 per business day.
#[tokio::test]
async fn test_full_week_timesheet() {
    let days = vec![
        full_day("2025-08-04"),
        full_day("2025-08-05"),
        full_day("2025-08-06"),
        full_day("2025-08-07"),
        full_day("2025-08-08"),
    ];
    let (status, body) = post_json(create_router_for_test(), "/timesheet", week_request(days)).await;

    assert_eq!(status, StatusCode::OK);
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);

    for day in &days[0..5] {
        assert_eq!(day["template"], "07:12 10:30 12:00 17:30");
        assert_eq!(day["worked"], "08:48");
        assert_eq!(day["notes"], "");
        assert!(day["exceptions"].as_array().unwrap().is_empty());
    }

    assert_eq!(body["summary"]["total_worked"], "44:00");
    assert_eq!(body["summary"]["days_worked"], 5);
    assert_eq!(body["summary"]["business_days"], 5);
    assert_eq!(body["summary"]["absences"], 0);
}

/// TS-002: weekend days are materialized with the off template.
#[tokio::test]
async fn test_weekend_days_are_off() {
    let (status, body) =
        post_json(create_router_for_test(), "/timesheet", week_request(vec![])).await;

    assert_eq!(status, StatusCode::OK);
    let days = body["days"].as_array().unwrap();

    // Saturday the 9th and Sunday the 10th.
    for day in &days[5..7] {
        assert_eq!(day["template"], "--:-- --:-- --:-- --:--");
        assert_eq!(day["entry1"], "--:--");
        assert_eq!(day["worked"], "00:00");
    }
}

/// TS-003: weekend punches never derive hours or exceptions.
#[tokio::test]
async fn test_weekend_punches_are_ignored() {
    let days = vec![full_day("2025-08-09")]; // Saturday
    let (status, body) = post_json(create_router_for_test(), "/timesheet", week_request(days)).await;

    assert_eq!(status, StatusCode::OK);
    let saturday = &body["days"][5];
    assert_eq!(saturday["date"], "2025-08-09");
    assert_eq!(saturday["worked"], "00:00");
    assert!(saturday["exceptions"].as_array().unwrap().is_empty());
    assert_eq!(body["summary"]["days_worked"], 0);
}

/// TS-004: days without punches count as absences.
#[tokio::test]
async fn test_missing_days_count_as_absences() {
    let days = vec![full_day("2025-08-04"), full_day("2025-08-06")];
    let (status, body) = post_json(create_router_for_test(), "/timesheet", week_request(days)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["days_worked"], 2);
    assert_eq!(body["summary"]["absences"], 3);
    assert_eq!(body["summary"]["total_worked"], "17:36");
}

/// TS-005: a missing punch zeroes the day but keeps its row.
#[tokio::test]
async fn test_partial_day_zeroes_duration() {
    let days = vec![create_day("2025-08-04", "07:12", "10:30", "", "")];
    let (status, body) = post_json(create_router_for_test(), "/timesheet", week_request(days)).await;

    assert_eq!(status, StatusCode::OK);
    let monday = &body["days"][0];
    assert_eq!(monday["worked"], "00:00");
    assert_eq!(monday["entry1"], "07:12");
    assert_eq!(monday["entry2"], "--:--");
}

/// TS-006: malformed punch strings degrade to unset.
#[tokio::test]
async fn test_malformed_punch_degrades() {
    let days = vec![create_day("2025-08-04", "7h12", "10:30", "12:00", "17:30")];
    let (status, body) = post_json(create_router_for_test(), "/timesheet", week_request(days)).await;

    assert_eq!(status, StatusCode::OK);
    let monday = &body["days"][0];
    assert_eq!(monday["entry1"], "--:--");
    assert_eq!(monday["worked"], "00:00");
}

// =============================================================================
// Timesheet: exceptions
// =============================================================================

/// TS-007: late arrival and early final exit in fixed order with the
/// total shortfall.
#[tokio::test]
async fn test_exception_order_and_labels() {
    let days = vec![create_day("2025-08-04", "07:22", "10:30", "12:00", "17:25")];
    let (status, body) = post_json(create_router_for_test(), "/timesheet", week_request(days)).await;

    assert_eq!(status, StatusCode::OK);
    let monday = &body["days"][0];
    assert_eq!(monday["worked"], "08:33");

    let exceptions = monday["exceptions"].as_array().unwrap();
    assert_eq!(exceptions.len(), 3);
    assert_eq!(exceptions[0]["kind"], "late_arrival");
    assert_eq!(exceptions[0]["minutes"], 10);
    assert_eq!(exceptions[1]["kind"], "early_finish");
    assert_eq!(exceptions[1]["minutes"], 5);
    assert_eq!(exceptions[2]["kind"], "shortfall");
    assert_eq!(exceptions[2]["minutes"], 15);

    assert_eq!(
        monday["notes"],
        "Entrada atrasada (00:10), Saída final antecipada (00:05), Horas faltantes (00:15)"
    );
}

/// TS-008: overtime past the baseline.
#[tokio::test]
async fn test_overtime_exception() {
    let days = vec![create_day("2025-08-04", "07:12", "10:30", "12:00", "18:30")];
    let (status, body) = post_json(create_router_for_test(), "/timesheet", week_request(days)).await;

    assert_eq!(status, StatusCode::OK);
    let monday = &body["days"][0];
    assert_eq!(monday["worked"], "09:48");
    assert_eq!(monday["notes"], "Horas extras (01:00)");
}

/// TS-009: the baseline follows a custom template, not a constant.
#[tokio::test]
async fn test_custom_template_baseline() {
    let request = json!({
        "period": {"start_date": "2025-08-04", "end_date": "2025-08-04"},
        "template": "08:00 12:00 13:00 17:00",
        "days": [create_day("2025-08-04", "08:00", "12:00", "13:00", "17:00")]
    });
    let (status, body) = post_json(create_router_for_test(), "/timesheet", request).await;

    assert_eq!(status, StatusCode::OK);
    let monday = &body["days"][0];
    assert_eq!(monday["template"], "08:00 12:00 13:00 17:00");
    // Exactly the 8-hour baseline of this template: no exceptions.
    assert_eq!(monday["worked"], "08:00");
    assert!(monday["exceptions"].as_array().unwrap().is_empty());
}

// =============================================================================
// Timesheet: error cases
// =============================================================================

/// TS-010: a template with the wrong shape is rejected.
#[tokio::test]
async fn test_invalid_template_is_rejected() {
    let request = json!({
        "period": {"start_date": "2025-08-04", "end_date": "2025-08-08"},
        "template": "07:12 10:30",
        "days": []
    });
    let (status, body) = post_json(create_router_for_test(), "/timesheet", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_TEMPLATE");
}

/// TS-011: an inverted period is rejected.
#[tokio::test]
async fn test_inverted_period_is_rejected() {
    let request = json!({
        "period": {"start_date": "2025-08-10", "end_date": "2025-08-04"},
        "days": []
    });
    let (status, body) = post_json(create_router_for_test(), "/timesheet", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

/// TS-012: missing required fields surface the serde message.
#[tokio::test]
async fn test_missing_period_is_rejected() {
    let request = json!({"days": []});
    let (status, body) = post_json(create_router_for_test(), "/timesheet", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("missing field"));
}

// =============================================================================
// Salary: breakdown
// =============================================================================

/// SA-001: full month at 2500.00 gross.
#[tokio::test]
async fn test_salary_full_month() {
    let request = json!({"gross": "2500.00", "worked_days": 22});
    let (status, body) = post_json(create_router_for_test(), "/salary", request).await;

    assert_eq!(status, StatusCode::OK);
    let breakdown = &body["breakdown"];
    assert_decimal_eq(&breakdown["gross"], "2500.00");
    assert_decimal_eq(&breakdown["proportional"], "2500.00");
    assert_decimal_eq(&breakdown["overtime_pay"], "0.00");
    assert_decimal_eq(&breakdown["total_earnings"], "2500.00");
    assert_decimal_eq(&breakdown["social_security"], "205.20");
    assert_decimal_eq(&breakdown["income_tax"], "29.31");
    assert_decimal_eq(&breakdown["total_deductions"], "234.51");
    assert_decimal_eq(&breakdown["net"], "2265.49");
    assert_eq!(breakdown["worked_days"], 22);

    // Net pay is strictly below the gross: statutory deductions applied.
    let net = Decimal::from_str(breakdown["net"].as_str().unwrap()).unwrap();
    assert!(net < Decimal::from_str("2500.00").unwrap());
}

/// SA-002: the formatted block uses the configured pt-BR separators.
#[tokio::test]
async fn test_salary_formatted_block() {
    let request = json!({"gross": "2500.00", "worked_days": 22});
    let (status, body) = post_json(create_router_for_test(), "/salary", request).await;

    assert_eq!(status, StatusCode::OK);
    let formatted = &body["formatted"];
    assert_eq!(formatted["gross"], "2.500,00");
    assert_eq!(formatted["social_security"], "205,20");
    assert_eq!(formatted["income_tax"], "29,31");
    assert_eq!(formatted["net"], "2.265,49");
}

/// SA-003: overtime, allowances and dependents flow through.
#[tokio::test]
async fn test_salary_with_extras() {
    let request = json!({
        "gross": "2200.00",
        "worked_days": 22,
        "overtime_hours": "10",
        "night_allowance": "100.00",
        "other_benefits": "50.00",
        "other_deductions": "30.00",
        "dependents": 1
    });
    let (status, body) = post_json(create_router_for_test(), "/salary", request).await;

    assert_eq!(status, StatusCode::OK);
    let breakdown = &body["breakdown"];
    // 10 x (2200/220) x 1.5
    assert_decimal_eq(&breakdown["overtime_pay"], "150.00");
    assert_decimal_eq(&breakdown["total_earnings"], "2500.00");
    assert_decimal_eq(&breakdown["social_security"], "178.20");
    // Taxable 2021.80 - 189.59 = 1832.21: exempt band.
    assert_decimal_eq(&breakdown["income_tax"], "0.00");
    assert_decimal_eq(&breakdown["total_deductions"], "208.20");
    assert_decimal_eq(&breakdown["net"], "2291.80");
}

/// SA-004: partial months are taxed on the proportional pay.
#[tokio::test]
async fn test_salary_partial_month() {
    let request = json!({"gross": "4400.00", "worked_days": 11});
    let (status, body) = post_json(create_router_for_test(), "/salary", request).await;

    assert_eq!(status, StatusCode::OK);
    let breakdown = &body["breakdown"];
    assert_decimal_eq(&breakdown["proportional"], "2200.00");
    // Assessed on 2200.00, not on the 4400.00 gross.
    assert_decimal_eq(&breakdown["social_security"], "178.20");
}

/// SA-005: the net is floored at zero.
#[tokio::test]
async fn test_salary_net_floor() {
    let request = json!({
        "gross": "2200.00",
        "worked_days": 1,
        "other_deductions": "1000.00"
    });
    let (status, body) = post_json(create_router_for_test(), "/salary", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&body["breakdown"]["net"], "0.00");
}

/// SA-006: identical requests produce identical responses.
#[tokio::test]
async fn test_salary_idempotent() {
    let request = json!({
        "gross": "3456.78",
        "worked_days": 19,
        "overtime_hours": "7.5",
        "dependents": 1
    });
    let (_, first) = post_json(create_router_for_test(), "/salary", request.clone()).await;
    let (_, second) = post_json(create_router_for_test(), "/salary", request).await;
    assert_eq!(first, second);
}

// =============================================================================
// Salary: error cases
// =============================================================================

/// SA-007: negative gross is rejected.
#[tokio::test]
async fn test_salary_negative_gross_is_rejected() {
    let request = json!({"gross": "-2500.00", "worked_days": 22});
    let (status, body) = post_json(create_router_for_test(), "/salary", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SALARY_INPUT");
    assert!(body["message"].as_str().unwrap().contains("gross"));
}

/// SA-008: negative additive fields are rejected.
#[tokio::test]
async fn test_salary_negative_deduction_is_rejected() {
    let request = json!({
        "gross": "2500.00",
        "worked_days": 22,
        "other_deductions": "-10.00"
    });
    let (status, body) = post_json(create_router_for_test(), "/salary", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SALARY_INPUT");
}

/// SA-009: missing required fields surface the serde message.
#[tokio::test]
async fn test_salary_missing_gross_is_rejected() {
    let request = json!({"worked_days": 22});
    let (status, body) = post_json(create_router_for_test(), "/salary", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("missing field"));
}

/// SA-010: malformed JSON is rejected with a syntax error.
#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/salary")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// End-to-end: timesheet feeding the salary calculation
// =============================================================================

/// E2E-001: a full month of punches aggregates into the salary request
/// the way the calling layer would wire the two components together.
#[tokio::test]
async fn test_timesheet_worked_days_feed_salary() {
    // Three fully worked days out of the five-business-day week.
    let days = vec![
        full_day("2025-08-04"),
        full_day("2025-08-05"),
        full_day("2025-08-06"),
    ];
    let (status, timesheet) =
        post_json(create_router_for_test(), "/timesheet", week_request(days)).await;
    assert_eq!(status, StatusCode::OK);

    let days_worked = timesheet["summary"]["days_worked"].as_u64().unwrap();
    assert_eq!(days_worked, 3);

    let request = json!({"gross": "2200.00", "worked_days": days_worked});
    let (status, salary) = post_json(create_router_for_test(), "/salary", request).await;
    assert_eq!(status, StatusCode::OK);

    // 3 x (2200/22) = 300.00, first bracket, exempt withholding.
    let breakdown = &salary["breakdown"];
    assert_decimal_eq(&breakdown["proportional"], "300.00");
    assert_decimal_eq(&breakdown["social_security"], "22.50");
    assert_decimal_eq(&breakdown["income_tax"], "0.00");
    assert_decimal_eq(&breakdown["net"], "277.50");
}
