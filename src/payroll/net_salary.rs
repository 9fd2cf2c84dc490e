//! Net salary calculation.
//!
//! Assembles the full salary breakdown: proportional pay, overtime
//! premium, allowances, the two statutory deductions and the net result.
//! Intermediate arithmetic stays unrounded; every breakdown field is
//! rounded to two decimal places at assembly.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::EngineConfig;
use crate::models::{SalaryBreakdown, SalaryInput};

use super::income_tax::assess_taxes;
use super::rates::{daily_rate, hourly_rate};

/// Computes the net salary breakdown for a validated input.
///
/// The calculation follows the monthly payroll convention:
///
/// 1. proportional pay = daily rate x worked days
/// 2. overtime pay = overtime hours x hourly rate x premium
/// 3. total earnings = proportional + overtime + allowances
/// 4. statutory deductions assessed on the proportional pay, so a partial
///    month is not taxed as a full one
/// 5. net = earnings - deductions, floored at zero
///
/// The function is a pure computation: identical input and configuration
/// yield an identical breakdown.
///
/// # Example
///
/// ```
/// use ponto_engine::config::EngineConfig;
/// use ponto_engine::payroll::calculate_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = EngineConfig::default();
/// let input = serde_json::from_str(
///     r#"{"gross": "2500.00", "worked_days": 22}"#,
/// ).unwrap();
///
/// let breakdown = calculate_salary(&input, &config);
/// assert_eq!(breakdown.proportional, Decimal::from_str("2500.00").unwrap());
/// assert_eq!(breakdown.net, Decimal::from_str("2265.49").unwrap());
/// ```
pub fn calculate_salary(input: &SalaryInput, config: &EngineConfig) -> SalaryBreakdown {
    let params = config.payroll();

    let proportional = daily_rate(input.gross, params.base_days) * Decimal::from(input.worked_days);
    let overtime_pay =
        input.overtime_hours * hourly_rate(input.gross, params.base_hours) * params.overtime_multiplier;
    let total_earnings =
        proportional + overtime_pay + input.night_allowance + input.other_benefits;

    let assessment = assess_taxes(proportional, input.dependents, config.taxes());
    let total_deductions =
        assessment.social_security + assessment.income_tax + input.other_deductions;

    let net = (total_earnings - total_deductions).max(Decimal::ZERO);

    SalaryBreakdown {
        gross: round2(input.gross),
        proportional: round2(proportional),
        overtime_pay: round2(overtime_pay),
        night_allowance: round2(input.night_allowance),
        other_benefits: round2(input.other_benefits),
        total_earnings: round2(total_earnings),
        social_security: round2(assessment.social_security),
        income_tax: round2(assessment.income_tax),
        other_deductions: round2(input.other_deductions),
        total_deductions: round2(total_deductions),
        net: round2(net),
        worked_days: input.worked_days,
    }
}

fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
