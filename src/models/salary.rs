//! Salary input and breakdown models.
//!
//! This module defines the [`SalaryInput`] record fed into the payroll
//! calculator and the [`SalaryBreakdown`] it produces. Both are plain value
//! types: a breakdown is derived entirely from its input and holds no
//! identity or state beyond a single calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The inputs of one net-salary calculation.
///
/// All additive monetary fields default to zero, so a minimal request needs
/// only the gross salary and the worked-days count.
///
/// # Example
///
/// ```
/// use ponto_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let input: SalaryInput = serde_json::from_str(
///     r#"{"gross": "2500.00", "worked_days": 22}"#,
/// ).unwrap();
/// assert_eq!(input.overtime_hours, Decimal::ZERO);
/// assert_eq!(input.dependents, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Gross monthly salary.
    pub gross: Decimal,
    /// Number of days worked in the period.
    pub worked_days: u32,
    /// Overtime hours worked, paid at the configured premium.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Night-shift allowance, added to earnings as-is.
    #[serde(default)]
    pub night_allowance: Decimal,
    /// Other benefits, added to earnings as-is.
    #[serde(default)]
    pub other_benefits: Decimal,
    /// Other deductions, subtracted from earnings as-is.
    #[serde(default)]
    pub other_deductions: Decimal,
    /// Number of dependents, raising the tax-exempt threshold.
    #[serde(default)]
    pub dependents: u32,
}

impl SalaryInput {
    /// Validates the input ranges.
    ///
    /// The gross salary and every additive field must be non-negative.
    /// This is a request-boundary check; the calculator itself assumes
    /// validated input and degrades degenerate values to zero outputs.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("gross", self.gross),
            ("overtime_hours", self.overtime_hours),
            ("night_allowance", self.night_allowance),
            ("other_benefits", self.other_benefits),
            ("other_deductions", self.other_deductions),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidSalaryInput {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The structured result of one net-salary calculation.
///
/// Earnings and deductions are listed separately with their totals; the net
/// pay is floored at zero. Every field is rounded to two decimal places
/// when the breakdown is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Gross monthly salary, echoed from the input.
    pub gross: Decimal,
    /// Gross scaled by worked days over the base-days convention.
    pub proportional: Decimal,
    /// Overtime hours valued at the hourly rate times the premium.
    pub overtime_pay: Decimal,
    /// Night-shift allowance, echoed from the input.
    pub night_allowance: Decimal,
    /// Other benefits, echoed from the input.
    pub other_benefits: Decimal,
    /// Sum of proportional pay, overtime pay and allowances.
    pub total_earnings: Decimal,
    /// Social-security contribution (INSS) on the proportional pay.
    pub social_security: Decimal,
    /// Income-tax withholding (IRRF) on the proportional pay.
    pub income_tax: Decimal,
    /// Other deductions, echoed from the input.
    pub other_deductions: Decimal,
    /// Sum of statutory and other deductions.
    pub total_deductions: Decimal,
    /// Total earnings minus total deductions, floored at zero.
    pub net: Decimal,
    /// Worked-days count, echoed from the input.
    pub worked_days: u32,
}
