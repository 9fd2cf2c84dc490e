//! Income-tax withholding (IRRF) calculation.
//!
//! The taxable base is the worked-days adjusted pay reduced by the
//! social-security contribution and a fixed allowance per dependent. A
//! five-band progressive schedule with flat per-band deductions then
//! applies, floored at zero: the deduction constants can otherwise drive
//! the result negative just past a band boundary.

use rust_decimal::Decimal;

use crate::config::TaxTables;

use super::social_security::social_security_contribution;

/// The two statutory deductions assessed on a base amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxAssessment {
    /// Social-security contribution (INSS).
    pub social_security: Decimal,
    /// Income-tax withholding (IRRF), floored at zero.
    pub income_tax: Decimal,
}

/// Assesses both statutory deductions for a base amount.
///
/// The withholding is computed on the base net of the contribution, so the
/// two values are derived together.
///
/// # Example
///
/// ```
/// use ponto_engine::config::EngineConfig;
/// use ponto_engine::payroll::assess_taxes;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = EngineConfig::default();
/// let assessment = assess_taxes(
///     Decimal::from_str("2500.00").unwrap(),
///     0,
///     config.taxes(),
/// );
/// assert_eq!(assessment.social_security, Decimal::from_str("205.20").unwrap());
/// // (2500.00 - 205.20) x 7.5% - 142.80
/// assert_eq!(assessment.income_tax, Decimal::from_str("29.31").unwrap());
/// ```
pub fn assess_taxes(base: Decimal, dependents: u32, tables: &TaxTables) -> TaxAssessment {
    let social_security = social_security_contribution(base, tables.social_security());

    let taxable =
        base - social_security - Decimal::from(dependents) * tables.dependent_allowance();
    let band = tables.income_tax().band_for(taxable);
    let income_tax = (taxable * band.rate - band.deduction).max(Decimal::ZERO);

    TaxAssessment {
        social_security,
        income_tax,
    }
}

/// Computes the income-tax withholding for a base amount.
///
/// Convenience over [`assess_taxes`] for callers that only need the
/// withholding. Never returns a negative value.
pub fn income_tax_withholding(base: Decimal, dependents: u32, tables: &TaxTables) -> Decimal {
    assess_taxes(base, dependents, tables).income_tax
}
