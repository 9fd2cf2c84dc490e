//! Social-security contribution (INSS) calculation.
//!
//! The contribution is a marginal bracket schedule over the worked-days
//! adjusted pay: each bracket's rate applies to the slice above the
//! previous ceiling, with the lower brackets' contribution carried as a
//! fixed amount. Above the top ceiling the contribution is flat.

use rust_decimal::Decimal;

use crate::config::SocialSecurityTable;

/// Computes the social-security contribution for a base amount.
///
/// The base is the proportional (worked-days adjusted) pay, not the gross
/// salary. A non-positive base contributes nothing; the result is never
/// negative.
///
/// # Example
///
/// ```
/// use ponto_engine::config::EngineConfig;
/// use ponto_engine::payroll::social_security_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = EngineConfig::default();
/// let contribution = social_security_contribution(
///     Decimal::from_str("2500.00").unwrap(),
///     config.taxes().social_security(),
/// );
/// // (2500.00 - 1320.00) x 9% + 99.00
/// assert_eq!(contribution, Decimal::from_str("205.20").unwrap());
/// ```
pub fn social_security_contribution(base: Decimal, table: &SocialSecurityTable) -> Decimal {
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut lower = Decimal::ZERO;
    for bracket in table.brackets() {
        if base <= bracket.ceiling {
            return (base - lower) * bracket.rate + bracket.carried;
        }
        lower = bracket.ceiling;
    }
    table.ceiling_cap()
}
