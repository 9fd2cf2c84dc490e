//! Daily and hourly rate derivation.
//!
//! The gross monthly salary is divided by fixed monthly conventions (22
//! days, 220 hours under the standard parameters) to value a single worked
//! day or hour.

use rust_decimal::Decimal;

/// Divides the gross salary into a per-day rate.
///
/// A zero divisor degrades to a zero rate; configuration validation
/// rejects it upstream.
///
/// # Example
///
/// ```
/// use ponto_engine::payroll::daily_rate;
/// use rust_decimal::Decimal;
///
/// let rate = daily_rate(Decimal::new(2200_00, 2), 22);
/// assert_eq!(rate, Decimal::new(100_00, 2).normalize());
/// ```
pub fn daily_rate(gross: Decimal, base_days: u32) -> Decimal {
    if base_days == 0 {
        return Decimal::ZERO;
    }
    gross / Decimal::from(base_days)
}

/// Divides the gross salary into a per-hour rate.
///
/// A zero divisor degrades to a zero rate; configuration validation
/// rejects it upstream.
pub fn hourly_rate(gross: Decimal, base_hours: u32) -> Decimal {
    if base_hours == 0 {
        return Decimal::ZERO;
    }
    gross / Decimal::from(base_hours)
}
