//! Payroll calculations.
//!
//! This module turns a salary input into a structured net-pay breakdown:
//! daily/hourly rate derivation, the marginal social-security contribution,
//! the progressive income-tax withholding, and the assembled breakdown.
//! All functions are pure; the statutory tables come from configuration.

mod income_tax;
mod net_salary;
mod rates;
mod social_security;

pub use income_tax::{TaxAssessment, assess_taxes, income_tax_withholding};
pub use net_salary::calculate_salary;
pub use rates::{daily_rate, hourly_rate};
pub use social_security::social_security_contribution;
