//! Configuration for the timesheet and payroll engine.
//!
//! Statutory bracket tables, base divisors and workday defaults are
//! configuration data loaded from YAML files, with a built-in canonical
//! table set available through [`EngineConfig::default`].

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionBracket, CurrencyFormat, EngineConfig, IncomeTaxTable, PayrollParams,
    SocialSecurityTable, TableMetadata, TaxTables, WithholdingBand, WorkdayConfig,
};
