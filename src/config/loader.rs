//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! table set from YAML files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{
    ContributionBracket, EngineConfig, IncomeTaxTable, PayrollParams, SocialSecurityTable,
    TableMetadata, TaxTables, WithholdingBand, WorkdayConfig,
};

/// File structure of `tables.yaml`.
#[derive(Debug, Clone, Deserialize)]
struct TablesFile {
    metadata: TableMetadata,
    social_security: Vec<ContributionBracket>,
    income_tax: Vec<WithholdingBand>,
    dependent_allowance: Decimal,
}

/// Loads and provides access to a payroll table set.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates their semantic shape into an [`EngineConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/clt-2023/
/// ├── tables.yaml   # Table metadata, INSS brackets, IRRF bands
/// ├── payroll.yaml  # Base divisors and the overtime premium
/// └── workday.yaml  # Default shift template and rendering policies
/// ```
///
/// # Example
///
/// ```no_run
/// use ponto_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt-2023").unwrap();
/// let config = loader.config();
/// assert_eq!(config.payroll().base_days, 22);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/clt-2023")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The loaded tables fail semantic validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tables_path = path.join("tables.yaml");
        let tables = Self::load_yaml::<TablesFile>(&tables_path)?;

        let payroll_path = path.join("payroll.yaml");
        let payroll = Self::load_yaml::<PayrollParams>(&payroll_path)?;

        let workday_path = path.join("workday.yaml");
        let workday = Self::load_yaml::<WorkdayConfig>(&workday_path)?;

        let taxes = TaxTables::new(
            SocialSecurityTable::new(tables.social_security)?,
            IncomeTaxTable::new(tables.income_tax)?,
            tables.dependent_allowance,
        )?;
        let config = EngineConfig::new(tables.metadata, payroll, taxes, workday)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
