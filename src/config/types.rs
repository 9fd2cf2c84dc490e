//! Configuration types for the payroll tables and workday defaults.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the aggregated
//! [`EngineConfig`] with its semantic validation. The statutory bracket
//! tables are configuration data, not algorithm: the calculator walks
//! whatever brackets the loaded table defines.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockTime, ShiftTemplate};
use crate::timesheet::NegativeDurationPolicy;

/// Metadata about the loaded table set.
#[derive(Debug, Clone, Deserialize)]
pub struct TableMetadata {
    /// The human-readable name of the table set.
    pub name: String,
    /// The version or effective date of the tables.
    pub version: String,
    /// URL to the official table documentation.
    pub source_url: String,
}

/// One bracket of the social-security contribution schedule.
///
/// The schedule is marginal: the bracket rate applies to the slice of the
/// base above the previous ceiling, and `carried` is the fixed accumulated
/// contribution of all lower brackets.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ContributionBracket {
    /// Upper bound of the bracket (inclusive).
    pub ceiling: Decimal,
    /// Marginal rate applied within the bracket.
    pub rate: Decimal,
    /// Fixed contribution carried forward from the lower brackets.
    #[serde(default)]
    pub carried: Decimal,
}

/// One band of the income-tax withholding schedule.
///
/// The schedule applies the band rate to the full taxable base and then
/// subtracts the band's flat deduction. The last band is open-ended and
/// has no ceiling.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WithholdingBand {
    /// Upper bound of the band (inclusive); `None` for the top band.
    #[serde(default)]
    pub ceiling: Option<Decimal>,
    /// Rate applied to the full taxable base.
    pub rate: Decimal,
    /// Flat amount subtracted after applying the rate.
    #[serde(default)]
    pub deduction: Decimal,
}

/// The social-security contribution schedule.
#[derive(Debug, Clone)]
pub struct SocialSecurityTable {
    brackets: Vec<ContributionBracket>,
}

impl SocialSecurityTable {
    /// Builds a table, validating the bracket shape.
    pub fn new(brackets: Vec<ContributionBracket>) -> EngineResult<Self> {
        if brackets.is_empty() {
            return Err(EngineError::ConfigInvalid {
                message: "social-security table must have at least one bracket".to_string(),
            });
        }
        let mut previous = Decimal::ZERO;
        for bracket in &brackets {
            if bracket.ceiling <= previous {
                return Err(EngineError::ConfigInvalid {
                    message: "social-security bracket ceilings must be strictly ascending"
                        .to_string(),
                });
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(EngineError::ConfigInvalid {
                    message: "social-security bracket rates must be between 0 and 1".to_string(),
                });
            }
            if bracket.carried < Decimal::ZERO {
                return Err(EngineError::ConfigInvalid {
                    message: "social-security carried amounts must not be negative".to_string(),
                });
            }
            previous = bracket.ceiling;
        }
        Ok(Self { brackets })
    }

    /// The brackets, ascending by ceiling.
    pub fn brackets(&self) -> &[ContributionBracket] {
        &self.brackets
    }

    /// The flat contribution applied above the top ceiling: the top
    /// bracket's rate over its full ceiling.
    pub fn ceiling_cap(&self) -> Decimal {
        // new() guarantees at least one bracket.
        match self.brackets.last() {
            Some(top) => top.ceiling * top.rate,
            None => Decimal::ZERO,
        }
    }
}

/// The income-tax withholding schedule.
#[derive(Debug, Clone)]
pub struct IncomeTaxTable {
    bands: Vec<WithholdingBand>,
}

impl IncomeTaxTable {
    /// Builds a table, validating the band shape.
    pub fn new(bands: Vec<WithholdingBand>) -> EngineResult<Self> {
        let Some((last, bounded)) = bands.split_last() else {
            return Err(EngineError::ConfigInvalid {
                message: "income-tax table must have at least one band".to_string(),
            });
        };
        if last.ceiling.is_some() {
            return Err(EngineError::ConfigInvalid {
                message: "the top income-tax band must be open-ended".to_string(),
            });
        }
        let mut previous = Decimal::ZERO;
        for band in bounded {
            let Some(ceiling) = band.ceiling else {
                return Err(EngineError::ConfigInvalid {
                    message: "only the top income-tax band may omit its ceiling".to_string(),
                });
            };
            if ceiling <= previous {
                return Err(EngineError::ConfigInvalid {
                    message: "income-tax band ceilings must be strictly ascending".to_string(),
                });
            }
            previous = ceiling;
        }
        Ok(Self { bands })
    }

    /// Finds the band that applies to a taxable base.
    pub fn band_for(&self, taxable: Decimal) -> &WithholdingBand {
        self.bands
            .iter()
            .find(|band| band.ceiling.is_none_or(|ceiling| taxable <= ceiling))
            .unwrap_or_else(|| {
                // Unreachable: new() guarantees an open-ended last band.
                &self.bands[self.bands.len() - 1]
            })
    }
}

/// The statutory tax tables and the per-dependent allowance.
#[derive(Debug, Clone)]
pub struct TaxTables {
    social_security: SocialSecurityTable,
    income_tax: IncomeTaxTable,
    dependent_allowance: Decimal,
}

impl TaxTables {
    /// Builds the tax tables, validating the dependent allowance.
    pub fn new(
        social_security: SocialSecurityTable,
        income_tax: IncomeTaxTable,
        dependent_allowance: Decimal,
    ) -> EngineResult<Self> {
        if dependent_allowance < Decimal::ZERO {
            return Err(EngineError::ConfigInvalid {
                message: "dependent allowance must not be negative".to_string(),
            });
        }
        Ok(Self {
            social_security,
            income_tax,
            dependent_allowance,
        })
    }

    /// The social-security contribution schedule.
    pub fn social_security(&self) -> &SocialSecurityTable {
        &self.social_security
    }

    /// The income-tax withholding schedule.
    pub fn income_tax(&self) -> &IncomeTaxTable {
        &self.income_tax
    }

    /// The taxable-base reduction per dependent.
    pub fn dependent_allowance(&self) -> Decimal {
        self.dependent_allowance
    }
}

/// Base divisors and premiums for the payroll calculation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PayrollParams {
    /// Days-in-month convention dividing the gross into a daily rate.
    pub base_days: u32,
    /// Hours-in-month convention dividing the gross into an hourly rate.
    pub base_hours: u32,
    /// Multiplier applied to the hourly rate for overtime.
    pub overtime_multiplier: Decimal,
}

/// Workday defaults and rendering policies.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkdayConfig {
    /// The shift template assigned to business days.
    pub template: ShiftTemplate,
    /// Policy for negative raw worked totals.
    #[serde(default)]
    pub negative_duration: NegativeDurationPolicy,
    /// Currency formatting applied at the rendering boundary.
    #[serde(default)]
    pub currency: CurrencyFormat,
}

/// Currency formatting policy.
///
/// Injected as configuration and applied only where amounts are rendered
/// for people, never inside the calculation. The default is the pt-BR
/// convention: comma decimal separator, dot grouping.
///
/// # Example
///
/// ```
/// use ponto_engine::config::CurrencyFormat;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let format = CurrencyFormat::default();
/// assert_eq!(format.format(Decimal::from_str("1234.5").unwrap()), "1.234,50");
/// ```
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CurrencyFormat {
    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,
    /// Separator between thousands groups.
    pub grouping_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

impl CurrencyFormat {
    /// Renders an amount with two decimal places and thousands grouping.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded < Decimal::ZERO;
        let fixed = format!("{:.2}", rounded.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some(parts) => parts,
            None => (fixed.as_str(), "00"),
        };

        let mut grouped = String::with_capacity(fixed.len() + 4);
        if negative {
            grouped.push('-');
        }
        for (index, digit) in integer.chars().enumerate() {
            if index > 0 && (integer.len() - index) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(digit);
        }
        grouped.push(self.decimal_separator);
        grouped.push_str(fraction);
        grouped
    }
}

/// The complete engine configuration.
///
/// Aggregates the table metadata, payroll parameters, statutory tax tables
/// and workday defaults. Construction validates the semantic shape of every
/// part; [`EngineConfig::default`] provides the canonical built-in 2023
/// table set so the engine is usable without configuration files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: TableMetadata,
    payroll: PayrollParams,
    taxes: TaxTables,
    workday: WorkdayConfig,
}

impl EngineConfig {
    /// Creates a configuration from validated parts.
    pub fn new(
        metadata: TableMetadata,
        payroll: PayrollParams,
        taxes: TaxTables,
        workday: WorkdayConfig,
    ) -> EngineResult<Self> {
        if payroll.base_days == 0 {
            return Err(EngineError::ConfigInvalid {
                message: "base_days must be at least 1".to_string(),
            });
        }
        if payroll.base_hours == 0 {
            return Err(EngineError::ConfigInvalid {
                message: "base_hours must be at least 1".to_string(),
            });
        }
        if payroll.overtime_multiplier < Decimal::ONE {
            return Err(EngineError::ConfigInvalid {
                message: "overtime_multiplier must be at least 1".to_string(),
            });
        }
        Ok(Self {
            metadata,
            payroll,
            taxes,
            workday,
        })
    }

    /// The table-set metadata.
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// The payroll parameters.
    pub fn payroll(&self) -> &PayrollParams {
        &self.payroll
    }

    /// The statutory tax tables.
    pub fn taxes(&self) -> &TaxTables {
        &self.taxes
    }

    /// The workday defaults.
    pub fn workday(&self) -> &WorkdayConfig {
        &self.workday
    }

    /// The canonical 2023 CLT table set.
    ///
    /// INSS: four marginal brackets (7.5% to 1320.00, 9% to 2571.29, 12%
    /// to 3856.94, 14% to 7507.49) with carried amounts 99.00 / 211.62 /
    /// 365.90, and a flat 14%-of-ceiling contribution above the top.
    /// IRRF: five bands (exempt to 1903.98, then 7.5% / 15% / 22.5% /
    /// 27.5% with their flat deductions) and a 189.59 per-dependent
    /// allowance.
    pub fn clt_2023() -> Self {
        let brackets = vec![
            ContributionBracket {
                ceiling: Decimal::new(1320_00, 2),
                rate: Decimal::new(75, 3),
                carried: Decimal::ZERO,
            },
            ContributionBracket {
                ceiling: Decimal::new(2571_29, 2),
                rate: Decimal::new(9, 2),
                carried: Decimal::new(99_00, 2),
            },
            ContributionBracket {
                ceiling: Decimal::new(3856_94, 2),
                rate: Decimal::new(12, 2),
                carried: Decimal::new(211_62, 2),
            },
            ContributionBracket {
                ceiling: Decimal::new(7507_49, 2),
                rate: Decimal::new(14, 2),
                carried: Decimal::new(365_90, 2),
            },
        ];
        let bands = vec![
            WithholdingBand {
                ceiling: Some(Decimal::new(1903_98, 2)),
                rate: Decimal::ZERO,
                deduction: Decimal::ZERO,
            },
            WithholdingBand {
                ceiling: Some(Decimal::new(2826_65, 2)),
                rate: Decimal::new(75, 3),
                deduction: Decimal::new(142_80, 2),
            },
            WithholdingBand {
                ceiling: Some(Decimal::new(3751_05, 2)),
                rate: Decimal::new(15, 2),
                deduction: Decimal::new(354_80, 2),
            },
            WithholdingBand {
                ceiling: Some(Decimal::new(4664_68, 2)),
                rate: Decimal::new(225, 3),
                deduction: Decimal::new(636_13, 2),
            },
            WithholdingBand {
                ceiling: None,
                rate: Decimal::new(275, 3),
                deduction: Decimal::new(869_36, 2),
            },
        ];

        Self {
            metadata: TableMetadata {
                name: "CLT payroll tables".to_string(),
                version: "2023-05-01".to_string(),
                source_url: "https://www.gov.br/inss/".to_string(),
            },
            payroll: PayrollParams {
                base_days: 22,
                base_hours: 220,
                overtime_multiplier: Decimal::new(15, 1),
            },
            taxes: TaxTables {
                social_security: SocialSecurityTable { brackets },
                income_tax: IncomeTaxTable { bands },
                dependent_allowance: Decimal::new(189_59, 2),
            },
            workday: WorkdayConfig {
                template: ShiftTemplate::new(
                    ClockTime::parse("07:12"),
                    ClockTime::parse("10:30"),
                    ClockTime::parse("12:00"),
                    ClockTime::parse("17:30"),
                ),
                negative_duration: NegativeDurationPolicy::default(),
                currency: CurrencyFormat::default(),
            },
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::clt_2023()
    }
}
