//! Simulation configuration
//!
//! [`SimConfig`] holds the user-facing parameters (fee, periods, jitter,
//! drift, fee tolerance) plus the fund and network constants. It can be
//! loaded from a JSON file, overridden from the command line, and is turned
//! into immutable [`RunParameters`] by [`SimConfig::derive`] once validated.

use crate::error::{ConfigError, ConfigResult};
use crate::values::{FeeUsd, SECONDS_PER_DAY, Seconds, Shares, Usd};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MGMT_FEE: f64 = 0.02;
pub const DEFAULT_MGMT_FEE_PERIOD_DAYS: i64 = 365;
pub const DEFAULT_MINT_PERIOD_SECS: i64 = 300;
pub const DEFAULT_MINT_PERIOD_NOISE_SECS: i64 = 240;
pub const DEFAULT_CLOCK_DRIFT: f64 = 0.001;
pub const DEFAULT_FEE_TOLERANCE: f64 = 1.00;
pub const DEFAULT_SIM_PERIODS: u32 = 10;

/// Fund constants - assumed fixed for the whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundParams {
    /// USD value of the fund's assets
    pub fund_value: Usd,
    /// Shares outstanding before any fee minting
    pub init_shares: Shares,
    /// Shares held by the tracked customer
    pub customer_shares: Shares,
}

impl Default for FundParams {
    fn default() -> Self {
        Self {
            fund_value: 4_000_000.00,
            init_shares: 1000.0,
            customer_shares: 25.0,
        }
    }
}

/// Network transaction cost model
///
/// Every committed mint pays one network transaction:
/// `units_per_base_unit * unit_price_usd * base_units_per_tx`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkFee {
    /// USD price of one network unit
    pub unit_price_usd: Decimal,
    /// Base units charged per transaction
    pub base_units_per_tx: Decimal,
    /// Network units per base unit
    pub units_per_base_unit: Decimal,
}

impl NetworkFee {
    /// USD cost of a single mint transaction
    pub fn per_tx_usd(&self) -> FeeUsd {
        self.units_per_base_unit * self.unit_price_usd * self.base_units_per_tx
    }
}

impl Default for NetworkFee {
    fn default() -> Self {
        Self {
            unit_price_usd: dec!(0.45),
            base_units_per_tx: dec!(100),
            units_per_base_unit: dec!(0.0001),
        }
    }
}

/// Root configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Management fee as a fraction in [0.0, 1.0]
    pub mgmt_fee: f64,
    /// Management fee period in days
    pub mgmt_fee_period_days: i64,
    /// Target seconds between mints
    pub mint_period_secs: i64,
    /// Uniform jitter bound (±) on the mint interval, in seconds
    pub mint_period_noise_secs: i64,
    /// Scalar error applied to measured elapsed time
    pub clock_drift: f64,
    /// Maximum network fee run-rate in USD/day before mints are skipped
    pub fee_tolerance_usd_per_day: f64,
    /// Number of fee periods to simulate
    pub sim_periods: u32,
    pub fund: FundParams,
    pub network_fee: NetworkFee,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mgmt_fee: DEFAULT_MGMT_FEE,
            mgmt_fee_period_days: DEFAULT_MGMT_FEE_PERIOD_DAYS,
            mint_period_secs: DEFAULT_MINT_PERIOD_SECS,
            mint_period_noise_secs: DEFAULT_MINT_PERIOD_NOISE_SECS,
            clock_drift: DEFAULT_CLOCK_DRIFT,
            fee_tolerance_usd_per_day: DEFAULT_FEE_TOLERANCE,
            sim_periods: DEFAULT_SIM_PERIODS,
            fund: FundParams::default(),
            network_fee: NetworkFee::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every parameter; the first offending value is reported
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.mgmt_fee) {
            return Err(ConfigError::FeeOutOfRange(self.mgmt_fee));
        }
        // inflation_rate = 1 / (1 - fee)
        if self.mgmt_fee == 1.0 {
            return Err(ConfigError::FeeConsumesFund(self.mgmt_fee));
        }

        positive("period", self.mgmt_fee_period_days)?;
        positive("mint", self.mint_period_secs)?;
        positive("noise", self.mint_period_noise_secs)?;

        if self.mint_period_noise_secs >= self.mint_period_secs {
            return Err(ConfigError::NoiseNotBelowPeriod {
                noise: self.mint_period_noise_secs,
                period: self.mint_period_secs,
            });
        }

        // measured intervals must stay positive so mints never shrink the fund
        if self.clock_drift.is_nan() || self.clock_drift <= -1.0 {
            return Err(ConfigError::DriftOutOfRange(self.clock_drift));
        }

        if self.sim_periods == 0 {
            return Err(ConfigError::NotPositive {
                name: "sim_periods",
                value: 0,
            });
        }

        let fund = &self.fund;
        if fund.fund_value.is_nan() || fund.fund_value <= 0.0 {
            return Err(ConfigError::InvalidConstant {
                name: "fund_value",
                value: fund.fund_value,
            });
        }
        if fund.init_shares.is_nan() || fund.init_shares <= 0.0 {
            return Err(ConfigError::InvalidConstant {
                name: "init_shares",
                value: fund.init_shares,
            });
        }
        if fund.customer_shares.is_nan() || fund.customer_shares < 0.0 {
            return Err(ConfigError::InvalidConstant {
                name: "customer_shares",
                value: fund.customer_shares,
            });
        }

        Ok(())
    }

    /// Validate and derive the immutable parameters of a run
    pub fn derive(&self) -> ConfigResult<RunParameters> {
        self.validate()?;

        let init_price = self.fund.fund_value / self.fund.init_shares;

        Ok(RunParameters {
            mgmt_fee: self.mgmt_fee,
            inflation_rate: 1.0 / (1.0 - self.mgmt_fee),
            fee_period_secs: self.mgmt_fee_period_days as Seconds * SECONDS_PER_DAY,
            mint_period_secs: self.mint_period_secs as Seconds,
            mint_period_noise_secs: self.mint_period_noise_secs as Seconds,
            clock_drift: self.clock_drift,
            fee_tolerance_usd_per_day: self.fee_tolerance_usd_per_day,
            sim_periods: self.sim_periods,
            fund_value: self.fund.fund_value,
            init_shares: self.fund.init_shares,
            customer_shares: self.fund.customer_shares,
            init_price,
            init_customer_value: init_price * self.fund.customer_shares,
            tx_fee_usd: self.network_fee.per_tx_usd(),
        })
    }
}

fn positive(name: &'static str, value: i64) -> ConfigResult<()> {
    if value <= 0 {
        return Err(ConfigError::NotPositive { name, value });
    }
    Ok(())
}

/// Validated, derived parameters - immutable for the lifetime of a run
#[derive(Debug, Clone, PartialEq)]
pub struct RunParameters {
    pub mgmt_fee: f64,
    /// Per-period share growth factor: `1 / (1 - mgmt_fee)`
    pub inflation_rate: f64,
    pub fee_period_secs: Seconds,
    pub mint_period_secs: Seconds,
    pub mint_period_noise_secs: Seconds,
    pub clock_drift: f64,
    pub fee_tolerance_usd_per_day: f64,
    pub sim_periods: u32,
    pub fund_value: Usd,
    pub init_shares: Shares,
    pub customer_shares: Shares,
    pub init_price: Usd,
    pub init_customer_value: Usd,
    /// Fixed network cost of one mint transaction
    pub tx_fee_usd: FeeUsd,
}

impl RunParameters {
    /// Last simulated instant; the run stops once the clock passes it
    pub fn horizon_secs(&self) -> Seconds {
        self.fee_period_secs * self.sim_periods as Seconds
    }

    /// Customer value under an exact discrete fee charged once per period
    pub fn ideal_customer_value(&self, periods_elapsed: u64) -> Usd {
        self.init_customer_value * (1.0 - self.mgmt_fee).powf(periods_elapsed as f64)
    }
}
