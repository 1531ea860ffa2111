//! Command line interface
//!
//! Every flag is optional. Values come from the defaults, then the JSON
//! file given with `--config`, then the flags themselves.

use cfm_core::config::{
    DEFAULT_CLOCK_DRIFT, DEFAULT_FEE_TOLERANCE, DEFAULT_MGMT_FEE, DEFAULT_MGMT_FEE_PERIOD_DAYS,
    DEFAULT_MINT_PERIOD_NOISE_SECS, DEFAULT_MINT_PERIOD_SECS,
};
use cfm_core::{ConfigResult, RunParameters, SimConfig};
use clap::Parser;
use std::path::PathBuf;

/// Continuous fee minting simulation
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "cfm-sim", about = "continuous fee minting simulation")]
pub struct Args {
    /// Show verbose output (one line per mint tick)
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = format!("mgmt fee 0.00-1.00, default {}", DEFAULT_MGMT_FEE)
    )]
    pub fee: Option<f64>,

    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = format!("mgmt fee period in days, default {}", DEFAULT_MGMT_FEE_PERIOD_DAYS)
    )]
    pub period: Option<i64>,

    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = format!("fee minting period in seconds, default {}", DEFAULT_MINT_PERIOD_SECS)
    )]
    pub mint: Option<i64>,

    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = format!(
            "fee minting period randomness in seconds, default {}",
            DEFAULT_MINT_PERIOD_NOISE_SECS
        )
    )]
    pub noise: Option<i64>,

    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = format!("clock drift scalar, default {}", DEFAULT_CLOCK_DRIFT)
    )]
    pub drift: Option<f64>,

    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = format!(
            "ledger tx fee tolerance in USD/day, default {:.2}",
            DEFAULT_FEE_TOLERANCE
        )
    )]
    pub tolerance: Option<f64>,

    /// Load parameters from a JSON file (flags override file values)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit records as JSON lines on stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Build the run configuration; it is validated when the engine derives it
    pub fn to_config(&self) -> ConfigResult<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                SimConfig::from_file(path)?
            }
            None => SimConfig::default(),
        };

        if let Some(fee) = self.fee {
            config.mgmt_fee = fee;
        }
        if let Some(period) = self.period {
            config.mgmt_fee_period_days = period;
        }
        if let Some(mint) = self.mint {
            config.mint_period_secs = mint;
        }
        if let Some(noise) = self.noise {
            config.mint_period_noise_secs = noise;
        }
        if let Some(drift) = self.drift {
            config.clock_drift = drift;
        }
        if let Some(tolerance) = self.tolerance {
            config.fee_tolerance_usd_per_day = tolerance;
        }

        Ok(config)
    }

    /// Log level implied by `--verbose`
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Dump the run parameters at debug level
pub fn log_parameters(config: &SimConfig, params: &RunParameters) {
    log::debug!("management fee, f = {}", params.mgmt_fee);
    log::debug!(
        "management fee period, p = {} secs ({} days)",
        params.fee_period_secs,
        config.mgmt_fee_period_days
    );
    log::debug!("inflation rate: {}", params.inflation_rate);
    log::debug!(
        "minting every: {} +- {} secs",
        params.mint_period_secs,
        params.mint_period_noise_secs
    );
    log::debug!("clock drift: {}", params.clock_drift);
    log::debug!("fund value: ${:.2}", params.fund_value);
    log::debug!("initial shares: {}", params.init_shares);
    log::debug!("init price per share: ${:.2}", params.init_price);
    log::debug!("customer shares: {}", params.customer_shares);
    log::debug!("customer value: {:.2}", params.init_customer_value);
    log::debug!("sim periods: {}", params.sim_periods);
    log::debug!("fee tolerance: ${:.2}", params.fee_tolerance_usd_per_day);
    log::debug!("unit price: ${}", config.network_fee.unit_price_usd);
    log::debug!("base units per tx: {}", config.network_fee.base_units_per_tx);
    log::debug!("fee per mint: ${}", params.tx_fee_usd);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfm_core::ConfigError;
    use std::io::Write;

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = Args::try_parse_from(["cfm-sim"]).unwrap();
        assert_eq!(args.to_config().unwrap(), SimConfig::default());
        assert_eq!(args.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "cfm-sim", "-v", "--fee", "0.05", "--period", "30", "--mint", "600", "--noise",
            "100", "--drift", "-0.002", "--tolerance", "2.5", "--json",
        ])
        .unwrap();

        let config = args.to_config().unwrap();
        assert_eq!(config.mgmt_fee, 0.05);
        assert_eq!(config.mgmt_fee_period_days, 30);
        assert_eq!(config.mint_period_secs, 600);
        assert_eq!(config.mint_period_noise_secs, 100);
        assert_eq!(config.clock_drift, -0.002);
        assert_eq!(config.fee_tolerance_usd_per_day, 2.5);
        assert!(args.json);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_short_flags() {
        let args =
            Args::try_parse_from(["cfm-sim", "-f", "0.1", "-p", "7", "-m", "60", "-n", "30"])
                .unwrap();

        let config = args.to_config().unwrap();
        assert_eq!(config.mgmt_fee, 0.1);
        assert_eq!(config.mgmt_fee_period_days, 7);
        assert_eq!(config.mint_period_secs, 60);
        assert_eq!(config.mint_period_noise_secs, 30);
    }

    #[test]
    fn test_negative_period_reaches_validation() {
        let args = Args::try_parse_from(["cfm-sim", "--period", "-5"]).unwrap();
        let err = args.to_config().unwrap().validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotPositive {
                name: "period",
                value: -5
            }
        );
    }

    #[test]
    fn test_non_numeric_rejected_by_parser() {
        assert!(Args::try_parse_from(["cfm-sim", "--mint", "soon"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mgmt_fee": 0.03, "mint_period_secs": 900 }}"#).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = Args::try_parse_from(["cfm-sim", "--config", &path, "--mint", "120"]).unwrap();

        let config = args.to_config().unwrap();
        assert_eq!(config.mgmt_fee, 0.03);
        assert_eq!(config.mint_period_secs, 120);
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args::try_parse_from(["cfm-sim", "-c", "/nonexistent/cfm.json"]).unwrap();
        assert!(matches!(args.to_config(), Err(ConfigError::Io { .. })));
    }
}
