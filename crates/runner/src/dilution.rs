//! Continuous dilution
//!
//! A fee of `f` per period is equivalent to growing the share count by
//! `inflation_rate = 1 / (1 - f)` per period. Minting for a slice of the
//! period compounds continuously:
//!
//! ```text
//! growth = inflation_rate ^ (delta / period)
//! mint   = shares * (growth - 1)
//! ```
//!
//! Slices that partition a period multiply back to exactly `inflation_rate`,
//! so holders are diluted by `f` over the period no matter how it is sliced.

use cfm_core::{RunParameters, Seconds, Shares};

/// Candidate mint for one tick, before the throttle decides on it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MintCandidate {
    /// Share of a fee period covered by the tick
    pub period_fraction: f64,
    /// Share count multiplier for the tick
    pub growth_factor: f64,
    /// Shares to mint
    pub shares: Shares,
}

impl MintCandidate {
    /// Nothing to mint (bootstrap tick)
    pub fn none() -> Self {
        Self {
            period_fraction: 0.0,
            growth_factor: 1.0,
            shares: 0.0,
        }
    }
}

/// Share growth factor for a fraction of a fee period
pub fn growth_factor(inflation_rate: f64, period_fraction: f64) -> f64 {
    inflation_rate.powf(period_fraction)
}

/// Mint needed to dilute `fund_shares` for `effective_delta` seconds
pub fn compute_mint(
    fund_shares: Shares,
    effective_delta: Seconds,
    params: &RunParameters,
) -> MintCandidate {
    let period_fraction = effective_delta / params.fee_period_secs;
    let growth_factor = growth_factor(params.inflation_rate, period_fraction);

    MintCandidate {
        period_fraction,
        growth_factor,
        shares: fund_shares * (growth_factor - 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cfm_core::SimConfig;

    fn params() -> RunParameters {
        SimConfig::default().derive().unwrap()
    }

    #[test]
    fn test_full_period_mint() {
        let params = params();
        let mint = compute_mint(1000.0, params.fee_period_secs, &params);

        assert_relative_eq!(mint.period_fraction, 1.0);
        assert_relative_eq!(mint.growth_factor, 1.0 / 0.98, max_relative = 1e-12);
        // 2% fee on 1000 shares -> 1000/0.98 - 1000
        assert_relative_eq!(mint.shares, 20.408_163_265_306_12, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_delta_mints_nothing() {
        let params = params();
        let mint = compute_mint(1000.0, 0.0, &params);
        assert_eq!(mint.growth_factor, 1.0);
        assert_eq!(mint.shares, 0.0);
    }

    #[test]
    fn test_slices_telescope() {
        let params = params();
        let slices = 365 * 288;
        let delta = params.fee_period_secs / slices as f64;

        let mut shares = params.init_shares;
        for _ in 0..slices {
            shares += compute_mint(shares, delta, &params).shares;
        }

        assert_relative_eq!(
            shares,
            params.init_shares * params.inflation_rate,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_uneven_slices_telescope() {
        let params = params();
        let fractions = [0.1, 0.25, 0.05, 0.3, 0.3];

        let product: f64 = fractions
            .iter()
            .map(|f| growth_factor(params.inflation_rate, *f))
            .product();

        assert_relative_eq!(product, params.inflation_rate, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_fee_never_mints() {
        let params = SimConfig {
            mgmt_fee: 0.0,
            ..Default::default()
        }
        .derive()
        .unwrap();

        let mint = compute_mint(1000.0, params.fee_period_secs, &params);
        assert_eq!(mint.shares, 0.0);
    }
}
