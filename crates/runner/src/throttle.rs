//! Fee throttle
//!
//! Every committed mint pays a fixed network fee. Before committing a
//! regular tick the throttle projects the fee run-rate including this
//! mint; if it exceeds the tolerance the mint is skipped and its elapsed
//! time rolls into the next tick. Bootstrap and boundary ticks bypass the
//! throttle.

use cfm_core::{FeeUsd, RunParameters, SECONDS_PER_DAY, Seconds};
use rust_decimal::prelude::ToPrimitive;

/// Classification of a tick for admission purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// First tick of the run
    Bootstrap,
    /// Tick snapped to a fee period end
    Boundary,
    /// Any other tick
    Regular,
}

/// Admission decision for a tick's mint
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Bootstrap tick: nothing to charge, nothing to mint
    Bootstrap,
    /// Mint and pay the network fee
    Commit { fee_rate_usd_per_day: f64 },
    /// Fee run-rate would exceed the tolerance
    Skip { fee_rate_usd_per_day: f64 },
}

impl ThrottleDecision {
    pub fn fee_rate_usd_per_day(&self) -> f64 {
        match self {
            ThrottleDecision::Bootstrap => 0.0,
            ThrottleDecision::Commit {
                fee_rate_usd_per_day,
            }
            | ThrottleDecision::Skip {
                fee_rate_usd_per_day,
            } => *fee_rate_usd_per_day,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, ThrottleDecision::Skip { .. })
    }
}

/// Cost-based admission policy for mint events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeThrottle {
    tx_fee_usd: FeeUsd,
    tolerance_usd_per_day: f64,
}

impl FeeThrottle {
    pub fn new(tx_fee_usd: FeeUsd, tolerance_usd_per_day: f64) -> Self {
        Self {
            tx_fee_usd,
            tolerance_usd_per_day,
        }
    }

    pub fn from_params(params: &RunParameters) -> Self {
        Self::new(params.tx_fee_usd, params.fee_tolerance_usd_per_day)
    }

    /// Fee run-rate in USD/day if one more mint were paid at `clock`
    pub fn projected_rate(&self, cumulative_fees: FeeUsd, clock: Seconds) -> f64 {
        let fees = (cumulative_fees + self.tx_fee_usd)
            .to_f64()
            .unwrap_or(f64::MAX);
        fees / (clock / SECONDS_PER_DAY)
    }

    /// Decide whether the mint of a tick at `clock` goes ahead
    pub fn decide(
        &self,
        kind: TickKind,
        cumulative_fees: FeeUsd,
        clock: Seconds,
    ) -> ThrottleDecision {
        if kind == TickKind::Bootstrap {
            // clock / day would be the divisor; the bootstrap tick never pays
            return ThrottleDecision::Bootstrap;
        }

        let fee_rate_usd_per_day = self.projected_rate(cumulative_fees, clock);

        if kind == TickKind::Regular && fee_rate_usd_per_day > self.tolerance_usd_per_day {
            ThrottleDecision::Skip {
                fee_rate_usd_per_day,
            }
        } else {
            ThrottleDecision::Commit {
                fee_rate_usd_per_day,
            }
        }
    }
}
