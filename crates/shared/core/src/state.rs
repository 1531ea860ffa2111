use crate::config::RunParameters;
use crate::values::{FeeUsd, Seconds, Shares, Usd};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Mutable state of one simulation run
///
/// Owned exclusively by the engine and replaced once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Ticks processed so far (0 until the bootstrap tick has run)
    pub tick: u64,
    /// Current simulated time
    pub clock: Seconds,
    /// Clock as of the last committed tick
    pub last_committed_clock: Seconds,
    /// Total shares outstanding
    pub fund_shares: Shares,
    /// Network fees paid so far
    pub cumulative_tx_fees_usd: FeeUsd,
    /// USD value of all minted shares at their time of minting
    pub cumulative_minted_value_usd: Usd,
    pub mints_since_last_period: u64,
    pub skips_since_last_period: u64,
}

impl SimState {
    /// State at t=0, before the bootstrap tick
    pub fn genesis(params: &RunParameters) -> Self {
        Self {
            tick: 0,
            clock: 0.0,
            last_committed_clock: 0.0,
            fund_shares: params.init_shares,
            cumulative_tx_fees_usd: Decimal::ZERO,
            cumulative_minted_value_usd: 0.0,
            mints_since_last_period: 0,
            skips_since_last_period: 0,
        }
    }

    /// The next tick is the bootstrap tick
    pub fn is_bootstrap(&self) -> bool {
        self.tick == 0
    }

    pub fn fund_price(&self, params: &RunParameters) -> Usd {
        params.fund_value / self.fund_shares
    }

    pub fn customer_value(&self, params: &RunParameters) -> Usd {
        self.fund_price(params) * params.customer_shares
    }
}
