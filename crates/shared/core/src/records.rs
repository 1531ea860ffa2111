//! Report records
//!
//! The engine emits these immutable records; sinks decide how to render
//! them. Nothing in here formats text.

use crate::values::{FeeUsd, Seconds, Shares, Usd};
use serde::{Deserialize, Serialize};

/// What happened to the mint opportunity of a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MintOutcome {
    /// First tick of the run: nothing minted, establishes the initial state
    Bootstrap,
    /// Mint committed (and its network fee paid)
    Minted { shares: Shares },
    /// Suppressed by the fee throttle
    Skipped,
}

impl MintOutcome {
    /// Shares added to the fund by this tick
    pub fn shares(&self) -> Shares {
        match self {
            MintOutcome::Minted { shares } => *shares,
            MintOutcome::Bootstrap | MintOutcome::Skipped => 0.0,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, MintOutcome::Skipped)
    }
}

/// Emitted once per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// Tick number, bootstrap is 0
    pub tick: u64,
    /// Simulated time, snapped to the period end on boundary ticks
    pub clock_secs: Seconds,
    /// Drift-adjusted time since the last committed tick
    pub delta_secs: Seconds,
    pub outcome: MintOutcome,
    /// This tick closed a fee period (or is the bootstrap tick)
    pub new_period: bool,
    pub fund_shares: Shares,
    pub fund_price: Usd,
    pub customer_value: Usd,
    pub cumulative_tx_fees_usd: FeeUsd,
    /// Projected network fee run-rate; 0 on the bootstrap tick
    pub fee_rate_usd_per_day: f64,
}

/// Emitted on every period boundary, after the tick record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Time the summary refers to (0 for the bootstrap summary)
    pub display_clock_secs: Seconds,
    /// Fee periods elapsed at this boundary
    pub period: u64,
    /// Committed mints since the previous summary
    pub mints: u64,
    /// Throttled mints since the previous summary
    pub skips: u64,
    pub fund_shares: Shares,
    pub fund_price: Usd,
    pub customer_value: Usd,
    /// Customer value under an exact discrete fee
    pub ideal_customer_value: Usd,
    /// `|customer_value - ideal_customer_value|`
    pub error_usd: Usd,
    pub earnings_usd: Usd,
    pub cumulative_tx_fees_usd: FeeUsd,
}

impl PeriodSummary {
    /// Start-of-run summary (no mints counted yet)
    pub fn is_start(&self) -> bool {
        self.mints == 0
    }

    /// Error relative to the ideal customer value
    pub fn relative_error(&self) -> f64 {
        if self.ideal_customer_value == 0.0 {
            return 0.0;
        }
        self.error_usd / self.ideal_customer_value
    }
}
