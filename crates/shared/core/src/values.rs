use rust_decimal::Decimal;

/// Simulated time in seconds since the start of the run
pub type Seconds = f64;

/// Share count - fractional, since mints are continuous
pub type Shares = f64;

/// USD amount for valuations (prices, customer value, earnings)
pub type Usd = f64;

/// USD amount for transaction fees - uses Decimal so the fee ledger sums exactly
pub type FeeUsd = Decimal;

pub const SECONDS_PER_DAY: Seconds = 86_400.0;
