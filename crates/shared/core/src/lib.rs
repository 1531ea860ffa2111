//! CFM Core Domain
//!
//! Pure domain types for the continuous fee minting simulator.
//! This crate contains no async, no I/O beyond config file loading, and is
//! 100% unit testable.

pub mod config;
pub mod error;
pub mod records;
pub mod state;
pub mod values;

// Re-export commonly used types at crate root
pub use config::{FundParams, NetworkFee, RunParameters, SimConfig};
pub use error::{ConfigError, ConfigResult};
pub use records::{MintOutcome, PeriodSummary, TickRecord};
pub use state::SimState;
pub use values::{FeeUsd, SECONDS_PER_DAY, Seconds, Shares, Usd};
