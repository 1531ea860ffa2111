//! CFM Runner - Continuous Fee Minting Simulation
//!
//! Instead of deducting a periodic management fee, a fund can mint new
//! shares continuously at a rate that dilutes existing holders by exactly
//! the fee over each fee period. This crate simulates that mechanism:
//!
//! - **Engine**: the tick loop and its state
//! - **Dilution**: continuous-compounding mint formula
//! - **Throttle**: skips mints whose network fee would exceed the budget
//! - **Sinks**: console, JSON lines and in-memory report consumers
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────┐   samples    ┌──────────────────────────────────┐
//!   │ JitterSource │─────────────►│              Engine              │
//!   └──────────────┘              │                                  │
//!                                 │  MintSchedule ─► PeriodBoundary  │
//!   ┌──────────────┐  parameters  │        │              │          │
//!   │  SimConfig   │─────────────►│   ClockDrift ─► compute_mint     │
//!   └──────────────┘              │                       │          │
//!                                 │  FeeThrottle ─► apply_mint_and_  │
//!                                 │                 report           │
//!                                 └────────────────┬─────────────────┘
//!                                                  │ TickRecord / PeriodSummary
//!                                                  ▼
//!                                           ┌─────────────┐
//!                                           │ ReportSink  │
//!                                           └─────────────┘
//! ```

pub mod cli;
pub mod dilution;
pub mod engine;
pub mod error;
pub mod format;
pub mod report;
pub mod sinks;
pub mod throttle;

// Re-export main types
pub use cli::Args;
pub use dilution::{MintCandidate, compute_mint, growth_factor};
pub use engine::{Engine, RunReport};
pub use error::RunnerError;
pub use report::{TickEmission, TickPlan, apply_mint_and_report};
pub use sinks::{FanoutSink, JsonLinesSink, LogSink, RecordingSink};
pub use throttle::{FeeThrottle, ThrottleDecision, TickKind};

// Re-export the ports and clock types callers need to drive an engine
pub use cfm_clock::{ConstantJitter, ScriptedJitter, UniformJitter};
pub use cfm_ports::{JitterSource, ReportSink};
