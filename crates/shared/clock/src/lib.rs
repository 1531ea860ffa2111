//! CFM Clock Infrastructure
//!
//! Simulated time for the minting engine:
//!
//! ## Tick timeline
//!
//! ```text
//! last committed          proposed             period end
//!      │◄──── wait = mint ± noise ────►│            │
//!      ├───────────────────────────────┼────────────┤
//!      │                               │  crosses?  │
//!      │                               └─── snap ──►│ (boundary tick)
//!      │
//!      └── raw delta × (1 + drift) = effective delta
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use cfm_clock::{ClockDrift, MintSchedule, PeriodBoundary, UniformJitter};
//!
//! let schedule = MintSchedule::new(300.0, 240.0);
//! let mut jitter = UniformJitter::new();
//!
//! let proposed = schedule.advance(clock, jitter.sample());
//! let boundary = PeriodBoundary::detect(proposed, last_committed, fee_period);
//! let delta = ClockDrift::new(0.001).measure(boundary.clock, last_committed);
//! ```

mod boundary;
mod drift;
mod format;
mod jitter;
mod schedule;

pub use boundary::PeriodBoundary;
pub use drift::{ClockDrift, TimeDelta};
pub use format::{pretty_delta, pretty_time};
pub use jitter::{ConstantJitter, ScriptedJitter, UniformJitter};
pub use schedule::MintSchedule;

// Re-export the JitterSource trait for convenience
pub use cfm_ports::JitterSource;
