//! CFM Ports
//!
//! Port definitions (traits) for the continuous fee minting simulator.
//! These define the boundaries between the engine and its collaborators.

mod jitter;
mod sink;

pub use jitter::JitterSource;
pub use sink::ReportSink;
