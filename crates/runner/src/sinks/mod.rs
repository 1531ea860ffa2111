//! Report sinks
//!
//! - [`LogSink`]: human-readable lines through the `log` facade
//! - [`JsonLinesSink`]: one JSON object per record
//! - [`RecordingSink`]: keeps every record in memory
//! - [`FanoutSink`]: forwards to several sinks

mod json;
mod log_sink;
mod recording;

pub use json::{JsonLinesSink, ReportEvent};
pub use log_sink::LogSink;
pub use recording::RecordingSink;

use cfm_core::{PeriodSummary, TickRecord};
use cfm_ports::ReportSink;

/// Forwards every record to each inner sink in order
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }
}

impl ReportSink for FanoutSink {
    fn on_tick(&mut self, record: &TickRecord) {
        for sink in &mut self.sinks {
            sink.on_tick(record);
        }
    }

    fn on_period(&mut self, summary: &PeriodSummary) {
        for sink in &mut self.sinks {
            sink.on_period(summary);
        }
    }

    fn finish(&mut self) {
        for sink in &mut self.sinks {
            sink.finish();
        }
    }
}
