use crate::format::{format_summary, format_tick};
use cfm_core::{PeriodSummary, TickRecord};
use cfm_ports::ReportSink;

/// Writes report lines through the `log` facade
///
/// Tick lines go out at debug level, period summaries at info level, so a
/// default run prints one line per fee period and `--verbose` adds a line
/// per tick. A `RUST_LOG` filter above info hides the summaries as well.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for LogSink {
    fn on_tick(&mut self, record: &TickRecord) {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("{}", format_tick(record));
        }
    }

    fn on_period(&mut self, summary: &PeriodSummary) {
        log::info!("{}", format_summary(summary));
    }
}
