use cfm_core::{PeriodSummary, TickRecord};

/// Port for the report stream
///
/// The engine hands every record to a sink and never formats anything
/// itself. Implementations include console logging, JSON lines and
/// in-memory collection for tests.
pub trait ReportSink {
    /// Called once per tick
    fn on_tick(&mut self, record: &TickRecord);

    /// Called after `on_tick` when the tick closes a fee period
    fn on_period(&mut self, summary: &PeriodSummary);

    /// Called once after the last tick
    fn finish(&mut self) {}
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn on_tick(&mut self, record: &TickRecord) {
        (**self).on_tick(record)
    }

    fn on_period(&mut self, summary: &PeriodSummary) {
        (**self).on_period(summary)
    }

    fn finish(&mut self) {
        (**self).finish()
    }
}
