use cfm_core::{PeriodSummary, TickRecord};
use cfm_ports::ReportSink;

/// Keeps every record in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    ticks: Vec<TickRecord>,
    summaries: Vec<PeriodSummary>,
    finished: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> &[TickRecord] {
        &self.ticks
    }

    pub fn summaries(&self) -> &[PeriodSummary] {
        &self.summaries
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl ReportSink for RecordingSink {
    fn on_tick(&mut self, record: &TickRecord) {
        self.ticks.push(record.clone());
    }

    fn on_period(&mut self, summary: &PeriodSummary) {
        self.summaries.push(summary.clone());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
