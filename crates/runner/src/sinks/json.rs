use cfm_core::{PeriodSummary, TickRecord};
use cfm_ports::ReportSink;
use serde::Serialize;
use std::io::Write;

/// A report record tagged with its kind
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportEvent<'a> {
    Tick(&'a TickRecord),
    Period(&'a PeriodSummary),
}

/// Writes one JSON object per record (JSON lines)
///
/// Write failures are logged and counted; they never stop the run.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    errors: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, errors: 0 }
    }

    /// Number of records that could not be written
    pub fn errors(&self) -> u64 {
        self.errors
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, event: ReportEvent<'_>) {
        let result = serde_json::to_writer(&mut self.writer, &event)
            .map_err(std::io::Error::from)
            .and_then(|_| self.writer.write_all(b"\n"));

        if let Err(e) = result {
            self.errors += 1;
            log::warn!("Failed to write report record: {}", e);
        }
    }
}

impl<W: Write> ReportSink for JsonLinesSink<W> {
    fn on_tick(&mut self, record: &TickRecord) {
        self.emit(ReportEvent::Tick(record));
    }

    fn on_period(&mut self, summary: &PeriodSummary) {
        self.emit(ReportEvent::Period(summary));
    }

    fn finish(&mut self) {
        if let Err(e) = self.writer.flush() {
            self.errors += 1;
            log::warn!("Failed to flush report stream: {}", e);
        }
    }
}
