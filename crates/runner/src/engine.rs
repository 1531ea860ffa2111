//! Simulation Engine
//!
//! The tick loop. Each tick runs the same pipeline:
//!
//! ```text
//! advance clock ─► boundary check ─► time delta ─► candidate mint
//!       ─► throttle ─► state update ─► tick record (+ period summary)
//! ```
//!
//! The engine owns the state and the jitter source; records go to a
//! [`ReportSink`] and the engine never formats them.

use crate::dilution::{self, MintCandidate};
use crate::report::{self, TickEmission, TickPlan};
use crate::throttle::{FeeThrottle, ThrottleDecision, TickKind};
use cfm_clock::{ClockDrift, MintSchedule, PeriodBoundary, TimeDelta};
use cfm_core::{
    ConfigResult, MintOutcome, PeriodSummary, RunParameters, Seconds, SimConfig, SimState,
};
use cfm_ports::{JitterSource, ReportSink};

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Ticks processed, bootstrap included
    pub ticks: u64,
    /// Committed mints, boundary ticks included
    pub total_mints: u64,
    /// Throttled mints
    pub total_skips: u64,
    /// Period summaries emitted, bootstrap included
    pub summaries: u64,
    pub final_state: SimState,
    pub last_summary: Option<PeriodSummary>,
}

/// Drives one simulation run
pub struct Engine<J: JitterSource> {
    params: RunParameters,
    schedule: MintSchedule,
    drift: ClockDrift,
    throttle: FeeThrottle,
    jitter: J,
    state: SimState,
    total_mints: u64,
    total_skips: u64,
    summaries: u64,
    last_summary: Option<PeriodSummary>,
}

impl<J: JitterSource> Engine<J> {
    /// Create an engine at t=0 for validated parameters
    pub fn new(params: RunParameters, jitter: J) -> Self {
        Self {
            schedule: MintSchedule::from_params(&params),
            drift: ClockDrift::new(params.clock_drift),
            throttle: FeeThrottle::from_params(&params),
            state: SimState::genesis(&params),
            params,
            jitter,
            total_mints: 0,
            total_skips: 0,
            summaries: 0,
            last_summary: None,
        }
    }

    /// Validate `config` and create an engine for it
    pub fn from_config(config: &SimConfig, jitter: J) -> ConfigResult<Self> {
        Ok(Self::new(config.derive()?, jitter))
    }

    pub fn params(&self) -> &RunParameters {
        &self.params
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// The clock has passed the last simulated fee period
    pub fn is_finished(&self) -> bool {
        self.state.clock > self.params.horizon_secs()
    }

    /// Proposed clock for the next tick
    pub fn advance_clock(&mut self) -> Seconds {
        let r = self.jitter.sample();
        self.schedule.advance(self.state.clock, r)
    }

    /// Snap `proposed` to the period end if it crosses into a new period
    pub fn detect_period_boundary(&self, proposed: Seconds) -> PeriodBoundary {
        PeriodBoundary::detect(
            proposed,
            self.state.last_committed_clock,
            self.params.fee_period_secs,
        )
    }

    /// Drift-adjusted time since the last committed tick
    pub fn compute_time_delta(&self, clock: Seconds) -> TimeDelta {
        self.drift.measure(clock, self.state.last_committed_clock)
    }

    /// Shares to mint for `delta`; nothing on the bootstrap tick
    pub fn compute_mint(&self, kind: TickKind, delta: &TimeDelta) -> MintCandidate {
        match kind {
            TickKind::Bootstrap => MintCandidate::none(),
            TickKind::Boundary | TickKind::Regular => {
                dilution::compute_mint(self.state.fund_shares, delta.effective, &self.params)
            }
        }
    }

    /// Admission decision for a tick at `clock`
    pub fn apply_throttle(&self, kind: TickKind, clock: Seconds) -> ThrottleDecision {
        self.throttle
            .decide(kind, self.state.cumulative_tx_fees_usd, clock)
    }

    /// Commit the plan to the fund state and produce its records
    pub fn apply_mint_and_report(&mut self, plan: &TickPlan) -> TickEmission {
        let (next, emission) = report::apply_mint_and_report(&self.state, &self.params, plan);
        self.state = next;

        match emission.tick.outcome {
            MintOutcome::Minted { .. } => self.total_mints += 1,
            MintOutcome::Skipped => self.total_skips += 1,
            MintOutcome::Bootstrap => {}
        }
        if let Some(summary) = &emission.summary {
            self.summaries += 1;
            self.last_summary = Some(summary.clone());
        }

        emission
    }

    /// Run a single tick
    pub fn step(&mut self) -> TickEmission {
        let proposed = self.advance_clock();
        let boundary = self.detect_period_boundary(proposed);

        let kind = if self.state.is_bootstrap() {
            TickKind::Bootstrap
        } else if boundary.new_period {
            TickKind::Boundary
        } else {
            TickKind::Regular
        };

        let delta = self.compute_time_delta(boundary.clock);
        let candidate = self.compute_mint(kind, &delta);
        let decision = self.apply_throttle(kind, boundary.clock);

        let plan = TickPlan {
            kind,
            clock: boundary.clock,
            period: boundary.period,
            new_period: boundary.new_period || kind == TickKind::Bootstrap,
            delta,
            candidate,
            decision,
        };

        self.apply_mint_and_report(&plan)
    }

    /// Run until the clock passes the last fee period, feeding `sink`
    pub fn run<S: ReportSink>(&mut self, sink: &mut S) -> RunReport {
        log::info!(
            "Starting simulation: {} fee periods of {} secs, jitter from {}",
            self.params.sim_periods,
            self.params.fee_period_secs,
            self.jitter.name()
        );

        while !self.is_finished() {
            let emission = self.step();
            sink.on_tick(&emission.tick);
            if let Some(summary) = &emission.summary {
                sink.on_period(summary);
            }
        }
        sink.finish();

        let report = self.report();
        log::info!(
            "Simulation finished: {} ticks, {} mints, {} skips",
            report.ticks,
            report.total_mints,
            report.total_skips
        );
        report
    }

    /// Snapshot of the run so far
    pub fn report(&self) -> RunReport {
        RunReport {
            ticks: self.state.tick,
            total_mints: self.total_mints,
            total_skips: self.total_skips,
            summaries: self.summaries,
            final_state: self.state.clone(),
            last_summary: self.last_summary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::RecordingSink;
    use cfm_clock::{ConstantJitter, ScriptedJitter, UniformJitter};

    fn short_config() -> SimConfig {
        SimConfig {
            mgmt_fee_period_days: 1,
            mint_period_secs: 3600,
            mint_period_noise_secs: 600,
            clock_drift: 0.0,
            fee_tolerance_usd_per_day: 1000.0,
            sim_periods: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_tick_is_bootstrap() {
        let mut engine = Engine::from_config(&short_config(), ConstantJitter::zero()).unwrap();

        let emission = engine.step();

        assert_eq!(emission.tick.tick, 0);
        assert_eq!(emission.tick.outcome, MintOutcome::Bootstrap);
        assert!(emission.tick.new_period);
        assert!(emission.summary.unwrap().is_start());
        assert_eq!(engine.state().last_committed_clock, 3600.0);
    }

    #[test]
    fn test_tick_by_tick() {
        let mut engine = Engine::from_config(&short_config(), ConstantJitter::zero()).unwrap();

        for i in 0..5 {
            let emission = engine.step();
            assert_eq!(emission.tick.tick, i);
            assert_eq!(emission.tick.clock_secs, (i + 1) as f64 * 3600.0);
        }

        assert_eq!(engine.state().tick, 5);
    }

    #[test]
    fn test_jitter_moves_clock() {
        let mut engine =
            Engine::from_config(&short_config(), ScriptedJitter::new([1.0, -1.0])).unwrap();

        assert_eq!(engine.step().tick.clock_secs, 4200.0);
        assert_eq!(engine.step().tick.clock_secs, 7200.0);
    }

    #[test]
    fn test_run_to_completion() {
        let mut engine = Engine::from_config(&short_config(), ConstantJitter::zero()).unwrap();
        let mut sink = RecordingSink::new();

        let report = engine.run(&mut sink);

        // bootstrap + one summary per period
        assert_eq!(report.summaries, 4);
        assert_eq!(sink.summaries().len(), 4);
        assert_eq!(report.ticks as usize, sink.ticks().len());
        assert!(engine.is_finished());
        assert!(engine.state().clock > engine.params().horizon_secs());
        // 24 ticks per day, 3 days, plus the trailing tick past the horizon
        assert_eq!(report.ticks, 73);
        assert_eq!(report.total_skips, 0);
        assert_eq!(report.total_mints, 72);
    }

    #[test]
    fn test_summary_period_indices() {
        let mut engine =
            Engine::from_config(&short_config(), UniformJitter::with_seed(3)).unwrap();
        let mut sink = RecordingSink::new();
        engine.run(&mut sink);

        let periods: Vec<u64> = sink.summaries().iter().map(|s| s.period).collect();
        assert_eq!(periods, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_independent_engines() {
        let config = short_config();
        let mut a = Engine::from_config(&config, UniformJitter::with_seed(11)).unwrap();
        let mut b = Engine::from_config(&config, UniformJitter::with_seed(11)).unwrap();

        let report_a = a.run(&mut RecordingSink::new());
        let report_b = b.run(&mut RecordingSink::new());

        assert_eq!(report_a, report_b);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig {
            mint_period_noise_secs: 5000,
            ..short_config()
        };
        assert!(Engine::from_config(&config, ConstantJitter::zero()).is_err());
    }
}
