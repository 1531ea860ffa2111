//! State update and report assembly for one tick

use crate::dilution::MintCandidate;
use crate::throttle::{ThrottleDecision, TickKind};
use cfm_clock::TimeDelta;
use cfm_core::{MintOutcome, PeriodSummary, RunParameters, Seconds, SimState, TickRecord};

/// Everything decided about a tick before the fund state is touched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlan {
    pub kind: TickKind,
    /// Clock of the tick, snapped on boundaries
    pub clock: Seconds,
    /// Fee period the clock falls in
    pub period: u64,
    pub new_period: bool,
    pub delta: TimeDelta,
    pub candidate: MintCandidate,
    pub decision: ThrottleDecision,
}

/// Records emitted by one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickEmission {
    pub tick: TickRecord,
    /// Present when the tick closes a fee period
    pub summary: Option<PeriodSummary>,
}

/// Apply the planned tick to `state`, returning the next state and its records
pub fn apply_mint_and_report(
    state: &SimState,
    params: &RunParameters,
    plan: &TickPlan,
) -> (SimState, TickEmission) {
    let mut next = state.clone();

    let outcome = match plan.decision {
        ThrottleDecision::Bootstrap => MintOutcome::Bootstrap,
        ThrottleDecision::Commit { .. } => {
            next.cumulative_tx_fees_usd += params.tx_fee_usd;
            next.mints_since_last_period += 1;
            MintOutcome::Minted {
                shares: plan.candidate.shares,
            }
        }
        ThrottleDecision::Skip { .. } => {
            next.skips_since_last_period += 1;
            MintOutcome::Skipped
        }
    };

    // customer share dilution
    let mint = outcome.shares();
    next.clock = plan.clock;
    next.fund_shares += mint;
    let fund_price = next.fund_price(params);
    let customer_value = next.customer_value(params);
    next.cumulative_minted_value_usd += mint * fund_price;

    // skipped time rolls forward into the next committed tick
    if !outcome.is_skipped() || plan.new_period {
        next.last_committed_clock = plan.clock;
    }
    next.tick += 1;

    let tick = TickRecord {
        tick: state.tick,
        clock_secs: plan.clock,
        delta_secs: plan.delta.effective,
        outcome,
        new_period: plan.new_period,
        fund_shares: next.fund_shares,
        fund_price,
        customer_value,
        cumulative_tx_fees_usd: next.cumulative_tx_fees_usd,
        fee_rate_usd_per_day: plan.decision.fee_rate_usd_per_day(),
    };

    let summary = plan.new_period.then(|| {
        let ideal_customer_value = params.ideal_customer_value(plan.period);
        let display_clock_secs = if plan.kind == TickKind::Bootstrap {
            state.last_committed_clock
        } else {
            plan.clock
        };

        let summary = PeriodSummary {
            display_clock_secs,
            period: plan.period,
            mints: next.mints_since_last_period,
            skips: next.skips_since_last_period,
            fund_shares: next.fund_shares,
            fund_price,
            customer_value,
            ideal_customer_value,
            error_usd: (customer_value - ideal_customer_value).abs(),
            earnings_usd: next.cumulative_minted_value_usd,
            cumulative_tx_fees_usd: next.cumulative_tx_fees_usd,
        };

        next.mints_since_last_period = 0;
        next.skips_since_last_period = 0;
        summary
    });

    (next, TickEmission { tick, summary })
}
