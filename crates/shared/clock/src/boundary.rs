use cfm_core::Seconds;

/// Result of checking a proposed clock against the fee-period grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodBoundary {
    /// Clock to use for the tick - snapped to the period end on a boundary
    pub clock: Seconds,
    /// Index of the fee period the (snapped) clock falls in
    pub period: u64,
    /// The tick crossed into a new fee period
    pub new_period: bool,
}

impl PeriodBoundary {
    /// Compare the period of `proposed` against the period of `last_committed`
    ///
    /// When the proposed clock lands in a later period the jitter overshoot
    /// is discarded and the clock snaps to exactly `period * period_len`.
    pub fn detect(proposed: Seconds, last_committed: Seconds, period_len: Seconds) -> Self {
        let this_period = (proposed / period_len).floor() as u64;
        let last_period = (last_committed / period_len).floor() as u64;

        if this_period > last_period {
            Self {
                clock: this_period as Seconds * period_len,
                period: this_period,
                new_period: true,
            }
        } else {
            Self {
                clock: proposed,
                period: this_period,
                new_period: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Seconds = 86_400.0;

    #[test]
    fn test_within_period() {
        let b = PeriodBoundary::detect(5000.0, 4700.0, DAY);
        assert!(!b.new_period);
        assert_eq!(b.clock, 5000.0);
        assert_eq!(b.period, 0);
    }

    #[test]
    fn test_crossing_snaps_to_period_end() {
        let b = PeriodBoundary::detect(DAY + 123.0, DAY - 200.0, DAY);
        assert!(b.new_period);
        assert_eq!(b.clock, DAY);
        assert_eq!(b.period, 1);
    }

    #[test]
    fn test_exact_landing_is_boundary() {
        let b = PeriodBoundary::detect(2.0 * DAY, 2.0 * DAY - 300.0, DAY);
        assert!(b.new_period);
        assert_eq!(b.clock, 2.0 * DAY);
        assert_eq!(b.period, 2);
    }

    #[test]
    fn test_tick_after_snap_is_not_boundary() {
        // last committed sits exactly on the period end
        let b = PeriodBoundary::detect(DAY + 300.0, DAY, DAY);
        assert!(!b.new_period);
        assert_eq!(b.period, 1);
    }

    #[test]
    fn test_multiple_periods_skipped_snaps_to_latest() {
        let b = PeriodBoundary::detect(3.5 * DAY, 0.5 * DAY, DAY);
        assert!(b.new_period);
        assert_eq!(b.clock, 3.0 * DAY);
        assert_eq!(b.period, 3);
    }
}
