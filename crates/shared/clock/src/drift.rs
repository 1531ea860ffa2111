use cfm_core::Seconds;

/// Elapsed time since the last committed tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDelta {
    /// True elapsed simulated time
    pub raw: Seconds,
    /// Elapsed time as measured by the drifting operator clock
    pub effective: Seconds,
}

/// Operator clock error
///
/// In a real deployment the minting service measures elapsed time with its
/// own clock, which runs slightly fast or slow. A drift of `0.001` makes
/// every measured interval 0.1% longer than the true one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockDrift(f64);

impl ClockDrift {
    pub fn new(drift: f64) -> Self {
        Self(drift)
    }

    /// Perfectly synchronised clock
    pub fn none() -> Self {
        Self(0.0)
    }

    /// Measure the interval from `last_committed` to `clock`
    pub fn measure(&self, clock: Seconds, last_committed: Seconds) -> TimeDelta {
        let raw = clock - last_committed;
        TimeDelta {
            raw,
            effective: raw * (1.0 + self.0),
        }
    }
}
