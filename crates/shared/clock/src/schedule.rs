use cfm_core::{RunParameters, Seconds};

/// Jittered mint schedule
///
/// Each tick waits `period + r * noise` seconds, `r` uniform in [-1, 1].
/// Waits are not floored: configuration keeps `noise < period`, which
/// keeps them positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MintSchedule {
    period: Seconds,
    noise: Seconds,
}

impl MintSchedule {
    pub fn new(period: Seconds, noise: Seconds) -> Self {
        Self { period, noise }
    }

    pub fn from_params(params: &RunParameters) -> Self {
        Self::new(params.mint_period_secs, params.mint_period_noise_secs)
    }

    /// Wait before the next mint for jitter sample `r`
    pub fn wait(&self, r: f64) -> Seconds {
        self.period + r * self.noise
    }

    /// Proposed clock of the next tick
    pub fn advance(&self, clock: Seconds, r: f64) -> Seconds {
        clock + self.wait(r)
    }
}
