//! Phase clock
//!
//! A cyclic scalar in `[0, 1)` advanced by the host's frame tick. One full
//! unit of phase shifts the wave by one wavelength, so wrapping on overflow
//! is seamless. The clock's lifetime is bound to the widget: created on
//! mount, reset when the widget goes away.

use std::time::Duration;

/// Default time for one full phase cycle.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseClock {
    phase: f32,
    period: Duration,
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

impl PhaseClock {
    /// Create a clock with the given cycle period. A zero period falls
    /// back to [`DEFAULT_PERIOD`].
    pub fn new(period: Duration) -> Self {
        let period = if period.is_zero() {
            DEFAULT_PERIOD
        } else {
            period
        };
        Self { phase: 0.0, period }
    }

    /// Current phase sample in `[0, 1)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Advance by elapsed wall-clock time, wrapping on overflow.
    pub fn advance(&mut self, dt: Duration) {
        let cycles = dt.as_secs_f32() / self.period.as_secs_f32();
        self.phase = (self.phase + cycles).fract();
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
