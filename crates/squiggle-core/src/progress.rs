//! Progress range math
//!
//! The slider exposes values in a host-supplied `[low, high]` range and
//! works internally on a normalized `[0, 1]` progress. Out-of-range host
//! input silently clamps; the host is never signalled.

use serde::{Deserialize, Serialize};

/// Clamp a normalized progress value to `[0, 1]`.
#[inline]
pub fn clamp_progress(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0)
}

/// The denormalized value bounds of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRange {
    pub low: f32,
    pub high: f32,
}

impl Default for ProgressRange {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }
}

impl ProgressRange {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Map a host value into `[0, 1]`, clamping out-of-range input.
    ///
    /// A degenerate range (`high <= low`) normalizes everything to 0.
    pub fn normalize(&self, value: f32) -> f32 {
        if self.high <= self.low {
            return 0.0;
        }
        clamp_progress((value - self.low) / (self.high - self.low))
    }

    /// Map a normalized progress back into `[low, high]`.
    pub fn denormalize(&self, progress: f32) -> f32 {
        self.low + clamp_progress(progress) * (self.high - self.low)
    }

    pub fn span(&self) -> f32 {
        self.high - self.low
    }
}
