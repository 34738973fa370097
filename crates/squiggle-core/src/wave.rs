//! Wave path generation
//!
//! Tessellates the slider track into a periodic wave covering the rendered
//! width. Two strategies are supported:
//!
//! - **Sine**: sample the sine function at fixed x-steps and connect the
//!   samples with line segments. Default; the step is fine enough that no
//!   curve smoothing is needed.
//! - **Bezier**: a repeating 4-point motif where each period contributes two
//!   quadratic curves (apex above, then below the centerline), giving a
//!   smooth S-wave from far fewer segments.
//!
//! Generation is a pure function of `(size, config, phase)`: identical
//! inputs yield identical segment sequences, and advancing `phase` by any
//! whole number of cycles reproduces the same path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Size, WavePath, WaveSegment};

/// Lower bound the generator clamps nonpositive wavelengths to.
///
/// The generator never fails: out-of-contract values are clamped here and
/// to a divisor of 1. Callers that prefer fail-fast semantics can run
/// [`WaveConfig::validate`] first.
pub const MIN_WAVELENGTH: f32 = 1e-3;

const TAU: f32 = std::f32::consts::TAU;

/// Which tessellation strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveShape {
    /// Line segments sampled from a sine function (default).
    #[default]
    Sine,
    /// Quadratic bezier motif, two curves per period.
    Bezier,
}

/// Immutable per-render wave parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub shape: WaveShape,
    /// Horizontal length of one full period, in pixels. Must be positive;
    /// nonpositive values are clamped to [`MIN_WAVELENGTH`].
    pub wavelength: f32,
    /// Peak vertical displacement from the centerline, in pixels.
    /// Zero gives a straight line; negative values are treated as zero.
    pub amplitude: f32,
    /// Samples per wavelength for the sine strategy. Zero is clamped to 1.
    pub segment_divisor: u32,
    /// Stroke width the track is painted with.
    pub stroke_width: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            shape: WaveShape::Sine,
            wavelength: 48.0,
            amplitude: 4.0,
            segment_divisor: 10,
            stroke_width: 15.0,
        }
    }
}

/// Contract violations in a [`WaveConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum WaveConfigError {
    #[error("wavelength must be positive (got {0})")]
    NonPositiveWavelength(f32),
    #[error("segment divisor must be at least 1")]
    ZeroSegmentDivisor,
    #[error("stroke width must be positive (got {0})")]
    NonPositiveStrokeWidth(f32),
}

impl WaveConfig {
    /// Fail-fast check for caller contract violations.
    ///
    /// The generator itself clamps instead of failing; this is for hosts
    /// that want to surface a configuration bug early.
    pub fn validate(&self) -> Result<(), WaveConfigError> {
        if !(self.wavelength > 0.0) {
            return Err(WaveConfigError::NonPositiveWavelength(self.wavelength));
        }
        if self.segment_divisor == 0 {
            return Err(WaveConfigError::ZeroSegmentDivisor);
        }
        if !(self.stroke_width > 0.0) {
            return Err(WaveConfigError::NonPositiveStrokeWidth(self.stroke_width));
        }
        Ok(())
    }

    /// Parameters after the clamping policy is applied.
    #[inline]
    fn sanitized(&self) -> (f32, f32, u32) {
        (
            self.wavelength.max(MIN_WAVELENGTH),
            self.amplitude.max(0.0),
            self.segment_divisor.max(1),
        )
    }
}

/// Tessellate the wave covering `[0, size.width]` for the given phase sample.
///
/// `phase` is in cycles: one full unit corresponds to one wavelength of
/// travel. Any real value is accepted; only its fractional part matters.
/// The returned path starts at or before x = 0 and ends at or beyond
/// `size.width`, so a phase offset never exposes a gap at the edges.
pub fn wave_path(size: Size, config: &WaveConfig, phase: f32) -> WavePath {
    match config.shape {
        WaveShape::Sine => sine_path(size, config, phase),
        WaveShape::Bezier => bezier_path(size, config, phase),
    }
}

/// Sine strategy: `y = A * sin(2π/λ * x − 2π*phase) + center_y` sampled
/// every `λ / segment_divisor` pixels.
fn sine_path(size: Size, config: &WaveConfig, phase: f32) -> WavePath {
    let (wavelength, amplitude, divisor) = config.sanitized();
    let center_y = size.height / 2.0;
    let step = wavelength / divisor as f32;
    let count = (size.width.max(0.0) / step).ceil() as usize;
    let b = TAU / wavelength;
    let shift = phase * TAU;

    let mut segments = Vec::with_capacity(count + 1);
    for i in 0..=count {
        let x = i as f32 * step;
        let y = amplitude * (b * x - shift).sin() + center_y;
        let point = Point::new(x, y);
        if i == 0 {
            segments.push(WaveSegment::MoveTo(point));
        } else {
            segments.push(WaveSegment::LineTo(point));
        }
    }

    WavePath::new(segments)
}

/// Bezier strategy: repeating motif of two quadratic curves per period,
/// anchors on the centerline every half period, apexes at `center_y ∓ A`.
/// The motif origin is shifted by `phase * λ` and starts one period left
/// of the widget so the phase offset never uncovers the left edge.
fn bezier_path(size: Size, config: &WaveConfig, phase: f32) -> WavePath {
    let (wavelength, amplitude, _) = config.sanitized();
    let center_y = size.height / 2.0;
    let quarter = wavelength / 4.0;
    let half = wavelength / 2.0;
    let count = (size.width.max(0.0) / wavelength).ceil() as usize + 1;

    let mut x = phase.rem_euclid(1.0) * wavelength - wavelength;
    let mut segments = Vec::with_capacity(count * 2 + 1);
    segments.push(WaveSegment::MoveTo(Point::new(x, center_y)));
    for _ in 0..count {
        segments.push(WaveSegment::QuadTo {
            control: Point::new(x + quarter, center_y - amplitude),
            to: Point::new(x + half, center_y),
        });
        segments.push(WaveSegment::QuadTo {
            control: Point::new(x + half + quarter, center_y + amplitude),
            to: Point::new(x + wavelength, center_y),
        });
        x += wavelength;
    }

    WavePath::new(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(300.0, 30.0);

    fn assert_paths_close(a: &WavePath, b: &WavePath, eps: f32) {
        assert_eq!(a.segments.len(), b.segments.len());
        for (pa, pb) in a.points().zip(b.points()) {
            assert!((pa.x - pb.x).abs() < eps, "x: {} vs {}", pa.x, pb.x);
            assert!((pa.y - pb.y).abs() < eps, "y: {} vs {}", pa.y, pb.y);
        }
    }

    #[test]
    fn test_sine_is_deterministic() {
        let config = WaveConfig::default();
        let a = wave_path(SIZE, &config, 0.37);
        let b = wave_path(SIZE, &config, 0.37);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sine_covers_width() {
        let config = WaveConfig::default();
        let path = wave_path(SIZE, &config, 0.0);
        assert!(path.start().unwrap().x <= 0.0);
        assert!(path.end().unwrap().x >= SIZE.width);
    }

    #[test]
    fn test_bezier_covers_width_for_any_phase() {
        let config = WaveConfig {
            shape: WaveShape::Bezier,
            ..WaveConfig::default()
        };
        for phase in [0.0, 0.25, 0.5, 0.99] {
            let path = wave_path(SIZE, &config, phase);
            assert!(path.start().unwrap().x <= 0.0, "phase {}", phase);
            assert!(path.end().unwrap().x >= SIZE.width, "phase {}", phase);
        }
    }

    #[test]
    fn test_phase_full_cycle_congruence() {
        // wavelength=32, amplitude=8: phase=0 vs one full cycle later
        // must match point for point.
        let config = WaveConfig {
            wavelength: 32.0,
            amplitude: 8.0,
            ..WaveConfig::default()
        };
        let at_zero = wave_path(SIZE, &config, 0.0);
        let after_cycle = wave_path(SIZE, &config, 1.0);
        assert_paths_close(&at_zero, &after_cycle, 1e-4);

        let bezier = WaveConfig {
            shape: WaveShape::Bezier,
            ..config
        };
        let at_zero = wave_path(SIZE, &bezier, 0.0);
        let after_cycle = wave_path(SIZE, &bezier, 1.0);
        assert_paths_close(&at_zero, &after_cycle, 1e-4);
    }

    #[test]
    fn test_zero_amplitude_is_straight_line() {
        let config = WaveConfig {
            amplitude: 0.0,
            ..WaveConfig::default()
        };
        let path = wave_path(SIZE, &config, 0.42);
        for p in path.points() {
            assert!((p.y - SIZE.height / 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_negative_amplitude_clamps_to_zero() {
        let config = WaveConfig {
            amplitude: -3.0,
            ..WaveConfig::default()
        };
        let path = wave_path(SIZE, &config, 0.0);
        for p in path.points() {
            assert!((p.y - SIZE.height / 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_nonpositive_wavelength_clamps_not_panics() {
        let config = WaveConfig {
            wavelength: 0.0,
            ..WaveConfig::default()
        };
        // Tiny size keeps the clamped-epsilon tessellation small.
        let path = wave_path(Size::new(0.01, 30.0), &config, 0.0);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_sine_segment_count() {
        // width 300, wavelength 48, divisor 10 -> step 4.8 -> ceil(62.5) = 63
        // line segments plus the initial move.
        let config = WaveConfig::default();
        let path = wave_path(SIZE, &config, 0.0);
        assert_eq!(path.segments.len(), 64);
    }

    #[test]
    fn test_bezier_motif_count() {
        // ceil(300 / 48) + 1 = 8 motifs, two curves each, plus the move.
        let config = WaveConfig {
            shape: WaveShape::Bezier,
            ..WaveConfig::default()
        };
        let path = wave_path(SIZE, &config, 0.0);
        assert_eq!(path.segments.len(), 8 * 2 + 1);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let bad = WaveConfig {
            wavelength: -1.0,
            ..WaveConfig::default()
        };
        assert_eq!(
            bad.validate(),
            Err(WaveConfigError::NonPositiveWavelength(-1.0))
        );

        let bad = WaveConfig {
            segment_divisor: 0,
            ..WaveConfig::default()
        };
        assert_eq!(bad.validate(), Err(WaveConfigError::ZeroSegmentDivisor));

        let bad = WaveConfig {
            stroke_width: 0.0,
            ..WaveConfig::default()
        };
        assert_eq!(
            bad.validate(),
            Err(WaveConfigError::NonPositiveStrokeWidth(0.0))
        );

        assert!(WaveConfig::default().validate().is_ok());
    }
}
