//! Slider state owned by the host application

use std::time::Duration;

use iced::Color;
use squiggle_core::{clamp_progress, PhaseClock, ProgressRange, Spring, Tween, WaveConfig};

use crate::theme::{self, SliderLayout};

/// Time for one full wavelength of travel.
pub const WAVE_PERIOD: Duration = Duration::from_millis(1500);

/// Duration of the amplitude fade when wave animation is toggled.
pub const WAVE_FADE_DURATION: Duration = Duration::from_millis(500);

/// Per-slider state: the true value plus the cosmetic animation state.
///
/// The true progress updates immediately on every host set or drag event;
/// the spring only smooths what is drawn.
#[derive(Debug, Clone)]
pub struct SliderState {
    pub range: ProgressRange,
    pub wave: WaveConfig,
    pub layout: SliderLayout,
    /// Fill and knob color.
    pub color: Color,
    progress: f32,
    animate_wave: bool,
    spring: Spring,
    wave_height: Tween,
    phase: PhaseClock,
}

impl SliderState {
    pub fn new(range: ProgressRange) -> Self {
        Self {
            range,
            wave: WaveConfig::default(),
            layout: SliderLayout::default(),
            color: theme::TRACK_FILL,
            progress: 0.0,
            animate_wave: true,
            spring: Spring::new(0.0),
            wave_height: Tween::new(1.0, WAVE_FADE_DURATION),
            phase: PhaseClock::new(WAVE_PERIOD),
        }
    }

    pub fn with_wave(mut self, wave: WaveConfig) -> Self {
        self.wave = wave;
        self
    }

    pub fn with_layout(mut self, layout: SliderLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.phase = PhaseClock::new(period);
        self
    }

    /// Current value in the host's `[low, high]` range.
    pub fn value(&self) -> f32 {
        self.range.denormalize(self.progress)
    }

    /// Current normalized progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Host set in denormalized units; out-of-range input clamps silently.
    pub fn set_value(&mut self, value: f32) {
        if value < self.range.low.min(self.range.high) || value > self.range.high.max(self.range.low) {
            log::debug!(
                "slider value {} outside [{}, {}], clamping",
                value,
                self.range.low,
                self.range.high
            );
        }
        self.set_progress(self.range.normalize(value));
    }

    /// Host set in normalized progress. The true value updates now; the
    /// rendered position eases over on subsequent ticks.
    pub fn set_progress(&mut self, progress: f32) {
        let progress = clamp_progress(progress);
        self.progress = progress;
        self.spring.set_target(progress);
    }

    /// Replace the value bounds, preserving the current denormalized value
    /// where the new range allows.
    pub fn set_range(&mut self, range: ProgressRange) {
        let value = self.value();
        self.range = range;
        self.set_value(value);
    }

    pub fn animate_wave(&self) -> bool {
        self.animate_wave
    }

    /// Toggle the wave-height animation; the amplitude eases to or from
    /// zero rather than snapping.
    pub fn set_animate_wave(&mut self, animate: bool) {
        self.animate_wave = animate;
        self.wave_height.set_target(if animate { 1.0 } else { 0.0 });
    }

    /// Progress the canvas should draw this frame (spring-smoothed).
    pub fn rendered_progress(&self) -> f32 {
        clamp_progress(self.spring.current())
    }

    /// Amplitude scale in `[0, 1]` from the enable/disable fade.
    pub fn wave_height_factor(&self) -> f32 {
        self.wave_height.current()
    }

    /// Current phase clock sample in `[0, 1)`.
    pub fn phase(&self) -> f32 {
        self.phase.phase()
    }

    /// Advance all animation state by one frame. Returns whether another
    /// redraw is needed (false only once the track is a settled flat line).
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.phase.advance(dt);
        self.spring.tick(dt);
        self.wave_height.tick(dt);

        let wave_visible = self.wave_height_factor() * self.wave.amplitude.max(0.0) > 0.0;
        wave_visible || !self.spring.is_settled() || !self.wave_height.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_updates_progress_immediately() {
        let mut state = SliderState::new(ProgressRange::new(0.0, 100.0));
        state.set_value(50.0);
        assert!((state.progress() - 0.5).abs() < 1e-6);
        assert!((state.value() - 50.0).abs() < 1e-4);
        // Rendered position lags until ticked.
        assert!(state.rendered_progress() < 0.5);
    }

    #[test]
    fn test_rendered_progress_catches_up() {
        let mut state = SliderState::new(ProgressRange::default());
        state.set_progress(1.0);
        for _ in 0..60 {
            state.tick(Duration::from_millis(16));
        }
        assert!((state.rendered_progress() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_out_of_range_set_clamps() {
        let mut state = SliderState::new(ProgressRange::new(0.0, 64.0));
        state.set_value(100.0);
        assert_eq!(state.progress(), 1.0);
        state.set_value(-5.0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_set_range_preserves_value() {
        let mut state = SliderState::new(ProgressRange::new(0.0, 100.0));
        state.set_value(40.0);
        state.set_range(ProgressRange::new(0.0, 200.0));
        assert!((state.value() - 40.0).abs() < 1e-3);
        assert!((state.progress() - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_wave_fade_on_toggle() {
        let mut state = SliderState::new(ProgressRange::default());
        assert!(state.animate_wave());
        state.set_animate_wave(false);
        // Fade is gradual, not a snap.
        state.tick(Duration::from_millis(100));
        let mid = state.wave_height_factor();
        assert!(mid > 0.0 && mid < 1.0);
        for _ in 0..40 {
            state.tick(Duration::from_millis(16));
        }
        assert_eq!(state.wave_height_factor(), 0.0);
    }

    #[test]
    fn test_tick_settles_once_flat() {
        let mut state = SliderState::new(ProgressRange::default());
        state.set_animate_wave(false);
        let mut needs_redraw = true;
        for _ in 0..120 {
            needs_redraw = state.tick(Duration::from_millis(16));
        }
        assert!(!needs_redraw);
    }
}
