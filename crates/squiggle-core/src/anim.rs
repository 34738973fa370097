//! Per-frame animation smoothing
//!
//! Cosmetic easing for rendered positions. The "true" slider value updates
//! immediately; only what is drawn lags behind through these curves.
//!
//! [`Spring`] is critically damped by construction (damping = 2√stiffness)
//! and stepped with the closed-form solution, so it converges without
//! overshoot at any tick rate. [`Tween`] is a fixed-duration linear ease
//! used for the wave-height enable/disable fade.

use std::time::Duration;

/// High spring stiffness: settles in roughly 60 ms.
pub const STIFFNESS_HIGH: f32 = 10_000.0;

const SETTLE_EPSILON: f32 = 1e-4;

/// Critically damped spring tracking a target value.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    current: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
}

impl Spring {
    pub fn new(initial: f32) -> Self {
        Self::with_stiffness(initial, STIFFNESS_HIGH)
    }

    pub fn with_stiffness(initial: f32, stiffness: f32) -> Self {
        Self {
            current: initial,
            velocity: 0.0,
            target: initial,
            stiffness: stiffness.max(f32::EPSILON),
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget; the rendered value eases over on subsequent ticks.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to a value without animating.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < SETTLE_EPSILON
            && self.velocity.abs() < SETTLE_EPSILON * 10.0
    }

    /// Advance one frame using the exact critically damped solution:
    /// `x(t) = target + (dx + (v + ω·dx)·t)·e^(−ω·t)` with ω = √stiffness.
    pub fn tick(&mut self, dt: Duration) {
        if self.is_settled() {
            self.current = self.target;
            self.velocity = 0.0;
            return;
        }
        let omega = self.stiffness.sqrt();
        let t = dt.as_secs_f32();
        let dx = self.current - self.target;
        let b = self.velocity + omega * dx;
        let decay = (-omega * t).exp();
        self.current = self.target + (dx + b * t) * decay;
        self.velocity = (b - omega * (dx + b * t)) * decay;
    }
}

/// Fixed-duration linear interpolation toward a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start: f32,
    current: f32,
    target: f32,
    elapsed: Duration,
    duration: Duration,
}

impl Tween {
    pub fn new(initial: f32, duration: Duration) -> Self {
        Self {
            start: initial,
            current: initial,
            target: initial,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Start easing from the current value toward `target`. Retargeting
    /// to the value already in flight keeps the running ease.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }
        self.start = self.current;
        self.target = target;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.is_settled() {
            return;
        }
        self.elapsed += dt;
        if self.duration.is_zero() || self.elapsed >= self.duration {
            self.current = self.target;
            return;
        }
        let fraction = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.current = self.start + (self.target - self.start) * fraction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.tick(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_spring_converges_to_target() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        run(&mut spring, 30);
        assert!((spring.current() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_spring_never_overshoots() {
        // Critically damped from rest: monotonic approach, no bounce.
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        let mut previous = spring.current();
        for _ in 0..120 {
            spring.tick(Duration::from_millis(16));
            assert!(spring.current() <= 1.0 + 1e-5);
            assert!(spring.current() >= previous - 1e-5);
            previous = spring.current();
        }
    }

    #[test]
    fn test_spring_snap() {
        let mut spring = Spring::new(0.2);
        spring.snap_to(0.9);
        assert_eq!(spring.current(), 0.9);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_true_value_independent() {
        // Retargeting is immediate even though the rendered value lags.
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        spring.tick(Duration::from_millis(16));
        assert_eq!(spring.target(), 1.0);
        assert!(spring.current() < 1.0);
    }

    #[test]
    fn test_tween_reaches_target_exactly() {
        let mut tween = Tween::new(0.0, Duration::from_millis(500));
        tween.set_target(1.0);
        for _ in 0..40 {
            tween.tick(Duration::from_millis(16));
        }
        assert_eq!(tween.current(), 1.0);
        assert!(tween.is_settled());
    }

    #[test]
    fn test_tween_midpoint() {
        let mut tween = Tween::new(0.0, Duration::from_millis(500));
        tween.set_target(1.0);
        tween.tick(Duration::from_millis(250));
        assert!((tween.current() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_tween_retarget_from_current() {
        let mut tween = Tween::new(0.0, Duration::from_millis(500));
        tween.set_target(1.0);
        tween.tick(Duration::from_millis(250));
        tween.set_target(0.0);
        tween.tick(Duration::from_millis(250));
        // Eased halfway back from ~0.5.
        assert!((tween.current() - 0.25).abs() < 1e-2);
        tween.tick(Duration::from_millis(300));
        assert_eq!(tween.current(), 0.0);
    }

    #[test]
    fn test_zero_duration_tween_jumps() {
        let mut tween = Tween::new(0.0, Duration::ZERO);
        tween.set_target(1.0);
        tween.tick(Duration::from_millis(1));
        assert_eq!(tween.current(), 1.0);
    }
}
