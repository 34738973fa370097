//! Main iced application for Squiggle Tracker
//!
//! A small water-intake tracker demonstrating the squiggly slider: one
//! slider for today's intake, one for the daily goal, and a toggle for
//! the wave animation. The goal slider rescales the intake slider's range.

use std::time::Duration;

use iced::time::Instant;
use iced::widget::{column, container, row, text, toggler, Space};
use iced::{Center, Element, Fill, Subscription, Task, Theme};

use squiggle_core::{ProgressRange, WaveConfig};
use squiggle_widgets::{animation_frames, squiggly_slider, theme, SliderState, FRAME_INTERVAL};

use crate::config::{self, TrackerConfig};

/// Application state
pub struct TrackerApp {
    config: TrackerConfig,
    /// Today's intake slider, 0..goal ounces
    intake: SliderState,
    /// Daily goal slider, bounds from config
    goal: SliderState,
    /// Previous animation tick, for real frame deltas
    last_tick: Option<Instant>,
}

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame tick
    Tick(Instant),
    /// Intake slider moved (value in ounces)
    IntakeChanged(f32),
    /// Goal slider moved (value in ounces)
    GoalChanged(f32),
    /// Wave animation toggled on or off
    WaveAnimationToggled(bool),
}

impl TrackerApp {
    /// Create a new application instance from loaded configuration
    pub fn new(config: TrackerConfig) -> Self {
        let period = Duration::from_millis(config.display.wave_period_ms);
        let wave = WaveConfig {
            shape: config.display.wave_shape,
            ..WaveConfig::default()
        };

        let mut goal = SliderState::new(ProgressRange::new(config.goal.low, config.goal.high))
            .with_wave(wave)
            .with_period(period);
        goal.set_value(config.goal.default_goal);
        goal.set_animate_wave(config.display.animate_waves);

        let mut intake = SliderState::new(ProgressRange::new(0.0, goal.value()))
            .with_wave(wave)
            .with_period(period)
            .with_color(theme::ACCENT);
        intake.set_animate_wave(config.display.animate_waves);

        Self {
            config,
            intake,
            goal,
            last_tick: None,
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map(|previous| now.duration_since(previous))
                    .unwrap_or(FRAME_INTERVAL);
                self.last_tick = Some(now);
                self.intake.tick(dt);
                self.goal.tick(dt);
                Task::none()
            }

            Message::IntakeChanged(ounces) => {
                self.intake.set_value(ounces);
                Task::none()
            }

            Message::GoalChanged(ounces) => {
                self.goal.set_value(ounces);
                // Today's slider measures progress toward the new goal.
                self.intake
                    .set_range(ProgressRange::new(0.0, self.goal.value()));
                Task::none()
            }

            Message::WaveAnimationToggled(animate) => {
                self.intake.set_animate_wave(animate);
                self.goal.set_animate_wave(animate);
                self.config.display.animate_waves = animate;
                if let Err(e) = config::save_config(&self.config, &config::default_config_path()) {
                    log::warn!("Failed to save config: {}", e);
                }
                Task::none()
            }
        }
    }

    /// Subscribe to animation frames
    pub fn subscription(&self) -> Subscription<Message> {
        // Drive the wave phase, knob spring and amplitude fade at ~60fps
        animation_frames().map(Message::Tick)
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let title = text("Water Tracker").size(20).color(theme::LABEL);

        let intake_row = row![
            text("Today").size(16).color(theme::LABEL).width(56.0),
            squiggly_slider(&self.intake, Message::IntakeChanged),
            text(format!("{:.0} oz", self.intake.value()))
                .size(16)
                .color(theme::LABEL)
                .width(56.0),
        ]
        .spacing(8)
        .align_y(Center);

        let goal_row = row![
            text("Goal").size(16).color(theme::LABEL).width(56.0),
            squiggly_slider(&self.goal, Message::GoalChanged),
            text(format!("{:.0} oz", self.goal.value()))
                .size(16)
                .color(theme::LABEL)
                .width(56.0),
        ]
        .spacing(8)
        .align_y(Center);

        let animation_row = row![
            toggler(self.goal.animate_wave())
                .on_toggle(Message::WaveAnimationToggled)
                .size(18),
            Space::new().width(8),
            text("Animate waves").size(13),
        ]
        .align_y(Center);

        let content = column![title, intake_row, goal_row, animation_row]
            .spacing(16)
            .padding(24)
            .max_width(520);

        container(content).center_x(Fill).center_y(Fill).into()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TrackerApp {
        TrackerApp::new(TrackerConfig::default())
    }

    #[test]
    fn test_new_scales_intake_to_goal() {
        let app = app();
        assert!((app.goal.value() - 64.0).abs() < 1e-3);
        assert_eq!(app.intake.range.low, 0.0);
        assert!((app.intake.range.high - 64.0).abs() < 1e-3);
    }

    #[test]
    fn test_goal_change_rescales_intake() {
        let mut app = app();
        let _ = app.update(Message::IntakeChanged(32.0));
        let _ = app.update(Message::GoalChanged(128.0));
        assert!((app.goal.value() - 128.0).abs() < 1e-3);
        assert!((app.intake.range.high - 128.0).abs() < 1e-3);
        // Intake value carried over into the widened range.
        assert!((app.intake.value() - 32.0).abs() < 1e-2);
    }

    #[test]
    fn test_intake_clamps_to_goal() {
        let mut app = app();
        let _ = app.update(Message::IntakeChanged(500.0));
        assert!((app.intake.value() - app.goal.value()).abs() < 1e-3);
    }

    #[test]
    fn test_tick_advances_animation() {
        let mut app = app();
        let start = app.goal.phase();
        let t0 = Instant::now();
        let _ = app.update(Message::Tick(t0));
        let _ = app.update(Message::Tick(t0 + Duration::from_millis(150)));
        assert!(app.goal.phase() != start);
    }
}
