//! Shared theme constants for squiggle UI components
//!
//! Color and layout constants used by the slider canvas and the demo app.

use iced::Color;

/// Filled-track wave color (Purple 80, #D0BCFF).
pub const TRACK_FILL: Color = Color::from_rgb(0.816, 0.737, 1.0);

/// Unfilled remainder track color.
pub const TRACK_REMAINDER: Color = Color::from_rgba(0.83, 0.83, 0.83, 0.6);

/// Label text color for slider captions (Purple 80).
pub const LABEL: Color = Color::from_rgb(0.816, 0.737, 1.0);

/// Alternate accent for a second slider (Pink 80, #EFB8C8).
pub const ACCENT: Color = Color::from_rgb(0.937, 0.722, 0.784);

/// Slider canvas layout constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// Total widget height in pixels.
    pub track_height: f32,
    /// Horizontal inset that the knob and the track ends respect.
    pub edge_padding: f32,
    /// Radius of the circular knob.
    pub knob_radius: f32,
    /// Stroke width of the unfilled remainder line.
    pub remainder_width: f32,
}

impl Default for SliderLayout {
    fn default() -> Self {
        Self {
            track_height: 35.0,
            edge_padding: 16.0,
            knob_radius: 16.0,
            remainder_width: 5.0,
        }
    }
}
