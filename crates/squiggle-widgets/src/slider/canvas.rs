//! Canvas Program implementation for the squiggly slider
//!
//! Translates mouse and touch events into progress callbacks through the
//! core drag tracker, and draws the three track layers each frame: the
//! wave-filled span, the straight remainder, and the knob.

use iced::widget::canvas::{self, Event, Frame, Geometry, LineCap, Path, Program, Stroke};
use iced::{mouse, touch, Point, Rectangle, Size, Theme};

use squiggle_core::geometry::{WavePath, WaveSegment};
use squiggle_core::{
    fill_boundary, knob_center_x, wave_path, DragTracker, PointerId, Size as WaveSize,
    MOUSE_POINTER,
};

use super::state::SliderState;
use crate::theme;

/// Canvas state tracking the in-flight drag gesture.
#[derive(Debug, Clone, Default)]
pub struct DragInteraction {
    tracker: DragTracker,
}

/// Canvas program for the squiggly slider.
///
/// Takes a callback closure `on_change` that's called with the new value
/// in the slider's `[low, high]` range on every press and drag movement.
pub struct SliderCanvas<'a, Message, F>
where
    F: Fn(f32) -> Message,
{
    pub state: &'a SliderState,
    pub on_change: F,
}

impl<'a, Message, F> SliderCanvas<'a, Message, F>
where
    F: Fn(f32) -> Message,
{
    fn emit(&self, progress: f32) -> canvas::Action<Message> {
        canvas::Action::publish((self.on_change)(self.state.range.denormalize(progress)))
    }
}

impl<'a, Message, F> Program<Message> for SliderCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(f32) -> Message,
{
    type State = DragInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let width = bounds.width;

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    return interaction
                        .tracker
                        .press(MOUSE_POINTER, position.x, width)
                        .map(|p| self.emit(p));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Keep following the cursor outside the bounds while the
                // button is down; the core clamps to [0, 1].
                if interaction.tracker.is_dragging() {
                    if let Some(position) = cursor.position() {
                        return interaction
                            .tracker
                            .moved(MOUSE_POINTER, position.x - bounds.x, width)
                            .map(|p| self.emit(p));
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                interaction.tracker.release(MOUSE_POINTER);
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if bounds.contains(*position) {
                    return interaction
                        .tracker
                        .press(PointerId(id.0), position.x - bounds.x, width)
                        .map(|p| self.emit(p));
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                return interaction
                    .tracker
                    .moved(PointerId(id.0), position.x - bounds.x, width)
                    .map(|p| self.emit(p));
            }
            Event::Touch(touch::Event::FingerLifted { id, .. })
            | Event::Touch(touch::Event::FingerLost { id, .. }) => {
                interaction.tracker.release(PointerId(id.0));
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.tracker.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let layout = self.state.layout;
        let width = bounds.width;
        let center_y = bounds.height / 2.0;
        let padding = layout.edge_padding;

        let rendered = self.state.rendered_progress();
        let boundary = fill_boundary(rendered, width);

        // One tessellation per frame; the filled span clips this path
        // rather than regenerating it, so the phase is continuous across
        // the fill boundary.
        let mut wave = self.state.wave;
        wave.amplitude *= self.state.wave_height_factor();
        let tessellated = wave_path(
            WaveSize::new(width, bounds.height),
            &wave,
            self.state.phase(),
        );
        let wave_stroke = canvas_path(&tessellated);

        let fill_right = (boundary - padding / 2.0).max(0.0);
        if fill_right > 0.0 {
            let clip = Rectangle::new(Point::ORIGIN, Size::new(fill_right, bounds.height));
            frame.with_clip(clip, |frame| {
                frame.stroke(
                    &wave_stroke,
                    Stroke {
                        line_cap: LineCap::Round,
                        ..Stroke::default()
                            .with_color(self.state.color)
                            .with_width(wave.stroke_width)
                    },
                );
            });
        }

        // Unfilled remainder: straight centerline from the boundary to the
        // padded right edge.
        let remainder_end = width - padding;
        if boundary < remainder_end {
            frame.stroke(
                &Path::line(
                    Point::new(boundary, center_y),
                    Point::new(remainder_end, center_y),
                ),
                Stroke::default()
                    .with_color(theme::TRACK_REMAINDER)
                    .with_width(layout.remainder_width),
            );
        }

        let knob_x = knob_center_x(rendered, width, padding);
        frame.fill(
            &Path::circle(Point::new(knob_x, center_y), layout.knob_radius),
            self.state.color,
        );

        vec![frame.into_geometry()]
    }
}

/// Convert a tessellated core path into a canvas path.
fn canvas_path(path: &WavePath) -> Path {
    Path::new(|builder| {
        for segment in &path.segments {
            match *segment {
                WaveSegment::MoveTo(p) => builder.move_to(Point::new(p.x, p.y)),
                WaveSegment::LineTo(p) => builder.line_to(Point::new(p.x, p.y)),
                WaveSegment::QuadTo { control, to } => builder.quadratic_curve_to(
                    Point::new(control.x, control.y),
                    Point::new(to.x, to.y),
                ),
            }
        }
    })
}
