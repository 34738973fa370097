//! Slider view function
//!
//! Creates the slider element using the iced 0.14 pattern: a plain
//! function taking a state reference and a callback closure, returning an
//! `Element`.

use iced::widget::Canvas;
use iced::{Element, Length};

use super::canvas::SliderCanvas;
use super::state::SliderState;

/// Create a squiggly slider element.
///
/// # Arguments
///
/// * `state` - The slider state (range, wave config, animation state)
/// * `on_change` - Callback closure called with the new value in the
///   slider's `[low, high]` range on every press and drag movement
///
/// # Example
///
/// ```ignore
/// let slider = squiggly_slider(&self.goal, Message::GoalChanged);
/// ```
pub fn squiggly_slider<'a, Message>(
    state: &'a SliderState,
    on_change: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(SliderCanvas { state, on_change })
        .width(Length::Fill)
        .height(Length::Fixed(state.layout.track_height))
        .into()
}
