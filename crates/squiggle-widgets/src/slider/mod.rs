//! Squiggly slider widget
//!
//! A horizontal drag-to-select control whose filled span is rendered as a
//! traveling wave, with a straight unfilled remainder and a circular knob
//! at the boundary.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **`SliderState`**: pure data owned by the host application. The host
//!   forwards its frame tick so the wave phase, knob spring and amplitude
//!   fade advance; drag updates arrive through the host's own message.
//! - **`squiggly_slider`**: view function taking `&SliderState` and an
//!   `on_change` callback, returning an `Element`.
//! - **`SliderCanvas`**: canvas `Program` translating mouse/touch events
//!   into callback messages and drawing the track each frame.
//!
//! ## Usage
//!
//! ```ignore
//! // In your application's view function:
//! squiggly_slider(&self.goal, Message::GoalChanged)
//! ```

mod canvas;
mod state;
mod view;

pub use canvas::{DragInteraction, SliderCanvas};
pub use state::{SliderState, WAVE_FADE_DURATION, WAVE_PERIOD};
pub use view::squiggly_slider;
