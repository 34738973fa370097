//! Squiggly slider widgets for iced
//!
//! This crate provides the animated waveform ("squiggly") slider: a
//! drag-to-select control whose filled track is a traveling wave instead
//! of a straight line.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State structs**: Pure data (`SliderState`) owned by the host app
//!   and advanced from its `Tick` message
//! - **View functions**: Take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: Handle custom rendering and event-to-callback
//!   translation (`SliderCanvas`)
//!
//! All geometry and gesture logic lives in `squiggle-core`; this crate
//! only adapts it to iced events and `Frame` drawing.
//!
//! ## Usage
//!
//! ```ignore
//! // In your application's view function:
//! let slider = squiggly_slider(&self.intake, Message::IntakeChanged);
//!
//! // In subscription(): drive the animations at ~60fps.
//! animation_frames().map(Message::Tick)
//! ```

pub mod slider;
pub mod subscription;
pub mod theme;

// Re-export commonly used items
pub use slider::{squiggly_slider, SliderCanvas, SliderState};
pub use subscription::{animation_frames, FRAME_INTERVAL};
pub use theme::{SliderLayout, ACCENT, LABEL, TRACK_FILL, TRACK_REMAINDER};
