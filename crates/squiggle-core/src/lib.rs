//! Squiggle Core - waveform slider logic shared by the widget and demo crates
//!
//! Everything in this crate is plain data and pure functions: wave path
//! tessellation, progress range math, the drag gesture state machine, and
//! per-frame animation smoothing. No rendering and no UI toolkit types,
//! so the whole surface is unit-testable.

pub mod anim;
pub mod drag;
pub mod geometry;
pub mod phase;
pub mod progress;
pub mod track;
pub mod wave;

pub use anim::{Spring, Tween, STIFFNESS_HIGH};
pub use drag::{DragTracker, PointerId, MOUSE_POINTER};
pub use geometry::{Point, Size, WavePath, WaveSegment};
pub use phase::PhaseClock;
pub use progress::{clamp_progress, ProgressRange};
pub use track::{fill_boundary, knob_center_x, track_spans, TrackSpans};
pub use wave::{wave_path, WaveConfig, WaveConfigError, WaveShape, MIN_WAVELENGTH};
