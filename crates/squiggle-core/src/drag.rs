//! Drag gesture interpreter
//!
//! Translates a pointer coordinate stream (press, move, release) into
//! normalized progress updates. Semantics are absolute-position on every
//! event: each emitted value is `clamp(x / width, 0, 1)` from the most
//! recently reported pointer, so there is no delta accumulation and a
//! layout width change mid-gesture is handled correctly.
//!
//! Multiple pointers may join the gesture; it ends only once all of them
//! have released. A width of zero means the widget has not been laid out
//! yet, and every event is a no-op until it is.

use crate::progress::clamp_progress;

/// Identifies one pointer (a touch finger, or the mouse cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerId(pub u64);

/// Reserved id for the single mouse cursor.
pub const MOUSE_POINTER: PointerId = PointerId(u64::MAX);

/// State machine tracking the set of pressed pointers.
///
/// Idle while the set is empty, dragging otherwise.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    pointers: Vec<PointerId>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Pointer went down at `x`. Emits the new progress immediately, or
    /// `None` when the width is unknown (pre-layout no-op).
    pub fn press(&mut self, id: PointerId, x: f32, width: f32) -> Option<f32> {
        if width <= 0.0 {
            return None;
        }
        if !self.pointers.contains(&id) {
            self.pointers.push(id);
        }
        Some(clamp_progress(x / width))
    }

    /// Pointer moved to `x`. Emits only while that pointer is part of the
    /// gesture and the width is known.
    pub fn moved(&mut self, id: PointerId, x: f32, width: f32) -> Option<f32> {
        if width <= 0.0 || !self.pointers.contains(&id) {
            return None;
        }
        Some(clamp_progress(x / width))
    }

    /// Pointer released. Returns `true` when this ended the gesture, i.e.
    /// it was the last tracked pointer. There is no commit step: the last
    /// emitted value stands.
    pub fn release(&mut self, id: PointerId) -> bool {
        let was_dragging = self.is_dragging();
        self.pointers.retain(|p| *p != id);
        was_dragging && self.pointers.is_empty()
    }

    /// Abandon the gesture (e.g. pointer capture lost).
    pub fn cancel(&mut self) {
        self.pointers.clear();
    }
}
