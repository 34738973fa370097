//! Plain 2D geometry types for wave paths
//!
//! These are deliberately toolkit-free so path generation can be tested
//! without a renderer. The widget crate converts `WavePath` into its
//! canvas path type at draw time.

/// A 2D point in widget-local coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Widget-local size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One drawing command of a tessellated wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic bezier to `to` with a single control point.
    QuadTo { control: Point, to: Point },
}

impl WaveSegment {
    /// The on-curve endpoint of this segment.
    pub fn end(&self) -> Point {
        match *self {
            WaveSegment::MoveTo(p) | WaveSegment::LineTo(p) => p,
            WaveSegment::QuadTo { to, .. } => to,
        }
    }
}

/// An ordered sequence of path segments, recomputed every frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WavePath {
    pub segments: Vec<WaveSegment>,
}

impl WavePath {
    pub fn new(segments: Vec<WaveSegment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// On-curve endpoints in order (control points excluded).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().map(WaveSegment::end)
    }

    /// First on-curve point, if the path is non-empty.
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(WaveSegment::end)
    }

    /// Last on-curve point, if the path is non-empty.
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(WaveSegment::end)
    }
}
