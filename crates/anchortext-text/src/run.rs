#![forbid(unsafe_code)]

//! Positioned text runs.

use anchortext_core::geometry::Point;

/// A span of text drawn at a fixed anchor.
///
/// The anchor is the draw origin handed to the sink, which for most
/// toolkits is the left end of the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextRun {
    /// Text to draw; contains no control characters consumed by layout.
    pub text: String,
    /// Draw origin.
    pub anchor: Point,
}

impl TextRun {
    /// Create a run.
    #[must_use]
    pub fn new(text: impl Into<String>, anchor: Point) -> Self {
        Self {
            text: text.into(),
            anchor,
        }
    }

    /// Horizontal anchor coordinate.
    #[inline]
    #[must_use]
    pub fn x(&self) -> i32 {
        self.anchor.x
    }

    /// Vertical anchor coordinate.
    #[inline]
    #[must_use]
    pub fn y(&self) -> i32 {
        self.anchor.y
    }
}
