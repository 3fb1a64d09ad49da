#![forbid(unsafe_code)]

//! Draw sinks: where positioned text finally goes.

use anchortext_core::geometry::Point;

/// Something that can paint a string at a position.
///
/// Calls are synchronous: the text is considered drawn when the call
/// returns. `(x, y)` uses the same convention as run anchors, which for
/// most toolkits is the left end of the baseline.
pub trait DrawSink {
    /// Draw `text` with its origin at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
}

impl<S: DrawSink + ?Sized> DrawSink for &mut S {
    #[inline]
    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        (**self).draw_text(text, x, y);
    }
}

impl<S: DrawSink + ?Sized> DrawSink for Box<S> {
    #[inline]
    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        (**self).draw_text(text, x, y);
    }
}

/// Adapter turning a closure into a [`DrawSink`].
///
/// ```
/// use anchortext_render::{DrawSink, FnSink};
///
/// let mut seen = Vec::new();
/// let mut sink = FnSink(|text: &str, x: i32, y: i32| seen.push((text.to_owned(), x, y)));
/// sink.draw_text("hi", 1, 2);
/// drop(sink);
/// assert_eq!(seen, [("hi".to_owned(), 1, 2)]);
/// ```
pub struct FnSink<F>(pub F);

impl<F: FnMut(&str, i32, i32)> DrawSink for FnSink<F> {
    #[inline]
    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        (self.0)(text, x, y);
    }
}

impl<F> std::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrawCall {
    /// Text drawn.
    pub text: String,
    /// Horizontal origin.
    pub x: i32,
    /// Vertical origin.
    pub y: i32,
}

impl DrawCall {
    /// Create a draw call record.
    #[must_use]
    pub fn new(text: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    /// Origin as a point.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Headless sink that records every draw call in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    calls: Vec<DrawCall>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Text of each call, oldest first.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.calls.iter().map(|call| call.text.as_str()).collect()
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Consume the recorder, returning its calls.
    #[must_use]
    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }
}

impl DrawSink for RecordingSink {
    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.calls.push(DrawCall::new(text, x, y));
    }
}
