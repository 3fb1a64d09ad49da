#![forbid(unsafe_code)]

//! Bounding-box accumulation over runs.
//!
//! Each run covers `[x, x + width(text))` horizontally and
//! `[y, y + line_height)` vertically. The box of a run sequence is the
//! smallest rectangle covering all of them. Each edge is tracked
//! independently with `min`/`max`, so the result does not depend on run
//! order.

use anchortext_core::geometry::{Point, Rect};
use anchortext_text::{TextMetrics, TextRun};

use crate::error::{RenderError, Result};
use crate::sink::DrawSink;

/// Running extents of the box, edges exclusive on the right and bottom.
#[derive(Debug, Clone, Copy)]
struct Extents {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Extents {
    fn of(anchor: Point, width: i32, line_height: i32) -> Self {
        Self {
            left: anchor.x,
            top: anchor.y,
            right: anchor.x + width,
            bottom: anchor.y + line_height,
        }
    }

    fn include(&mut self, anchor: Point, width: i32, line_height: i32) {
        self.top = self.top.min(anchor.y);
        self.left = self.left.min(anchor.x);
        self.bottom = self.bottom.max(anchor.y + line_height);
        self.right = self.right.max(anchor.x + width);
    }

    fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.right - self.left,
            self.bottom - self.top,
        )
    }
}

/// Walk `runs`, growing the box and handing each measured run to `visit`.
fn accumulate<M, F>(runs: &[TextRun], metrics: &M, mut visit: F) -> Result<Rect>
where
    M: TextMetrics + ?Sized,
    F: FnMut(&TextRun),
{
    let first = runs.first().ok_or(RenderError::EmptyInput)?;
    let line_height = metrics.line_height();
    let mut extents = Extents::of(first.anchor, metrics.width(&first.text), line_height);

    // The first run is folded in again; including it twice is harmless.
    for run in runs {
        extents.include(run.anchor, metrics.width(&run.text), line_height);
        visit(run);
    }
    Ok(extents.to_rect())
}

/// Bounding box of `runs` without drawing anything.
///
/// # Errors
///
/// [`RenderError::EmptyInput`] if `runs` is empty.
pub fn measure_runs<M>(runs: &[TextRun], metrics: &M) -> Result<Rect>
where
    M: TextMetrics + ?Sized,
{
    accumulate(runs, metrics, |_| {})
}

/// Draw every run at its anchor plus `offset` and return the runs' box.
///
/// The box is in run coordinates; `offset` only moves where the text is
/// painted. Runs are drawn in order, one call each.
///
/// # Errors
///
/// [`RenderError::EmptyInput`] if `runs` is empty, in which case nothing is
/// drawn.
pub fn draw_runs<M, S>(runs: &[TextRun], offset: Point, metrics: &M, sink: &mut S) -> Result<Rect>
where
    M: TextMetrics + ?Sized,
    S: DrawSink + ?Sized,
{
    let bounds = accumulate(runs, metrics, |run| {
        let at = run.anchor.offset(offset);
        sink.draw_text(&run.text, at.x, at.y);
    })?;
    tracing::debug!(
        runs = runs.len(),
        x = bounds.x,
        y = bounds.y,
        width = bounds.width,
        height = bounds.height,
        "accumulated bounds"
    );
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{DrawCall, RecordingSink};
    use anchortext_text::MonospaceMetrics;
    use tracing_test::traced_test;

    const METRICS: MonospaceMetrics = MonospaceMetrics::new(6, 14);

    fn run(text: &str, x: i32, y: i32) -> TextRun {
        TextRun::new(text, Point::new(x, y))
    }

    #[test]
    fn single_run_box() {
        let mut sink = RecordingSink::new();
        let bounds = draw_runs(&[run("hi", 3, 3)], Point::ORIGIN, &METRICS, &mut sink).unwrap();
        assert_eq!(bounds, Rect::new(3, 3, 12, 14));
        assert_eq!(sink.into_calls(), vec![DrawCall::new("hi", 3, 3)]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let mut sink = RecordingSink::new();
        let err = draw_runs(&[], Point::ORIGIN, &METRICS, &mut sink).unwrap_err();
        assert_eq!(err, RenderError::EmptyInput);
        assert!(sink.is_empty());
        assert_eq!(measure_runs(&[], &METRICS), Err(RenderError::EmptyInput));
    }

    #[test]
    fn offset_moves_draws_not_box() {
        let mut sink = RecordingSink::new();
        let runs = [run("ab", 0, 0), run("c", 6, 14)];
        let bounds = draw_runs(&runs, Point::new(100, -50), &METRICS, &mut sink).unwrap();
        assert_eq!(bounds, Rect::new(0, 0, 12, 28));
        assert_eq!(
            sink.into_calls(),
            vec![DrawCall::new("ab", 100, -50), DrawCall::new("c", 106, -36)]
        );
    }

    #[test]
    fn box_grows_left_and_up() {
        // The first run is right of and below the second; the box must keep
        // the first run's right edge after its left edge moves.
        let runs = [run("abcdef", 50, 20), run("x", 10, 5)];
        let bounds = measure_runs(&runs, &METRICS).unwrap();
        assert_eq!(bounds, Rect::new(10, 5, 76, 29));
    }

    #[test]
    fn box_is_order_independent() {
        let runs = vec![
            run("one", 0, 0),
            run("three", -12, 14),
            run("", 40, 42),
            run("x", 5, -7),
        ];
        let expected = measure_runs(&runs, &METRICS).unwrap();
        let mut reversed = runs.clone();
        reversed.reverse();
        assert_eq!(measure_runs(&reversed, &METRICS).unwrap(), expected);
        let mut rotated = runs;
        rotated.rotate_left(2);
        assert_eq!(measure_runs(&rotated, &METRICS).unwrap(), expected);
    }

    #[test]
    fn empty_text_still_takes_a_line() {
        let bounds = measure_runs(&[run("", 7, 8)], &METRICS).unwrap();
        assert_eq!(bounds, Rect::new(7, 8, 0, 14));
    }

    #[test]
    #[traced_test]
    fn logs_bounds() {
        let mut sink = RecordingSink::new();
        let _ = draw_runs(&[run("hi", 3, 3)], Point::ORIGIN, &METRICS, &mut sink);
        assert!(logs_contain("accumulated bounds"));
        assert!(logs_contain("width=12"));
    }
}
