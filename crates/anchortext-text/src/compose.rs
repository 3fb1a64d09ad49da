#![forbid(unsafe_code)]

//! Multi-line composition.
//!
//! [`Composer`] splits a block on `\n`, parses each line with
//! [`parse_line`](crate::parse::parse_line), expands its tabs, and stacks the
//! lines one line height apart. Every line starts back at the block's left
//! edge; only form feeds carry x forward.

use anchortext_core::geometry::Point;

use crate::metrics::TextMetrics;
use crate::parse::{ParsedLine, parse_line};
use crate::run::TextRun;
use crate::tabs::TabStops;

/// Line separator.
pub const NEWLINE: char = '\n';

/// Split `text` into lines on `\n`.
///
/// Trailing empty lines are dropped, but the result always holds at least
/// one line, so an empty block (or one made only of newlines) still
/// produces a single empty line.
///
/// ```
/// use anchortext_text::split_lines;
///
/// assert_eq!(split_lines("a\n\nb\n\n"), ["a", "", "b"]);
/// assert_eq!(split_lines("\n\n"), [""]);
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split(NEWLINE).collect();
    while lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Lays out text blocks against a metrics source and tab configuration.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'m, M: ?Sized> {
    metrics: &'m M,
    tabs: TabStops,
}

impl<'m, M: TextMetrics + ?Sized> Composer<'m, M> {
    /// Create a composer with explicit tab stops.
    #[must_use]
    pub fn new(metrics: &'m M, tabs: TabStops) -> Self {
        Self { metrics, tabs }
    }

    /// Create a composer whose tab length is measured from the font.
    #[must_use]
    pub fn with_measured_tabs(metrics: &'m M) -> Self {
        Self::new(metrics, TabStops::measured(metrics))
    }

    /// Metrics used for measurement.
    #[must_use]
    pub fn metrics(&self) -> &'m M {
        self.metrics
    }

    /// Tab configuration.
    #[must_use]
    pub fn tabs(&self) -> TabStops {
        self.tabs
    }

    /// Replace the tab configuration.
    #[must_use]
    pub fn with_tabs(mut self, tabs: TabStops) -> Self {
        self.tabs = tabs;
        self
    }

    /// Parse one line and expand its tabs.
    ///
    /// The returned pen is where the line's form feeds left it; tab jumps do
    /// not move it.
    #[must_use]
    pub fn line(&self, line: &str, start: Point) -> ParsedLine {
        let ParsedLine { runs, pen } = parse_line(line, start, self.metrics);
        ParsedLine {
            runs: self.tabs.expand(runs, self.metrics),
            pen,
        }
    }

    /// Lay out a whole block starting at `start`.
    ///
    /// Line `n` is parsed with its pen at
    /// `(start.x, start.y + n * line_height)`. Runs come back in line order,
    /// then in order within each line; the result is never empty.
    #[must_use]
    pub fn compose(&self, text: &str, start: Point) -> Vec<TextRun> {
        let lines = split_lines(text);
        let _span = tracing::debug_span!(
            "compose_block",
            lines = lines.len(),
            chars = text.len(),
            x = start.x,
            y = start.y
        )
        .entered();

        let line_height = self.metrics.line_height();
        let mut runs = Vec::with_capacity(lines.len());
        let mut line_start = start;
        for line in lines {
            runs.extend(self.line(line, line_start).runs);
            line_start = line_start.translate(0, line_height);
        }
        runs
    }
}
