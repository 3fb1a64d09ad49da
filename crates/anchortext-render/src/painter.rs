#![forbid(unsafe_code)]

//! Anchored text placement.
//!
//! [`TextPainter`] places a block of text next to a reference and draws it:
//!
//! 1. Hidden reference element: nothing is drawn, the result is `None`.
//! 2. Element reference: its bounds are shifted down by three quarters of a
//!    line so baseline-anchored text looks centered against it.
//! 3. The text becomes runs at the origin (composed, or taken verbatim when
//!    [`PlaceOptions::parse`] is off).
//! 4. The block is `max(run width)` wide and spans first to last run plus
//!    one line.
//! 5. The positioner finds the block's origin (no spacer).
//! 6. The runs are drawn offset by that origin.
//!
//! The returned rectangle is the runs' box in run coordinates, which is also
//! kept as [`TextPainter::last`].

use anchortext_core::geometry::{Point, Rect, Size};
use anchortext_layout::positioner::positioned;
use anchortext_layout::{Direction, Justify, Positional};
use anchortext_text::{Composer, TabSetting, TabStops, TextMetrics, TextRun};

use crate::bounds::draw_runs;
use crate::element::Element;
use crate::error::{RenderError, Result};
use crate::sink::DrawSink;

/// Options for a placement call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOptions {
    /// Interpret newlines, control codes and tabs. When off, the whole text
    /// is drawn as one run.
    pub parse: bool,
}

impl Default for PlaceOptions {
    fn default() -> Self {
        Self { parse: true }
    }
}

impl PlaceOptions {
    /// Options with parsing on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with parsing off.
    #[must_use]
    pub const fn raw() -> Self {
        Self { parse: false }
    }

    /// Set whether to parse the text.
    #[must_use]
    pub const fn parse(mut self, parse: bool) -> Self {
        self.parse = parse;
        self
    }
}

/// What a block of text is placed against.
#[derive(Clone, Copy)]
pub enum Anchor<'a> {
    /// A fixed rectangle, used as-is.
    Rect(Rect),
    /// A UI element; placement is skipped while it is hidden.
    Element(&'a dyn Element),
}

impl std::fmt::Debug for Anchor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rect(rect) => f.debug_tuple("Rect").field(rect).finish(),
            Self::Element(element) => f
                .debug_struct("Element")
                .field("bounds", &element.bounds())
                .field("visible", &element.is_visible())
                .finish(),
        }
    }
}

impl From<Rect> for Anchor<'_> {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl<'a, E: Element> From<&'a E> for Anchor<'a> {
    fn from(element: &'a E) -> Self {
        Self::Element(element)
    }
}

/// Lays out and draws text blocks through a metrics source and a draw sink.
///
/// Not internally synchronized: tab length and [`last`](Self::last) are
/// per-instance state mutated through `&mut self`.
#[derive(Debug)]
pub struct TextPainter<M, S> {
    metrics: M,
    sink: S,
    tabs: TabStops,
    last: Rect,
}

impl<M: TextMetrics, S: DrawSink> TextPainter<M, S> {
    /// Create a painter whose tab length is measured from `metrics`.
    #[must_use]
    pub fn new(metrics: M, sink: S) -> Self {
        let tabs = TabStops::measured(&metrics);
        Self {
            metrics,
            sink,
            tabs,
            last: Rect::default(),
        }
    }

    /// Create a painter with a configured tab setting.
    #[must_use]
    pub fn with_tab_setting(metrics: M, sink: S, setting: &TabSetting) -> Self {
        let tabs = setting.resolve(&metrics);
        Self {
            metrics,
            sink,
            tabs,
            last: Rect::default(),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Width of `text` under the current metrics.
    #[must_use]
    pub fn width(&self, text: &str) -> i32 {
        self.metrics.width(text)
    }

    /// Current line height.
    #[must_use]
    pub fn line_height(&self) -> i32 {
        self.metrics.line_height()
    }

    /// Current tab length.
    #[must_use]
    pub fn tab_length(&self) -> i32 {
        self.tabs.length()
    }

    /// Set the tab length; returns the length in effect (at least 1).
    pub fn set_tab_length(&mut self, length: i32) -> i32 {
        self.tabs = TabStops::fixed(length);
        self.tabs.length()
    }

    /// Set the tab length to the width of `sizer`; returns the length in effect.
    pub fn set_tab_length_by(&mut self, sizer: &str) -> i32 {
        self.tabs = TabStops::sized_by(&self.metrics, sizer);
        self.tabs.length()
    }

    /// Bounds returned by the most recent draw; zero before the first one.
    #[must_use]
    pub fn last(&self) -> Rect {
        self.last
    }

    /// The metrics source.
    #[must_use]
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// The draw sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the draw sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Split the painter back into its metrics and sink.
    #[must_use]
    pub fn into_parts(self) -> (M, S) {
        (self.metrics, self.sink)
    }

    // ── Layout ──────────────────────────────────────────────────────────

    /// A composer sharing this painter's metrics and tab stops.
    #[must_use]
    pub fn composer(&self) -> Composer<'_, M> {
        Composer::new(&self.metrics, self.tabs)
    }

    /// Lay out `text` starting at `start` without drawing.
    #[must_use]
    pub fn compose(&self, text: &str, start: Point) -> Vec<TextRun> {
        self.composer().compose(text, start)
    }

    /// Size of the block formed by `runs`: the widest run by the span from
    /// the first run's y to the last run's y plus one line.
    ///
    /// Run x offsets are not included in the width.
    ///
    /// # Errors
    ///
    /// [`RenderError::EmptyInput`] if `runs` is empty.
    pub fn block_size(&self, runs: &[TextRun]) -> Result<Size> {
        let (first, last) = runs
            .first()
            .zip(runs.last())
            .ok_or(RenderError::EmptyInput)?;
        let width = runs
            .iter()
            .map(|run| self.metrics.width(&run.text))
            .max()
            .unwrap_or(0);
        let height = last.anchor.y - first.anchor.y + self.line_height();
        Ok(Size::new(width, height))
    }

    // ── Drawing ─────────────────────────────────────────────────────────

    /// Draw `runs` offset by `offset`, remembering and returning their box.
    ///
    /// # Errors
    ///
    /// [`RenderError::EmptyInput`] if `runs` is empty; `last` is unchanged.
    pub fn controlled_draw(&mut self, runs: &[TextRun], offset: Point) -> Result<Rect> {
        let bounds = draw_runs(runs, offset, &self.metrics, &mut self.sink)?;
        self.last = bounds;
        Ok(bounds)
    }

    /// Draw plain lines one below another, starting at `start`.
    ///
    /// No control codes are interpreted. Returns the pen after the last
    /// line, i.e. `start` moved down one line height per line.
    pub fn draw_lines<I>(&mut self, lines: I, start: Point) -> Point
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let line_height = self.line_height();
        let mut pen = start;
        for line in lines {
            self.sink.draw_text(line.as_ref(), pen.x, pen.y);
            pen = pen.translate(0, line_height);
        }
        pen
    }

    /// Compose `text` at `(x, y)` and draw it one line lower, so `(x, y)`
    /// is the block's top-left corner rather than its first baseline.
    ///
    /// # Errors
    ///
    /// Never fails in practice; composition always yields a run.
    pub fn draw_formatted_lines(&mut self, text: &str, x: i32, y: i32) -> Result<Rect> {
        let runs = self.compose(text, Point::new(x, y));
        let offset = Point::new(0, self.line_height());
        self.controlled_draw(&runs, offset)
    }

    // ── Placement ───────────────────────────────────────────────────────

    /// Place and draw `text` relative to `anchor`.
    ///
    /// Returns `Ok(None)` without drawing when the anchor is a hidden
    /// element.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn position_text<'a>(
        &mut self,
        spec: Positional,
        text: &str,
        anchor: impl Into<Anchor<'a>>,
        options: &PlaceOptions,
    ) -> Result<Option<Rect>> {
        let reference = match anchor.into() {
            Anchor::Rect(rect) => rect,
            Anchor::Element(element) => {
                if !element.is_visible() {
                    tracing::debug!(
                        direction = ?spec.direction,
                        "reference element not visible; skipping draw"
                    );
                    return Ok(None);
                }
                // Runs hang from their baseline, and the line height includes
                // some space above the glyphs; three quarters of a line
                // lines the text up with the element's visual center.
                element.bounds().translate(0, 3 * self.line_height() / 4)
            }
        };

        let runs = if options.parse {
            self.compose(text, Point::ORIGIN)
        } else {
            vec![TextRun::new(text, Point::ORIGIN)]
        };
        let dim = self.block_size(&runs)?;
        let target = positioned(spec, reference, dim, 0);
        tracing::trace!(
            x = target.x,
            y = target.y,
            width = dim.width,
            height = dim.height,
            "placed text block"
        );

        self.controlled_draw(&runs, target.origin()).map(Some)
    }

    /// Place and draw `text` relative to a rectangle.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn place_in_rect(
        &mut self,
        spec: Positional,
        text: &str,
        reference: Rect,
        options: &PlaceOptions,
    ) -> Result<Rect> {
        let placed = self.position_text(spec, text, reference, options)?;
        // A rectangle anchor is never skipped.
        Ok(placed.unwrap_or(self.last))
    }

    /// Place and draw `text` relative to an element, if it is visible.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn place_by_element(
        &mut self,
        spec: Positional,
        text: &str,
        element: &dyn Element,
        options: &PlaceOptions,
    ) -> Result<Option<Rect>> {
        self.position_text(spec, text, Anchor::Element(element), options)
    }

    // ── Rectangle shorthands (top/left aligned) ─────────────────────────

    /// Text left of `reference`, top-aligned.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn left_text(&mut self, text: &str, reference: Rect) -> Result<Rect> {
        self.place_in_rect(
            Positional::new(Direction::Left, Justify::Start),
            text,
            reference,
            &PlaceOptions::default(),
        )
    }

    /// Text above `reference`, left-aligned.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn top_text(&mut self, text: &str, reference: Rect) -> Result<Rect> {
        self.place_in_rect(
            Positional::new(Direction::Up, Justify::Start),
            text,
            reference,
            &PlaceOptions::default(),
        )
    }

    /// Text right of `reference`, top-aligned.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn right_text(&mut self, text: &str, reference: Rect) -> Result<Rect> {
        self.place_in_rect(
            Positional::new(Direction::Right, Justify::Start),
            text,
            reference,
            &PlaceOptions::default(),
        )
    }

    /// Text below `reference`, left-aligned.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn bottom_text(&mut self, text: &str, reference: Rect) -> Result<Rect> {
        self.place_in_rect(
            Positional::new(Direction::Down, Justify::Start),
            text,
            reference,
            &PlaceOptions::default(),
        )
    }

    // ── Element shorthands ──────────────────────────────────────────────

    /// Text left of `element`, vertically centered.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn left_text_of(&mut self, text: &str, element: &dyn Element) -> Result<Option<Rect>> {
        self.place_by_element(
            Positional::new(Direction::Left, Justify::Center),
            text,
            element,
            &PlaceOptions::default(),
        )
    }

    /// Text above `element`, horizontally centered.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn top_text_of(&mut self, text: &str, element: &dyn Element) -> Result<Option<Rect>> {
        self.place_by_element(
            Positional::new(Direction::Up, Justify::Center),
            text,
            element,
            &PlaceOptions::default(),
        )
    }

    /// Text right of `element`, vertically centered.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn right_text_of(&mut self, text: &str, element: &dyn Element) -> Result<Option<Rect>> {
        self.place_by_element(
            Positional::new(Direction::Right, Justify::Center),
            text,
            element,
            &PlaceOptions::default(),
        )
    }

    /// Text below `element`, left-aligned.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the draw pass.
    pub fn bottom_text_of(&mut self, text: &str, element: &dyn Element) -> Result<Option<Rect>> {
        self.place_by_element(
            Positional::new(Direction::Down, Justify::Start),
            text,
            element,
            &PlaceOptions::default(),
        )
    }
}
