#![forbid(unsafe_code)]

//! Character-grid draw sink.
//!
//! One unit is one cell, so the canvas pairs with
//! [`MonospaceMetrics::cells`](anchortext_text::MonospaceMetrics::cells).
//! Anything drawn outside the grid is clipped.

use anchortext_core::geometry::Rect;
use anchortext_render::DrawSink;
use unicode_width::UnicodeWidthChar;

/// Marks the second cell of a wide glyph; skipped when rendering.
const WIDE_TAIL: char = '\0';
const BLANK: char = ' ';

/// A fixed-size grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellCanvas {
    cols: u16,
    rows: u16,
    cells: Vec<char>,
}

impl CellCanvas {
    /// Create a blank canvas.
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BLANK; usize::from(cols) * usize::from(rows)],
        }
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// The whole canvas as a rectangle at the origin.
    #[must_use]
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, i32::from(self.cols), i32::from(self.rows))
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        (col < usize::from(self.cols) && row < usize::from(self.rows))
            .then(|| row * usize::from(self.cols) + col)
    }

    /// Character at `(col, row)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, col: i32, row: i32) -> Option<char> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Set one cell; out-of-grid writes are dropped.
    pub fn set(&mut self, col: i32, row: i32, ch: char) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = ch;
        }
    }

    /// Draw an ASCII frame along the inside edge of `rect`.
    pub fn draw_frame(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        for col in rect.x..=right {
            self.set(col, rect.y, '-');
            self.set(col, bottom, '-');
        }
        for row in rect.y..=bottom {
            self.set(rect.x, row, '|');
            self.set(right, row, '|');
        }
        for (col, row) in [(rect.x, rect.y), (right, rect.y), (rect.x, bottom), (right, bottom)] {
            self.set(col, row, '+');
        }
    }

    /// Text of one row with trailing blanks removed.
    #[must_use]
    pub fn row_text(&self, row: u16) -> String {
        let start = usize::from(row) * usize::from(self.cols);
        let end = start + usize::from(self.cols);
        let line: String = self
            .cells
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .filter(|&&c| c != WIDE_TAIL)
            .collect();
        line.trim_end().to_owned()
    }

    /// All rows joined by newlines.
    #[must_use]
    pub fn render(&self) -> String {
        (0..self.rows)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DrawSink for CellCanvas {
    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        let mut col = x;
        for ch in text.chars() {
            let width = if ch.is_control() { 0 } else { ch.width().unwrap_or(0) };
            if width == 0 {
                continue;
            }
            self.set(col, y, ch);
            if width == 2 {
                self.set(col + 1, y, WIDE_TAIL);
            }
            col += i32::try_from(width).unwrap_or(1);
        }
    }
}
