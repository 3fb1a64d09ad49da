#![forbid(unsafe_code)]

//! Text measurement capability.
//!
//! The layout code never talks to a font directly. Hosts implement
//! [`TextMetrics`] over whatever font-metrics object their toolkit offers;
//! [`MonospaceMetrics`] covers fixed-pitch output and deterministic tests.

use unicode_width::UnicodeWidthChar;

/// Width and line-height queries for the current font state.
///
/// Implementations must be deterministic and side-effect free for a given
/// font state: the composer and the draw pass may measure the same string
/// more than once and rely on getting the same answer.
pub trait TextMetrics {
    /// Advance width of `text` in the caller's units.
    fn width(&self, text: &str) -> i32;

    /// Distance between consecutive baselines.
    fn line_height(&self) -> i32;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    #[inline]
    fn width(&self, text: &str) -> i32 {
        (**self).width(text)
    }

    #[inline]
    fn line_height(&self) -> i32 {
        (**self).line_height()
    }
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
    #[inline]
    fn width(&self, text: &str) -> i32 {
        (**self).width(text)
    }

    #[inline]
    fn line_height(&self) -> i32 {
        (**self).line_height()
    }
}

/// Fixed-pitch metrics: every terminal cell is `advance` units wide.
///
/// Cell counts follow Unicode East Asian Width, so wide CJK glyphs take two
/// cells and control characters take none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    advance: i32,
    line_height: i32,
}

impl MonospaceMetrics {
    /// Create metrics with the given per-cell advance and line height.
    #[must_use]
    pub const fn new(advance: i32, line_height: i32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    /// One unit per cell and one unit per line, for character grids.
    #[must_use]
    pub const fn cells() -> Self {
        Self::new(1, 1)
    }

    /// Per-cell advance.
    #[must_use]
    pub const fn advance(&self) -> i32 {
        self.advance
    }

    /// Number of cells `text` occupies.
    #[must_use]
    pub fn cell_count(text: &str) -> usize {
        text.chars()
            .map(|c| if c.is_control() { 0 } else { c.width().unwrap_or(0) })
            .sum()
    }
}

impl TextMetrics for MonospaceMetrics {
    fn width(&self, text: &str) -> i32 {
        let cells = i32::try_from(Self::cell_count(text)).unwrap_or(i32::MAX);
        cells.saturating_mul(self.advance)
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}
