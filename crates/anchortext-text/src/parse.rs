#![forbid(unsafe_code)]

//! Single-line parsing with an overwrite cursor.
//!
//! A line is replayed as if typed on a teletype. An edit buffer holds what
//! has been typed since the last form feed and a cursor marks where the next
//! character lands:
//!
//! | Input | Effect |
//! |-------|--------|
//! | `\x08` | cursor moves left one (stops at 0), nothing is erased |
//! | `\r` | cursor moves to 0 |
//! | `\x0C` | buffer is emitted as a run, pen moves by `(width, line_height)` |
//! | other | replaces the char under the cursor (or appends), cursor moves right |
//!
//! Tabs are ordinary characters here; [`crate::tabs`] expands them afterwards.
//!
//! # Example
//!
//! ```
//! use anchortext_core::geometry::Point;
//! use anchortext_text::{MonospaceMetrics, parse_line};
//!
//! let metrics = MonospaceMetrics::new(6, 14);
//! let parsed = parse_line("[    ]\r[##", Point::new(0, 0), &metrics);
//! assert_eq!(parsed.runs.len(), 1);
//! assert_eq!(parsed.runs[0].text, "[##  ]");
//! ```

use anchortext_core::geometry::Point;

use crate::metrics::TextMetrics;
use crate::run::TextRun;

/// Backspace (`BS`, `\x08`).
pub const BACKSPACE: char = '\u{08}';
/// Carriage return (`CR`, `\r`).
pub const CARRIAGE_RETURN: char = '\r';
/// Form feed (`FF`, `\x0C`).
pub const FORM_FEED: char = '\u{0C}';

/// Typed characters plus an edit cursor, both counted in `char`s.
///
/// Invariant: `cursor <= chars.len()`.
#[derive(Debug, Clone, Default)]
struct OverwriteBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl OverwriteBuffer {
    fn backspace(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn carriage_return(&mut self) {
        self.cursor = 0;
    }

    fn put(&mut self, c: char) {
        match self.chars.get_mut(self.cursor) {
            Some(slot) => *slot = c,
            None => self.chars.push(c),
        }
        self.cursor += 1;
    }

    /// Drain the buffer into a string and reset the cursor.
    fn take(&mut self) -> String {
        self.cursor = 0;
        self.chars.drain(..).collect()
    }
}

/// Runs produced from one line, plus the pen where the line left off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Runs in emission order; never empty.
    pub runs: Vec<TextRun>,
    /// Pen after the final run was emitted (moved only by form feeds).
    pub pen: Point,
}

/// Parse one line (no `\n`) starting at `start`.
///
/// Always yields at least one run: the buffer left over at the end of the
/// line is emitted even when empty. Each form feed emits the buffer so far
/// and moves the pen right by that text's width and down by one line height,
/// so text after a form feed starts diagonally below where the previous run
/// ended.
#[must_use]
pub fn parse_line<M>(line: &str, start: Point, metrics: &M) -> ParsedLine
where
    M: TextMetrics + ?Sized,
{
    let mut runs = Vec::new();
    let mut buffer = OverwriteBuffer::default();
    let mut pen = start;

    for c in line.chars() {
        match c {
            BACKSPACE => buffer.backspace(),
            CARRIAGE_RETURN => buffer.carriage_return(),
            FORM_FEED => {
                let text = buffer.take();
                let advance = metrics.width(&text);
                runs.push(TextRun::new(text, pen));
                pen = pen.translate(advance, metrics.line_height());
            }
            other => buffer.put(other),
        }
    }

    runs.push(TextRun::new(buffer.take(), pen));
    tracing::trace!(
        chars = line.len(),
        runs = runs.len(),
        x = pen.x,
        y = pen.y,
        "parsed line"
    );

    ParsedLine { runs, pen }
}
