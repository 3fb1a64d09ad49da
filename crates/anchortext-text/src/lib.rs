#![forbid(unsafe_code)]

//! Text runs from raw, control-code laden text.
//!
//! # Role in anchortext
//! `anchortext-text` turns a block of text into positioned [`TextRun`]s. It
//! understands a handful of C0 controls the way a teletype would:
//!
//! - `\n` starts a new line at the block's left edge.
//! - `\x08` (backspace) moves the edit cursor left without erasing.
//! - `\r` moves the edit cursor to the start of the current run.
//! - `\x0C` (form feed) ends the current run and moves the pen by the run's
//!   width *and* one line height.
//! - `\t` advances the pen by the configured [`TabStops`].
//!
//! Printable characters overwrite whatever sits under the cursor.
//!
//! # Example
//!
//! ```
//! use anchortext_core::geometry::Point;
//! use anchortext_text::{Composer, MonospaceMetrics, TabStops};
//!
//! let metrics = MonospaceMetrics::new(6, 14);
//! let composer = Composer::new(&metrics, TabStops::fixed(20));
//!
//! let runs = composer.compose("name\tvalue\n50%\r100%", Point::new(0, 0));
//! let texts: Vec<_> = runs.iter().map(|r| r.text.as_str()).collect();
//! assert_eq!(texts, ["name", "value", "100%"]);
//! assert_eq!(runs[1].anchor, Point::new(40, 0));
//! assert_eq!(runs[2].anchor, Point::new(0, 14));
//! ```
//!
//! Measurement is injected through [`TextMetrics`]; nothing here depends on a
//! concrete font or rendering toolkit.

pub mod compose;
pub mod metrics;
pub mod parse;
pub mod run;
pub mod tabs;

pub use compose::{Composer, split_lines};
pub use metrics::{MonospaceMetrics, TextMetrics};
pub use parse::{ParsedLine, parse_line};
pub use run::TextRun;
pub use tabs::{TAB_SIZE, TabSetting, TabStops};
