#![forbid(unsafe_code)]

//! Draw pass: bounding boxes, draw sinks and anchored placement.
//!
//! # Role in anchortext
//! `anchortext-render` sits on top of the other crates. It takes runs from
//! `anchortext-text`, measures the block they form, asks
//! `anchortext-layout` where that block goes relative to a reference, and
//! issues one draw call per run to a host-supplied [`DrawSink`].
//!
//! # Primary responsibilities
//! - **[`draw_runs`]**: one draw call per run, returning the runs' bounding box.
//! - **[`TextPainter`]**: the orchestrator; places text blocks next to
//!   rectangles or visible UI elements and remembers the last bounds.
//! - **[`RecordingSink`]**: a headless sink for tests and snapshots.
//!
//! # Example
//!
//! ```
//! use anchortext_core::geometry::{Point, Rect};
//! use anchortext_layout::{Justify, Positional};
//! use anchortext_render::{PlaceOptions, RecordingSink, TextPainter};
//! use anchortext_text::MonospaceMetrics;
//!
//! let mut painter = TextPainter::new(MonospaceMetrics::new(6, 14), RecordingSink::new());
//! let bounds = painter
//!     .place_in_rect(
//!         Positional::above(Justify::Center),
//!         "hello",
//!         Rect::new(10, 10, 100, 30),
//!         &PlaceOptions::default(),
//!     )
//!     .unwrap();
//! assert_eq!(bounds, Rect::new(0, 0, 30, 14));
//! assert_eq!(painter.sink().calls()[0].position(), Point::new(45, -4));
//! ```

pub mod bounds;
pub mod element;
pub mod error;
pub mod painter;
pub mod sink;

pub use bounds::{draw_runs, measure_runs};
pub use element::{Element, Widget};
pub use error::{RenderError, Result};
pub use painter::{Anchor, PlaceOptions, TextPainter};
pub use sink::{DrawCall, DrawSink, FnSink, RecordingSink};
