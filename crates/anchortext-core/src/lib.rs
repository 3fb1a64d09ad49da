#![forbid(unsafe_code)]

//! Core: integer geometry and logging helpers shared by every anchortext crate.
//!
//! # Role in anchortext
//! `anchortext-core` is the bottom of the stack. It owns the [`Point`],
//! [`Size`] and [`Rect`] value types that the positioner (`anchortext-layout`),
//! the text composer (`anchortext-text`) and the draw pass
//! (`anchortext-render`) exchange, plus a thin logging layer over `tracing`.
//!
//! All coordinates are `i32`. Placements above or left of a reference can
//! land at negative positions and must stay representable.

pub mod geometry;
pub mod logging;

pub use geometry::{Point, Rect, Size};

// Re-export tracing macros at crate root for ergonomic use.
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
