#![forbid(unsafe_code)]

//! Relative rectangle placement.
//!
//! # Role in anchortext
//! `anchortext-layout` answers one question: given a reference rectangle and
//! the size of something new, where does the new thing go? It has no
//! knowledge of text; the render crate feeds it a measured block size.
//!
//! # Example
//!
//! ```
//! use anchortext_layout::{Direction, Justify, Positional, positioner};
//! use anchortext_core::geometry::{Rect, Size};
//!
//! let reference = Rect::new(10, 10, 100, 30);
//! let label = positioner::positioned(
//!     Positional::new(Direction::Up, Justify::Center),
//!     reference,
//!     Size::new(40, 14),
//!     5,
//! );
//! assert_eq!(label, Rect::new(40, -9, 40, 14));
//! ```

pub mod placement;
pub mod positioner;

pub use placement::{Corner, Direction, Justify, Positional};
pub use positioner::{DEFAULT_HEIGHT, DEFAULT_SIZE, DEFAULT_SPACER, DEFAULT_WIDTH};
