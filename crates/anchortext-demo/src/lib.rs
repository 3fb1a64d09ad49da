#![forbid(unsafe_code)]

//! Demo for anchortext.
//!
//! Draws a framed box into a [`canvas::CellCanvas`] and places labels
//! around it with [`anchortext_render::TextPainter`], using one cell per
//! unit so the output can be printed to a terminal.

pub mod canvas;
pub mod cli;
pub mod scene;
