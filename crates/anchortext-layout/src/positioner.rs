#![forbid(unsafe_code)]

//! Rectangles positioned relative to other rectangles.
//!
//! Three primitives do all the work:
//!
//! - [`positioned`]: flush *outside* a reference on one side, justified along it.
//! - [`center_on_edge`]: *inside* a reference, against one edge, centered along it.
//! - [`corner`]: *inside* a reference, inset from one corner.
//!
//! Everything else in this module is a fixed-parameter shorthand for one of
//! them using [`DEFAULT_SIZE`] and [`DEFAULT_SPACER`].
//!
//! All functions are pure. Negative sizes and degenerate references are
//! accepted and flow through the arithmetic unchanged. Halving uses integer
//! division truncating toward zero.
//!
//! # Example
//!
//! ```
//! use anchortext_core::geometry::{Rect, Size};
//! use anchortext_layout::Corner;
//! use anchortext_layout::positioner::corner_uniform;
//!
//! let panel = Rect::new(0, 0, 100, 100);
//! let badge = corner_uniform(panel, Size::new(20, 10), Corner::TopRight, 5);
//! assert_eq!(badge, Rect::new(75, 5, 20, 10));
//! ```

use anchortext_core::geometry::{Rect, Size};

use crate::placement::{Corner, Direction, Justify, Positional};

/// Default width of a positioned rectangle.
pub const DEFAULT_WIDTH: i32 = 100;
/// Default height of a positioned rectangle.
pub const DEFAULT_HEIGHT: i32 = 30;
/// Default space between a rectangle and its reference.
pub const DEFAULT_SPACER: i32 = 10;
/// Default size of a positioned rectangle.
pub const DEFAULT_SIZE: Size = Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);

/// Coordinate of a span of length `len` justified against `[start, start + extent)`.
#[inline]
const fn justified(justify: Justify, start: i32, extent: i32, len: i32) -> i32 {
    match justify {
        Justify::Start => start,
        Justify::Center => start + extent / 2 - len / 2,
        Justify::End => start + extent - len,
    }
}

/// Coordinate of a span of length `len` centered within `[start, start + extent)`.
#[inline]
const fn centered(start: i32, extent: i32, len: i32) -> i32 {
    justified(Justify::Center, start, extent, len)
}

/// Place a rectangle of size `dim` flush outside `reference`.
///
/// The side comes from `spec.direction`, separated from the reference by
/// `spacer`. Along that side the rectangle is aligned per `spec.justify`
/// against the reference's extent on the perpendicular axis.
#[must_use]
pub const fn positioned(spec: Positional, reference: Rect, dim: Size, spacer: i32) -> Rect {
    let (x, y) = match spec.direction {
        Direction::Up => (
            justified(spec.justify, reference.x, reference.width, dim.width),
            reference.y - dim.height - spacer,
        ),
        Direction::Down => (
            justified(spec.justify, reference.x, reference.width, dim.width),
            reference.y + reference.height + spacer,
        ),
        Direction::Left => (
            reference.x - dim.width - spacer,
            justified(spec.justify, reference.y, reference.height, dim.height),
        ),
        Direction::Right => (
            reference.x + reference.width + spacer,
            justified(spec.justify, reference.y, reference.height, dim.height),
        ),
    };
    Rect::new(x, y, dim.width, dim.height)
}

/// Place a rectangle inside `reference`, against the edge named by `dir`,
/// centered along that edge and inset from it by `spacer`.
#[must_use]
pub const fn center_on_edge(dir: Direction, reference: Rect, dim: Size, spacer: i32) -> Rect {
    let (x, y) = match dir {
        Direction::Up => (
            centered(reference.x, reference.width, dim.width),
            reference.y + spacer,
        ),
        Direction::Down => (
            centered(reference.x, reference.width, dim.width),
            reference.y + reference.height - dim.height - spacer,
        ),
        Direction::Left => (
            reference.x + spacer,
            centered(reference.y, reference.height, dim.height),
        ),
        Direction::Right => (
            reference.x + reference.width - dim.width - spacer,
            centered(reference.y, reference.height, dim.height),
        ),
    };
    Rect::new(x, y, dim.width, dim.height)
}

/// Center `dim` inside `reference` on both axes.
#[must_use]
pub const fn center(reference: Rect, dim: Size) -> Rect {
    Rect::new(
        centered(reference.x, reference.width, dim.width),
        centered(reference.y, reference.height, dim.height),
        dim.width,
        dim.height,
    )
}

/// Place a rectangle inside `reference`, inset from `corner` by
/// `spacer_x` horizontally and `spacer_y` vertically.
#[must_use]
pub const fn corner(reference: Rect, dim: Size, corner: Corner, spacer_x: i32, spacer_y: i32) -> Rect {
    let x = if corner.is_right() {
        reference.x + reference.width - dim.width - spacer_x
    } else {
        reference.x + spacer_x
    };
    let y = if corner.is_bottom() {
        reference.y + reference.height - dim.height - spacer_y
    } else {
        reference.y + spacer_y
    };
    Rect::new(x, y, dim.width, dim.height)
}

/// [`corner`] with the same inset on both axes.
#[inline]
#[must_use]
pub const fn corner_uniform(reference: Rect, dim: Size, which: Corner, spacer: i32) -> Rect {
    corner(reference, dim, which, spacer, spacer)
}

// ── Outside a reference ─────────────────────────────────────────────────

/// Default-size rectangle below and left-aligned with `reference`.
#[must_use]
pub const fn under(reference: Rect) -> Rect {
    under_sized(reference, DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_SPACER)
}

/// Rectangle below and left-aligned with `reference`.
#[must_use]
pub const fn under_sized(reference: Rect, width: i32, height: i32, spacer: i32) -> Rect {
    positioned(
        Positional::below(Justify::Start),
        reference,
        Size::new(width, height),
        spacer,
    )
}

/// Default-size rectangle above and left-aligned with `reference`.
#[must_use]
pub const fn over(reference: Rect) -> Rect {
    over_sized(reference, DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_SPACER)
}

/// Rectangle above and left-aligned with `reference`.
#[must_use]
pub const fn over_sized(reference: Rect, width: i32, height: i32, spacer: i32) -> Rect {
    positioned(
        Positional::above(Justify::Start),
        reference,
        Size::new(width, height),
        spacer,
    )
}

/// Default-size rectangle left of and top-aligned with `reference`.
#[must_use]
pub const fn left_of(reference: Rect) -> Rect {
    left_of_sized(reference, DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_SPACER)
}

/// Rectangle left of and top-aligned with `reference`.
#[must_use]
pub const fn left_of_sized(reference: Rect, width: i32, height: i32, spacer: i32) -> Rect {
    positioned(
        Positional::left(Justify::Start),
        reference,
        Size::new(width, height),
        spacer,
    )
}

/// Default-size rectangle right of and top-aligned with `reference`.
#[must_use]
pub const fn right_of(reference: Rect) -> Rect {
    right_of_sized(reference, DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_SPACER)
}

/// Rectangle right of and top-aligned with `reference`.
#[must_use]
pub const fn right_of_sized(reference: Rect, width: i32, height: i32, spacer: i32) -> Rect {
    positioned(
        Positional::right(Justify::Start),
        reference,
        Size::new(width, height),
        spacer,
    )
}

// ── Inside a reference, centered on an edge ─────────────────────────────

/// Centered along the left edge of `reference`.
#[must_use]
pub const fn center_left(reference: Rect, width: i32, height: i32) -> Rect {
    center_on_edge(Direction::Left, reference, Size::new(width, height), DEFAULT_SPACER)
}

/// Default-size rectangle centered along the left edge of a panel of size `outer`.
#[must_use]
pub const fn center_left_in(outer: Size) -> Rect {
    center_on_edge(Direction::Left, Rect::from_size(outer), DEFAULT_SIZE, DEFAULT_SPACER)
}

/// Centered along the right edge of `reference`.
#[must_use]
pub const fn center_right(reference: Rect, width: i32, height: i32) -> Rect {
    center_on_edge(Direction::Right, reference, Size::new(width, height), DEFAULT_SPACER)
}

/// Default-size rectangle centered along the right edge of a panel of size `outer`.
#[must_use]
pub const fn center_right_in(outer: Size) -> Rect {
    center_on_edge(Direction::Right, Rect::from_size(outer), DEFAULT_SIZE, DEFAULT_SPACER)
}

/// Centered along the top edge of `reference`.
#[must_use]
pub const fn center_top(reference: Rect, width: i32, height: i32) -> Rect {
    center_on_edge(Direction::Up, reference, Size::new(width, height), DEFAULT_SPACER)
}

/// Default-size rectangle centered along the top edge of a panel of size `outer`.
#[must_use]
pub const fn center_top_in(outer: Size) -> Rect {
    center_on_edge(Direction::Up, Rect::from_size(outer), DEFAULT_SIZE, DEFAULT_SPACER)
}

/// Centered along the bottom edge of `reference`.
#[must_use]
pub const fn center_bottom(reference: Rect, width: i32, height: i32) -> Rect {
    center_on_edge(Direction::Down, reference, Size::new(width, height), DEFAULT_SPACER)
}

/// Default-size rectangle centered along the bottom edge of a panel of size `outer`.
#[must_use]
pub const fn center_bottom_in(outer: Size) -> Rect {
    center_on_edge(Direction::Down, Rect::from_size(outer), DEFAULT_SIZE, DEFAULT_SPACER)
}

// ── Inside a reference, fully centered ──────────────────────────────────

/// A `width` x `height` rectangle centered in `reference`.
#[must_use]
pub const fn center_sized(reference: Rect, width: i32, height: i32) -> Rect {
    center(reference, Size::new(width, height))
}

/// Default-size rectangle centered in a panel of size `outer`.
#[must_use]
pub const fn center_in(outer: Size) -> Rect {
    center(Rect::from_size(outer), DEFAULT_SIZE)
}

// ── Inside a reference, in a corner ─────────────────────────────────────

/// A `width` x `height` rectangle in the top-left corner of `reference`.
#[must_use]
pub const fn top_left(reference: Rect, width: i32, height: i32) -> Rect {
    corner_uniform(reference, Size::new(width, height), Corner::TopLeft, DEFAULT_SPACER)
}

/// A `width` x `height` rectangle in the top-right corner of `reference`.
#[must_use]
pub const fn top_right(reference: Rect, width: i32, height: i32) -> Rect {
    corner_uniform(reference, Size::new(width, height), Corner::TopRight, DEFAULT_SPACER)
}

/// A `width` x `height` rectangle in the bottom-left corner of `reference`.
#[must_use]
pub const fn bottom_left(reference: Rect, width: i32, height: i32) -> Rect {
    corner_uniform(reference, Size::new(width, height), Corner::BottomLeft, DEFAULT_SPACER)
}

/// A `width` x `height` rectangle in the bottom-right corner of `reference`.
#[must_use]
pub const fn bottom_right(reference: Rect, width: i32, height: i32) -> Rect {
    corner_uniform(reference, Size::new(width, height), Corner::BottomRight, DEFAULT_SPACER)
}

/// Default-size rectangle in the top-left corner of `reference`.
#[must_use]
pub const fn top_left_default(reference: Rect) -> Rect {
    top_left(reference, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// Default-size rectangle in the top-right corner of `reference`.
#[must_use]
pub const fn top_right_default(reference: Rect) -> Rect {
    top_right(reference, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// Default-size rectangle in the bottom-left corner of `reference`.
#[must_use]
pub const fn bottom_left_default(reference: Rect) -> Rect {
    bottom_left(reference, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// Default-size rectangle in the bottom-right corner of `reference`.
#[must_use]
pub const fn bottom_right_default(reference: Rect) -> Rect {
    bottom_right(reference, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REF: Rect = Rect::new(10, 10, 100, 30);
    const DIM: Size = Size::new(40, 14);

    #[test]
    fn up_center() {
        let r = positioned(Positional::above(Justify::Center), REF, DIM, 5);
        assert_eq!(r, Rect::new(40, -9, 40, 14));
    }

    #[test]
    fn up_start_and_end() {
        let start = positioned(Positional::above(Justify::Start), REF, DIM, 5);
        assert_eq!((start.x, start.y), (10, -9));
        let end = positioned(Positional::above(Justify::End), REF, DIM, 5);
        assert_eq!((end.x, end.y), (70, -9));
    }

    #[test]
    fn down_is_below_bottom_edge() {
        let r = positioned(Positional::below(Justify::End), REF, DIM, 5);
        assert_eq!(r, Rect::new(70, 45, 40, 14));
    }

    #[test]
    fn left_justifies_vertically() {
        let start = positioned(Positional::left(Justify::Start), REF, DIM, 5);
        assert_eq!(start, Rect::new(-35, 10, 40, 14));
        // 10 + 30/2 - 14/2 = 18
        let center = positioned(Positional::left(Justify::Center), REF, DIM, 5);
        assert_eq!(center.y, 18);
        // 10 + 30 - 14 = 26
        let end = positioned(Positional::left(Justify::End), REF, DIM, 5);
        assert_eq!(end.y, 26);
    }

    #[test]
    fn right_is_past_right_edge() {
        let r = positioned(Positional::right(Justify::Center), REF, DIM, 5);
        assert_eq!(r, Rect::new(115, 18, 40, 14));
    }

    #[test]
    fn center_truncates_toward_zero() {
        // 0 + 5/2 - 2/2 = 2 - 1 = 1
        let r = center(Rect::new(0, 0, 5, 5), Size::new(2, 2));
        assert_eq!((r.x, r.y), (1, 1));
        // -3/2 truncates to -1: 0 + 2 - (-1) = 3
        let r = center(Rect::new(0, 0, 4, 4), Size::new(-3, -3));
        assert_eq!((r.x, r.y), (3, 3));
    }

    #[test]
    fn center_on_each_edge() {
        let panel = Rect::new(0, 0, 200, 100);
        let dim = Size::new(50, 20);
        assert_eq!(center_on_edge(Direction::Up, panel, dim, 4), Rect::new(75, 4, 50, 20));
        assert_eq!(center_on_edge(Direction::Down, panel, dim, 4), Rect::new(75, 76, 50, 20));
        assert_eq!(center_on_edge(Direction::Left, panel, dim, 4), Rect::new(4, 40, 50, 20));
        assert_eq!(center_on_edge(Direction::Right, panel, dim, 4), Rect::new(146, 40, 50, 20));
    }

    #[test]
    fn corners() {
        let panel = Rect::new(0, 0, 100, 100);
        let dim = Size::new(20, 10);
        assert_eq!(corner_uniform(panel, dim, Corner::TopLeft, 5), Rect::new(5, 5, 20, 10));
        assert_eq!(corner_uniform(panel, dim, Corner::TopRight, 5), Rect::new(75, 5, 20, 10));
        assert_eq!(corner_uniform(panel, dim, Corner::BottomLeft, 5), Rect::new(5, 85, 20, 10));
        assert_eq!(corner_uniform(panel, dim, Corner::BottomRight, 5), Rect::new(75, 85, 20, 10));
    }

    #[test]
    fn corner_uses_separate_spacers() {
        let r = corner(Rect::new(10, 20, 100, 50), Size::new(10, 10), Corner::BottomRight, 3, 7);
        assert_eq!(r, Rect::new(97, 53, 10, 10));
    }

    #[test]
    fn shorthands_use_defaults() {
        let reference = Rect::new(50, 50, 80, 20);
        assert_eq!(under(reference), Rect::new(50, 80, 100, 30));
        assert_eq!(over(reference), Rect::new(50, 10, 100, 30));
        assert_eq!(left_of(reference), Rect::new(-60, 50, 100, 30));
        assert_eq!(right_of(reference), Rect::new(140, 50, 100, 30));
        assert_eq!(under_sized(reference, 10, 10, 0), Rect::new(50, 70, 10, 10));
    }

    #[test]
    fn panel_shorthands() {
        let outer = Size::new(300, 200);
        assert_eq!(center_in(outer), Rect::new(100, 85, 100, 30));
        assert_eq!(center_left_in(outer), Rect::new(10, 85, 100, 30));
        assert_eq!(center_right_in(outer), Rect::new(190, 85, 100, 30));
        assert_eq!(center_top_in(outer), Rect::new(100, 10, 100, 30));
        assert_eq!(center_bottom_in(outer), Rect::new(100, 160, 100, 30));
        assert_eq!(center_sized(Rect::new(0, 0, 10, 10), 4, 4), Rect::new(3, 3, 4, 4));
    }

    #[test]
    fn corner_shorthands() {
        let panel = Rect::new(0, 0, 300, 200);
        assert_eq!(top_left_default(panel), Rect::new(10, 10, 100, 30));
        assert_eq!(top_right_default(panel), Rect::new(190, 10, 100, 30));
        assert_eq!(bottom_left_default(panel), Rect::new(10, 160, 100, 30));
        assert_eq!(bottom_right_default(panel), Rect::new(190, 160, 100, 30));
        assert_eq!(top_right(panel, 20, 20), Rect::new(270, 10, 20, 20));
    }

    #[test]
    fn edge_shorthands_match_primitive() {
        let reference = Rect::new(0, 0, 60, 40);
        assert_eq!(
            center_left(reference, 10, 10),
            center_on_edge(Direction::Left, reference, Size::new(10, 10), DEFAULT_SPACER)
        );
        assert_eq!(center_top(reference, 10, 10).y, DEFAULT_SPACER);
        assert_eq!(center_right(reference, 10, 10).x, 40);
        assert_eq!(center_bottom(reference, 10, 10).y, 20);
    }
}
