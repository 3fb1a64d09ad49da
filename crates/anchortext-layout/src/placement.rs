#![forbid(unsafe_code)]

//! Placement vocabulary: which side, which alignment, which corner.

use serde::{Deserialize, Serialize};

/// Side of a reference rectangle on which a new rectangle is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Above the reference.
    Up,
    /// Below the reference.
    Down,
    /// Left of the reference.
    Left,
    /// Right of the reference.
    Right,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Whether placement moves along the vertical axis.
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Alignment along the axis perpendicular to a [`Direction`].
///
/// For `Up`/`Down` this is horizontal (start = left edge); for
/// `Left`/`Right` it is vertical (start = top edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    /// Align leading edges.
    #[default]
    Start,
    /// Center on the reference.
    Center,
    /// Align trailing edges.
    End,
}

impl Justify {
    /// All justifications, in declaration order.
    pub const ALL: [Justify; 3] = [Justify::Start, Justify::Center, Justify::End];
}

/// A complete placement: side plus alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Positional {
    /// Side of the reference.
    pub direction: Direction,
    /// Alignment along that side.
    #[serde(default)]
    pub justify: Justify,
}

impl Positional {
    /// Create a placement.
    #[inline]
    #[must_use]
    pub const fn new(direction: Direction, justify: Justify) -> Self {
        Self { direction, justify }
    }

    /// Above the reference.
    #[inline]
    #[must_use]
    pub const fn above(justify: Justify) -> Self {
        Self::new(Direction::Up, justify)
    }

    /// Below the reference.
    #[inline]
    #[must_use]
    pub const fn below(justify: Justify) -> Self {
        Self::new(Direction::Down, justify)
    }

    /// Left of the reference.
    #[inline]
    #[must_use]
    pub const fn left(justify: Justify) -> Self {
        Self::new(Direction::Left, justify)
    }

    /// Right of the reference.
    #[inline]
    #[must_use]
    pub const fn right(justify: Justify) -> Self {
        Self::new(Direction::Right, justify)
    }
}

/// Corner of a reference rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    /// Top-left corner.
    #[default]
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl Corner {
    /// All corners, in declaration order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Whether the corner is on the right edge.
    #[inline]
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    /// Whether the corner is on the bottom edge.
    #[inline]
    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_directions() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Right.is_vertical());
    }

    #[test]
    fn corner_edges() {
        assert!(!Corner::TopLeft.is_right() && !Corner::TopLeft.is_bottom());
        assert!(Corner::TopRight.is_right() && !Corner::TopRight.is_bottom());
        assert!(!Corner::BottomLeft.is_right() && Corner::BottomLeft.is_bottom());
        assert!(Corner::BottomRight.is_right() && Corner::BottomRight.is_bottom());
    }

    #[test]
    fn positional_shortcuts() {
        assert_eq!(
            Positional::above(Justify::End),
            Positional::new(Direction::Up, Justify::End)
        );
        assert_eq!(Positional::below(Justify::Start).direction, Direction::Down);
        assert_eq!(Positional::left(Justify::Center).direction, Direction::Left);
        assert_eq!(Positional::right(Justify::Center).direction, Direction::Right);
    }

    #[test]
    fn positional_deserializes_from_config() {
        let p: Positional = serde_json::from_str(r#"{"direction":"left","justify":"center"}"#)
            .expect("valid placement");
        assert_eq!(p, Positional::new(Direction::Left, Justify::Center));

        let p: Positional = serde_json::from_str(r#"{"direction":"down"}"#).expect("justify defaults");
        assert_eq!(p.justify, Justify::Start);

        let c: Corner = serde_json::from_str(r#""bottom_right""#).expect("valid corner");
        assert_eq!(c, Corner::BottomRight);
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let err = serde_json::from_str::<Direction>(r#""sideways""#);
        assert!(err.is_err());
    }
}
