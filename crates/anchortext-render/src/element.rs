#![forbid(unsafe_code)]

//! Reference UI elements.
//!
//! Text can be anchored to anything that knows its bounds and whether it
//! is currently shown. Toolkit widgets implement [`Element`] in the host;
//! [`Widget`] is a plain stand-in.

use anchortext_core::geometry::Rect;

/// Read-only view of a UI element used as a placement reference.
pub trait Element {
    /// Element bounds in the same coordinate space as the draw sink.
    fn bounds(&self) -> Rect;

    /// Whether the element is currently shown.
    fn is_visible(&self) -> bool;
}

impl<E: Element + ?Sized> Element for &E {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}

/// An element described only by its bounds and visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widget {
    /// Element bounds.
    pub bounds: Rect,
    /// Whether the element is shown.
    pub visible: bool,
}

impl Widget {
    /// A visible element.
    #[must_use]
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            visible: true,
        }
    }

    /// A hidden element.
    #[must_use]
    pub const fn hidden(bounds: Rect) -> Self {
        Self {
            bounds,
            visible: false,
        }
    }

    /// Show or hide the element.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Element for Widget {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
