//! Scrollable container interface
//!
//! The host's scroll view owns the viewport, the touch tracking and the device
//! orientation. The spring layout only reads them through [`ScrollContainer`].

use springflow_core::{Orientation, Point, Rect, ScrollDirection, Size};

/// What the spring layout needs from the scroll view hosting it
pub trait ScrollContainer {
    /// Visible region in content coordinates
    fn bounds(&self) -> Rect;

    /// Current touch location in content coordinates, if a gesture is active
    fn pointer_location(&self) -> Option<Point>;

    fn orientation(&self) -> Orientation;
}

/// Plain snapshot of a scroll view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollViewport {
    pub bounds: Rect,
    pub pointer: Option<Point>,
    pub orientation: Orientation,
}

impl ScrollViewport {
    /// Viewport of `size` scrolled to the content origin
    pub fn new(size: Size) -> Self {
        Self {
            bounds: Rect::from_origin_size(Point::ZERO, size),
            pointer: None,
            orientation: Orientation::Portrait,
        }
    }

    pub fn with_pointer(mut self, pointer: Point) -> Self {
        self.pointer = Some(pointer);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Bounds moved by `amount` along `direction`
    pub fn scrolled_by(&self, direction: ScrollDirection, amount: f32) -> Rect {
        Rect::from_origin_size(direction.shift(self.bounds.origin, amount), self.bounds.size)
    }

    /// Bounds with the origin moved to `offset`
    pub fn scrolled_to(&self, offset: Point) -> Rect {
        Rect::from_origin_size(offset, self.bounds.size)
    }

    /// Rotate to `orientation`, swapping the viewport's width and height
    /// when switching between portrait and landscape
    pub fn rotate(&mut self, orientation: Orientation) {
        if orientation.is_landscape() != self.orientation.is_landscape() {
            let size = self.bounds.size;
            self.bounds.size = Size::new(size.height, size.width);
        }
        self.orientation = orientation;
    }
}

impl ScrollContainer for ScrollViewport {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn pointer_location(&self) -> Option<Point> {
        self.pointer
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }
}
