//! Core geometry types
//!
//! Points, sizes and rectangles in content coordinates, plus the scroll axis
//! helpers used to project them onto the direction a collection scrolls in.

// ─────────────────────────────────────────────────────────────────────────────
// Points and Sizes
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `other` to `self`
    pub fn delta_from(&self, other: Point) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    /// Translate the point by a vector
    pub fn translate(&self, by: Vec2) -> Self {
        Point::new(self.x + by.x, self.y + by.y)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rectangles
// ─────────────────────────────────────────────────────────────────────────────

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rect of the given size centered on `center`
    pub fn from_center_size(center: Point, size: Size) -> Self {
        Self {
            origin: Point::new(
                center.x - size.width / 2.0,
                center.y - size.height / 2.0,
            ),
            size,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// True when the two rects share a region of positive area.
    ///
    /// Rects that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.origin.x < other.max_x()
            && other.origin.x < self.max_x()
            && self.origin.y < other.max_y()
            && other.origin.y < self.max_y()
    }

    /// Grow the rect by a delta on every side
    pub fn outset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x - dx, self.origin.y - dy),
            size: Size::new(
                self.size.width + 2.0 * dx,
                self.size.height + 2.0 * dy,
            ),
        }
    }
}

/// Insets applied to the edges of a section
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scroll Axis
// ─────────────────────────────────────────────────────────────────────────────

/// Axis a collection scrolls along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollDirection {
    /// Vertical scrolling (default)
    #[default]
    Vertical,
    /// Horizontal scrolling
    Horizontal,
}

impl ScrollDirection {
    /// Coordinate of `point` along the scroll axis
    pub fn main(&self, point: Point) -> f32 {
        match self {
            ScrollDirection::Vertical => point.y,
            ScrollDirection::Horizontal => point.x,
        }
    }

    /// Extent of `size` along the scroll axis
    pub fn main_extent(&self, size: Size) -> f32 {
        match self {
            ScrollDirection::Vertical => size.height,
            ScrollDirection::Horizontal => size.width,
        }
    }

    /// Extent of `size` across the scroll axis
    pub fn cross_extent(&self, size: Size) -> f32 {
        match self {
            ScrollDirection::Vertical => size.width,
            ScrollDirection::Horizontal => size.height,
        }
    }

    /// Build a point from (main, cross) coordinates
    pub fn point(&self, main: f32, cross: f32) -> Point {
        match self {
            ScrollDirection::Vertical => Point::new(cross, main),
            ScrollDirection::Horizontal => Point::new(main, cross),
        }
    }

    /// Build a size from (main, cross) extents
    pub fn size(&self, main: f32, cross: f32) -> Size {
        match self {
            ScrollDirection::Vertical => Size::new(cross, main),
            ScrollDirection::Horizontal => Size::new(main, cross),
        }
    }

    /// Shift `point` by `amount` along the scroll axis
    pub fn shift(&self, point: Point, amount: f32) -> Point {
        match self {
            ScrollDirection::Vertical => Point::new(point.x, point.y + amount),
            ScrollDirection::Horizontal => Point::new(point.x + amount, point.y),
        }
    }

    /// Leading inset along the scroll axis
    pub fn main_leading(&self, insets: &EdgeInsets) -> f32 {
        match self {
            ScrollDirection::Vertical => insets.top,
            ScrollDirection::Horizontal => insets.left,
        }
    }

    /// Trailing inset along the scroll axis
    pub fn main_trailing(&self, insets: &EdgeInsets) -> f32 {
        match self {
            ScrollDirection::Vertical => insets.bottom,
            ScrollDirection::Horizontal => insets.right,
        }
    }

    /// Leading inset across the scroll axis
    pub fn cross_leading(&self, insets: &EdgeInsets) -> f32 {
        match self {
            ScrollDirection::Vertical => insets.left,
            ScrollDirection::Horizontal => insets.top,
        }
    }

    /// Trailing inset across the scroll axis
    pub fn cross_trailing(&self, insets: &EdgeInsets) -> f32 {
        match self {
            ScrollDirection::Vertical => insets.right,
            ScrollDirection::Horizontal => insets.bottom,
        }
    }
}
