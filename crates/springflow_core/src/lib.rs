//! Springflow Core
//!
//! Foundational types shared by the springflow crates:
//!
//! - **Geometry**: points, sizes, rects and scroll-axis projection
//! - **Elements**: stable element identifiers and their layout attributes
//! - **Orientation**: the device orientation a layout pass was computed for

pub mod element;
pub mod geometry;

pub use element::{ElementCategory, ElementId, ElementKind, LayoutAttributes, Orientation};
pub use geometry::{EdgeInsets, Point, Rect, ScrollDirection, Size, Vec2};
