//! Element identity and layout attributes
//!
//! An [`ElementId`] names one logical slot in a collection (a cell, or a section
//! header/footer) and stays stable across layout passes. [`LayoutAttributes`]
//! carry the geometry computed for that slot; their center is rewritten by the
//! spring simulation while the element is on screen.

use crate::geometry::{Point, Rect, Size};

/// What kind of element a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// A content item
    Cell,
    /// Section header
    Header,
    /// Section footer
    Footer,
}

/// Bookkeeping category of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    /// Content cells
    Content,
    /// Section headers and footers
    HeaderFooter,
}

impl ElementKind {
    pub fn category(&self) -> ElementCategory {
        match self {
            ElementKind::Cell => ElementCategory::Content,
            ElementKind::Header | ElementKind::Footer => ElementCategory::HeaderFooter,
        }
    }
}

/// Stable identifier of one element slot
///
/// Equality and hashing only consider the slot, never the element's geometry.
/// Headers and footers use `item == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    pub kind: ElementKind,
    pub section: usize,
    pub item: usize,
}

impl ElementId {
    pub const fn cell(section: usize, item: usize) -> Self {
        Self {
            kind: ElementKind::Cell,
            section,
            item,
        }
    }

    pub const fn header(section: usize) -> Self {
        Self {
            kind: ElementKind::Header,
            section,
            item: 0,
        }
    }

    pub const fn footer(section: usize) -> Self {
        Self {
            kind: ElementKind::Footer,
            section,
            item: 0,
        }
    }

    pub fn category(&self) -> ElementCategory {
        self.kind.category()
    }
}

/// Geometry of one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutAttributes {
    pub id: ElementId,
    /// Center in content coordinates
    pub center: Point,
    pub size: Size,
}

impl LayoutAttributes {
    pub fn new(id: ElementId, frame: Rect) -> Self {
        Self {
            id,
            center: frame.center(),
            size: frame.size,
        }
    }

    pub fn category(&self) -> ElementCategory {
        self.id.category()
    }

    /// Frame derived from the current center and size
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }
}

/// Device orientation as reported by the hosting container
///
/// Anchor geometry depends on it, so a change invalidates every spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    pub fn is_landscape(&self) -> bool {
        matches!(self, Orientation::LandscapeLeft | Orientation::LandscapeRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_footer_of_a_section_are_distinct() {
        assert_ne!(ElementId::header(0), ElementId::footer(0));
        assert_eq!(ElementId::header(0).category(), ElementCategory::HeaderFooter);
        assert_eq!(ElementId::cell(0, 0).category(), ElementCategory::Content);
    }

    #[test]
    fn test_frame_follows_center() {
        let frame = Rect::new(0.0, 0.0, 40.0, 20.0);
        let mut attrs = LayoutAttributes::new(ElementId::cell(0, 3), frame);
        attrs.center.y += 5.0;
        assert_eq!(attrs.frame(), Rect::new(0.0, 5.0, 40.0, 20.0));
    }
}
