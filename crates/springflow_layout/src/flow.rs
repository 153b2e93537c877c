//! Natural (non-physics) layout
//!
//! [`BaseLayout`] is what the spring layout asks for resting geometry. The
//! [`FlowLayout`] implementation lays sections of fixed-size items into lines
//! across the scroll axis, with optional full-width headers and footers.
//!
//! # Example
//!
//! ```rust
//! use springflow_core::{EdgeInsets, ElementId, Size};
//! use springflow_layout::{BaseLayout, FlowLayout};
//!
//! let mut flow = FlowLayout::new(vec![12, 4], Size::new(100.0, 50.0))
//!     .with_spacing(10.0, 10.0)
//!     .with_section_inset(EdgeInsets::uniform(5.0))
//!     .with_header_extent(30.0);
//! flow.prepare(Size::new(320.0, 480.0));
//!
//! assert!(flow.natural_attributes_for(&ElementId::header(1)).is_some());
//! ```

use rustc_hash::FxHashMap;
use springflow_core::{EdgeInsets, ElementId, LayoutAttributes, Rect, ScrollDirection, Size};

/// Source of natural element geometry
pub trait BaseLayout {
    /// Recompute geometry for a viewport of the given size
    fn prepare(&mut self, viewport: Size);

    fn scroll_direction(&self) -> ScrollDirection;

    /// Natural attributes of every element whose frame intersects `rect`
    fn natural_attributes_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes>;

    /// Natural attributes of one element
    fn natural_attributes_for(&self, id: &ElementId) -> Option<LayoutAttributes>;

    /// Size of the scrollable content
    fn content_size(&self) -> Size;
}

/// Line-based grid of fixed-size items grouped in sections
#[derive(Debug, Clone)]
pub struct FlowLayout {
    sections: Vec<usize>,
    item_size: Size,
    line_spacing: f32,
    interitem_spacing: f32,
    section_inset: EdgeInsets,
    header_extent: f32,
    footer_extent: f32,
    direction: ScrollDirection,

    // Computed by `prepare`, ordered along the scroll axis
    attributes: Vec<LayoutAttributes>,
    lookup: FxHashMap<ElementId, usize>,
    content_size: Size,
    prepared_for: Option<Size>,
}

impl FlowLayout {
    /// Create a flow of `sections` (item count per section)
    pub fn new(sections: impl Into<Vec<usize>>, item_size: Size) -> Self {
        Self {
            sections: sections.into(),
            item_size,
            line_spacing: 0.0,
            interitem_spacing: 0.0,
            section_inset: EdgeInsets::ZERO,
            header_extent: 0.0,
            footer_extent: 0.0,
            direction: ScrollDirection::Vertical,
            attributes: Vec::new(),
            lookup: FxHashMap::default(),
            content_size: Size::ZERO,
            prepared_for: None,
        }
    }

    /// Spacing between lines and between items within a line
    pub fn with_spacing(mut self, line: f32, interitem: f32) -> Self {
        self.line_spacing = line;
        self.interitem_spacing = interitem;
        self
    }

    pub fn with_section_inset(mut self, inset: EdgeInsets) -> Self {
        self.section_inset = inset;
        self
    }

    /// Header extent along the scroll axis (0 = no headers)
    pub fn with_header_extent(mut self, extent: f32) -> Self {
        self.header_extent = extent;
        self
    }

    /// Footer extent along the scroll axis (0 = no footers)
    pub fn with_footer_extent(mut self, extent: f32) -> Self {
        self.footer_extent = extent;
        self
    }

    pub fn with_direction(mut self, direction: ScrollDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn sections(&self) -> &[usize] {
        &self.sections
    }

    /// Replace the data set. Geometry is recomputed immediately if the layout
    /// was already prepared, so freshly inserted items resolve at once.
    pub fn set_sections(&mut self, sections: impl Into<Vec<usize>>) {
        self.sections = sections.into();
        if let Some(viewport) = self.prepared_for {
            self.compute(viewport);
        }
    }

    /// Every computed element, in scroll-axis order
    pub fn attributes(&self) -> &[LayoutAttributes] {
        &self.attributes
    }

    fn push(&mut self, id: ElementId, main: f32, cross: f32, main_extent: f32, cross_extent: f32) {
        let dir = self.direction;
        let frame = Rect::from_origin_size(
            dir.point(main, cross),
            dir.size(main_extent, cross_extent),
        );
        self.lookup.insert(id, self.attributes.len());
        self.attributes.push(LayoutAttributes::new(id, frame));
    }

    fn compute(&mut self, viewport: Size) {
        let dir = self.direction;
        let inset = self.section_inset;
        let cross_total = dir.cross_extent(viewport);
        let item_main = dir.main_extent(self.item_size);
        let item_cross = dir.cross_extent(self.item_size);

        self.attributes.clear();
        self.lookup.clear();

        let mut main = 0.0;
        for section in 0..self.sections.len() {
            let count = self.sections[section];

            if self.header_extent > 0.0 {
                self.push(ElementId::header(section), main, 0.0, self.header_extent, cross_total);
                main += self.header_extent;
            }

            main += dir.main_leading(&inset);
            let cross_start = dir.cross_leading(&inset);
            let available = (cross_total - cross_start - dir.cross_trailing(&inset)).max(0.0);
            let per_line = ((available + self.interitem_spacing)
                / (item_cross + self.interitem_spacing))
                .floor()
                .max(1.0) as usize;

            for item in 0..count {
                let line = (item / per_line) as f32;
                let column = (item % per_line) as f32;
                self.push(
                    ElementId::cell(section, item),
                    main + line * (item_main + self.line_spacing),
                    cross_start + column * (item_cross + self.interitem_spacing),
                    item_main,
                    item_cross,
                );
            }

            let lines = count.div_ceil(per_line);
            if lines > 0 {
                main += lines as f32 * item_main + (lines - 1) as f32 * self.line_spacing;
            }
            main += dir.main_trailing(&inset);

            if self.footer_extent > 0.0 {
                self.push(ElementId::footer(section), main, 0.0, self.footer_extent, cross_total);
                main += self.footer_extent;
            }
        }

        self.content_size = dir.size(main, cross_total);
        self.prepared_for = Some(viewport);
        tracing::trace!(
            elements = self.attributes.len(),
            main_extent = main,
            "flow layout computed"
        );
    }
}

impl BaseLayout for FlowLayout {
    fn prepare(&mut self, viewport: Size) {
        if self.prepared_for != Some(viewport) {
            self.compute(viewport);
        }
    }

    fn scroll_direction(&self) -> ScrollDirection {
        self.direction
    }

    fn natural_attributes_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes> {
        let dir = self.direction;
        let lo = dir.main(rect.origin);
        let hi = lo + dir.main_extent(rect.size);

        // Frames are ordered by both leading and trailing main-axis edge
        let first = self.attributes.partition_point(|attrs| {
            let frame = attrs.frame();
            dir.main(frame.origin) + dir.main_extent(frame.size) <= lo
        });

        self.attributes[first..]
            .iter()
            .take_while(|attrs| dir.main(attrs.frame().origin) < hi)
            .filter(|attrs| attrs.frame().intersects(&rect))
            .copied()
            .collect()
    }

    fn natural_attributes_for(&self, id: &ElementId) -> Option<LayoutAttributes> {
        self.lookup.get(id).map(|&index| self.attributes[index])
    }

    fn content_size(&self) -> Size {
        self.content_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use springflow_core::Point;

    fn grid() -> FlowLayout {
        let mut flow = FlowLayout::new(vec![100], Size::new(100.0, 50.0)).with_spacing(10.0, 10.0);
        flow.prepare(Size::new(320.0, 480.0));
        flow
    }

    #[test]
    fn test_items_fill_lines() {
        let flow = grid();
        // (320 + 10) / (100 + 10) = 3 per line
        let third = flow.natural_attributes_for(&ElementId::cell(0, 2)).unwrap();
        let fourth = flow.natural_attributes_for(&ElementId::cell(0, 3)).unwrap();
        assert_eq!(third.center, Point::new(270.0, 25.0));
        assert_eq!(fourth.center, Point::new(50.0, 85.0));
        // 34 lines of 50 with 33 gaps of 10
        assert_eq!(flow.content_size(), Size::new(320.0, 34.0 * 50.0 + 33.0 * 10.0));
    }

    #[test]
    fn test_rect_query_matches_scan() {
        let flow = grid();
        for rect in [
            Rect::new(-100.0, -100.0, 520.0, 680.0),
            Rect::new(0.0, 55.0, 320.0, 5.0),
            Rect::new(0.0, 900.0, 150.0, 200.0),
            Rect::new(0.0, 5000.0, 320.0, 100.0),
        ] {
            let mut fast: Vec<_> =
                flow.natural_attributes_in_rect(rect).iter().map(|a| a.id).collect();
            let mut slow: Vec<_> = flow
                .attributes()
                .iter()
                .filter(|a| a.frame().intersects(&rect))
                .map(|a| a.id)
                .collect();
            fast.sort();
            slow.sort();
            assert_eq!(fast, slow, "rect {rect:?}");
        }
    }

    #[test]
    fn test_spacing_gap_returns_nothing() {
        let flow = grid();
        // Between line 0 (0..50) and line 1 (60..110)
        assert!(flow
            .natural_attributes_in_rect(Rect::new(0.0, 51.0, 320.0, 8.0))
            .is_empty());
    }

    #[test]
    fn test_headers_and_footers_span_cross_axis() {
        let mut flow = FlowLayout::new(vec![2, 2], Size::new(100.0, 50.0))
            .with_header_extent(30.0)
            .with_footer_extent(20.0)
            .with_section_inset(EdgeInsets::new(5.0, 0.0, 5.0, 0.0));
        flow.prepare(Size::new(320.0, 480.0));

        let header = flow.natural_attributes_for(&ElementId::header(1)).unwrap();
        // section 0: 30 header + 5 + 50 + 5 + 20 footer = 110
        assert_eq!(header.frame(), Rect::new(0.0, 110.0, 320.0, 30.0));
        let footer = flow.natural_attributes_for(&ElementId::footer(0)).unwrap();
        assert_eq!(footer.frame(), Rect::new(0.0, 90.0, 320.0, 20.0));
        assert_eq!(flow.content_size().height, 220.0);
    }

    #[test]
    fn test_horizontal_flow() {
        let mut flow = FlowLayout::new(vec![6], Size::new(100.0, 50.0))
            .with_direction(ScrollDirection::Horizontal);
        flow.prepare(Size::new(320.0, 100.0));

        // Two items per column across a height of 100
        let item = flow.natural_attributes_for(&ElementId::cell(0, 3)).unwrap();
        assert_eq!(item.frame(), Rect::new(100.0, 50.0, 100.0, 50.0));
        assert_eq!(flow.content_size(), Size::new(300.0, 100.0));
    }

    #[test]
    fn test_set_sections_recomputes_prepared_layout() {
        let mut flow = grid();
        assert!(flow.natural_attributes_for(&ElementId::cell(0, 100)).is_none());
        flow.set_sections(vec![101]);
        assert!(flow.natural_attributes_for(&ElementId::cell(0, 100)).is_some());
    }
}
