//! Spring flow layout
//!
//! Wraps a [`BaseLayout`] and attaches every element near the viewport to its
//! natural position with a spring. Two entry points drive it:
//!
//! - [`prepare_layout`](SpringFlowLayout::prepare_layout) runs once per layout
//!   pass. It diffs the elements inside the overscanned viewport against the
//!   live bodies, detaching what left and attaching what arrived.
//! - [`should_invalidate_layout_for_bounds_change`](SpringFlowLayout::should_invalidate_layout_for_bounds_change)
//!   runs on every scroll tick. It nudges each live element by the scroll delta,
//!   damped by its distance from the touch point, and never asks for a relayout.
//!
//! The simulation then animates elements back to their anchors as it is
//! stepped. Rendering reads positions through
//! [`items_in_rect`](SpringFlowLayout::items_in_rect) and
//! [`layout_attributes_for_element`](SpringFlowLayout::layout_attributes_for_element).
//!
//! # Example
//!
//! ```rust
//! use springflow_core::{Point, ScrollDirection, Size};
//! use springflow_layout::{
//!     FlowLayout, ScrollViewport, SpringFlowConfig, SpringFlowLayout,
//! };
//!
//! let flow = FlowLayout::new(vec![200], Size::new(100.0, 50.0)).with_spacing(10.0, 10.0);
//! let mut layout = SpringFlowLayout::new(flow, SpringFlowConfig::default()).unwrap();
//! let mut viewport =
//!     ScrollViewport::new(Size::new(320.0, 480.0)).with_pointer(Point::new(160.0, 200.0));
//!
//! layout.prepare_layout(&viewport);
//!
//! // Finger drags the content up by 40 points
//! let next = viewport.scrolled_by(ScrollDirection::Vertical, 40.0);
//! assert!(!layout.should_invalidate_layout_for_bounds_change(&viewport, next));
//! viewport.bounds = next;
//! layout.prepare_layout(&viewport);
//!
//! layout.step(1.0 / 60.0);
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use springflow_animation::{BodyRegistry, SpringAnimator};
use springflow_core::{ElementId, LayoutAttributes, Orientation, Point, Rect, Size};

use crate::config::SpringFlowConfig;
use crate::container::ScrollContainer;
use crate::error::Result;
use crate::flow::BaseLayout;
use crate::resistance::{active_pointer, ScrollResistance};
use crate::visibility::VisibilityIndex;

/// Whether the live bodies currently match the visibility index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPhase {
    /// Bodies and index agree, orientation unchanged
    #[default]
    Stable,
    /// Rebuilding every body after an orientation change
    Reflowing,
}

/// Outcome of one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutPassReport {
    /// Bodies detached because their element left the overscan rect
    pub evicted: usize,
    /// Bodies attached for elements that entered it or were re-anchored
    pub admitted: usize,
    /// Bodies detached because their element's natural position moved
    pub reanchored: usize,
    /// Whether an orientation change cleared every body first
    pub orientation_reset: bool,
    /// Bodies alive after the pass
    pub live: usize,
}

/// Layout whose elements hang off their natural positions on springs
pub struct SpringFlowLayout<L: BaseLayout, R: BodyRegistry = SpringAnimator> {
    base: L,
    registry: R,
    visible: VisibilityIndex,
    config: SpringFlowConfig,
    /// Scroll-axis delta of the most recent bounds change
    latest_delta: f32,
    orientation: Option<Orientation>,
    phase: LayoutPhase,
}

impl<L: BaseLayout> SpringFlowLayout<L, SpringAnimator> {
    /// Create a layout backed by the default [`SpringAnimator`]
    pub fn new(base: L, config: SpringFlowConfig) -> Result<Self> {
        Self::with_registry(base, SpringAnimator::new(), config)
    }

    /// Step the simulation by wall-clock time since the last tick
    pub fn tick(&mut self) {
        self.registry.tick();
    }
}

impl<L: BaseLayout, R: BodyRegistry> SpringFlowLayout<L, R> {
    /// Create a layout on top of a custom body registry
    pub fn with_registry(base: L, registry: R, config: SpringFlowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            base,
            registry,
            visible: VisibilityIndex::new(),
            config,
            latest_delta: 0.0,
            orientation: None,
            phase: LayoutPhase::Stable,
        })
    }

    pub fn base(&self) -> &L {
        &self.base
    }

    /// Mutable access to the natural layout, e.g. to change the data set.
    /// The next layout pass re-anchors every element whose natural position moved.
    pub fn base_mut(&mut self) -> &mut L {
        &mut self.base
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn visibility(&self) -> &VisibilityIndex {
        &self.visible
    }

    pub fn config(&self) -> &SpringFlowConfig {
        &self.config
    }

    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    pub fn latest_delta(&self) -> f32 {
        self.latest_delta
    }

    /// Override the scroll resistance factor
    pub fn set_resistance_factor(&mut self, factor: f32) -> Result<()> {
        let config = self.config.with_resistance_factor(factor);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    fn resistance(&self) -> ScrollResistance {
        ScrollResistance::new(self.base.scroll_direction(), self.config.resistance_factor())
    }

    /// Overscanned viewport used for visibility decisions
    pub fn overscan_rect(&self, bounds: Rect) -> Rect {
        let margin = self.config.overscan_margin;
        bounds.outset(margin, margin)
    }

    /// Synchronize live bodies with the elements near the viewport
    pub fn prepare_layout<C: ScrollContainer>(&mut self, container: &C) -> LayoutPassReport {
        let mut report = LayoutPassReport::default();

        let orientation = container.orientation();
        if self.orientation.is_some_and(|last| last != orientation) {
            self.phase = LayoutPhase::Reflowing;
            self.registry.remove_all();
            self.visible.reset();
            report.orientation_reset = true;
            tracing::debug!(?orientation, "orientation changed, detached every body");
        }
        self.orientation = Some(orientation);

        let bounds = container.bounds();
        self.base.prepare(bounds.size);

        let candidates = self.base.natural_attributes_in_rect(self.overscan_rect(bounds));
        let anchors: FxHashMap<ElementId, Point> =
            candidates.iter().map(|attrs| (attrs.id, attrs.center)).collect();

        // Evict before admitting so a reused id never has two bodies. A body whose
        // natural position moved is detached too and re-admitted on its new anchor.
        let stale: SmallVec<[(ElementId, bool); 16]> = self
            .registry
            .active_bodies()
            .filter_map(|body| match anchors.get(&body.id()) {
                None => Some((body.id(), false)),
                Some(anchor) if *anchor != body.anchor() => Some((body.id(), true)),
                Some(_) => None,
            })
            .collect();
        for (id, moved) in stale {
            self.registry.remove_body(&id);
            self.visible.remove(&id, id.category());
            if moved {
                report.reanchored += 1;
            } else {
                report.evicted += 1;
            }
        }

        let pointer = active_pointer(container.pointer_location());
        let resistance = self.resistance();
        let params = self.config.spring_params();

        for mut attrs in candidates {
            let category = attrs.category();
            if self.visible.contains(&attrs.id, category) {
                continue;
            }

            let anchor = attrs.center;
            if let Some(pointer) = pointer {
                attrs.center = resistance.displace(anchor, anchor, pointer, self.latest_delta);
            }

            match self.registry.add_body(attrs, anchor, params) {
                Ok(_) => {
                    self.visible.insert(attrs.id, category);
                    report.admitted += 1;
                }
                Err(err) => tracing::warn!(%err, "skipping admission"),
            }
        }

        self.phase = LayoutPhase::Stable;
        report.live = self.registry.len();
        tracing::debug!(
            evicted = report.evicted,
            reanchored = report.reanchored,
            admitted = report.admitted,
            live = report.live,
            "spring layout pass"
        );
        report
    }

    /// Propagate a scroll tick into the simulation.
    ///
    /// Always returns `false`: the simulation animates the change, so no
    /// relayout is needed.
    pub fn should_invalidate_layout_for_bounds_change<C: ScrollContainer>(
        &mut self,
        container: &C,
        new_bounds: Rect,
    ) -> bool {
        let direction = self.base.scroll_direction();
        let delta = direction.main(new_bounds.origin) - direction.main(container.bounds().origin);
        self.latest_delta = delta;

        let Some(pointer) = active_pointer(container.pointer_location()) else {
            tracing::trace!(delta, "bounds changed without an active touch");
            return false;
        };

        let resistance = self.resistance();
        let anchors: SmallVec<[(ElementId, Point); 32]> = self
            .registry
            .active_bodies()
            .map(|body| (body.id(), body.anchor()))
            .collect();

        for (id, anchor) in anchors {
            if let Some(attrs) = self.registry.attributes_mut(&id) {
                attrs.center = resistance.displace(attrs.center, anchor, pointer, delta);
            }
            self.registry.resync(&id);
        }

        tracing::trace!(delta, "propagated bounds change");
        false
    }

    /// Attributes of every element to draw in `rect`
    pub fn items_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes> {
        self.registry.items_in_rect(rect)
    }

    /// Simulated attributes, if the element currently has a body
    pub fn simulated_attributes_for(&self, id: &ElementId) -> Option<LayoutAttributes> {
        self.registry.layout_attributes_for(id).copied()
    }

    /// Simulated attributes, falling back to natural ones for elements
    /// without a body (e.g. inserted since the last pass)
    pub fn layout_attributes_for_element(&self, id: &ElementId) -> Option<LayoutAttributes> {
        self.simulated_attributes_for(id)
            .or_else(|| self.base.natural_attributes_for(id))
    }

    pub fn content_size(&self) -> Size {
        self.base.content_size()
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.registry.step(dt);
    }

    /// Check if every element has settled on its anchor
    pub fn is_resting(&self) -> bool {
        self.registry.is_resting()
    }
}
