//! Body registry
//!
//! Owns every live attachment body and steps them each frame. The
//! [`BodyRegistry`] trait is the seam layouts talk to; [`SpringAnimator`] is the
//! slotmap-backed implementation.

use std::time::Instant;

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use springflow_core::{ElementId, LayoutAttributes, Point, Rect};

use crate::error::{AnimatorError, Result};
use crate::spring::{AttachmentBody, Integrator, SpringParams};

new_key_type! {
    /// Handle of a body inside a [`SpringAnimator`]
    pub struct BodyId;
}

/// Largest step integrated in one go; longer frames are subdivided
pub const MAX_STEP: f32 = 1.0 / 60.0;

/// Frames longer than this are treated as a stall and clamped
const MAX_FRAME: f32 = 0.25;

/// Storage and simulation of attachment bodies, one per element
pub trait BodyRegistry {
    /// Attach an element to `anchor`.
    ///
    /// Fails with [`AnimatorError::DuplicateBody`] if the element already has
    /// a body. Callers are expected to check their own bookkeeping first.
    fn add_body(
        &mut self,
        attributes: LayoutAttributes,
        anchor: Point,
        params: SpringParams,
    ) -> Result<BodyId>;

    /// Detach an element. Absent elements are ignored.
    fn remove_body(&mut self, id: &ElementId) -> Option<AttachmentBody>;

    /// Detach everything
    fn remove_all(&mut self);

    /// Live bodies in unspecified order
    fn active_bodies(&self) -> impl Iterator<Item = &AttachmentBody>;

    /// Mutable access to an element's published attributes
    fn attributes_mut(&mut self, id: &ElementId) -> Option<&mut LayoutAttributes>;

    /// Adopt the element's current attributes as simulation state.
    ///
    /// Returns `false` when the element has no body.
    fn resync(&mut self, id: &ElementId) -> bool;

    /// Simulated attributes of an element, if it has a body
    fn layout_attributes_for(&self, id: &ElementId) -> Option<&LayoutAttributes>;

    /// Simulated attributes of every body whose frame intersects `rect`
    fn items_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes>;

    /// Advance the simulation by `dt` seconds
    fn step(&mut self, dt: f32);

    /// Check if every body has come to rest
    fn is_resting(&self) -> bool;

    /// Number of live bodies
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Slotmap-backed body registry
pub struct SpringAnimator {
    bodies: SlotMap<BodyId, AttachmentBody>,
    by_element: FxHashMap<ElementId, BodyId>,
    integrator: Integrator,
    last_frame: Instant,
}

impl SpringAnimator {
    pub fn new() -> Self {
        Self::with_integrator(Integrator::default())
    }

    pub fn with_integrator(integrator: Integrator) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            by_element: FxHashMap::default(),
            integrator,
            last_frame: Instant::now(),
        }
    }

    /// Body attached to an element
    pub fn body_for(&self, id: &ElementId) -> Option<&AttachmentBody> {
        self.by_element.get(id).and_then(|key| self.bodies.get(*key))
    }

    /// Step by the wall-clock time since the previous tick
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.step(dt);
    }
}

impl Default for SpringAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyRegistry for SpringAnimator {
    fn add_body(
        &mut self,
        attributes: LayoutAttributes,
        anchor: Point,
        params: SpringParams,
    ) -> Result<BodyId> {
        let id = attributes.id;
        if self.by_element.contains_key(&id) {
            return Err(AnimatorError::DuplicateBody(id));
        }

        let key = self
            .bodies
            .insert(AttachmentBody::new(attributes, anchor, params));
        self.by_element.insert(id, key);
        tracing::trace!(?id, x = anchor.x, y = anchor.y, "attached body");
        Ok(key)
    }

    fn remove_body(&mut self, id: &ElementId) -> Option<AttachmentBody> {
        let key = self.by_element.remove(id)?;
        tracing::trace!(?id, "detached body");
        self.bodies.remove(key)
    }

    fn remove_all(&mut self) {
        tracing::trace!(count = self.bodies.len(), "detached all bodies");
        self.bodies.clear();
        self.by_element.clear();
    }

    fn active_bodies(&self) -> impl Iterator<Item = &AttachmentBody> {
        self.bodies.values()
    }

    fn attributes_mut(&mut self, id: &ElementId) -> Option<&mut LayoutAttributes> {
        let key = self.by_element.get(id)?;
        self.bodies.get_mut(*key).map(AttachmentBody::attributes_mut)
    }

    fn resync(&mut self, id: &ElementId) -> bool {
        let Some(key) = self.by_element.get(id) else {
            return false;
        };
        match self.bodies.get_mut(*key) {
            Some(body) => {
                body.resync();
                true
            }
            None => false,
        }
    }

    fn layout_attributes_for(&self, id: &ElementId) -> Option<&LayoutAttributes> {
        self.body_for(id).map(AttachmentBody::attributes)
    }

    fn items_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes> {
        self.bodies
            .values()
            .map(AttachmentBody::attributes)
            .filter(|attrs| attrs.frame().intersects(&rect))
            .copied()
            .collect()
    }

    fn step(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }

        let dt = dt.min(MAX_FRAME);
        let substeps = (dt / MAX_STEP).ceil().max(1.0);
        let h = dt / substeps;
        let integrator = self.integrator;

        for body in self.bodies.values_mut() {
            for _ in 0..substeps as u32 {
                if body.is_resting() {
                    break;
                }
                body.step(h, integrator);
            }
        }
    }

    fn is_resting(&self) -> bool {
        self.bodies.values().all(AttachmentBody::is_resting)
    }

    fn len(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use springflow_core::Size;

    fn attrs(item: usize, y: f32) -> LayoutAttributes {
        LayoutAttributes::new(
            ElementId::cell(0, item),
            Rect::from_center_size(Point::new(50.0, y), Size::new(100.0, 40.0)),
        )
    }

    fn add(animator: &mut SpringAnimator, a: LayoutAttributes) -> Result<BodyId> {
        animator.add_body(a, a.center, SpringParams::default())
    }

    #[test]
    fn test_duplicate_body_is_rejected() {
        let mut animator = SpringAnimator::new();
        add(&mut animator, attrs(0, 20.0)).unwrap();

        let err = add(&mut animator, attrs(0, 20.0)).unwrap_err();
        assert_eq!(err, AnimatorError::DuplicateBody(ElementId::cell(0, 0)));
        assert_eq!(animator.len(), 1);
    }

    #[test]
    fn test_remove_absent_body_is_noop() {
        let mut animator = SpringAnimator::new();
        add(&mut animator, attrs(0, 20.0)).unwrap();

        assert!(animator.remove_body(&ElementId::cell(0, 9)).is_none());
        assert_eq!(animator.len(), 1);
        assert!(animator.remove_body(&ElementId::cell(0, 0)).is_some());
        assert!(animator.is_empty());
        assert!(animator.layout_attributes_for(&ElementId::cell(0, 0)).is_none());
    }

    #[test]
    fn test_remove_all_clears_lookup() {
        let mut animator = SpringAnimator::new();
        for i in 0..5 {
            add(&mut animator, attrs(i, 20.0 + 40.0 * i as f32)).unwrap();
        }
        animator.remove_all();
        assert!(animator.is_empty());
        // The same elements can be attached again
        add(&mut animator, attrs(0, 20.0)).unwrap();
        assert_eq!(animator.len(), 1);
    }

    #[test]
    fn test_items_in_rect_uses_simulated_position() {
        let mut animator = SpringAnimator::new();
        add(&mut animator, attrs(0, 20.0)).unwrap();
        add(&mut animator, attrs(1, 60.0)).unwrap();

        // Push item 1 out of the query rect
        animator.attributes_mut(&ElementId::cell(0, 1)).unwrap().center.y = 500.0;
        assert!(animator.resync(&ElementId::cell(0, 1)));

        let hits = animator.items_in_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ElementId::cell(0, 0));
    }

    #[test]
    fn test_resync_of_absent_body() {
        let mut animator = SpringAnimator::new();
        assert!(!animator.resync(&ElementId::header(0)));
    }

    #[test]
    fn test_step_brings_bodies_to_rest() {
        let mut animator = SpringAnimator::with_integrator(Integrator::Rk4);
        let mut a = attrs(0, 20.0);
        let anchor = a.center;
        a.center.y += 40.0;
        animator.add_body(a, anchor, SpringParams::default()).unwrap();
        assert!(!animator.is_resting());

        // One oversized frame is clamped and subdivided
        animator.step(1.0);
        for _ in 0..180 {
            animator.step(1.0 / 60.0);
        }
        assert!(animator.is_resting());
        let body = animator.body_for(&ElementId::cell(0, 0)).unwrap();
        assert!(body.displacement() < 2.0);
    }
}
