//! Scroll resistance
//!
//! Elements near the touch point follow the finger; elements further away
//! resist and trail behind. The lag is the raw scroll delta scaled by
//! `distance / factor`, capped so an element never moves further than the
//! scroll itself.

use springflow_core::{Point, ScrollDirection};

/// Resistance factor used when none is configured
pub const DEFAULT_RESISTANCE_FACTOR: f32 = 900.0;

/// Damp a scroll delta by the element's distance from the pointer.
///
/// `factor` must be greater than zero; configuration enforces this.
pub fn resistance_delta(raw_delta: f32, distance_from_pointer: f32, factor: f32) -> f32 {
    let scroll_resistance = distance_from_pointer / factor;
    if raw_delta < 0.0 {
        raw_delta.max(raw_delta * scroll_resistance)
    } else {
        raw_delta.min(raw_delta * scroll_resistance)
    }
}

/// Distance between pointer and anchor along the scroll axis
pub fn distance_from_pointer(direction: ScrollDirection, pointer: Point, anchor: Point) -> f32 {
    (direction.main(pointer) - direction.main(anchor)).abs()
}

/// Filter the container's pointer down to an active touch.
///
/// Containers report the origin when no gesture is in progress, so the
/// origin is treated the same as no pointer at all.
pub fn active_pointer(pointer: Option<Point>) -> Option<Point> {
    pointer.filter(|p| *p != Point::ZERO)
}

/// Resistance applied along one scroll axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollResistance {
    pub direction: ScrollDirection,
    pub factor: f32,
}

impl ScrollResistance {
    pub fn new(direction: ScrollDirection, factor: f32) -> Self {
        Self { direction, factor }
    }

    /// Damped delta for an element anchored at `anchor`
    pub fn adjusted_delta(&self, raw_delta: f32, pointer: Point, anchor: Point) -> f32 {
        let distance = distance_from_pointer(self.direction, pointer, anchor);
        resistance_delta(raw_delta, distance, self.factor)
    }

    /// Shift `center` along the scroll axis by the damped delta
    pub fn displace(&self, center: Point, anchor: Point, pointer: Point, raw_delta: f32) -> Point {
        self.direction
            .shift(center, self.adjusted_delta(raw_delta, pointer, anchor))
    }
}
