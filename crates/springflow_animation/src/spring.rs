//! Attachment spring physics
//!
//! Each on-screen element is tied to an anchor point by a damped spring with a
//! small rest length. The element's published center is the integrator's
//! position; direct edits to the center must be adopted with
//! [`AttachmentBody::resync`] before the next step or they are overwritten.
//!
//! The spring is parameterised the way UI toolkits describe attachments:
//! oscillation `frequency` in Hz and a `damping` ratio (1.0 = critical), with
//! unit mass. Stiffness and the damping coefficient are derived from those.

use std::f32::consts::TAU;

use springflow_core::{ElementId, LayoutAttributes, Point, Vec2};

/// Below this distance from its anchor an element has no defined pull direction
const ANCHOR_EPSILON: f32 = 1e-4;

/// Settling thresholds. Half a point of stretch at under 5pt/s is imperceptible.
pub const REST_EPSILON: f32 = 0.5;
pub const VELOCITY_EPSILON: f32 = 5.0;

/// Spring parameters for an attachment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    /// Distance the spring tries to keep between element and anchor
    pub rest_length: f32,
    /// Damping ratio (0 = undamped, 1 = critically damped)
    pub damping: f32,
    /// Oscillation frequency in Hz
    pub frequency: f32,
}

impl SpringParams {
    pub fn new(rest_length: f32, damping: f32, frequency: f32) -> Self {
        Self {
            rest_length,
            damping,
            frequency,
        }
    }

    /// Angular frequency in radians per second
    pub fn angular_frequency(&self) -> f32 {
        TAU * self.frequency
    }

    /// Spring constant for a unit mass
    pub fn stiffness(&self) -> f32 {
        let omega = self.angular_frequency();
        omega * omega
    }

    /// Viscous damping coefficient for a unit mass
    pub fn damping_coefficient(&self) -> f32 {
        2.0 * self.damping * self.angular_frequency()
    }

    /// Check if the spring will overshoot before settling
    pub fn is_underdamped(&self) -> bool {
        self.damping < 1.0
    }
}

impl Default for SpringParams {
    /// Loose, slightly underdamped attachment used for bouncy collections
    fn default() -> Self {
        Self {
            rest_length: 1.0,
            damping: 0.8,
            frequency: 1.0,
        }
    }
}

/// Numeric integration scheme used to advance bodies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Integrator {
    /// Velocity first, then position. Cheap and stable at frame rates.
    #[default]
    SemiImplicitEuler,
    /// Classic fourth-order Runge-Kutta
    Rk4,
}

/// One element attached to its anchor
#[derive(Clone, Debug)]
pub struct AttachmentBody {
    attributes: LayoutAttributes,
    anchor: Point,
    params: SpringParams,
    position: Point,
    velocity: Vec2,
    resting: bool,
}

impl AttachmentBody {
    /// Attach `attributes` to `anchor`, starting from the attributes' current center
    pub fn new(attributes: LayoutAttributes, anchor: Point, params: SpringParams) -> Self {
        Self {
            position: attributes.center,
            attributes,
            anchor,
            params,
            velocity: Vec2::ZERO,
            resting: false,
        }
    }

    pub fn id(&self) -> ElementId {
        self.attributes.id
    }

    pub fn attributes(&self) -> &LayoutAttributes {
        &self.attributes
    }

    /// Direct access to the published attributes. Follow with [`resync`](Self::resync).
    pub fn attributes_mut(&mut self) -> &mut LayoutAttributes {
        &mut self.attributes
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    /// Distance between the element's center and its anchor
    pub fn displacement(&self) -> f32 {
        self.position.delta_from(self.anchor).length()
    }

    /// Adopt the published center as simulation state and wake the body.
    ///
    /// Velocity is kept so an interrupted bounce continues smoothly.
    pub fn resync(&mut self) {
        self.position = self.attributes.center;
        self.resting = false;
    }

    /// Advance the body by `dt` seconds and publish the new center
    pub fn step(&mut self, dt: f32, integrator: Integrator) {
        if self.resting {
            return;
        }

        match integrator {
            Integrator::SemiImplicitEuler => {
                let accel = self.acceleration(self.position, self.velocity);
                self.velocity = Vec2::new(
                    self.velocity.x + accel.x * dt,
                    self.velocity.y + accel.y * dt,
                );
                self.position = self.position.translate(self.velocity.scale(dt));
            }
            Integrator::Rk4 => self.step_rk4(dt),
        }

        self.attributes.center = self.position;

        if self.is_settled() {
            self.velocity = Vec2::ZERO;
            self.resting = true;
        }
    }

    fn step_rk4(&mut self, dt: f32) {
        let p = self.position;
        let v = self.velocity;
        let half = dt * 0.5;

        let k1_v = self.acceleration(p, v);
        let k1_x = v;

        let p2 = p.translate(k1_x.scale(half));
        let v2 = add(v, k1_v.scale(half));
        let k2_v = self.acceleration(p2, v2);
        let k2_x = v2;

        let p3 = p.translate(k2_x.scale(half));
        let v3 = add(v, k2_v.scale(half));
        let k3_v = self.acceleration(p3, v3);
        let k3_x = v3;

        let p4 = p.translate(k3_x.scale(dt));
        let v4 = add(v, k3_v.scale(dt));
        let k4_v = self.acceleration(p4, v4);
        let k4_x = v4;

        let dv = weighted(k1_v, k2_v, k3_v, k4_v).scale(dt / 6.0);
        let dx = weighted(k1_x, k2_x, k3_x, k4_x).scale(dt / 6.0);

        self.velocity = add(v, dv);
        self.position = p.translate(dx);
    }

    fn stretch(&self, position: Point) -> (Vec2, f32) {
        let offset = position.delta_from(self.anchor);
        let length = offset.length();
        (offset, length)
    }

    fn acceleration(&self, position: Point, velocity: Vec2) -> Vec2 {
        let c = self.params.damping_coefficient();
        let damping_force = velocity.scale(-c);

        let (offset, length) = self.stretch(position);
        if length < ANCHOR_EPSILON {
            return damping_force;
        }

        let k = self.params.stiffness();
        let extension = length - self.params.rest_length;
        let spring_force = offset.scale(-k * extension / length);
        add(spring_force, damping_force)
    }

    fn is_settled(&self) -> bool {
        let (_, length) = self.stretch(self.position);
        let relaxed =
            length < ANCHOR_EPSILON || (length - self.params.rest_length).abs() < REST_EPSILON;
        relaxed && self.velocity.length() < VELOCITY_EPSILON
    }
}

fn add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

fn weighted(k1: Vec2, k2: Vec2, k3: Vec2, k4: Vec2) -> Vec2 {
    Vec2::new(
        k1.x + 2.0 * k2.x + 2.0 * k3.x + k4.x,
        k1.y + 2.0 * k2.y + 2.0 * k3.y + k4.y,
    )
}
