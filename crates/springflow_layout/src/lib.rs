//! Springflow Layout Engine
//!
//! A flow layout whose elements hang off their natural positions on damped
//! springs, so scrolled content trails and bounces behind the finger.
//!
//! # Components
//!
//! - **Resistance**: damps scroll deltas by distance from the touch point
//! - **Visibility index**: which elements currently own a spring body
//! - **Flow layout**: natural grid geometry the springs are anchored to
//! - **Spring flow layout**: keeps bodies in sync with the overscanned
//!   viewport and feeds scroll ticks into the simulation

pub mod config;
pub mod container;
pub mod error;
pub mod flow;
pub mod resistance;
pub mod spring_flow;
pub mod visibility;

pub use config::{SpringFlowConfig, DEFAULT_OVERSCAN_MARGIN};
pub use container::{ScrollContainer, ScrollViewport};
pub use error::ConfigError;
pub use flow::{BaseLayout, FlowLayout};
pub use resistance::{
    active_pointer, distance_from_pointer, resistance_delta, ScrollResistance,
    DEFAULT_RESISTANCE_FACTOR,
};
pub use spring_flow::{LayoutPassReport, LayoutPhase, SpringFlowLayout};
pub use visibility::VisibilityIndex;
