//! Springflow Animation System
//!
//! Spring attachments that let collection elements trail their layout position.
//!
//! # Features
//!
//! - **Attachment springs**: frequency/damping-ratio springs with a rest length
//! - **Swappable integration**: semi-implicit Euler or RK4
//! - **Body registry**: one body per element, queried by element id or rect
//! - **Interruptible**: resynced bodies keep their velocity

pub mod animator;
pub mod error;
pub mod spring;

pub use animator::{BodyId, BodyRegistry, SpringAnimator};
pub use error::AnimatorError;
pub use spring::{AttachmentBody, Integrator, SpringParams};
