//! Animation error types

use springflow_core::ElementId;
use thiserror::Error;

/// Errors raised by a body registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimatorError {
    /// A body is already attached to this element
    #[error("element {0:?} already has an attachment body")]
    DuplicateBody(ElementId),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimatorError>;
