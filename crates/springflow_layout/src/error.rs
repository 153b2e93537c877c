//! Layout error types

use thiserror::Error;

/// Rejected layout configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Resistance factor must be finite and greater than zero
    #[error("resistance factor must be finite and > 0, got {0}")]
    ResistanceFactor(f32),

    /// A spring parameter is out of range
    #[error("invalid spring {field}: {value}")]
    Spring { field: &'static str, value: f32 },

    /// Overscan margin must be finite and non-negative
    #[error("overscan margin must be finite and >= 0, got {0}")]
    OverscanMargin(f32),

    /// Configuration text could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for layout configuration
pub type Result<T> = std::result::Result<T, ConfigError>;
