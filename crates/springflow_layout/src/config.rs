//! Spring flow configuration
//!
//! Everything tunable about the bounce lives here: the attachment spring, the
//! scroll resistance factor and the overscan margin. Values are validated on
//! every construction path so the hot paths never divide by a bad factor.
//!
//! ```toml
//! resistance_factor = 600.0
//! damping = 0.6
//! ```

use serde::{Deserialize, Serialize};
use springflow_animation::SpringParams;

use crate::error::{ConfigError, Result};
use crate::resistance::DEFAULT_RESISTANCE_FACTOR;

/// Margin added around the viewport before deciding what is visible
pub const DEFAULT_OVERSCAN_MARGIN: f32 = 100.0;

/// Configuration for a [`SpringFlowLayout`](crate::SpringFlowLayout)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringFlowConfig {
    /// Rest length of each attachment spring
    pub rest_length: f32,
    /// Damping ratio of each attachment spring
    pub damping: f32,
    /// Oscillation frequency (Hz) of each attachment spring
    pub frequency: f32,
    /// Scroll resistance override. Higher is less bouncy; `None` uses 900.0.
    pub resistance_factor: Option<f32>,
    /// Viewport outset used to pre-stage elements before they scroll in
    pub overscan_margin: f32,
}

impl Default for SpringFlowConfig {
    fn default() -> Self {
        let spring = SpringParams::default();
        Self {
            rest_length: spring.rest_length,
            damping: spring.damping,
            frequency: spring.frequency,
            resistance_factor: None,
            overscan_margin: DEFAULT_OVERSCAN_MARGIN,
        }
    }
}

impl SpringFlowConfig {
    /// Parse and validate a TOML table
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SpringFlowConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_resistance_factor(mut self, factor: f32) -> Self {
        self.resistance_factor = Some(factor);
        self
    }

    pub fn with_spring(mut self, spring: SpringParams) -> Self {
        self.rest_length = spring.rest_length;
        self.damping = spring.damping;
        self.frequency = spring.frequency;
        self
    }

    pub fn with_overscan_margin(mut self, margin: f32) -> Self {
        self.overscan_margin = margin;
        self
    }

    /// Effective resistance factor
    pub fn resistance_factor(&self) -> f32 {
        self.resistance_factor.unwrap_or(DEFAULT_RESISTANCE_FACTOR)
    }

    pub fn spring_params(&self) -> SpringParams {
        SpringParams::new(self.rest_length, self.damping, self.frequency)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<()> {
        if let Some(factor) = self.resistance_factor {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(ConfigError::ResistanceFactor(factor));
            }
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(ConfigError::Spring {
                field: "frequency",
                value: self.frequency,
            });
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ConfigError::Spring {
                field: "damping",
                value: self.damping,
            });
        }
        if !(self.rest_length.is_finite() && self.rest_length >= 0.0) {
            return Err(ConfigError::Spring {
                field: "rest_length",
                value: self.rest_length,
            });
        }
        if !(self.overscan_margin.is_finite() && self.overscan_margin >= 0.0) {
            return Err(ConfigError::OverscanMargin(self.overscan_margin));
        }
        Ok(())
    }
}
