//! Tunables for group editing.

use crate::geo::BoundingBox;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default tolerance around a scale ratio of 1 that is treated as a move.
pub const DEFAULT_REDIMENSION_MOVE_RATIO: f64 = 0.01;
/// Default smallest scale ratio a resize may reach.
pub const DEFAULT_MINIMUM_RESIZE_RATIO: f64 = 0.1;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {name}: {value}")]
    InvalidRatio { name: &'static str, value: f64 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Editing tunables shared by the boundary validator and redimension coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupEditConfig {
    /// A redimension whose scale ratio is within this distance of 1 is a move.
    pub redimension_move_ratio: f64,
    /// Resizes below this scale ratio are rejected.
    pub minimum_resize_ratio: f64,
    /// Outer containment boundary for interactive edits.
    pub max_bounds: Option<BoundingBox>,
}

impl Default for GroupEditConfig {
    fn default() -> Self {
        Self {
            redimension_move_ratio: DEFAULT_REDIMENSION_MOVE_RATIO,
            minimum_resize_ratio: DEFAULT_MINIMUM_RESIZE_RATIO,
            max_bounds: None,
        }
    }
}

impl GroupEditConfig {
    /// Set the outer containment boundary.
    pub fn with_max_bounds(mut self, max_bounds: BoundingBox) -> Self {
        self.max_bounds = Some(max_bounds);
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading group edit configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that both ratios are finite and within (0, 1).
    pub fn validate(&self) -> ConfigResult<()> {
        check_ratio("redimension_move_ratio", self.redimension_move_ratio)?;
        check_ratio("minimum_resize_ratio", self.minimum_resize_ratio)
    }
}

fn check_ratio(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRatio { name, value })
    }
}
