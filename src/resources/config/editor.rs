use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{SegmentProfile, ShapeSegments};
use crate::resources::ConfigError;
use crate::utils::{MAX_RING_POINTS, MIN_RING_POINTS};

/// Bounds the editor applies to cross-section resolution.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub min_point_count: usize,
    pub max_point_count: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_point_count: MIN_RING_POINTS,
            max_point_count: MAX_RING_POINTS,
        }
    }
}

impl EditorConfig {
    pub fn clamp_point_count(&self, count: usize) -> usize {
        count.clamp(self.min_point_count, self.max_point_count)
    }

    /// Copy of `shape` with both end profiles held to the allowed resolution.
    pub fn clamp_shape(&self, shape: &ShapeSegments) -> ShapeSegments {
        let clamp = |profile: &SegmentProfile| SegmentProfile {
            point_count: self.clamp_point_count(profile.point_count),
            ..profile.clone()
        };
        ShapeSegments {
            front: clamp(&shape.front),
            back: clamp(&shape.back),
            center: shape.center.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_point_count > self.max_point_count {
            return Err(ConfigError::ValidationError(format!(
                "min_point_count {} exceeds max_point_count {}",
                self.min_point_count, self.max_point_count
            )));
        }
        if self.min_point_count == 0 {
            return Err(ConfigError::ValidationError(
                "min_point_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
