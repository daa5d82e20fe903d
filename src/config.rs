//! Round configuration
//!
//! A `RoundConfig` is an immutable value handed to the round controller at
//! construction. Every field has a default, so a JSON file only needs to list
//! the values it overrides.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Shortest allowed interval between speed re-targets (ms)
pub const MIN_CHANGE_TIME: f32 = 1.0;
/// Largest allowed speed variation (degrees per frame)
pub const MAX_ROTATION_VARIATION: f32 = 360.0;

/// Tunable game options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    // === Target ===
    /// Wheel radius (pixels)
    pub target_radius: f32,
    /// Segment colors (0xRRGGBB), in wheel order
    pub target_colors: Vec<u32>,
    /// Wheel center height as a fraction of the field height
    pub target_y: f32,

    // === Rotation ===
    /// Starting rotation speed (degrees per frame)
    pub rotation_speed: f32,
    /// Max random change per speed re-target
    pub rotation_variation: f32,
    /// Interval between speed re-targets (ms)
    pub change_time: f32,
    /// Rotation speed bound, both directions
    pub max_rotation_speed: f32,

    // === Throwing ===
    /// Throw animation duration (ms)
    pub throw_speed: f32,
    /// Minimum spacing between landed knives (degrees)
    pub min_angle: f32,

    // === Layout ===
    pub field_width: f32,
    pub field_height: f32,
    /// Knife sprite length, used to push a falling knife fully off screen
    pub knife_length: f32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            target_radius: TARGET_RADIUS,
            target_colors: TARGET_COLORS.to_vec(),
            target_y: TARGET_Y,

            rotation_speed: ROTATION_SPEED,
            rotation_variation: ROTATION_VARIATION,
            change_time: CHANGE_TIME,
            max_rotation_speed: MAX_ROTATION_SPEED,

            throw_speed: THROW_SPEED,
            min_angle: MIN_ANGLE,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            knife_length: KNIFE_LENGTH,
        }
    }
}

impl RoundConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded round config from {}", path.display());
        Ok(config)
    }

    /// Check every precondition the round controller relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_colors.len() < 2 {
            return Err(ConfigError::TooFewColors {
                count: self.target_colors.len(),
            });
        }

        for (field, value) in [
            ("target_radius", self.target_radius),
            ("throw_speed", self.throw_speed),
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("knife_length", self.knife_length),
        ] {
            // Written this way so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value, min, max) in [
            ("target_y", self.target_y, 0.0, 1.0),
            ("min_angle", self.min_angle, 0.0, 180.0),
            ("rotation_variation", self.rotation_variation, 0.0, MAX_ROTATION_VARIATION),
            ("change_time", self.change_time, MIN_CHANGE_TIME, f32::MAX),
            ("max_rotation_speed", self.max_rotation_speed, 0.0, 360.0),
        ] {
            if !(value >= min && value <= max) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }

        if !(self.rotation_speed.abs() <= self.max_rotation_speed) {
            return Err(ConfigError::SpeedExceedsMax {
                speed: self.rotation_speed,
                max: self.max_rotation_speed,
            });
        }

        Ok(())
    }

    /// Number of colored wedges on the wheel
    pub fn segment_count(&self) -> usize {
        self.target_colors.len()
    }

    /// Wheel center in field coordinates
    pub fn target_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height * self.target_y)
    }

    /// Where the active knife waits between throws
    pub fn knife_start(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height * KNIFE_START_Y)
    }

    /// Duration of the miss animation (ms)
    pub fn fall_duration(&self) -> f32 {
        self.throw_speed * FALL_DURATION_FACTOR
    }

    /// Color of a segment, if the index is in range
    pub fn color(&self, index: usize) -> Option<u32> {
        self.target_colors.get(index).copied()
    }
}
