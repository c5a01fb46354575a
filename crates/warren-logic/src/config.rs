//! Level configuration and validation.
//!
//! The recognized options mirror the external contract: grid dimensions
//! (auto-adjusted down by one when odd, keeping the grid evenly
//! divisible), the room-size threshold for the space partitioner, the
//! world-unit size of one cell, and an optional generation seed.
//! Invalid dimensions are rejected before generation starts rather than
//! silently producing a degenerate grid.

use serde::{Deserialize, Serialize};

/// Smallest accepted grid dimension. Anything narrower cannot fit a
/// single room plus its corridor margin.
pub const MIN_DIMENSION: i32 = 6;

/// Smallest accepted room-size threshold. Below this every leaf
/// deflates to a region too small to host a door.
pub const MIN_THRESHOLD: i32 = 4;

/// Configuration for level generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Grid extent along x, in cells.
    pub level_width: i32,
    /// Grid extent along z, in cells.
    pub level_length: i32,
    /// A partition rectangle at most this large on both axes becomes a
    /// room leaf.
    pub room_size_threshold: i32,
    /// World-unit size of one grid cell.
    pub cell_size: f32,
    /// Generation seed (`None` = caller picks).
    pub seed: Option<u64>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            level_width: 150,
            level_length: 150,
            room_size_threshold: 10,
            cell_size: 4.0,
            seed: None,
        }
    }
}

impl LevelConfig {
    /// Copy of this config with odd dimensions adjusted down by one.
    pub fn adjusted(&self) -> Self {
        let mut config = self.clone();
        if config.level_width % 2 != 0 {
            config.level_width -= 1;
        }
        if config.level_length % 2 != 0 {
            config.level_length -= 1;
        }
        config
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Width non-positive or too small to fit a room.
    InvalidWidth(i32),
    /// Length non-positive or too small to fit a room.
    InvalidLength(i32),
    /// Threshold too small for any leaf to survive deflation.
    InvalidThreshold(i32),
    /// Cell size non-positive.
    InvalidCellSize(f32),
}

/// Validate a level configuration, returning all errors found.
pub fn validate_config(config: &LevelConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.level_width < MIN_DIMENSION {
        errors.push(ConfigError::InvalidWidth(config.level_width));
    }
    if config.level_length < MIN_DIMENSION {
        errors.push(ConfigError::InvalidLength(config.level_length));
    }
    if config.room_size_threshold < MIN_THRESHOLD {
        errors.push(ConfigError::InvalidThreshold(config.room_size_threshold));
    }
    if config.cell_size <= 0.0 {
        errors.push(ConfigError::InvalidCellSize(config.cell_size));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LevelConfig::default();
        let errors = validate_config(&config);
        assert!(
            errors.is_empty(),
            "default config should be valid: {errors:?}"
        );
    }

    #[test]
    fn odd_width_adjusts_down() {
        let config = LevelConfig {
            level_width: 11,
            ..LevelConfig::default()
        };
        assert_eq!(config.adjusted().level_width, 10);
    }

    #[test]
    fn even_width_is_unchanged() {
        let config = LevelConfig {
            level_width: 10,
            ..LevelConfig::default()
        };
        assert_eq!(config.adjusted().level_width, 10);
    }

    #[test]
    fn odd_length_adjusts_down() {
        let config = LevelConfig {
            level_length: 151,
            ..LevelConfig::default()
        };
        assert_eq!(config.adjusted().level_length, 150);
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        let config = LevelConfig {
            level_width: 0,
            level_length: -4,
            ..LevelConfig::default()
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::InvalidWidth(0)));
        assert!(errors.contains(&ConfigError::InvalidLength(-4)));
    }

    #[test]
    fn too_small_for_any_room_rejected() {
        let config = LevelConfig {
            level_width: 5,
            ..LevelConfig::default()
        };
        assert!(validate_config(&config).contains(&ConfigError::InvalidWidth(5)));
    }

    #[test]
    fn tiny_threshold_rejected() {
        let config = LevelConfig {
            room_size_threshold: 3,
            ..LevelConfig::default()
        };
        assert!(validate_config(&config).contains(&ConfigError::InvalidThreshold(3)));
    }

    #[test]
    fn non_positive_cell_size_rejected() {
        let config = LevelConfig {
            cell_size: 0.0,
            ..LevelConfig::default()
        };
        assert!(validate_config(&config).contains(&ConfigError::InvalidCellSize(0.0)));
    }
}
