// src/config/mod.rs
//! Dimensional constants and generation policies.
//!
//! Every length is in world units. Rooms are squares of half-width
//! `wall_len` placed on a grid of spacing `cell`.

use crate::error::{LayoutError, Result};
use crate::layout::Direction;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the first room picks its only door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstExit {
    Fixed(Direction),
    Random,
}

/// What happens when every non-entry neighbour of a room is already claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadEndPolicy {
    /// The room becomes a dead end and the chain ends there.
    #[default]
    StopEarly,
    /// Cut an exit onto an occupied cell anyway so the plan always holds the
    /// requested number of rooms. Overlapping rooms are listed in the plan.
    ForceOverlap,
}

/// Closed interval of floats, used for the random decor ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Span { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between neighbouring room centres.
    pub cell: f64,
    /// Half-width of a room.
    pub wall_len: f64,
    /// Wall height.
    pub wall_alt: f64,
    pub wall_thk: f64,
    /// Width of a door opening.
    pub door_w: f64,
    pub door_thk: f64,

    pub first_exit: FirstExit,
    pub dead_end_policy: DeadEndPolicy,

    // Guardian placement, relative to the exit wall.
    pub npc_wall_inset: f64,
    pub npc_lateral_offset: f64,

    // Decoration scatter.
    pub decor_wall_inset: f64,
    pub decor_per_wall_min: u32,
    pub decor_per_wall_max: u32,
    pub decor_spread: f64,
    pub decor_min_spacing: f64,
    pub decor_attempts: u32,
    pub decor_scale: Span,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            cell: 20.0,
            wall_len: 10.0,
            wall_alt: 5.0,
            wall_thk: 1.0,
            door_w: 2.0,
            door_thk: 0.4,
            first_exit: FirstExit::Fixed(Direction::North),
            dead_end_policy: DeadEndPolicy::StopEarly,
            npc_wall_inset: 1.0,
            npc_lateral_offset: 2.0,
            decor_wall_inset: 1.2,
            decor_per_wall_min: 1,
            decor_per_wall_max: 3,
            decor_spread: 2.5,
            decor_min_spacing: 1.5,
            decor_attempts: 10,
            decor_scale: Span::new(2.2, 3.2),
        }
    }
}

impl LayoutConfig {
    /// Parses a JSON document. Missing keys take their default value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Rejects dimensions that cannot produce a sane room.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("cell", self.cell),
            ("wall_len", self.wall_len),
            ("wall_alt", self.wall_alt),
            ("wall_thk", self.wall_thk),
            ("door_w", self.door_w),
            ("door_thk", self.door_thk),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(reject(format!("{name} must be a positive number, got {value}")));
            }
        }

        if self.door_w >= 2.0 * self.wall_len {
            return Err(reject(format!(
                "door_w ({}) leaves no wall to flank the opening (wall_len = {})",
                self.door_w, self.wall_len
            )));
        }
        if self.cell < 2.0 * self.wall_len {
            return Err(reject(format!(
                "cell ({}) is smaller than a room ({}), rooms would overlap",
                self.cell,
                2.0 * self.wall_len
            )));
        }

        let inside = |value: f64| (0.0..self.wall_len).contains(&value);
        if !inside(self.npc_wall_inset) {
            return Err(reject(format!(
                "npc_wall_inset ({}) must lie in [0, wall_len)",
                self.npc_wall_inset
            )));
        }
        if !(self.npc_lateral_offset.abs() <= self.wall_len) {
            return Err(reject(format!(
                "npc_lateral_offset ({}) puts the guardian outside the room",
                self.npc_lateral_offset
            )));
        }
        if !inside(self.decor_wall_inset) {
            return Err(reject(format!(
                "decor_wall_inset ({}) must lie in [0, wall_len)",
                self.decor_wall_inset
            )));
        }
        if !(self.decor_spread >= 0.0 && self.decor_spread <= self.wall_len) {
            return Err(reject(format!(
                "decor_spread ({}) must lie in [0, wall_len]",
                self.decor_spread
            )));
        }
        if !(self.decor_min_spacing >= 0.0) {
            return Err(reject("decor_min_spacing must be >= 0".to_string()));
        }
        if self.decor_per_wall_min > self.decor_per_wall_max {
            return Err(reject(format!(
                "decor_per_wall_min ({}) exceeds decor_per_wall_max ({})",
                self.decor_per_wall_min, self.decor_per_wall_max
            )));
        }
        if !(self.decor_scale.is_valid()
            && self.decor_scale.min > 0.0
            && ((self.decor_scale.max - self.decor_scale.min) * 2.0).is_finite())
        {
            return Err(reject("decor_scale must be a positive, finite, ordered range".to_string()));
        }

        Ok(())
    }
}

fn reject(message: String) -> LayoutError {
    warn!("rejecting layout config: {message}");
    LayoutError::InvalidArgument(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.first_exit, FirstExit::Fixed(Direction::North));
        assert_eq!(config.dead_end_policy, DeadEndPolicy::StopEarly);
    }

    #[test]
    fn test_door_wider_than_room_is_rejected() {
        let config = LayoutConfig { door_w: 20.0, ..LayoutConfig::default() };
        assert!(matches!(config.validate(), Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_cell_smaller_than_room_is_rejected() {
        let config = LayoutConfig { cell: 15.0, ..LayoutConfig::default() };
        assert!(matches!(config.validate(), Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_non_positive_dimension_is_rejected() {
        let config = LayoutConfig { wall_thk: 0.0, ..LayoutConfig::default() };
        assert!(config.validate().is_err());
        let config = LayoutConfig { door_thk: f64::NAN, ..LayoutConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_decor_count_is_rejected() {
        let config = LayoutConfig {
            decor_per_wall_min: 4,
            decor_per_wall_max: 2,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_guardian_inset_outside_room_is_rejected() {
        for inset in [-1.0, 10.0, 30.0, f64::INFINITY] {
            let config = LayoutConfig { npc_wall_inset: inset, ..LayoutConfig::default() };
            assert!(matches!(config.validate(), Err(LayoutError::InvalidArgument(_))), "inset {inset}");
        }
        let result = LayoutConfig::from_json_str(r#"{ "npc_wall_inset": 30.0 }"#);
        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_guardian_lateral_offset_outside_room_is_rejected() {
        let config = LayoutConfig { npc_lateral_offset: -12.0, ..LayoutConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_decor_inset_outside_room_is_rejected() {
        for inset in [-0.5, 10.0, f64::NAN] {
            let config = LayoutConfig { decor_wall_inset: inset, ..LayoutConfig::default() };
            assert!(matches!(config.validate(), Err(LayoutError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_decor_spread_beyond_wall_is_rejected() {
        for spread in [-1.0, 10.5, 1e308, f64::INFINITY, f64::NAN] {
            let config = LayoutConfig { decor_spread: spread, ..LayoutConfig::default() };
            assert!(matches!(config.validate(), Err(LayoutError::InvalidArgument(_))), "spread {spread}");
        }
        let result = LayoutConfig::from_json_str(r#"{ "decor_spread": 1e308 }"#);
        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
        let config = LayoutConfig { decor_spread: 10.0, ..LayoutConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_decor_scale_is_rejected() {
        let cases = [
            Span::new(0.0, 1.0),
            Span::new(-2.0, 1.0),
            Span::new(3.0, 2.0),
            Span::new(1.0, f64::INFINITY),
            Span::new(1e-300, f64::MAX),
        ];
        for scale in cases {
            let config = LayoutConfig { decor_scale: scale, ..LayoutConfig::default() };
            assert!(matches!(config.validate(), Err(LayoutError::InvalidArgument(_))), "{scale:?}");
        }
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = LayoutConfig::from_json_str(
            r#"{ "cell": 30.0, "first_exit": "random", "dead_end_policy": "force_overlap" }"#,
        )
        .unwrap();
        assert_eq!(config.cell, 30.0);
        assert_eq!(config.wall_len, 10.0);
        assert_eq!(config.first_exit, FirstExit::Random);
        assert_eq!(config.dead_end_policy, DeadEndPolicy::ForceOverlap);
    }

    #[test]
    fn test_fixed_first_exit_from_json() {
        let config = LayoutConfig::from_json_str(r#"{ "first_exit": { "fixed": "east" } }"#).unwrap();
        assert_eq!(config.first_exit, FirstExit::Fixed(Direction::East));
    }

    #[test]
    fn test_malformed_json_is_a_config_error() {
        let result = LayoutConfig::from_json_str("{ cell: ");
        assert!(matches!(result, Err(LayoutError::Config(_))));
    }

    #[test]
    fn test_invalid_json_values_are_rejected_after_parse() {
        let result = LayoutConfig::from_json_str(r#"{ "door_w": 25.0 }"#);
        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
    }
}
