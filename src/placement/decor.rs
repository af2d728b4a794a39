// src/placement/decor.rs
//! Scatter of decorative props along the walls of a room.

use crate::config::LayoutConfig;
use crate::layout::{Direction, Room};
use crate::placement::walls::wall_point;
use crate::utils::geometry::Point2D;
use log::{debug, warn};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecorPlacement {
    pub wall: Direction,
    /// Room-local floor position.
    pub position: Point2D,
    /// Yaw in degrees that turns the prop toward the room centre.
    pub heading_deg: f64,
    pub scale: f64,
    /// Index into the caller's prop catalogue.
    pub variant: usize,
}

/// Yaw that points a prop standing against `wall` at the room centre.
/// Model-specific yaw corrections (the stock prop meshes need +90) are
/// left to the renderer.
pub fn facing_heading(wall: Direction) -> f64 {
    match wall {
        Direction::North => 180.0,
        Direction::South => 0.0,
        Direction::West => 90.0,
        Direction::East => 270.0,
    }
}

/// Places props along every decoration wall of `room`.
///
/// Each wall receives between `decor_per_wall_min` and `decor_per_wall_max`
/// props. A candidate closer than `decor_min_spacing` to an earlier prop is
/// re-rolled, up to `decor_attempts` times, then given up on.
pub fn scatter_decor<R: Rng + ?Sized>(
    room: &Room,
    config: &LayoutConfig,
    catalog_len: usize,
    rng: &mut R,
) -> Vec<DecorPlacement> {
    if catalog_len == 0 {
        warn!("no decor props available, room {} stays bare", room.index);
        return Vec::new();
    }

    let normal = config.wall_len - config.decor_wall_inset;
    let mut placed: Vec<DecorPlacement> = Vec::new();

    for wall in room.decor_directions().iter() {
        let wanted = rng.random_range(config.decor_per_wall_min..=config.decor_per_wall_max);
        for _ in 0..wanted {
            let variant = rng.random_range(0..catalog_len);
            let mut accepted = None;
            for _ in 0..config.decor_attempts {
                let offset = rng.random_range(-config.decor_spread..=config.decor_spread);
                let position = wall_point(wall, normal, offset);
                if placed
                    .iter()
                    .all(|p| p.position.distance_to(&position) >= config.decor_min_spacing)
                {
                    accepted = Some(position);
                    break;
                }
            }

            match accepted {
                Some(position) => placed.push(DecorPlacement {
                    wall,
                    position,
                    heading_deg: facing_heading(wall),
                    scale: rng.random_range(config.decor_scale.min..=config.decor_scale.max),
                    variant,
                }),
                None => debug!("room {}: no room left for a prop on the {wall} wall", room.index),
            }
        }
    }

    placed
}
