// src/placement/walls.rs
//! Wall and door geometry of a room, in room-local coordinates.
//!
//! The room centre is the origin, +Y points north. A door wall is never
//! removed: it is split into two flanking pieces around an opening so the
//! door panel can later be hidden without leaving a gap.

use crate::config::LayoutConfig;
use crate::layout::{Direction, DoorRef, Room};
use crate::utils::geometry::Point2D;
use serde::Serialize;

/// Point at `normal` units out along `direction` and `tangent` units along
/// the wall (X for north/south walls, Y for east/west walls).
pub fn wall_point(direction: Direction, normal: f64, tangent: f64) -> Point2D {
    match direction {
        Direction::North => Point2D::new(tangent, normal),
        Direction::South => Point2D::new(tangent, -normal),
        Direction::East => Point2D::new(normal, tangent),
        Direction::West => Point2D::new(-normal, tangent),
    }
}

/// One box of wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallSegment {
    pub center: Point2D,
    /// Size along the wall, as handed to the renderer's box scale.
    pub span: f64,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoorOpening {
    /// Middle of the gap, on the wall's centreline.
    pub centerline: Point2D,
    pub width: f64,
}

/// The removable door leaf filling an opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoorPanel {
    pub door: DoorRef,
    pub center: Point2D,
    pub width: f64,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WallSpec {
    Solid {
        direction: Direction,
        segment: WallSegment,
    },
    Doorway {
        direction: Direction,
        opening: DoorOpening,
        segments: [WallSegment; 2],
        panel: DoorPanel,
        is_exit: bool,
    },
}

impl WallSpec {
    pub fn direction(&self) -> Direction {
        match self {
            WallSpec::Solid { direction, .. } | WallSpec::Doorway { direction, .. } => *direction,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, WallSpec::Solid { .. })
    }
}

/// Everything the renderer needs to raise one room's walls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomShell {
    pub room: usize,
    pub height: f64,
    pub half_width: f64,
    pub walls: [WallSpec; 4],
}

impl RoomShell {
    pub fn wall(&self, direction: Direction) -> &WallSpec {
        let slot = Direction::ALL
            .iter()
            .position(|d| *d == direction)
            .unwrap_or_default();
        &self.walls[slot]
    }

    pub fn door_panels(&self) -> impl Iterator<Item = &DoorPanel> {
        self.walls.iter().filter_map(|wall| match wall {
            WallSpec::Doorway { panel, .. } => Some(panel),
            WallSpec::Solid { .. } => None,
        })
    }
}

/// Lays out the four walls of `room`.
pub fn build_shell(room: &Room, config: &LayoutConfig) -> RoomShell {
    RoomShell {
        room: room.index,
        height: config.wall_alt,
        half_width: config.wall_len,
        walls: Direction::ALL.map(|d| build_wall(room, d, config)),
    }
}

fn build_wall(room: &Room, direction: Direction, config: &LayoutConfig) -> WallSpec {
    let wall_normal = config.wall_len + config.wall_thk / 2.0;

    if !room.has_door(direction) {
        return WallSpec::Solid {
            direction,
            segment: WallSegment {
                center: wall_point(direction, wall_normal, 0.0),
                span: config.cell,
                thickness: config.wall_thk,
            },
        };
    }

    let half = config.wall_len - config.door_w / 2.0;
    let offset = config.wall_len - half / 2.0;
    let segment = |side: f64| WallSegment {
        center: wall_point(direction, wall_normal, side * offset),
        span: half,
        thickness: config.wall_thk,
    };

    WallSpec::Doorway {
        direction,
        opening: DoorOpening {
            centerline: wall_point(direction, wall_normal, 0.0),
            width: config.door_w,
        },
        segments: [segment(-1.0), segment(1.0)],
        panel: DoorPanel {
            door: DoorRef {
                room: room.index,
                direction,
            },
            center: wall_point(direction, config.wall_len + config.door_thk / 2.0, 0.0),
            width: config.door_w,
            thickness: config.door_thk,
        },
        is_exit: room.exit_direction == Some(direction),
    }
}
