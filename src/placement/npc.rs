// src/placement/npc.rs

use crate::config::LayoutConfig;
use crate::layout::{Direction, DoorRef, Room};
use crate::placement::walls::wall_point;
use crate::utils::geometry::Point2D;
use serde::Serialize;

/// Where the riddle-posing guardian of a room stands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuardianSpawn {
    pub room: usize,
    /// Room-local position next to the exit wall.
    pub position: Point2D,
    /// The guardian looks into the room, away from its door.
    pub facing: Direction,
    /// Door to reveal once the riddle is answered.
    pub door: DoorRef,
}

/// One guardian per room with an exit; dead ends get none.
///
/// The guardian stands `npc_wall_inset` inside the exit wall, shifted aside
/// from the opening: along +X for north/south exits, along -Y for east/west.
pub fn guardian_spawn(room: &Room, config: &LayoutConfig) -> Option<GuardianSpawn> {
    let door = room.exit_door()?;
    let normal = config.wall_len - config.npc_wall_inset;
    let lateral = if door.direction.is_horizontal() {
        config.npc_lateral_offset
    } else {
        -config.npc_lateral_offset
    };

    Some(GuardianSpawn {
        room: room.index,
        position: wall_point(door.direction, normal, lateral),
        facing: door.direction.opposite(),
        door,
    })
}
