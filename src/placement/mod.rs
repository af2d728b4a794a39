// src/placement/mod.rs
//! Per-room output for the renderer, collision builder and NPC spawner.
pub mod decor;
pub mod npc;
pub mod walls;

pub use decor::{scatter_decor, DecorPlacement};
pub use npc::{guardian_spawn, GuardianSpawn};
pub use walls::{build_shell, DoorOpening, DoorPanel, RoomShell, WallSegment, WallSpec};

use crate::config::LayoutConfig;
use crate::layout::{DirectionSet, LayoutPlan, Room, WorldPos};
use serde::Serialize;

/// Deterministic placement of one room. Decor is scattered separately with
/// its own random source so dressing never disturbs layout reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomPlacement {
    pub room: usize,
    pub origin: WorldPos,
    pub shell: RoomShell,
    pub guardian: Option<GuardianSpawn>,
    pub decor_walls: DirectionSet,
}

pub fn place_room(room: &Room, config: &LayoutConfig) -> RoomPlacement {
    RoomPlacement {
        room: room.index,
        origin: room.world_position,
        shell: build_shell(room, config),
        guardian: guardian_spawn(room, config),
        decor_walls: room.decor_directions(),
    }
}

pub fn place_plan(plan: &LayoutPlan, config: &LayoutConfig) -> Vec<RoomPlacement> {
    plan.rooms.iter().map(|room| place_room(room, config)).collect()
}
