// src/layout/room.rs

use crate::layout::{Direction, DirectionSet, GridCell, OccupancyGrid, WorldPos};
use crate::utils::geometry::Square;
use serde::{Deserialize, Serialize};

/// Addresses one door: the wall `direction` of room `room`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoorRef {
    pub room: usize,
    pub direction: Direction,
}

/// A generated room. Decisions are final once the generator hands it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub index: usize,
    pub cell: GridCell,
    pub world_position: WorldPos,
    /// Side the player came in through. `None` only for the first room.
    pub entry_direction: Option<Direction>,
    /// Side of the outgoing door. `None` for a dead end.
    pub exit_direction: Option<Direction>,
    pub door_directions: DirectionSet,
    pub is_first: bool,
    pub is_dead_end: bool,
}

impl Room {
    /// Walls that carry no door.
    pub fn solid_walls(&self) -> DirectionSet {
        self.door_directions.complement()
    }

    /// Walls free for decoration: solid walls, minus the guardian's exit wall.
    pub fn decor_directions(&self) -> DirectionSet {
        let mut dirs = self.solid_walls();
        if let Some(exit) = self.exit_direction {
            dirs.remove(exit);
        }
        dirs
    }

    pub fn exit_door(&self) -> Option<DoorRef> {
        self.exit_direction.map(|direction| DoorRef {
            room: self.index,
            direction,
        })
    }

    pub fn has_door(&self, direction: Direction) -> bool {
        self.door_directions.contains(direction)
    }

    /// Floor area of the room in world space.
    pub fn extent(&self, wall_len: f64) -> Square {
        Square::new(self.world_position.xy(), wall_len)
    }
}

/// Everything one generation run produced, in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub rooms: Vec<Room>,
    pub occupancy: OccupancyGrid,
    /// Rooms placed on an already claimed cell (forced-overlap policy only).
    pub overlaps: Vec<usize>,
    /// Room count the caller asked for.
    pub requested: usize,
    pub cell: f64,
    pub wall_len: f64,
}

impl LayoutPlan {
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn last(&self) -> Option<&Room> {
        self.rooms.last()
    }

    /// True when the chain stopped at a dead end before reaching `requested`.
    pub fn is_truncated(&self) -> bool {
        self.rooms.len() < self.requested
    }

    pub fn dead_ends(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_dead_end)
    }

    /// Index of the room whose floor square contains `pos`, scanning in
    /// creation order. `None` means the position lies outside every known
    /// room; trackers should keep their previous answer.
    pub fn locate_room_containing(&self, pos: WorldPos) -> Option<usize> {
        let point = pos.xy();
        self.rooms
            .iter()
            .find(|room| room.extent(self.wall_len).contains(&point))
            .map(|room| room.index)
    }
}
