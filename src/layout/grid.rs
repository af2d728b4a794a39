// src/layout/grid.rs

use crate::layout::Direction;
use crate::utils::geometry::Point2D;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Continuous world coordinate. Room centres always sit on the floor (z = 0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPos {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        WorldPos { x, y, z }
    }

    pub const fn xy(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Integer grid coordinate, one unit per room spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const ORIGIN: GridCell = GridCell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        GridCell { x, y }
    }

    /// Rounds a world position to the nearest cell of spacing `cell`.
    pub fn from_world(pos: WorldPos, cell: f64) -> Self {
        GridCell {
            x: (pos.x / cell).round() as i32,
            y: (pos.y / cell).round() as i32,
        }
    }

    pub fn to_world(self, cell: f64) -> WorldPos {
        WorldPos::new(self.x as f64 * cell, self.y as f64 * cell, 0.0)
    }

    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        GridCell::new(self.x + dx, self.y + dy)
    }
}

/// Which cells already hold a room. Only grows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<CellClaim>", from = "Vec<CellClaim>")]
pub struct OccupancyGrid {
    claims: BTreeMap<GridCell, usize>,
}

/// Serialized form of one occupancy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellClaim {
    pub cell: GridCell,
    pub room: usize,
}

impl OccupancyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self, cell: GridCell) -> bool {
        self.claims.contains_key(&cell)
    }

    /// Room that first claimed `cell`, if any.
    pub fn claimant(&self, cell: GridCell) -> Option<usize> {
        self.claims.get(&cell).copied()
    }

    /// Claims `cell` for `room`. Returns `false` and keeps the earlier
    /// claimant when the cell is already taken.
    pub fn claim(&mut self, cell: GridCell, room: usize) -> bool {
        if self.claims.contains_key(&cell) {
            return false;
        }
        self.claims.insert(cell, room);
        true
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.claims.keys().copied()
    }

    /// Inclusive (min, max) corners of the claimed area.
    pub fn bounds(&self) -> Option<(GridCell, GridCell)> {
        let mut cells = self.cells();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), c| {
            (
                GridCell::new(lo.x.min(c.x), lo.y.min(c.y)),
                GridCell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }
}

impl From<OccupancyGrid> for Vec<CellClaim> {
    fn from(grid: OccupancyGrid) -> Self {
        grid.claims
            .into_iter()
            .map(|(cell, room)| CellClaim { cell, room })
            .collect()
    }
}

impl From<Vec<CellClaim>> for OccupancyGrid {
    fn from(claims: Vec<CellClaim>) -> Self {
        let mut grid = OccupancyGrid::new();
        for claim in claims {
            grid.claim(claim.cell, claim.room);
        }
        grid
    }
}
