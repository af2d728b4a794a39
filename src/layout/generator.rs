// src/layout/generator.rs
//! Grows a chain of rooms on the grid.
//!
//! Each room is entered from the side opposite to the previous room's exit
//! and picks its own exit among the remaining three walls, preferring walls
//! whose neighbouring cell is still free. When none is free the configured
//! [`DeadEndPolicy`] decides between ending the chain and overlapping.

use crate::config::{DeadEndPolicy, FirstExit, LayoutConfig};
use crate::error::{LayoutError, Result};
use crate::layout::{Direction, DirectionSet, GridCell, LayoutPlan, OccupancyGrid, Room};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Where the next room will be built.
#[derive(Debug, Clone, Copy)]
struct PendingRoom {
    cell: GridCell,
    entry: Option<Direction>,
}

/// Builder state of one generation run.
///
/// [`generate_layout`] drives it to completion in one call. Callers that
/// preload rooms one at a time keep the builder and call [`push_room`]
/// whenever they need another room. Every call appends a room until the
/// chain ends at a dead end; the builder does not deduplicate triggers.
///
/// [`push_room`]: LayoutBuilder::push_room
pub struct LayoutBuilder<R> {
    config: LayoutConfig,
    rng: R,
    plan: LayoutPlan,
    next: Option<PendingRoom>,
}

impl<R: Rng> LayoutBuilder<R> {
    pub fn new(config: LayoutConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let plan = LayoutPlan {
            rooms: Vec::new(),
            occupancy: OccupancyGrid::new(),
            overlaps: Vec::new(),
            requested: 0,
            cell: config.cell,
            wall_len: config.wall_len,
        };
        Ok(LayoutBuilder {
            config,
            rng,
            plan,
            next: Some(PendingRoom {
                cell: GridCell::ORIGIN,
                entry: None,
            }),
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The rooms built so far.
    pub fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    /// False once the chain has ended at a dead end.
    pub fn can_grow(&self) -> bool {
        self.next.is_some()
    }

    /// Builds the next room of the chain, or returns `None` if the previous
    /// room was a dead end.
    pub fn push_room(&mut self) -> Option<&Room> {
        let pending = self.next.take()?;
        self.plan.requested += 1;
        let index = self.plan.rooms.len();

        if !self.plan.occupancy.claim(pending.cell, index) {
            warn!(
                "room {index} overlaps room {:?} at cell ({}, {})",
                self.plan.occupancy.claimant(pending.cell),
                pending.cell.x,
                pending.cell.y
            );
            self.plan.overlaps.push(index);
        }

        let exit = match pending.entry {
            None => self.first_exit(),
            Some(entry) => self.choose_exit(pending.cell, entry),
        };

        let door_directions: DirectionSet = pending.entry.into_iter().chain(exit).collect();
        let room = Room {
            index,
            cell: pending.cell,
            world_position: pending.cell.to_world(self.config.cell),
            entry_direction: pending.entry,
            exit_direction: exit,
            door_directions,
            is_first: index == 0,
            is_dead_end: exit.is_none(),
        };

        match exit {
            Some(direction) => debug!(
                "room {index} at ({}, {}): entry {:?}, exit {direction}",
                room.cell.x, room.cell.y, room.entry_direction
            ),
            None => warn!(
                "room {index} at ({}, {}) is a dead end, chain stops",
                room.cell.x, room.cell.y
            ),
        }

        self.next = exit.map(|direction| PendingRoom {
            cell: pending.cell.step(direction),
            entry: Some(direction.opposite()),
        });
        self.plan.rooms.push(room);
        self.plan.rooms.last()
    }

    pub fn finish(self) -> LayoutPlan {
        self.plan
    }

    fn first_exit(&mut self) -> Option<Direction> {
        match self.config.first_exit {
            FirstExit::Fixed(direction) => Some(direction),
            FirstExit::Random => Direction::ALL.choose(&mut self.rng).copied(),
        }
    }

    fn choose_exit(&mut self, cell: GridCell, entry: Direction) -> Option<Direction> {
        let candidates: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| *d != entry)
            .collect();
        let free: Vec<Direction> = candidates
            .iter()
            .copied()
            .filter(|d| !self.plan.occupancy.is_occupied(cell.step(*d)))
            .collect();

        if let Some(direction) = free.choose(&mut self.rng) {
            return Some(*direction);
        }

        match self.config.dead_end_policy {
            DeadEndPolicy::StopEarly => None,
            DeadEndPolicy::ForceOverlap => {
                let forced = candidates.choose(&mut self.rng).copied();
                warn!(
                    "no free neighbour at ({}, {}), forcing exit {:?} onto an occupied cell",
                    cell.x, cell.y, forced
                );
                forced
            }
        }
    }
}

/// Builds a chain of up to `room_count` rooms.
///
/// Under [`DeadEndPolicy::StopEarly`] the plan may hold fewer rooms than
/// requested; the last one is then a dead end.
pub fn generate_layout<R: Rng + ?Sized>(
    room_count: usize,
    config: &LayoutConfig,
    rng: &mut R,
) -> Result<LayoutPlan> {
    if room_count < 1 {
        return Err(LayoutError::InvalidArgument(
            "room count must be at least 1".to_string(),
        ));
    }

    let mut builder = LayoutBuilder::new(config.clone(), rng)?;
    while builder.plan().len() < room_count {
        if builder.push_room().is_none() {
            break;
        }
    }

    let mut plan = builder.finish();
    plan.requested = room_count;
    info!(
        "generated {} of {} rooms ({} dead ends, {} overlaps)",
        plan.len(),
        room_count,
        plan.dead_ends().count(),
        plan.overlaps.len()
    );
    Ok(plan)
}

/// Reproducible generation from a numeric seed.
pub fn generate_layout_seeded(room_count: usize, config: &LayoutConfig, seed: u64) -> Result<LayoutPlan> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_layout(room_count, config, &mut rng)
}

/// Generation from the thread-local entropy source.
pub fn generate_layout_random(room_count: usize, config: &LayoutConfig) -> Result<LayoutPlan> {
    generate_layout(room_count, config, &mut rand::rng())
}
