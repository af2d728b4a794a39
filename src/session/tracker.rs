// src/session/tracker.rs

use crate::layout::{LayoutPlan, WorldPos};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    /// Same room as last tick, or the position matched no room.
    Unchanged,
    Entered { from: Option<usize>, to: usize },
}

/// Follows the player from room to room, once per game-loop tick.
///
/// Entering the last generated room raises a single preload request. The
/// request stays latched until [`RoomTracker::rooms_appended`] reports new
/// rooms, so repeated ticks inside that room never ask twice.
#[derive(Debug, Clone, Default)]
pub struct RoomTracker {
    current: Option<usize>,
    preload_latched: bool,
    preload_pending: bool,
}

impl RoomTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn update(&mut self, plan: &LayoutPlan, pos: WorldPos) -> TrackerEvent {
        let Some(index) = plan.locate_room_containing(pos) else {
            return TrackerEvent::Unchanged;
        };
        if self.current == Some(index) {
            return TrackerEvent::Unchanged;
        }

        let from = self.current.replace(index);
        debug!("player moved from room {from:?} to room {index}");
        if index + 1 == plan.len() && !self.preload_latched {
            self.preload_latched = true;
            self.preload_pending = true;
        }
        TrackerEvent::Entered { from, to: index }
    }

    /// True at most once per latch.
    pub fn take_preload_request(&mut self) -> bool {
        std::mem::take(&mut self.preload_pending)
    }

    /// Re-arms the preload latch after the caller grew the plan.
    pub fn rooms_appended(&mut self) {
        self.preload_latched = false;
    }
}
