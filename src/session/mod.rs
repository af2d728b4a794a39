// src/session/mod.rs
//! Game-loop side of the layout: the plan grows one room ahead of the player
//! and exit doors open when their guardian is satisfied.
pub mod commands;
pub mod tracker;

pub use commands::{Command, DoorCommand, DoorLedger};
pub use tracker::{RoomTracker, TrackerEvent};

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::layout::{DoorRef, LayoutBuilder, LayoutPlan, WorldPos};
use log::info;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Entered { from: Option<usize>, to: usize },
    RoomAppended(usize),
    /// The player reached the last room and no further room can be built.
    ChainEnded,
    DoorOpened(DoorRef),
    DoorClosed(DoorRef),
}

/// Incrementally generated dungeon: starts with `initial_rooms` rooms and
/// appends one more each time the player enters the last.
pub struct DungeonSession<R> {
    builder: LayoutBuilder<R>,
    tracker: RoomTracker,
    doors: DoorLedger,
    history: Vec<DoorCommand>,
}

impl<R: Rng> DungeonSession<R> {
    pub fn new(config: LayoutConfig, rng: R, initial_rooms: usize) -> Result<Self> {
        if initial_rooms < 1 {
            return Err(LayoutError::InvalidArgument(
                "a session needs at least one room".to_string(),
            ));
        }
        let mut builder = LayoutBuilder::new(config, rng)?;
        let mut doors = DoorLedger::new();
        for _ in 0..initial_rooms {
            match builder.push_room() {
                Some(room) => doors.register_room(room),
                None => break,
            }
        }
        info!("session started with {} rooms", builder.plan().len());
        Ok(DungeonSession {
            builder,
            tracker: RoomTracker::new(),
            doors,
            history: Vec::new(),
        })
    }

    pub fn plan(&self) -> &LayoutPlan {
        self.builder.plan()
    }

    pub fn config(&self) -> &LayoutConfig {
        self.builder.config()
    }

    pub fn current_room(&self) -> Option<usize> {
        self.tracker.current()
    }

    pub fn doors(&self) -> &DoorLedger {
        &self.doors
    }

    pub fn doors_mut(&mut self) -> &mut DoorLedger {
        &mut self.doors
    }

    /// One game-loop tick with the player's position.
    pub fn tick(&mut self, player: WorldPos) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if let TrackerEvent::Entered { from, to } = self.tracker.update(self.builder.plan(), player) {
            events.push(SessionEvent::Entered { from, to });
        }

        if self.tracker.take_preload_request() {
            match self.builder.push_room() {
                Some(room) => {
                    self.doors.register_room(room);
                    events.push(SessionEvent::RoomAppended(room.index));
                    self.tracker.rooms_appended();
                }
                None => events.push(SessionEvent::ChainEnded),
            }
        }
        events
    }

    pub fn apply(&mut self, mut command: DoorCommand) -> Result<SessionEvent> {
        command.execute(&mut self.doors)?;
        self.history.push(command);
        Ok(match command {
            DoorCommand::Open(door) => SessionEvent::DoorOpened(door),
            DoorCommand::Close(door) => SessionEvent::DoorClosed(door),
        })
    }

    /// Reverts the most recent door command, if any.
    pub fn undo(&mut self) -> Result<Option<SessionEvent>> {
        let Some(mut command) = self.history.pop() else {
            return Ok(None);
        };
        command.undo(&mut self.doors)?;
        Ok(Some(match command {
            DoorCommand::Open(door) => SessionEvent::DoorClosed(door),
            DoorCommand::Close(door) => SessionEvent::DoorOpened(door),
        }))
    }

    /// Opens the exit of `room` after its guardian's riddle was answered.
    /// Dead ends have nothing to open.
    pub fn solve_guardian(&mut self, room: usize) -> Result<Option<SessionEvent>> {
        let room = self
            .builder
            .plan()
            .room(room)
            .ok_or(LayoutError::UnknownRoom(room))?;
        match room.exit_door() {
            Some(door) => self.apply(DoorCommand::Open(door)).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{generate_layout_seeded, Direction};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> DungeonSession<StdRng> {
        DungeonSession::new(LayoutConfig::default(), StdRng::seed_from_u64(42), 2).unwrap()
    }

    #[test]
    fn test_zero_initial_rooms_is_invalid() {
        let result = DungeonSession::new(LayoutConfig::default(), StdRng::seed_from_u64(1), 0);
        assert!(matches!(result, Err(LayoutError::InvalidArgument(_))));
    }

    #[test]
    fn test_walking_forward_preloads_one_room_ahead() {
        let mut session = session();
        assert_eq!(session.plan().len(), 2);

        let start = session.plan().rooms[0].world_position;
        assert_eq!(session.tick(start), vec![SessionEvent::Entered { from: None, to: 0 }]);

        for step in 1..6 {
            let next = session.plan().rooms[step].world_position;
            let events = session.tick(next);
            assert_eq!(events[0], SessionEvent::Entered { from: Some(step - 1), to: step });
            assert_eq!(events[1], SessionEvent::RoomAppended(step + 1));
            assert_eq!(session.plan().len(), step + 2);
            // staying put asks for nothing
            assert!(session.tick(next).is_empty());
        }
    }

    #[test]
    fn test_dead_end_reports_chain_end_once() {
        let config = LayoutConfig::default();
        let (seed, plan) = (0..500)
            .map(|s| (s, generate_layout_seeded(200, &config, s).unwrap()))
            .find(|(_, plan)| plan.is_truncated())
            .expect("some seed boxes itself in within 200 rooms");
        let mut session = DungeonSession::new(config, StdRng::seed_from_u64(seed), plan.len()).unwrap();
        assert_eq!(session.plan().rooms, plan.rooms);

        let last = plan.len() - 1;
        for index in 0..last {
            let events = session.tick(plan.rooms[index].world_position);
            assert!(!events.contains(&SessionEvent::ChainEnded));
        }

        let dead_end = plan.rooms[last].world_position;
        assert_eq!(
            session.tick(dead_end),
            vec![
                SessionEvent::Entered { from: Some(last - 1), to: last },
                SessionEvent::ChainEnded,
            ]
        );
        assert!(session.tick(dead_end).is_empty());

        // walking out and back in does not report it again
        session.tick(plan.rooms[last - 1].world_position);
        assert_eq!(
            session.tick(dead_end),
            vec![SessionEvent::Entered { from: Some(last - 1), to: last }]
        );
        assert_eq!(session.plan().len(), plan.len());
    }

    #[test]
    fn test_solving_guardian_opens_the_passage() {
        let mut session = session();
        let event = session.solve_guardian(0).unwrap();
        let door = DoorRef { room: 0, direction: Direction::North };
        assert_eq!(event, Some(SessionEvent::DoorOpened(door)));
        assert!(session.doors().is_open(door));
        assert!(session.doors().is_open(DoorRef { room: 1, direction: Direction::South }));

        assert_eq!(session.undo().unwrap(), Some(SessionEvent::DoorClosed(door)));
        assert!(!session.doors().is_open(door));
        assert_eq!(session.undo().unwrap(), None);
    }

    #[test]
    fn test_unknown_guardian_room() {
        let mut session = session();
        assert!(matches!(session.solve_guardian(7), Err(LayoutError::UnknownRoom(7))));
    }

    #[test]
    fn test_failed_command_is_not_recorded() {
        let mut session = session();
        let bad = DoorCommand::Open(DoorRef { room: 0, direction: Direction::South });
        assert!(session.apply(bad).is_err());
        assert_eq!(session.undo().unwrap(), None);
    }
}
