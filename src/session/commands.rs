// src/session/commands.rs

use crate::error::{LayoutError, Result};
use crate::layout::{DoorRef, LayoutPlan, Room};
use log::info;
use std::collections::{BTreeMap, BTreeSet};

/// Door state changes the core hands to the presentation layer. How an
/// opening is animated is up to the renderer.
pub trait Command {
    fn execute(&mut self, ledger: &mut DoorLedger) -> Result<()>;
    fn unexecute(&mut self, ledger: &mut DoorLedger) -> Result<()>;
    fn undo(&mut self, ledger: &mut DoorLedger) -> Result<()> {
        self.unexecute(ledger)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorCommand {
    Open(DoorRef),
    Close(DoorRef),
}

impl DoorCommand {
    pub fn door(&self) -> DoorRef {
        match self {
            DoorCommand::Open(door) | DoorCommand::Close(door) => *door,
        }
    }
}

impl Command for DoorCommand {
    fn execute(&mut self, ledger: &mut DoorLedger) -> Result<()> {
        match *self {
            DoorCommand::Open(door) => ledger.set_open(door, true),
            DoorCommand::Close(door) => ledger.set_open(door, false),
        }
    }

    fn unexecute(&mut self, ledger: &mut DoorLedger) -> Result<()> {
        match *self {
            DoorCommand::Open(door) => ledger.set_open(door, false),
            DoorCommand::Close(door) => ledger.set_open(door, true),
        }
    }
}

/// Every door of a plan and whether it is open.
///
/// The exit door of one room and the entry door of the next are the same
/// passage; opening or closing either side moves both.
#[derive(Debug, Clone, Default)]
pub struct DoorLedger {
    partners: BTreeMap<DoorRef, Option<DoorRef>>,
    open: BTreeSet<DoorRef>,
    /// Report every door as open regardless of state.
    pub force_open: bool,
}

impl DoorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_plan(plan: &LayoutPlan) -> Self {
        let mut ledger = DoorLedger::new();
        for room in &plan.rooms {
            ledger.register_room(room);
        }
        ledger
    }

    /// Adds the doors of a freshly generated room, pairing its entry door
    /// with the previous room's exit.
    pub fn register_room(&mut self, room: &Room) {
        for direction in room.door_directions.iter() {
            self.partners.entry(DoorRef { room: room.index, direction }).or_insert(None);
        }
        if let (Some(entry), Some(previous)) = (room.entry_direction, room.index.checked_sub(1)) {
            let entry_door = DoorRef { room: room.index, direction: entry };
            let exit_door = DoorRef { room: previous, direction: entry.opposite() };
            if self.partners.contains_key(&exit_door) {
                self.partners.insert(entry_door, Some(exit_door));
                self.partners.insert(exit_door, Some(entry_door));
            }
        }
    }

    pub fn contains(&self, door: DoorRef) -> bool {
        self.partners.contains_key(&door)
    }

    pub fn partner(&self, door: DoorRef) -> Option<DoorRef> {
        self.partners.get(&door).copied().flatten()
    }

    pub fn is_open(&self, door: DoorRef) -> bool {
        self.force_open || self.open.contains(&door)
    }

    pub fn open_doors(&self) -> impl Iterator<Item = DoorRef> + '_ {
        self.open.iter().copied()
    }

    fn set_open(&mut self, door: DoorRef, open: bool) -> Result<()> {
        if !self.contains(door) {
            if self.partners.keys().any(|d| d.room == door.room) {
                return Err(LayoutError::NoDoor {
                    room: door.room,
                    direction: door.direction,
                });
            }
            return Err(LayoutError::UnknownRoom(door.room));
        }

        let passage = std::iter::once(door).chain(self.partner(door));
        for side in passage {
            if open {
                self.open.insert(side);
            } else {
                self.open.remove(&side);
            }
        }
        info!(
            "door {} of room {} {}",
            door.direction,
            door.room,
            if open { "opened" } else { "closed" }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::{generate_layout_seeded, Direction};

    fn ledger_and_plan() -> (DoorLedger, LayoutPlan) {
        let plan = generate_layout_seeded(4, &LayoutConfig::default(), 42).unwrap();
        (DoorLedger::from_plan(&plan), plan)
    }

    #[test]
    fn test_open_and_undo() {
        let (mut ledger, plan) = ledger_and_plan();
        let door = plan.rooms[0].exit_door().unwrap();
        let mut command = DoorCommand::Open(door);

        command.execute(&mut ledger).unwrap();
        assert!(ledger.is_open(door));
        let partner = ledger.partner(door).unwrap();
        assert_eq!(partner, DoorRef { room: 1, direction: Direction::South });
        assert!(ledger.is_open(partner));

        command.undo(&mut ledger).unwrap();
        assert!(!ledger.is_open(door));
        assert!(!ledger.is_open(partner));
    }

    #[test]
    fn test_close_reverses_open() {
        let (mut ledger, plan) = ledger_and_plan();
        let door = plan.rooms[1].exit_door().unwrap();
        DoorCommand::Open(door).execute(&mut ledger).unwrap();
        let mut close = DoorCommand::Close(door);
        close.execute(&mut ledger).unwrap();
        assert_eq!(ledger.open_doors().count(), 0);
        close.unexecute(&mut ledger).unwrap();
        assert_eq!(ledger.open_doors().count(), 2);
        assert_eq!(close.door(), door);
    }

    #[test]
    fn test_last_exit_has_no_partner_yet() {
        let (ledger, plan) = ledger_and_plan();
        let last = plan.last().unwrap();
        assert_eq!(ledger.partner(last.exit_door().unwrap()), None);
    }

    #[test]
    fn test_missing_doors_are_errors() {
        let (mut ledger, plan) = ledger_and_plan();
        let solid = plan.rooms[0].solid_walls().iter().next().unwrap();
        let result = DoorCommand::Open(DoorRef { room: 0, direction: solid }).execute(&mut ledger);
        assert!(matches!(result, Err(LayoutError::NoDoor { room: 0, .. })));

        let result = DoorCommand::Open(DoorRef { room: 99, direction: Direction::North }).execute(&mut ledger);
        assert!(matches!(result, Err(LayoutError::UnknownRoom(99))));
    }

    #[test]
    fn test_force_open() {
        let (mut ledger, plan) = ledger_and_plan();
        ledger.force_open = true;
        assert!(ledger.is_open(plan.rooms[2].exit_door().unwrap()));
    }
}
