// src/layout/direction.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four room walls, and the matching step on the grid.
/// North is +Y, East is +X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Unit step in grid cells.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Walls facing north or south run along the X axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Small copyable set of directions, ordered like [`Direction::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Direction>", from = "Vec<Direction>")]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const fn empty() -> Self {
        DirectionSet(0)
    }

    const fn bit(direction: Direction) -> u8 {
        match direction {
            Direction::North => 1,
            Direction::South => 2,
            Direction::East => 4,
            Direction::West => 8,
        }
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= Self::bit(direction);
    }

    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !Self::bit(direction);
    }

    pub const fn contains(&self, direction: Direction) -> bool {
        self.0 & Self::bit(direction) != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Every direction not in `self`.
    pub const fn complement(&self) -> Self {
        DirectionSet(!self.0 & 0b1111)
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl From<Vec<Direction>> for DirectionSet {
    fn from(directions: Vec<Direction>) -> Self {
        directions.into_iter().collect()
    }
}

impl From<DirectionSet> for Vec<Direction> {
    fn from(set: DirectionSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn test_offsets_cancel_with_opposite() {
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            let (ox, oy) = d.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::North.offset(), (0, 1));
    }

    #[test]
    fn test_set_operations() {
        let mut set: DirectionSet = [Direction::North, Direction::West].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Direction::North));
        assert!(!set.contains(Direction::East));

        let solid = set.complement();
        assert_eq!(solid.iter().collect::<Vec<_>>(), vec![Direction::South, Direction::East]);

        set.remove(Direction::North);
        set.insert(Direction::North);
        set.insert(Direction::North);
        assert_eq!(set.len(), 2);
        assert!(DirectionSet::empty().is_empty());
    }

    #[test]
    fn test_set_serializes_as_list() {
        let set: DirectionSet = [Direction::South, Direction::North].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["north","south"]"#);
        let back: DirectionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
