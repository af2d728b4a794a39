// src/layout/mod.rs
pub mod direction;
pub mod generator;
pub mod grid;
pub mod room;
pub mod survey;

pub use direction::{Direction, DirectionSet};
pub use generator::{generate_layout, generate_layout_random, generate_layout_seeded, LayoutBuilder};
pub use grid::{CellClaim, GridCell, OccupancyGrid, WorldPos};
pub use room::{DoorRef, LayoutPlan, Room};
pub use survey::{survey, SurveyStats};
