// src/lib.rs

pub mod config;
pub mod error;
pub mod layout;
pub mod placement;
pub mod session;
pub mod ui;
pub mod utils;

pub use config::{DeadEndPolicy, FirstExit, LayoutConfig};
pub use error::{LayoutError, Result};
pub use layout::{generate_layout, Direction, LayoutPlan, Room};
