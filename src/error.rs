// src/error.rs

use crate::layout::Direction;
use thiserror::Error;

/// Failures raised by the layout core.
///
/// Dead ends and unresolved player positions are ordinary states and are
/// carried as `Option`s on the data, never through this type.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("room {0} is not part of the layout")]
    UnknownRoom(usize),
    #[error("room {room} has no door on its {direction} wall")]
    NoDoor { room: usize, direction: Direction },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
