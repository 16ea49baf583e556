use thiserror::Error;

use crate::maze::Position;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error("a {width}x{height} grid cannot hold start {start} and goal {goal}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        start: Position,
        goal: Position,
    },
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("start cell {0} is not passable")]
    InvalidStart(Position),
    #[error("difficulty must lie in [0, 1], got {0}")]
    InvalidDifficulty(f64),
    #[error("invalid configuration value: {0}")]
    Config(String),
}
