pub mod config;
pub mod constants;
pub mod error;
pub mod maze;

pub use config::MazeConfig;
pub use error::MazeError;
pub use maze::maker::{MazeMaker, algorithms::backtrack::Backtrack, neighbors::NeighborOrder};
pub use maze::solver::solution_path;
pub use maze::{Cell, Grid, Position, passability};
