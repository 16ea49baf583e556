pub mod algorithms;
pub mod neighbors;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use algorithms::backtrack::Backtrack;
use neighbors::NeighborOrder;

use super::{Grid, Position, solver};
use crate::error::MazeError;

/// Owns a grid while it is being carved, together with the frontier stack and
/// the random source that orders each cell's neighbors.
pub struct MazeMaker<R: Rng = StdRng> {
    grid: Grid,
    order: NeighborOrder<R>,
    frontier: Vec<Position>,
    steps: usize,
    finished: bool,
}

impl<R: Rng> MazeMaker<R> {
    pub fn new(grid: Grid, order: NeighborOrder<R>) -> Result<Self, MazeError> {
        let start = grid.start();
        if !grid.get(start).is_passable() {
            return Err(MazeError::InvalidStart(start));
        }

        debug!(
            "carving {}x{} grid from {} with difficulty {} and shift {}",
            grid.width(),
            grid.height(),
            start,
            order.difficulty(),
            order.shift()
        );

        Ok(MazeMaker {
            grid,
            order,
            frontier: vec![start],
            steps: 0,
            finished: false,
        })
    }

    pub fn with_rng(grid: Grid, rng: R, difficulty: f64) -> Result<Self, MazeError> {
        let order = NeighborOrder::new(rng, difficulty)?;
        Self::new(grid, order)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Pending cells, bottom of the stack first. May hold the same cell more
    /// than once; stale entries are skipped when popped.
    pub fn frontier(&self) -> &[Position] {
        &self.frontier
    }

    pub fn difficulty(&self) -> f64 {
        self.order.difficulty()
    }

    pub fn neighbor_shift(&self) -> usize {
        self.order.shift()
    }

    pub fn step_count(&self) -> usize {
        self.steps
    }

    pub fn is_complete(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn solution(&self) -> Result<Vec<Position>, MazeError> {
        solver::solution_path(&self.grid, self.grid.goal())
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        debug!(
            "maze complete after {} steps, {} of {} cells visited",
            self.steps,
            self.grid.visited_count(),
            self.grid.len()
        );
    }
}

impl MazeMaker<StdRng> {
    /// Seeded makers are reproducible; without a seed the OS supplies one.
    pub fn seeded(grid: Grid, difficulty: f64, seed: Option<u64>) -> Result<Self, MazeError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(grid, rng, difficulty)
    }
}

/// Carves `grid` to completion in one call.
pub fn generate<R: Rng>(grid: Grid, rng: R, difficulty: f64) -> Result<Grid, MazeError> {
    let mut maker = MazeMaker::with_rng(grid, rng, difficulty)?;
    maker.run_to_completion();
    Ok(maker.into_grid())
}
