use super::{Grid, Position};
use crate::error::MazeError;

/// Follows parent links from `goal` back to the root and returns the route in
/// start-to-goal order.
///
/// An empty path means `goal` was never reached. Only meaningful once
/// generation has finished.
pub fn solution_path(grid: &Grid, goal: Position) -> Result<Vec<Position>, MazeError> {
    let goal_cell = grid.cell(goal)?;
    if goal_cell.parent().is_none() && goal != grid.start() {
        return Ok(Vec::new());
    }

    let mut path = vec![goal];
    let mut current = goal_cell;
    while let Some(parent) = current.parent() {
        debug_assert!(path.len() < grid.len(), "parent links form a cycle");
        path.push(parent);
        current = grid.get(parent);
    }

    path.reverse();
    Ok(path)
}
