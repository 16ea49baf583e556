use log::trace;
use rand::Rng;

use super::super::{MazeMaker, Position};

/// Randomized iterative depth-first search over a [`MazeMaker`]'s grid.
pub trait Backtrack {
    /// Performs one pop-expand-push cycle. Returns `false` once the frontier
    /// is exhausted.
    fn step(&mut self) -> bool;

    fn run_to_completion(&mut self) {
        while self.step() {}
    }
}

impl<R: Rng> Backtrack for MazeMaker<R> {
    fn step(&mut self) -> bool {
        let Some(current) = pop_unvisited(self) else {
            self.finish();
            return false;
        };

        if let Some(parent) = self.grid.get(current).parent() {
            self.grid.get_mut(parent).carve(current);
        }
        self.grid.get_mut(current).visit();
        self.steps += 1;

        let candidates: Vec<Position> = self
            .grid
            .neighbor_positions(current)
            .filter(|&p| {
                let cell = self.grid.get(p);
                cell.is_passable() && !cell.is_visited()
            })
            .collect();

        trace!(
            "step {}: expanded {} with {} candidates",
            self.steps,
            current,
            candidates.len()
        );

        for next in self.order.order(candidates) {
            // Later discoverers still push, so the stack depth matches a
            // plain backtracker; the parent stays with whoever came first.
            self.grid.get_mut(next).adopt(current);
            self.frontier.push(next);
        }

        if self.frontier.is_empty() {
            self.finish();
            return false;
        }

        true
    }
}

fn pop_unvisited<R: Rng>(maker: &mut MazeMaker<R>) -> Option<Position> {
    while let Some(position) = maker.frontier.pop() {
        if !maker.grid.get(position).is_visited() {
            return Some(position);
        }
    }
    None
}
