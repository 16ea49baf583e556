pub mod maker;
pub mod passability;
pub mod solver;

use std::fmt;

use serde::Serialize;

use crate::error::MazeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One addressable position in the grid.
///
/// `visited` and `parent` are written at most once during generation and
/// `edges` only grows, so a reader that samples a cell between steps always
/// sees a consistent prefix of the final tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    position: Position,
    passable: bool,
    visited: bool,
    parent: Option<Position>,
    edges: Vec<Position>,
}

impl Cell {
    fn new(position: Position, passable: bool) -> Self {
        Cell {
            position,
            passable,
            visited: false,
            parent: None,
            edges: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> usize {
        self.position.x
    }

    pub fn y(&self) -> usize {
        self.position.y
    }

    pub fn is_passable(&self) -> bool {
        self.passable
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// The cell this one was first discovered from, `None` for the root.
    pub fn parent(&self) -> Option<Position> {
        self.parent
    }

    /// Carved connections to this cell's children, in carving order.
    pub fn edges(&self) -> &[Position] {
        &self.edges
    }

    pub(crate) fn visit(&mut self) {
        debug_assert!(!self.visited, "cell {} visited twice", self.position);
        self.visited = true;
    }

    /// Records `parent` unless an earlier discoverer already claimed this cell.
    pub(crate) fn adopt(&mut self, parent: Position) -> bool {
        if self.parent.is_some() {
            return false;
        }
        self.parent = Some(parent);
        true
    }

    pub(crate) fn carve(&mut self, child: Position) {
        self.edges.push(child);
    }
}

/// Fixed lattice of cells, stored row by row.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
    goal: Position,
}

impl Grid {
    pub fn new<F>(
        width: usize,
        height: usize,
        start: Position,
        goal: Position,
        is_passable: F,
    ) -> Result<Self, MazeError>
    where
        F: Fn(Position) -> bool,
    {
        let invalid = MazeError::InvalidDimensions {
            width,
            height,
            start,
            goal,
        };
        let in_bounds = |p: Position| p.x < width && p.y < height;
        if width == 0 || height == 0 || !in_bounds(start) || !in_bounds(goal) {
            return Err(invalid);
        }
        let Some(count) = width.checked_mul(height) else {
            return Err(invalid);
        };

        let mut cells = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                let position = Position::new(x, y);
                cells.push(Cell::new(position, is_passable(position)));
            }
        }

        Ok(Grid {
            width,
            height,
            cells,
            start,
            goal,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, MazeError> {
        self.cell(Position::new(x, y))
    }

    pub fn cell(&self, position: Position) -> Result<&Cell, MazeError> {
        if !self.contains(position) {
            return Err(MazeError::OutOfBounds {
                x: position.x,
                y: position.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(&self.cells[self.index(position)])
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Orthogonal in-bounds neighbors in scan order: up, left, right, down.
    pub fn neighbors_of(&self, cell: &Cell) -> Vec<&Cell> {
        self.neighbor_positions(cell.position())
            .map(|p| &self.cells[self.index(p)])
            .collect()
    }

    pub fn neighbor_positions(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        let Position { x, y } = position;
        let up = y.checked_sub(1).map(|ny| Position::new(x, ny));
        let left = x.checked_sub(1).map(|nx| Position::new(nx, y));
        let right = Some(Position::new(x + 1, y));
        let down = Some(Position::new(x, y + 1));

        [up, left, right, down]
            .into_iter()
            .flatten()
            .filter(move |&p| self.contains(p))
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    pub(crate) fn get(&self, position: Position) -> &Cell {
        &self.cells[self.index(position)]
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> &mut Cell {
        let index = self.index(position);
        &mut self.cells[index]
    }

    fn index(&self, position: Position) -> usize {
        debug_assert!(self.contains(position), "{} is out of bounds", position);
        position.y * self.width + position.x
    }
}
