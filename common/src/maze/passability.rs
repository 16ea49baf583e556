//! Ready-made passability predicates for [`Grid::new`](super::Grid::new).

use super::Position;

/// Every cell may be carved.
pub fn open(_position: Position) -> bool {
    true
}

/// Walls off the leftmost and rightmost columns, leaving only the top-left and
/// bottom-right corners open as entrance and exit.
pub fn walled_sides(width: usize, height: usize) -> impl Fn(Position) -> bool {
    let last_x = width.saturating_sub(1);
    let last_y = height.saturating_sub(1);

    move |Position { x, y }: Position| {
        let is_side = x == 0 || x == last_x;
        let is_corner = (x == 0 && y == 0) || (x == last_x && y == last_y);
        !is_side || is_corner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walled_sides_keeps_interior_and_corners() {
        let passable = walled_sides(5, 4);

        assert!(passable(Position::new(0, 0)));
        assert!(passable(Position::new(4, 3)));
        assert!(passable(Position::new(2, 0)));
        assert!(passable(Position::new(2, 3)));
        assert!(passable(Position::new(1, 2)));

        assert!(!passable(Position::new(0, 1)));
        assert!(!passable(Position::new(0, 3)));
        assert!(!passable(Position::new(4, 0)));
        assert!(!passable(Position::new(4, 2)));
    }

    #[test]
    fn test_walled_sides_single_column() {
        let passable = walled_sides(1, 3);

        assert!(passable(Position::new(0, 0)));
        assert!(!passable(Position::new(0, 1)));
        assert!(passable(Position::new(0, 2)));
    }
}
