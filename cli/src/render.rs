use std::collections::HashSet;

use common::{Grid, Position};

const WALL: &str = "██";
const SPACE: &str = "  ";
const TRAIL: &str = "··";

/// Draws `grid` on a lattice twice its size plus one, so every cell and every
/// gap between neighbors gets its own square. Cells on `path`, and the gaps
/// joining consecutive path cells, are marked with a trail.
pub fn render(grid: &Grid, path: &[Position]) -> String {
    let width = 2 * grid.width() + 1;
    let height = 2 * grid.height() + 1;
    let mut canvas = vec![vec![WALL; width]; height];

    for cell in grid.cells().filter(|c| c.is_visited()) {
        let (cx, cy) = lattice(cell.position());
        canvas[cy][cx] = SPACE;

        for child in cell.edges() {
            let (ex, ey) = lattice(*child);
            canvas[(cy + ey) / 2][(cx + ex) / 2] = SPACE;
        }
    }

    let on_path: HashSet<Position> = path.iter().copied().collect();
    for p in &on_path {
        let (x, y) = lattice(*p);
        canvas[y][x] = TRAIL;
    }
    for pair in path.windows(2) {
        let (ax, ay) = lattice(pair[0]);
        let (bx, by) = lattice(pair[1]);
        canvas[(ay + by) / 2][(ax + bx) / 2] = TRAIL;
    }

    canvas
        .iter()
        .map(|row| row.concat())
        .collect::<Vec<String>>()
        .join("\n")
}

fn lattice(position: Position) -> (usize, usize) {
    (2 * position.x + 1, 2 * position.y + 1)
}
