// Grid:
pub const DEFAULT_SIZE: usize = 25;
pub const MAX_DIMENSION: usize = 100; // Larger requests are clamped rather than rejected.

// Generation:
pub const DEFAULT_DIFFICULTY: f64 = 0.75; // Below 0.5 mazes turn trivial quickly.
pub const NEIGHBOR_SHIFTS: usize = 4; // One per orthogonal direction.
