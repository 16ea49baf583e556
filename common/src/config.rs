use std::{env, str::FromStr};

use log::warn;

use crate::{
    constants::{DEFAULT_DIFFICULTY, DEFAULT_SIZE, MAX_DIMENSION},
    error::MazeError,
    maze::{Grid, Position, maker::MazeMaker, passability},
};

/// Everything needed to build a [`MazeMaker`]. `goal` defaults to the
/// bottom-right corner of whatever size the grid ends up.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub start: Position,
    pub goal: Option<Position>,
    pub difficulty: f64,
    pub seed: Option<u64>,
    pub walled_sides: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            start: Position::new(0, 0),
            goal: None,
            difficulty: DEFAULT_DIFFICULTY,
            seed: None,
            walled_sides: true,
        }
    }
}

impl MazeConfig {
    /// Reads `MAZE_WIDTH`, `MAZE_HEIGHT`, `MAZE_DIFFICULTY` and `MAZE_SEED`,
    /// loading a `.env` file first if there is one.
    pub fn from_env() -> Result<Self, MazeError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, MazeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(width) = parse_var(&lookup, "MAZE_WIDTH")? {
            config.width = width;
        }
        if let Some(height) = parse_var(&lookup, "MAZE_HEIGHT")? {
            config.height = height;
        }
        if let Some(difficulty) = parse_var(&lookup, "MAZE_DIFFICULTY")? {
            config.difficulty = difficulty;
        }
        config.seed = parse_var(&lookup, "MAZE_SEED")?;

        Ok(config)
    }

    pub fn goal(&self) -> Position {
        self.goal.unwrap_or_else(|| {
            Position::new(self.width.saturating_sub(1), self.height.saturating_sub(1))
        })
    }

    /// Caps both dimensions at [`MAX_DIMENSION`].
    pub fn clamped(mut self) -> Self {
        if self.width > MAX_DIMENSION {
            warn!("width {} clamped to {}", self.width, MAX_DIMENSION);
            self.width = MAX_DIMENSION;
        }
        if self.height > MAX_DIMENSION {
            warn!("height {} clamped to {}", self.height, MAX_DIMENSION);
            self.height = MAX_DIMENSION;
        }
        self
    }

    pub fn grid(&self) -> Result<Grid, MazeError> {
        let goal = self.goal();
        if self.walled_sides {
            Grid::new(
                self.width,
                self.height,
                self.start,
                goal,
                passability::walled_sides(self.width, self.height),
            )
        } else {
            Grid::new(self.width, self.height, self.start, goal, passability::open)
        }
    }

    pub fn build(&self) -> Result<MazeMaker, MazeError> {
        let config = self.clone().clamped();
        MazeMaker::seeded(config.grid()?, config.difficulty, config.seed)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, MazeError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| MazeError::Config(format!("{}={}", key, raw))),
        None => Ok(None),
    }
}
