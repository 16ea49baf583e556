mod render;

use anyhow::Result;
use clap::Parser;
use log::info;

use common::{Backtrack, MazeConfig, MazeMaker};

/// Carve a maze with randomized depth-first search and print its solution.
///
/// Unset options fall back to MAZE_WIDTH, MAZE_HEIGHT, MAZE_DIFFICULTY and
/// MAZE_SEED (a `.env` file is honoured), then to built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "dfs-maze", version, about)]
struct Args {
    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Probability in [0, 1] that a cell's neighbors are shuffled.
    #[arg(long)]
    difficulty: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Leave the side columns passable.
    #[arg(long)]
    open: bool,

    /// Drive generation one expansion at a time.
    #[arg(long)]
    step: bool,

    /// Print the solution path as JSON instead of a picture.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, mut config: MazeConfig) -> MazeConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.open {
            config.walled_sides = false;
        }
        config
    }
}

/// Generates to completion, one `step` at a time when `stepwise` is set, and
/// returns how many cells were expanded.
fn carve(maker: &mut MazeMaker, stepwise: bool) -> usize {
    if stepwise {
        while maker.step() {}
    } else {
        maker.run_to_completion();
    }
    maker.step_count()
}

fn main() -> Result<()> {
    let env = env_logger::Env::new()
        .filter("MAZE_LOG")
        .write_style("MAZE_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let config = args.apply(MazeConfig::from_env()?);
    info!("maze options: {:?}", config);

    let mut maker = config.build()?;
    let expansions = carve(&mut maker, args.step);
    info!("frontier emptied after {} expansions", expansions);

    let path = maker.solution()?;
    let grid = maker.grid();

    if args.json {
        println!("{}", serde_json::to_string(&path)?);
        return Ok(());
    }

    println!("{}", render::render(grid, &path));
    println!(
        "{}x{} maze, {} cells carved in {} steps.",
        grid.width(),
        grid.height(),
        grid.visited_count(),
        maker.step_count()
    );

    if path.is_empty() {
        println!("No path from {} to {}.", grid.start(), grid.goal());
    } else {
        println!("Solution: {} cells from {} to {}.", path.len(), grid.start(), grid.goal());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "dfs-maze",
            "--width",
            "12",
            "--difficulty",
            "0.3",
            "--seed",
            "7",
            "--open",
        ]);
        let config = args.apply(MazeConfig::default());

        assert_eq!(config.width, 12);
        assert_eq!(config.height, MazeConfig::default().height);
        assert_eq!(config.difficulty, 0.3);
        assert_eq!(config.seed, Some(7));
        assert!(!config.walled_sides);
    }

    fn open_config(width: usize, height: usize) -> MazeConfig {
        MazeConfig {
            width,
            height,
            seed: Some(21),
            walled_sides: false,
            ..MazeConfig::default()
        }
    }

    #[test]
    fn test_carve_counts_final_expansion() {
        for stepwise in [true, false] {
            let mut maker = open_config(1, 1).build().unwrap();
            assert_eq!(carve(&mut maker, stepwise), 1);
        }
    }

    #[test]
    fn test_carve_counts_every_cell_in_both_modes() {
        let mut stepped = open_config(4, 3).build().unwrap();
        let mut instant = open_config(4, 3).build().unwrap();

        assert_eq!(carve(&mut stepped, true), 12);
        assert_eq!(carve(&mut instant, false), 12);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["dfs-maze"]);
        let base = MazeConfig {
            seed: Some(3),
            ..MazeConfig::default()
        };

        assert_eq!(args.apply(base.clone()), base);
    }
}
