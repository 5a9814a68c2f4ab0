//! CLI for maze generation and solving

use clap::Parser;
use log::info;
use maze_astar::maze_generator::MazeGenerator;
use maze_astar::PathFinder;

/// Carve a random maze and find the shortest way from the top-left to the
/// bottom-right corner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height in cells
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Maze width in cells
    #[arg(long, default_value_t = 15)]
    columns: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print path
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let maze = MazeGenerator::new(args.seed).generate_maze(args.rows, args.columns)?;
    info!("Solving {}x{} maze", maze.rows(), maze.columns());

    match PathFinder::new(&maze).solve()? {
        Some(path) => path.print_report(),
        None => println!("No solution found!"),
    }
    Ok(())
}
