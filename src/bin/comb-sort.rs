//! CLI for the comb sort demo

use clap::Parser;
use log::debug;
use maze_astar::array_utils::{generate_random_array_with, is_sorted};
use maze_astar::comb_sort::{comb_sort, gap_sequence};
use rand::{rngs::StdRng, SeedableRng};

/// Sort a random array with comb sort
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of elements
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Smallest possible element
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min: i64,

    /// Largest possible element
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max: i64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate array, sort it, print every stage
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut random = match args.seed {
        Some(state) => StdRng::seed_from_u64(state),
        None => StdRng::from_entropy(),
    };

    println!("Generated Array:");
    let mut arr = generate_random_array_with(&mut random, args.size, args.min, args.max)?;
    println!("{:?}", arr);

    println!("Sorting Array...");
    debug!("Gap sequence: {:?}", gap_sequence(arr.len()));
    comb_sort(&mut arr);

    println!("Sorted Array:");
    println!("{:?}", arr);

    println!("Is Array Sorted: {}", is_sorted(&arr));
    Ok(())
}
