//! Generate a perfect maze and find the way through it
//!
//! Mazes are carved with randomized depth-first search
//! ([maze_generator::MazeGenerator]) and solved with A*
//! ([pathfinder::PathFinder]). The crate also carries a small comb sort
//! demo ([comb_sort]) with its array helpers ([array_utils]).
//!
//! # Examples
//! ## Solve a generated maze
//! ```
//! use maze_astar::maze_generator::MazeGenerator;
//! use maze_astar::pathfinder::PathFinder;
//!
//! let maze = MazeGenerator::new(Some(1)).generate_maze(15, 15).unwrap();
//! let path = PathFinder::new(&maze).solve().unwrap().unwrap();
//! assert_eq!(path.points.first(), Some(&maze.start()));
//! assert_eq!(path.points.last(), Some(&maze.goal()));
//! assert!(path.cost() >= 28);
//! path.print_report();
//! ```
//!
//! ## Handle a maze without a way out
//! ```
//! use maze_astar::maze::Maze;
//! use maze_astar::pathfinder::PathFinder;
//!
//! // Nothing carved yet, every wall still stands
//! let maze = Maze::new(3, 3).unwrap();
//! assert!(PathFinder::new(&maze).solve().unwrap().is_none());
//! ```

pub mod array_utils;
pub mod comb_sort;
pub mod maze;
pub mod maze_generator;
pub mod pathfinder;

pub use maze::{Cell, Direction, Maze, Point, Walls};
pub use pathfinder::{Path, PathFinder};
