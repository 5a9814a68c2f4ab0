//! Maze generation

use anyhow::Context;
use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::maze::{Direction, Maze, Point};

/// Perfect maze generator, randomized depth-first search.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// New generator; `seed` makes the output reproducible, `None` draws
    /// the seed from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate perfect maze (spanning tree over the grid, no loops)
    ///
    /// Carving starts from the top-left cell. At each step a random
    /// unvisited neighbor is chosen and the wall towards it is removed;
    /// when the current cell is surrounded by visited cells, we backtrack
    /// along the stack.
    ///
    /// Returns error if either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use maze_astar::maze_generator::MazeGenerator;
    ///
    /// let maze = MazeGenerator::new(Some(7)).generate_maze(4, 6).unwrap();
    /// assert_eq!(maze.passage_count(), 4 * 6 - 1);
    /// ```
    pub fn generate_maze(&mut self, rows: usize, columns: usize) -> anyhow::Result<Maze> {
        let mut maze = Maze::new(rows, columns)?;
        let mut stack: Vec<Point> = Vec::with_capacity(maze.len());

        let mut current = maze.start();
        Self::mark_visited(&mut maze, current)?;
        let mut visited = 1;

        loop {
            if let Some((direction, next)) = self.random_unvisited_neighbor(&maze, current) {
                trace!("Carve {} -> {}", current, next);
                maze.remove_wall(current, direction)?;
                Self::mark_visited(&mut maze, next)?;
                visited += 1;
                stack.push(current);
                current = next;
            } else if let Some(previous) = stack.pop() {
                current = previous;
            } else {
                break;
            }
        }

        debug!(
            "Generated {}x{} maze, {} cells visited, {} passages",
            rows,
            columns,
            visited,
            maze.passage_count()
        );
        Ok(maze)
    }

    /// Pick uniformly among unvisited neighbors of `point`
    fn random_unvisited_neighbor(
        &mut self,
        maze: &Maze,
        point: Point,
    ) -> Option<(Direction, Point)> {
        let candidates: Vec<(Direction, Point)> = maze
            .neighbors(point)
            .filter(|(_, p)| maze.cell(*p).is_some_and(|c| !c.visited))
            .collect();
        candidates.choose(&mut self.random).copied()
    }

    fn mark_visited(maze: &mut Maze, point: Point) -> anyhow::Result<()> {
        maze.cell_mut(point)
            .with_context(|| format!("Cell {} outside maze", point))?
            .visited = true;
        Ok(())
    }
}
