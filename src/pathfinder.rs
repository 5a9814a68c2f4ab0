//! A* search through a finished maze

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use anyhow::bail;
use itertools::Itertools;
use log::debug;

use crate::maze::{Maze, Point};

/// Cells from start to goal, both included
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Path {
    pub points: Vec<Point>,
}

impl Path {
    /// Number of steps taken, one less than the number of cells
    pub fn cost(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Print report
    pub fn print_report(&self) {
        println!("{}", self);
        println!("The shortest path is {} steps.", self.cost());
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points.iter().join(" -> "))
    }
}

/// Node of the search tree
///
/// The same cell may appear in several nodes when a cheaper route to it is
/// found later; `parent` indexes into [PathFinder]'s node arena.
#[derive(Debug)]
struct SearchNode {
    point: Point,
    parent: Option<usize>,
    g: usize,
    h: usize,
}

impl SearchNode {
    fn f(&self) -> usize {
        self.g + self.h
    }
}

/// Open set entry, ordered so that [BinaryHeap] pops the best node first
#[derive(PartialEq, Eq, Debug)]
struct OpenEntry {
    f: usize,
    h: usize,
    /// Arena index, doubles as insertion order
    node: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: lowest f, then lowest h, then first inserted
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* shortest path search over the passages of a [Maze]
///
/// Movement is 4-directional with unit cost, so the Manhattan distance
/// heuristic is admissible and consistent and the returned path is
/// optimal.
///
/// Among nodes with equal `f`, the one with the smaller heuristic is
/// expanded first; remaining ties go to the node that entered the open set
/// first. Neighbors are always generated in the order up, right, down,
/// left. Together these make the returned path deterministic for a given
/// maze.
pub struct PathFinder<'a> {
    maze: &'a Maze,
}

impl<'a> PathFinder<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze }
    }

    /// Path from the top-left to the bottom-right corner
    pub fn solve(&self) -> anyhow::Result<Option<Path>> {
        self.find_path(self.maze.start(), self.maze.goal())
    }

    /// Find the shortest path from `start` to `goal`
    ///
    /// Returns `Ok(None)` when the goal cannot be reached, and an error if
    /// either end lies outside the maze.
    ///
    /// # Examples
    /// ```
    /// use maze_astar::maze::{Direction, Maze, Point};
    /// use maze_astar::pathfinder::PathFinder;
    ///
    /// let mut maze = Maze::new(1, 3).unwrap();
    /// maze.remove_wall(Point::new(0, 0), Direction::Right).unwrap();
    /// maze.remove_wall(Point::new(0, 1), Direction::Right).unwrap();
    ///
    /// let path = PathFinder::new(&maze).solve().unwrap().unwrap();
    /// assert_eq!(path.cost(), 2);
    /// ```
    pub fn find_path(&self, start: Point, goal: Point) -> anyhow::Result<Option<Path>> {
        for (name, point) in [("Start", start), ("Goal", goal)] {
            if !self.maze.contains(point) {
                bail!(
                    "{} {} outside {}x{} maze",
                    name,
                    point,
                    self.maze.rows(),
                    self.maze.columns()
                );
            }
        }

        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut best_g: Vec<Option<usize>> = vec![None; self.maze.len()];
        let mut closed: Vec<bool> = vec![false; self.maze.len()];

        Self::push(
            &mut nodes,
            &mut open,
            SearchNode {
                point: start,
                parent: None,
                g: 0,
                h: start.manhattan(&goal),
            },
        );
        best_g[self.maze.index(start)] = Some(0);

        let mut expanded = 0;
        while let Some(entry) = open.pop() {
            let current = entry.node;
            let point = nodes[current].point;
            let idx = self.maze.index(point);

            // Superseded by a cheaper node for the same cell
            if closed[idx] {
                continue;
            }
            closed[idx] = true;

            if point == goal {
                let path = Self::reconstruct(&nodes, current);
                debug!(
                    "Path {} -> {} found, cost {}, {} nodes expanded, {} created",
                    start,
                    goal,
                    path.cost(),
                    expanded,
                    nodes.len()
                );
                return Ok(Some(path));
            }
            expanded += 1;

            let g = nodes[current].g + 1;
            for next in self.maze.open_neighbors(point) {
                let next_idx = self.maze.index(next);
                if closed[next_idx] {
                    continue;
                }
                if best_g[next_idx].is_some_and(|known| known <= g) {
                    continue;
                }
                best_g[next_idx] = Some(g);
                Self::push(
                    &mut nodes,
                    &mut open,
                    SearchNode {
                        point: next,
                        parent: Some(current),
                        g,
                        h: next.manhattan(&goal),
                    },
                );
            }
        }

        debug!("No path {} -> {}, {} nodes expanded", start, goal, expanded);
        Ok(None)
    }

    fn push(nodes: &mut Vec<SearchNode>, open: &mut BinaryHeap<OpenEntry>, node: SearchNode) {
        open.push(OpenEntry {
            f: node.f(),
            h: node.h,
            node: nodes.len(),
        });
        nodes.push(node);
    }

    /// Walk parent links back to the start, then reverse
    fn reconstruct(nodes: &[SearchNode], last: usize) -> Path {
        let mut points = Vec::new();
        let mut cursor = Some(last);
        while let Some(i) = cursor {
            points.push(nodes[i].point);
            cursor = nodes[i].parent;
        }
        points.reverse();
        Path { points }
    }
}
