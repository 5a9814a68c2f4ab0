//! Grid of cells separated by walls

use std::fmt;

use anyhow::{bail, Context};

/// Location in the maze
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance, |Δrow| + |Δcol|
    pub fn manhattan(&self, other: &Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Side of a cell, or the step taken through it
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Neighbor enumeration order used everywhere in the crate
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Offset as (Δrow, Δcol)
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// Wall flags of a single cell; `true` means the wall blocks movement.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }
}

impl Walls {
    pub fn get(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    fn clear(&mut self, side: Direction) {
        match side {
            Direction::Up => self.top = false,
            Direction::Right => self.right = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }
}

/// Single square of the grid
#[derive(Clone, Debug)]
pub struct Cell {
    pub point: Point,
    pub visited: bool,
    pub walls: Walls,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Self {
            point: Point::new(row, col),
            visited: false,
            walls: Walls::default(),
        }
    }
}

/// Rectangular maze, `rows` × `columns` cells stored row-major.
///
/// Every wall between two cells is stored twice, once on each side. The
/// only way to open a wall is [Maze::remove_wall], which clears both flags,
/// so the two copies always agree.
#[derive(Clone, Debug)]
pub struct Maze {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// Create a maze where every wall is still standing.
    ///
    /// Returns error if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> anyhow::Result<Self> {
        if rows == 0 || columns == 0 {
            bail!(
                "Invalid maze dimensions {}x{}, both must be at least 1",
                rows,
                columns
            );
        }
        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| Cell::new(row, col)))
            .collect();
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a maze has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Top-left corner
    pub fn start(&self) -> Point {
        Point::new(0, 0)
    }

    /// Bottom-right corner
    pub fn goal(&self) -> Point {
        Point::new(self.rows - 1, self.columns - 1)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.columns
    }

    /// Row-major index of `point`; callers must check [Self::contains] first.
    pub(crate) fn index(&self, point: Point) -> usize {
        point.row * self.columns + point.col
    }

    pub fn cell(&self, point: Point) -> Option<&Cell> {
        if self.contains(point) {
            Some(&self.cells[self.index(point)])
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, point: Point) -> Option<&mut Cell> {
        if self.contains(point) {
            let idx = self.index(point);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bounds neighbor of `point` in `direction`, walls ignored
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        let (dr, dc) = direction.offset();
        let row = point.row.checked_add_signed(dr)?;
        let col = point.col.checked_add_signed(dc)?;
        let next = Point::new(row, col);
        self.contains(next).then_some(next)
    }

    /// All in-bounds neighbors, in the order Up, Right, Down, Left
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(point, d).map(|p| (d, p)))
    }

    /// Neighbors reachable from `point` without crossing a wall
    pub fn open_neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        let walls = self.cell(point).map(|c| c.walls);
        self.neighbors(point).filter_map(move |(d, p)| match walls {
            Some(w) if !w.get(d) => Some(p),
            _ => None,
        })
    }

    /// True if `a` and `b` are adjacent and the wall between them is open
    pub fn is_passage(&self, a: Point, b: Point) -> bool {
        self.open_neighbors(a).any(|p| p == b)
    }

    /// Remove the wall on `side` of `point`, together with the matching wall
    /// of the neighbor on that side.
    ///
    /// Returns error if `point` is outside the grid or `side` faces the
    /// outer boundary.
    pub fn remove_wall(&mut self, point: Point, side: Direction) -> anyhow::Result<()> {
        let other = self
            .neighbor(point, side)
            .with_context(|| format!("No neighbor {:?} of {}", side, point))?;
        self.cell_mut(point)
            .context("Wall owner outside maze")?
            .walls
            .clear(side);
        self.cell_mut(other)
            .context("Neighbor outside maze")?
            .walls
            .clear(side.opposite());
        Ok(())
    }

    /// Number of opened walls between cell pairs
    pub fn passage_count(&self) -> usize {
        // Count each passage once, from the cell above or to the left.
        self.cells
            .iter()
            .map(|c| usize::from(!c.walls.right) + usize::from(!c.walls.bottom))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_maze_has_all_walls() {
        let maze = Maze::new(3, 4).unwrap();
        assert_eq!(maze.len(), 12);
        assert_eq!(maze.goal(), Point::new(2, 3));
        assert!(maze.cells().all(|c| c.walls == Walls::default() && !c.visited));
        assert_eq!(maze.passage_count(), 0);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(Maze::new(0, 5).is_err());
        assert!(Maze::new(5, 0).is_err());
    }

    #[test]
    fn remove_wall_clears_both_sides() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.remove_wall(Point::new(0, 0), Direction::Right).unwrap();

        assert!(!maze.cell(Point::new(0, 0)).unwrap().walls.right);
        assert!(!maze.cell(Point::new(0, 1)).unwrap().walls.left);
        assert!(maze.is_passage(Point::new(0, 0), Point::new(0, 1)));
        assert!(maze.is_passage(Point::new(0, 1), Point::new(0, 0)));
        assert!(!maze.is_passage(Point::new(0, 0), Point::new(1, 0)));
        assert_eq!(maze.passage_count(), 1);
    }

    #[test]
    fn boundary_wall_cannot_be_removed() {
        let mut maze = Maze::new(2, 2).unwrap();
        assert!(maze.remove_wall(Point::new(0, 0), Direction::Up).is_err());
        assert!(maze.remove_wall(Point::new(1, 1), Direction::Right).is_err());
        assert!(maze.cell(Point::new(0, 0)).unwrap().walls.top);
    }

    #[test]
    fn neighbors_are_bounds_checked() {
        let maze = Maze::new(3, 3).unwrap();
        let corner: Vec<_> = maze.neighbors(Point::new(0, 0)).map(|(_, p)| p).collect();
        assert_eq!(corner, vec![Point::new(0, 1), Point::new(1, 0)]);

        let middle: Vec<_> = maze.neighbors(Point::new(1, 1)).map(|(d, _)| d).collect();
        assert_eq!(middle, Direction::ALL.to_vec());
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Point::new(0, 0).manhattan(&Point::new(14, 14)), 28);
        assert_eq!(Point::new(3, 1).manhattan(&Point::new(1, 4)), 5);
    }
}
