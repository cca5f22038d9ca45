//! Maze grid representation.
//!
//! This module defines the building blocks the solver walks over:
//! - `Coordinate`: a (row, column) pair identifying one cell.
//! - `Cell`: the state of a single cell, either open or wall.
//! - `Grid`: a validated rectangular array of cells.
//! - `Direction`: the four orthogonal moves, in exploration order.
use crate::error::{CoordinateFault, MazeError};
use std::fmt;

/// A (row, column) pair identifying a grid cell.
///
/// Coordinates are plain values: two coordinates are equal when both
/// components match.
///
/// # Examples
/// ```
/// use maze_solver::grid::Coordinate;
/// let c = Coordinate::new(3, 4);
/// assert_eq!(c, Coordinate::from((3, 4)));
/// assert_eq!(c.to_string(), "(3,4)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// Returns true if `other` differs from `self` by exactly one step along
    /// exactly one axis.
    pub fn is_adjacent_to(&self, other: &Coordinate) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The state of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A traversable cell.
    Open,
    /// A blocked cell.
    Wall,
}

impl Cell {
    /// Converts the cell to its text tag: `'o'` for open, `'x'` for wall.
    ///
    /// # Examples
    /// ```
    /// use maze_solver::grid::Cell;
    /// assert_eq!(Cell::Open.to_char(), 'o');
    /// assert_eq!(Cell::Wall.to_char(), 'x');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Cell::Open => 'o',
            Cell::Wall => 'x',
        }
    }

    /// Parses a text tag. Returns `None` for anything but `'o'` or `'x'`.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'o' => Some(Cell::Open),
            'x' => Some(Cell::Wall),
            _ => None,
        }
    }
}

/// One orthogonal move on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// All four directions in exploration priority order.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];

    /// Applies this move to `from`.
    ///
    /// Returns `None` when the move would leave the non-negative quadrant
    /// (row or column below zero). Moves past the far edges are *not* checked
    /// here; that is the grid's job.
    pub fn step(self, from: Coordinate) -> Option<Coordinate> {
        let Coordinate { row, col } = from;
        match self {
            Direction::Down => row.checked_add(1).map(|r| Coordinate::new(r, col)),
            Direction::Right => col.checked_add(1).map(|c| Coordinate::new(row, c)),
            Direction::Up => row.checked_sub(1).map(|r| Coordinate::new(r, col)),
            Direction::Left => col.checked_sub(1).map(|c| Coordinate::new(row, c)),
        }
    }
}

/// A rectangular maze grid.
///
/// A `Grid` is only ever built through a constructor that validates its
/// shape, so every `Grid` value has at least one row, at least one column,
/// and rows of equal length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    nrows: usize,
    ncols: usize,
}

impl Grid {
    /// Creates a grid of the given size where every cell is `Cell::Open`.
    ///
    /// # Errors
    /// Returns `MazeError::MalformedGrid` if either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use maze_solver::grid::{Cell, Coordinate, Grid};
    /// let grid = Grid::new_open(5, 5).unwrap();
    /// assert_eq!(grid.nrows(), 5);
    /// assert_eq!(grid.get_cell(Coordinate::new(4, 4)), Some(Cell::Open));
    /// ```
    pub fn new_open(nrows: usize, ncols: usize) -> Result<Self, MazeError> {
        if nrows == 0 || ncols == 0 {
            return Err(MazeError::MalformedGrid(format!(
                "grid dimensions must be non-zero, found {}x{}",
                nrows, ncols
            )));
        }
        Ok(Grid {
            cells: vec![Cell::Open; nrows * ncols],
            nrows,
            ncols,
        })
    }

    /// Builds a grid from a list of rows.
    ///
    /// # Arguments
    /// * `rows`: The cells of the grid, row 0 first. Every row must have the
    ///   same length as row 0.
    ///
    /// # Returns
    /// * `Ok(Grid)` for a non-empty rectangular input.
    /// * `Err(MazeError::MalformedGrid)` if there are no rows, row 0 is empty,
    ///   or any row length differs from row 0.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(MazeError::MalformedGrid(
                "grid must have at least one row and one column".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(nrows * ncols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MazeError::MalformedGrid(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    ncols
                )));
            }
            cells.extend(row);
        }

        Ok(Grid { cells, nrows, ncols })
    }

    /// Number of rows in the grid.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns in the grid.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns true if `coord` lies inside the grid.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.nrows && coord.col < self.ncols
    }

    /// Returns the cell at `coord`, or `None` if it is out of bounds.
    pub fn get_cell(&self, coord: Coordinate) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(self.cells[coord.row * self.ncols + coord.col])
        } else {
            None
        }
    }

    /// Sets the cell at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` is out of bounds.
    pub fn set_cell(&mut self, coord: Coordinate, cell: Cell) {
        assert!(
            self.in_bounds(coord),
            "coordinate {} outside {}x{} grid",
            coord,
            self.nrows,
            self.ncols
        );
        self.cells[coord.row * self.ncols + coord.col] = cell;
    }

    /// Returns true if `coord` is in bounds and open.
    pub fn is_open(&self, coord: Coordinate) -> bool {
        self.get_cell(coord) == Some(Cell::Open)
    }

    /// Checks that `coord` can serve as an entry or exit point.
    pub fn validate_endpoint(&self, coord: Coordinate) -> Result<(), MazeError> {
        match self.get_cell(coord) {
            None => Err(MazeError::InvalidCoordinate {
                coord,
                fault: CoordinateFault::OutOfBounds,
            }),
            Some(Cell::Wall) => Err(MazeError::InvalidCoordinate {
                coord,
                fault: CoordinateFault::OnWall,
            }),
            Some(Cell::Open) => Ok(()),
        }
    }
}

impl fmt::Display for Grid {
    /// Writes one line per row using the `'o'`/`'x'` tags, with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.ncols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
