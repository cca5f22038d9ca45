use crate::error::MazeError;
use crate::grid::{Cell, Grid};

/// Parses an array of string slices into a `Grid`.
///
/// Each string slice in the input array represents one row of the maze,
/// starting from row 0. Every row must be the same length as row 0.
///
/// Valid characters for cells are:
/// - 'o': `Cell::Open`
/// - 'x': `Cell::Wall`
///
/// Any other character will result in an error.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`) representing the rows of the maze.
///
/// # Returns
/// * `Ok(Grid)` if parsing is successful.
/// * `Err(MazeError::MalformedGrid)` if:
///     - `s` is empty or its first row is empty.
///     - Any row's character length differs from the first row's.
///     - An unrecognized character (not `'o'` or `'x'`) is encountered.
///
/// # Examples
/// ```
/// use maze_solver::utils::grid_from_str_array;
/// use maze_solver::grid::{Cell, Coordinate};
///
/// let grid = grid_from_str_array(&["oxo", "ooo"]).unwrap();
/// assert_eq!(grid.nrows(), 2);
/// assert_eq!(grid.ncols(), 3);
/// assert_eq!(grid.get_cell(Coordinate::new(0, 1)), Some(Cell::Wall));
///
/// assert!(grid_from_str_array(&["otx"]).is_err());
/// assert!(grid_from_str_array(&["oo", "o"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid, MazeError> {
    let mut rows = Vec::with_capacity(s.len());

    for (r, row_str) in s.iter().enumerate() {
        let row = row_str
            .chars()
            .enumerate()
            .map(|(c, ch)| {
                Cell::from_char(ch).ok_or_else(|| {
                    MazeError::MalformedGrid(format!(
                        "unrecognized character '{}' in row {} col {}",
                        ch, r, c
                    ))
                })
            })
            .collect::<Result<Vec<Cell>, MazeError>>()?;
        rows.push(row);
    }

    // Shape checks (empty, ragged) happen in `Grid::from_rows`.
    Grid::from_rows(rows)
}
