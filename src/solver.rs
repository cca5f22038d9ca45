use crate::error::MazeError;
use crate::grid::{Cell, Coordinate, Direction, Grid};
use crate::path_stack::PathStack;
use log::{debug, trace};

/// Solves a maze by exhaustive depth-first backtracking.
///
/// Every acyclic path from the entry to the exit is enumerated. Each solve
/// call clears the result set from the previous call before searching, so
/// repeated calls return the same answers and the result set does not grow.
///
/// # Examples
/// ```
/// use maze_solver::grid::{Coordinate, Grid};
/// use maze_solver::solver::MazeSolver;
///
/// let grid = Grid::new_open(3, 3).unwrap();
/// let mut solver = MazeSolver::new(grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
/// let shortest = solver.solve_shortest().unwrap();
/// assert_eq!(shortest.size(), 5);
/// assert_eq!(shortest.top(), Some(Coordinate::new(2, 2)));
/// ```
#[derive(Clone, Debug)]
pub struct MazeSolver {
    grid: Grid,
    entry: Coordinate,
    exit: Coordinate,
    /// Every complete path found by the most recent search, in discovery order.
    paths: Vec<PathStack>,
    path: Option<PathStack>,
    shortest_path: Option<PathStack>,
}

impl MazeSolver {
    /// Creates a solver for `grid` with the given endpoints.
    ///
    /// # Errors
    /// Returns `MazeError::InvalidCoordinate` if `entry` or `exit` is off the
    /// grid or on a wall.
    pub fn new(grid: Grid, entry: Coordinate, exit: Coordinate) -> Result<Self, MazeError> {
        grid.validate_endpoint(entry)?;
        grid.validate_endpoint(exit)?;
        Ok(MazeSolver {
            grid,
            entry,
            exit,
            paths: Vec::new(),
            path: None,
            shortest_path: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn nrows(&self) -> usize {
        self.grid.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.grid.ncols()
    }

    pub fn entry(&self) -> Coordinate {
        self.entry
    }

    pub fn exit(&self) -> Coordinate {
        self.exit
    }

    /// Moves the entry point. Cached results are discarded on success.
    pub fn set_entry(&mut self, entry: Coordinate) -> Result<(), MazeError> {
        self.grid.validate_endpoint(entry)?;
        debug!("entry moved from {} to {}", self.entry, entry);
        self.entry = entry;
        self.reset();
        Ok(())
    }

    /// Moves the exit point. Cached results are discarded on success.
    pub fn set_exit(&mut self, exit: Coordinate) -> Result<(), MazeError> {
        self.grid.validate_endpoint(exit)?;
        debug!("exit moved from {} to {}", self.exit, exit);
        self.exit = exit;
        self.reset();
        Ok(())
    }

    /// The path returned by the last `solve` call, if it found one.
    pub fn path(&self) -> Option<&PathStack> {
        self.path.as_ref()
    }

    /// The path returned by the last `solve_shortest` call, if it found one.
    pub fn shortest_path(&self) -> Option<&PathStack> {
        self.shortest_path.as_ref()
    }

    /// All complete paths from the most recent search, in discovery order.
    pub fn paths(&self) -> &[PathStack] {
        &self.paths
    }

    /// Finds a path from the entry to the exit.
    ///
    /// Returns the first path discovered when neighbours are tried in the
    /// order down, right, up, left, or `None` if the exit is unreachable.
    /// The returned path has the exit on top and the entry at the bottom.
    pub fn solve(&mut self) -> Option<PathStack> {
        self.explore();
        self.path = self.paths.first().cloned();
        self.path.clone()
    }

    /// Finds the shortest path from the entry to the exit.
    ///
    /// Among all discovered paths, returns one with the fewest coordinates.
    /// Ties go to the path discovered first. Returns `None` if the exit is
    /// unreachable.
    pub fn solve_shortest(&mut self) -> Option<PathStack> {
        self.explore();
        // min_by_key keeps the first of several equal minima.
        self.shortest_path = self.paths.iter().min_by_key(|p| p.size()).cloned();
        self.shortest_path.clone()
    }

    fn reset(&mut self) {
        self.paths.clear();
        self.path = None;
        self.shortest_path = None;
    }

    /// Enumerates every acyclic path from the entry to the exit into `self.paths`.
    ///
    /// Uses an explicit LIFO work-list instead of recursion. Each frame owns
    /// its own copy of the branch's stack. Neighbours are pushed in reverse
    /// priority order so they are popped down, right, up, left, which yields
    /// the same discovery order as the recursive formulation.
    fn explore(&mut self) {
        self.paths.clear();
        debug!(
            "exploring {}x{} grid from {} to {}",
            self.grid.nrows(),
            self.grid.ncols(),
            self.entry,
            self.exit
        );

        let mut work: Vec<(Coordinate, PathStack)> = vec![(self.entry, PathStack::new())];
        let mut frames = 0usize;

        while let Some((coord, mut stack)) = work.pop() {
            frames += 1;

            if stack.contains(&coord) {
                continue;
            }
            if coord == self.exit {
                stack.push(coord);
                trace!("path #{} found with {} cells", self.paths.len(), stack.size());
                self.paths.push(stack);
                continue;
            }
            match self.grid.get_cell(coord) {
                None | Some(Cell::Wall) => continue,
                Some(Cell::Open) => {}
            }

            stack.push(coord);
            for dir in Direction::ALL.iter().rev() {
                if let Some(next) = dir.step(coord) {
                    work.push((next, stack.copy()));
                }
            }
        }

        debug!(
            "exploration finished: {} path(s) after {} frames",
            self.paths.len(),
            frames
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoordinateFault;
    use crate::utils::grid_from_str_array;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn open_5x5() -> MazeSolver {
        MazeSolver::new(Grid::new_open(5, 5).unwrap(), c(0, 0), c(4, 4)).unwrap()
    }

    fn assert_valid_path(solver: &MazeSolver, path: &PathStack) {
        assert_eq!(path.top(), Some(solver.exit()));
        assert_eq!(path.bottom(), Some(solver.entry()));
        let cells: Vec<Coordinate> = path.iter().copied().collect();
        for pair in cells.windows(2) {
            assert!(
                pair[0].is_adjacent_to(&pair[1]),
                "{} and {} are not adjacent in {}",
                pair[0],
                pair[1],
                path
            );
        }
        for cell in &cells {
            assert!(solver.grid().is_open(*cell), "{} is not open", cell);
        }
        let mut seen = cells.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), cells.len(), "path {} revisits a cell", path);
    }

    /// Reference shortest-path length (in cells) for checking the solver.
    fn bfs_cells(grid: &Grid, entry: Coordinate, exit: Coordinate) -> Option<usize> {
        let mut dist = vec![vec![None; grid.ncols()]; grid.nrows()];
        let mut q = VecDeque::new();
        dist[entry.row][entry.col] = Some(1usize);
        q.push_back(entry);
        while let Some(cur) = q.pop_front() {
            let d = dist[cur.row][cur.col].unwrap();
            if cur == exit {
                return Some(d);
            }
            for dir in Direction::ALL {
                if let Some(next) = dir.step(cur) {
                    if grid.is_open(next) && dist[next.row][next.col].is_none() {
                        dist[next.row][next.col] = Some(d + 1);
                        q.push_back(next);
                    }
                }
            }
        }
        None
    }

    #[test]
    fn test_maze_init() {
        let solver = open_5x5();
        assert_eq!(solver.entry(), c(0, 0));
        assert_eq!(solver.exit(), c(4, 4));
        assert_eq!(solver.nrows(), 5);
        assert_eq!(solver.ncols(), 5);
        assert!(solver.path().is_none());
        assert!(solver.shortest_path().is_none());
        assert!(solver.paths().is_empty());
    }

    #[test]
    fn test_endpoint_errors() {
        let grid = grid_from_str_array(&["oox", "ooo", "ooo"]).unwrap();
        assert_eq!(
            MazeSolver::new(grid.clone(), c(0, 2), c(2, 2)).unwrap_err(),
            MazeError::InvalidCoordinate {
                coord: c(0, 2),
                fault: CoordinateFault::OnWall
            }
        );
        assert_eq!(
            MazeSolver::new(grid.clone(), c(0, 0), c(3, 0)).unwrap_err(),
            MazeError::InvalidCoordinate {
                coord: c(3, 0),
                fault: CoordinateFault::OutOfBounds
            }
        );
        assert!(matches!(
            MazeSolver::new(grid, c(0, 9), c(0, 0)),
            Err(MazeError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_solve_open_grid() {
        let mut solver = open_5x5();
        let path = solver.solve().expect("open grid must be solvable");
        assert_valid_path(&solver, &path);
        assert_eq!(solver.path(), Some(&path));
    }

    #[test]
    fn test_solve_first_path_follows_direction_priority() {
        // Down first, then right: the first path runs down column 0 and
        // along row 2.
        let mut solver =
            MazeSolver::new(Grid::new_open(3, 3).unwrap(), c(0, 0), c(2, 2)).unwrap();
        let path = solver.solve().unwrap();
        assert_eq!(path.to_string(), "(2,2) -> (2,1) -> (2,0) -> (1,0) -> (0,0)");
    }

    #[test]
    fn test_solve_shortest_open_grid() {
        let mut solver = open_5x5();
        let shortest = solver.solve_shortest().unwrap();
        assert_eq!(shortest.size(), 9);
        assert_valid_path(&solver, &shortest);
        assert_eq!(solver.shortest_path(), Some(&shortest));
    }

    #[test]
    fn test_shortest_tie_goes_to_first_discovered() {
        let mut solver =
            MazeSolver::new(Grid::new_open(2, 2).unwrap(), c(0, 0), c(1, 1)).unwrap();
        let shortest = solver.solve_shortest().unwrap();
        assert_eq!(solver.paths().len(), 2);
        assert_eq!(shortest, solver.paths()[0]);
        assert_eq!(shortest.to_string(), "(1,1) -> (1,0) -> (0,0)");
    }

    #[test]
    fn test_shortest_prefers_short_route_found_later() {
        // The first path found (down column 0) detours; the direct route
        // to the right is found afterwards and is shorter.
        let grid = grid_from_str_array(&[
            "ooo", //
            "oxo", //
            "ooo", //
            "ooo", //
        ])
        .unwrap();
        let mut solver = MazeSolver::new(grid, c(0, 0), c(0, 2)).unwrap();
        let first = solver.solve().unwrap();
        let shortest = solver.solve_shortest().unwrap();
        assert!(shortest < first);
        assert_eq!(shortest.to_string(), "(0,2) -> (0,1) -> (0,0)");
    }

    #[test]
    fn test_no_route() {
        let grid = grid_from_str_array(&[
            "oxooo", //
            "xxooo", //
            "ooooo", //
            "ooooo", //
            "ooooo", //
        ])
        .unwrap();
        let mut solver = MazeSolver::new(grid, c(0, 0), c(4, 4)).unwrap();
        assert!(solver.solve().is_none());
        assert!(solver.solve_shortest().is_none());
        assert!(solver.paths().is_empty());
        assert!(solver.path().is_none());
        assert!(solver.shortest_path().is_none());
    }

    #[test]
    fn test_entry_equals_exit() {
        let mut solver =
            MazeSolver::new(Grid::new_open(3, 3).unwrap(), c(1, 1), c(1, 1)).unwrap();
        let path = solver.solve().unwrap();
        assert_eq!(path.size(), 1);
        assert_eq!(path.to_string(), "(1,1)");
        assert_eq!(solver.paths().len(), 1);
    }

    #[test]
    fn test_repeated_solves_do_not_accumulate() {
        let mut solver =
            MazeSolver::new(Grid::new_open(3, 3).unwrap(), c(0, 0), c(2, 2)).unwrap();
        let first = solver.solve().unwrap();
        let count = solver.paths().len();
        assert_eq!(count, 12);

        assert_eq!(solver.solve().unwrap(), first);
        assert_eq!(solver.paths().len(), count);
        solver.solve_shortest().unwrap();
        assert_eq!(solver.paths().len(), count);
    }

    #[test]
    fn test_set_endpoints() {
        let mut solver = open_5x5();
        solver.solve().unwrap();

        solver.set_exit(c(0, 1)).unwrap();
        assert!(solver.path().is_none());
        assert!(solver.paths().is_empty());
        assert_eq!(solver.solve_shortest().unwrap().size(), 2);

        solver.set_entry(c(4, 4)).unwrap();
        assert_eq!(solver.entry(), c(4, 4));
        assert_eq!(solver.solve_shortest().unwrap().size(), 8);
    }

    #[test]
    fn test_set_endpoint_rejects_invalid() {
        let grid = grid_from_str_array(&["oxo", "ooo", "ooo"]).unwrap();
        let mut solver = MazeSolver::new(grid, c(0, 0), c(2, 2)).unwrap();
        solver.solve().unwrap();

        assert!(solver.set_entry(c(0, 1)).is_err());
        assert!(solver.set_exit(c(5, 5)).is_err());
        assert_eq!(solver.entry(), c(0, 0));
        assert_eq!(solver.exit(), c(2, 2));
        // A rejected update leaves earlier results in place.
        assert!(solver.path().is_some());
    }

    #[test]
    fn test_every_recorded_path_is_valid() {
        let grid = grid_from_str_array(&[
            "ooxo", //
            "oooo", //
            "xoxo", //
            "oooo", //
        ])
        .unwrap();
        let mut solver = MazeSolver::new(grid, c(0, 0), c(3, 3)).unwrap();
        solver.solve_shortest().unwrap();
        assert!(!solver.paths().is_empty());
        for path in solver.paths() {
            assert_valid_path(&solver, path);
        }
    }

    #[test]
    fn test_shortest_matches_bfs_on_random_grids() {
        let mut rng = SmallRng::seed_from_u64(514514);
        for _ in 0..40 {
            let mut grid = Grid::new_open(4, 4).unwrap();
            for r in 0..4 {
                for col in 0..4 {
                    if rng.gen_bool(0.3) {
                        grid.set_cell(c(r, col), Cell::Wall);
                    }
                }
            }
            grid.set_cell(c(0, 0), Cell::Open);
            grid.set_cell(c(3, 3), Cell::Open);

            let expected = bfs_cells(&grid, c(0, 0), c(3, 3));
            let mut solver = MazeSolver::new(grid, c(0, 0), c(3, 3)).unwrap();
            let shortest = solver.solve_shortest();
            assert_eq!(shortest.as_ref().map(PathStack::size), expected);
            if let Some(path) = shortest {
                assert_valid_path(&solver, &path);
            }
        }
    }
}
