//! # Maze Solver Library
//!
//! This library finds paths through rectangular grid mazes by exhaustive
//! depth-first backtracking. Every acyclic route from the entry to the exit
//! is enumerated, which answers both "any path" and "shortest path" queries.
//!
//! It is used by the `maze_solver` binary, which loads a maze from a text
//! file and prints the path it finds.
//!
//! ## Modules
//! - `grid`: Contains the maze representation (`Grid`), cell states (`Cell`),
//!   coordinates (`Coordinate`) and the four movement directions (`Direction`).
//! - `path_stack`: Provides `PathStack`, the LIFO record of one exploration branch.
//! - `solver`: Provides `MazeSolver` with `solve` and `solve_shortest`.
//! - `error`: Defines `MazeError`, shared by all fallible operations.
//! - `utils`: Provides utility functions, such as parsing grids from strings.

pub mod error;
pub mod grid;
pub mod path_stack;
pub mod solver;
pub mod utils;

pub use error::{CoordinateFault, MazeError};
pub use grid::{Cell, Coordinate, Grid};
pub use path_stack::PathStack;
pub use solver::MazeSolver;
