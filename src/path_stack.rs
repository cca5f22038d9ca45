//! Stack of visited coordinates used to record one exploration branch.
use crate::error::MazeError;
use crate::grid::Coordinate;
use std::cmp::Ordering;
use std::fmt;

/// A last-in-first-out record of visited coordinates.
///
/// The top of the stack is the most recently visited cell; the bottom is
/// where the branch started. Copies are deep: pushing to or popping from a
/// copy never affects the stack it was copied from.
///
/// # Examples
/// ```
/// use maze_solver::grid::Coordinate;
/// use maze_solver::path_stack::PathStack;
///
/// let mut stack = PathStack::new();
/// stack.push(Coordinate::new(1, 1));
/// stack.push(Coordinate::new(2, 2));
/// assert_eq!(stack.to_string(), "(2,2) -> (1,1)");
///
/// let mut fork = stack.copy();
/// fork.push(Coordinate::new(3, 3));
/// assert_eq!(stack.size(), 2);
/// assert_eq!(fork.size(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PathStack {
    // Bottom of the stack at index 0.
    items: Vec<Coordinate>,
}

impl PathStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        PathStack { items: Vec::new() }
    }

    /// Places `coord` on top of the stack.
    pub fn push(&mut self, coord: Coordinate) {
        self.items.push(coord);
    }

    /// Removes and returns the top coordinate.
    ///
    /// # Errors
    /// Returns `MazeError::EmptyStack` if there is nothing to pop.
    pub fn pop(&mut self) -> Result<Coordinate, MazeError> {
        self.items.pop().ok_or(MazeError::EmptyStack)
    }

    /// Number of coordinates on the stack.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The most recently pushed coordinate, if any.
    pub fn top(&self) -> Option<Coordinate> {
        self.items.last().copied()
    }

    /// The first coordinate pushed, if any.
    pub fn bottom(&self) -> Option<Coordinate> {
        self.items.first().copied()
    }

    /// Returns true if `coord` is currently on the stack.
    ///
    /// Scans from top to bottom, so recently visited cells are found first.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.iter().any(|c| c == coord)
    }

    /// Returns an independent copy with the same elements in the same order.
    pub fn copy(&self) -> PathStack {
        self.clone()
    }

    /// Iterates over the coordinates from top to bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Coordinate> + ExactSizeIterator + '_ {
        self.items.iter().rev()
    }
}

impl FromIterator<Coordinate> for PathStack {
    /// Pushes each coordinate in iteration order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        PathStack {
            items: iter.into_iter().collect(),
        }
    }
}

impl PartialOrd for PathStack {
    /// Orders stacks by size.
    ///
    /// Stacks of different sizes compare as their sizes do. Equal stacks are
    /// `Equal`. Stacks of the same size with different contents have no
    /// ordering, so neither is less than the other.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.size().cmp(&other.size()) {
            Ordering::Equal if self == other => Some(Ordering::Equal),
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for PathStack {
    /// Renders `(row,col)` entries joined by `" -> "`, top first.
    /// An empty stack renders as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", coord)?;
        }
        Ok(())
    }
}
