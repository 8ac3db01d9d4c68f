//! Error types for maze generation and solving.
//!
//! Every variant in this module signals a structural or programming error rather than a transient
//! condition: none of them are retried, and all of them propagate immediately to the generation or
//! solve entry point with no partial results. The binary surfaces them through
//! [`color_eyre::eyre::Result`], into which they convert via `?`.

use std::fmt;

use crate::grid::Cell;

/// Failure conditions of the maze core.
///
/// This enumeration carries the full error taxonomy of the crate. The first variant is a plain
/// input validation failure; the remaining ones indicate misuse of the API or a violated internal
/// invariant and should never be observed when the library is driven through [`generate_maze`]
/// and [`solve_maze`].
///
/// [`generate_maze`]: crate::generate_maze
/// [`solve_maze`]: crate::solve_maze
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A grid was requested with a zero row or column count.
    ///
    /// This variant is raised immediately by grid construction before any cells or edges are
    /// allocated.
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// A cell outside the grid was passed to a traversal entry point.
    ///
    /// This variant indicates a programming error in the caller: the offending cell does not
    /// exist on the grid the maze was generated from.
    UnknownCell(Cell),
    /// The search frontier emptied before the goal was reached.
    ///
    /// This variant is a fatal invariant violation. A correctly built spanning tree connects
    /// every pair of cells, so an exhausted frontier signals a construction bug rather than a
    /// user-facing condition.
    UnreachableGoal(Cell),
    /// Path reconstruction could not walk back to the start cell.
    ///
    /// This variant carries the cell at which the predecessor chain broke. Like
    /// [`UnreachableGoal`](MazeError::UnreachableGoal) it signals that the path finder was misused
    /// or its invariants were violated.
    BrokenChain(Cell),
}

impl fmt::Display for MazeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    formatter,
                    "invalid maze dimensions: {rows} rows x {cols} columns (both must be at least 1)"
                )
            }
            Self::UnknownCell(cell) => {
                write!(
                    formatter,
                    "cell ({}, {}) does not belong to the grid",
                    cell.row, cell.col
                )
            }
            Self::UnreachableGoal(cell) => {
                write!(
                    formatter,
                    "search frontier emptied before reaching cell ({}, {}); the spanning tree is not connected",
                    cell.row, cell.col
                )
            }
            Self::BrokenChain(cell) => {
                write!(
                    formatter,
                    "predecessor chain broke at cell ({}, {}) before reaching the start",
                    cell.row, cell.col
                )
            }
        }
    }
}

impl std::error::Error for MazeError {}
