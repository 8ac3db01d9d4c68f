//! Path finder and path reconstructor over a generated maze.
//!
//! This module walks the spanning tree of a [`Maze`] from a start cell to a goal cell using
//! either breadth-first or depth-first order. Because corridors form a tree, both modes find the
//! same unique simple path; they differ only in the order cells are visited along the way, which
//! is exactly what the animated front-end displays. All traversal state (frontier, visited set,
//! predecessor map) is allocated fresh per call and discarded afterwards.

use std::collections::VecDeque;

use crate::{
    error::MazeError,
    grid::{Cell, Grid},
    spanning::Maze,
};

/// Frontier discipline of a solve request.
///
/// This enumeration selects how newly discovered cells enter the worklist: at the back for
/// breadth-first search, at the front for depth-first search. The worklist is always popped from
/// the front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Queue discipline; cells are visited in increasing distance from the start.
    BreadthFirst,
    /// Stack discipline; one branch is followed as deep as possible before backtracking.
    DepthFirst,
}

/// The outcome of a solve request.
///
/// This structure carries the two sequences the front-end animates: first the cells in the order
/// the search expanded them, then the unique corridor path. Both refer to the maze the solve ran
/// against and contain no other state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Cells in the order the search marked them visited. The goal cell is not included; the
    /// search terminates the moment it is popped from the frontier.
    pub visited_order: Vec<Cell>,
    /// The unique corridor path, ordered goal to start inclusive. Callers that need start-to-goal
    /// order reverse it.
    pub path: Vec<Cell>,
}

/// Traversal output prior to reconstruction: predecessors and visitation order over cell ids.
struct SearchTrace {
    /// Per cell id, the id of the cell it was first reached from.
    predecessors: Vec<Option<usize>>,
    /// Cell ids in the order the search expanded them.
    visited: Vec<usize>,
}

/// Solves the maze from `start` to `goal` with the given search mode.
///
/// This function is the solve entry point of the crate. It validates that both cells lie on the
/// maze's grid, runs the traversal, and reconstructs the unique path from the predecessor map.
/// Results are deterministic: neighbor enumeration follows edge attachment order, so identical
/// inputs always produce identical visited orders and paths.
///
/// # Errors
///
/// - [`MazeError::UnknownCell`] if `start` or `goal` lies outside the grid.
/// - [`MazeError::UnreachableGoal`] if the frontier empties first; impossible for a correctly
///   built spanning tree and therefore fatal.
/// - [`MazeError::BrokenChain`] if the predecessor walk cannot reach `start`; equally fatal.
pub fn solve_maze(
    maze: &Maze,
    start: Cell,
    goal: Cell,
    mode: SearchMode,
) -> Result<Solution, MazeError> {
    let grid = maze.grid();
    let start_id = grid.id_of(start).ok_or(MazeError::UnknownCell(start))?;
    let goal_id = grid.id_of(goal).ok_or(MazeError::UnknownCell(goal))?;

    let trace = find_path(maze, start_id, goal_id, mode)?;
    let path = reconstruct(grid, &trace.predecessors, goal_id, start_id)?;

    Ok(Solution {
        visited_order: trace
            .visited
            .into_iter()
            .map(|cell_id| grid.cell_at(cell_id))
            .collect(),
        path: path.into_iter().map(|cell_id| grid.cell_at(cell_id)).collect(),
    })
}

/// Runs the worklist traversal and records predecessors and visitation order.
///
/// The worklist starts with the start cell and is popped from the front. Popping the goal ends
/// the search; popping an already visited cell discards it; any other cell is marked visited and
/// its unvisited corridor neighbors are recorded and inserted per the mode's discipline.
#[expect(
    clippy::indexing_slicing,
    reason = "All ids flowing through the worklist are minted by the grid and index flat vectors sized to the cell count."
)]
fn find_path(
    maze: &Maze,
    start_id: usize,
    goal_id: usize,
    mode: SearchMode,
) -> Result<SearchTrace, MazeError> {
    let grid = maze.grid();
    let cell_count = grid.cell_count();

    let mut frontier = VecDeque::new();
    frontier.push_back(start_id);
    let mut seen = vec![false; cell_count];
    let mut visited = Vec::new();
    let mut predecessors: Vec<Option<usize>> = vec![None; cell_count];

    while let Some(current) = frontier.pop_front() {
        if current == goal_id {
            return Ok(SearchTrace {
                predecessors,
                visited,
            });
        }
        if seen[current] {
            continue;
        }
        seen[current] = true;
        visited.push(current);

        for &edge_id in grid.incident(current) {
            if !maze.is_corridor(edge_id) {
                continue;
            }
            let neighbor = grid.edge(edge_id).other(current);
            if seen[neighbor] {
                continue;
            }
            predecessors[neighbor] = Some(current);
            match mode {
                SearchMode::BreadthFirst => frontier.push_back(neighbor),
                SearchMode::DepthFirst => frontier.push_front(neighbor),
            }
        }
    }

    Err(MazeError::UnreachableGoal(grid.cell_at(goal_id)))
}

/// Unwinds the predecessor map from the goal back to the start, inclusive of both.
fn reconstruct(
    grid: &Grid,
    predecessors: &[Option<usize>],
    goal_id: usize,
    start_id: usize,
) -> Result<Vec<usize>, MazeError> {
    let mut path = vec![goal_id];
    let mut current = goal_id;

    while current != start_id {
        match predecessors.get(current).copied().flatten() {
            Some(previous) => {
                path.push(previous);
                current = previous;
            }
            None => return Err(MazeError::BrokenChain(grid.cell_at(current))),
        }
    }

    Ok(path)
}
