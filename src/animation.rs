//! Animation state for the solve visualization.
//!
//! This module replays a [`Solution`] one cell per frame: first the cells in visitation order,
//! then the cells of the final path. The core produces both sequences up front, so the animation
//! is pure presentation; it never computes anything about the maze itself.

use std::time::{Duration, Instant};

use crate::{grid::Cell, solve::Solution, spanning::Maze};

/// Animation frame delay in milliseconds.
///
/// This constant controls the timing between animation frames. A lower value speeds up the
/// replay, a higher one makes the traversal easier to follow.
pub(crate) const ANIMATION_FRAME_DELAY_MS: u64 = 60;

/// Visual state of a single cell during the solve replay.
///
/// The three states are mutually exclusive by construction: a cell on the final path is shown as
/// such even though the search also visited it, and a cell the search never expanded stays
/// unvisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellState {
    /// The search has not expanded this cell yet (or no solve has run).
    Unvisited,
    /// The search expanded this cell but it is not on the final path.
    Visited,
    /// The cell lies on the final path between start and goal.
    OnPath,
}

/// Animation state manager for the solve replay.
///
/// This structure holds the precomputed replay steps, the per-cell visual states, and the timing
/// needed to advance one step per frame. It is loaded from a fresh [`Solution`] after every solve
/// and cleared when the maze is regenerated.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Replay steps in presentation order: visited cells first, then the path cells.
    steps: Vec<(Cell, CellState)>,
    /// Index of the next step to apply.
    current_index: usize,
    /// Timestamp of the last applied step.
    last_update_time: Instant,
    /// Current visual state per cell id.
    states: Vec<CellState>,
    /// Column count of the maze the states are indexed against.
    cols: usize,
}

impl AnimationManager {
    /// Creates an empty animation manager.
    pub(crate) fn new() -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
            states: Vec::new(),
            cols: 0,
        }
    }

    /// Loads the replay steps for a freshly computed solution.
    ///
    /// The visited cells are queued first, then the path cells, so the replay shows the
    /// exploration before the solution. The path is replayed goal to start, exactly as the
    /// reconstructor produced it.
    pub(crate) fn load(&mut self, maze: &Maze, solution: &Solution) {
        self.steps = solution
            .visited_order
            .iter()
            .map(|&cell| (cell, CellState::Visited))
            .chain(solution.path.iter().map(|&cell| (cell, CellState::OnPath)))
            .collect();
        self.current_index = 0;
        self.last_update_time = Instant::now();
        self.states = vec![CellState::Unvisited; maze.rows() * maze.cols()];
        self.cols = maze.cols();
    }

    /// Clears all replay data, returning every cell to the unvisited state.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.current_index = 0;
        self.states.clear();
        self.cols = 0;
    }

    /// Advances the replay by one step if the frame delay has elapsed.
    pub(crate) fn update(&mut self) {
        if self.last_update_time.elapsed() < Duration::from_millis(ANIMATION_FRAME_DELAY_MS) {
            return;
        }
        self.last_update_time = Instant::now();

        if let Some(&(cell, state)) = self.steps.get(self.current_index) {
            if let Some(slot) = self.states.get_mut(cell.row * self.cols + cell.col) {
                *slot = state;
            }
            self.current_index += 1;
        }
    }

    /// Returns the current visual state of the given cell.
    pub(crate) fn state_of(&self, cell: Cell) -> CellState {
        self.states
            .get(cell.row * self.cols + cell.col)
            .copied()
            .unwrap_or(CellState::Unvisited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_maze, solve::solve_maze, SearchMode};

    /// Generates a small maze and its breadth-first solution for replay tests.
    fn maze_and_solution() -> (Maze, Solution) {
        let maze = generate_maze(3, 3, Some(5)).expect("dimensions are valid");
        let solution = solve_maze(&maze, maze.start(), maze.goal(), SearchMode::BreadthFirst)
            .expect("a spanning tree connects every pair of cells");
        (maze, solution)
    }

    /// Applies every pending step regardless of timing by forcing the delay to have elapsed.
    fn drain(manager: &mut AnimationManager) {
        for _ in 0..manager.steps.len() {
            manager.last_update_time =
                Instant::now() - Duration::from_millis(ANIMATION_FRAME_DELAY_MS + 1);
            manager.update();
        }
    }

    #[test]
    fn test_new_manager_reports_unvisited() {
        let manager = AnimationManager::new();

        assert_eq!(
            manager.state_of(Cell { row: 0, col: 0 }),
            CellState::Unvisited
        );
    }

    #[test]
    fn test_load_queues_visited_then_path() {
        let (maze, solution) = maze_and_solution();
        let mut manager = AnimationManager::new();
        manager.load(&maze, &solution);

        assert_eq!(
            manager.steps.len(),
            solution.visited_order.len() + solution.path.len()
        );
        assert!(manager
            .steps
            .iter()
            .take(solution.visited_order.len())
            .all(|&(_, state)| state == CellState::Visited));
        assert!(manager
            .steps
            .iter()
            .skip(solution.visited_order.len())
            .all(|&(_, state)| state == CellState::OnPath));
    }

    #[test]
    fn test_drained_replay_marks_path_cells_on_path() {
        let (maze, solution) = maze_and_solution();
        let mut manager = AnimationManager::new();
        manager.load(&maze, &solution);
        drain(&mut manager);

        for &cell in &solution.path {
            assert_eq!(manager.state_of(cell), CellState::OnPath);
        }
    }

    #[test]
    fn test_path_state_wins_over_visited_state() {
        // Cells on the path were also visited; the replay must leave them in the path state.
        let (maze, solution) = maze_and_solution();
        let mut manager = AnimationManager::new();
        manager.load(&maze, &solution);
        drain(&mut manager);

        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                let cell = Cell { row, col };
                let state = manager.state_of(cell);

                if solution.path.contains(&cell) {
                    assert_eq!(state, CellState::OnPath);
                } else if solution.visited_order.contains(&cell) {
                    assert_eq!(state, CellState::Visited);
                } else {
                    assert_eq!(state, CellState::Unvisited);
                }
            }
        }
    }

    #[test]
    fn test_clear_resets_every_cell() {
        let (maze, solution) = maze_and_solution();
        let mut manager = AnimationManager::new();
        manager.load(&maze, &solution);
        drain(&mut manager);
        manager.clear();

        for &cell in &solution.path {
            assert_eq!(manager.state_of(cell), CellState::Unvisited);
        }
    }

    #[test]
    fn test_update_before_delay_applies_nothing() {
        let (maze, solution) = maze_and_solution();
        let mut manager = AnimationManager::new();
        manager.load(&maze, &solution);

        // Freshly loaded; the delay cannot have elapsed yet.
        manager.update();

        assert_eq!(manager.current_index, 0);
    }
}
