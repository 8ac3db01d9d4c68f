//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{solve::solve_maze, spanning, App, SearchMode};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI, and advances
/// the solve replay once per pass regardless of input.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => app.exit = true,
                KeyCode::Char('n') => handle_generate(app)?,
                KeyCode::Char('b') => handle_solve(app, SearchMode::BreadthFirst)?,
                KeyCode::Char('d') => handle_solve(app, SearchMode::DepthFirst)?,
                _ => {}
            }
        }
    }

    app.animation_manager.update();

    Ok(())
}

/// Handles the `n` key by generating a fresh maze.
///
/// This function replaces the current maze with one drawn from the application's random stream
/// and discards the previous solution and replay, returning every cell to the unvisited state.
pub(crate) fn handle_generate(app: &mut App) -> Result<()> {
    app.maze = spanning::generate_with_rng(app.rows, app.cols, &mut app.rng)?;
    app.solution = None;
    app.animation_manager.clear();

    Ok(())
}

/// Handles the `b` and `d` keys by solving the current maze.
///
/// This function runs the requested search from the top-left corner to the bottom-right corner
/// and loads the result into the animation manager so the replay starts from the beginning.
pub(crate) fn handle_solve(app: &mut App, mode: SearchMode) -> Result<()> {
    let solution = solve_maze(&app.maze, app.maze.start(), app.maze.goal(), mode)?;
    app.animation_manager.load(&app.maze, &solution);
    app.solution = Some(solution);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;

    /// Creates an application with a deterministic maze for event tests.
    fn seeded_app() -> App {
        App::new(&Cli {
            rows: 5,
            cols: 5,
            seed: Some(5),
        })
        .expect("dimensions are valid")
    }

    #[test]
    fn test_handle_solve_records_a_solution() {
        let mut app = seeded_app();

        handle_solve(&mut app, SearchMode::BreadthFirst).expect("the maze is solvable");

        let solution = app.solution.as_ref().expect("solution must be recorded");
        assert_eq!(solution.path.first().copied(), Some(app.maze.goal()));
        assert_eq!(solution.path.last().copied(), Some(app.maze.start()));
    }

    #[test]
    fn test_handle_solve_modes_agree_on_the_path() {
        let mut app = seeded_app();

        handle_solve(&mut app, SearchMode::BreadthFirst).expect("the maze is solvable");
        let breadth = app.solution.clone().expect("solution must be recorded");

        handle_solve(&mut app, SearchMode::DepthFirst).expect("the maze is solvable");
        let depth = app.solution.clone().expect("solution must be recorded");

        assert_eq!(breadth.path, depth.path);
    }

    #[test]
    fn test_handle_generate_discards_the_solution() {
        let mut app = seeded_app();

        handle_solve(&mut app, SearchMode::DepthFirst).expect("the maze is solvable");
        assert!(app.solution.is_some());

        handle_generate(&mut app).expect("regeneration keeps the same dimensions");

        assert!(app.solution.is_none());
        assert_eq!(app.maze.corridor_count(), 5 * 5 - 1);
    }

    #[test]
    fn test_handle_generate_advances_the_random_stream() {
        let mut app = seeded_app();
        let before: Vec<_> = app.maze.walls().collect();

        handle_generate(&mut app).expect("regeneration keeps the same dimensions");
        let after: Vec<_> = app.maze.walls().collect();

        assert_ne!(before, after, "a fresh maze must differ from the previous one");
    }
}
