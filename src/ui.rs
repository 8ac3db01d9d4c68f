//! User interface rendering for the maze viewer.
//!
//! This module draws the maze as a wall lattice on a [`Canvas`] widget: a board of
//! `2 * cols + 1` by `2 * rows + 1` lattice points where cell centers sit at odd coordinates,
//! wall edges fill the midpoint between their two cells, and the border and lattice joints are
//! always solid. The solve replay is painted over the same lattice from the animation manager's
//! per-cell states.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    animation::CellState,
    grid::Cell,
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function clears the frame and renders the maze board centered in the terminal with the
/// key-binding tooltip at the bottom, painting the walls first and the solve replay on top.
///
/// # Errors
///
/// This function may return errors from coordinate conversion or layout lookups.
#[expect(
    clippy::too_many_lines,
    reason = "UI rendering function requires many lines for layout and drawing operations."
)]
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    // Lattice dimensions: one point per cell center, wall slot, and joint.
    let board_width = 2 * app.maze.cols() + 1;
    let board_height = 2 * app.maze.rows() + 1;

    // Overall layout: board area plus a tooltip block at the bottom.
    let overall_layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let board_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get board content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let tooltip_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(board_width)?),
        Constraint::Min(1),
    ])
    .split(tooltip_full_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered tooltip area from horizontal layout")?;

    let board_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(board_height)?),
        Constraint::Min(1),
    ])
    .split(board_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get board area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(board_width)?),
        Constraint::Min(1),
    ])
    .split(board_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get board space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before the paint closures.
    let wall_screen_coords =
        transform_to_screen(&wall_points(app), board_width, board_height)?;
    let visited_screen_coords = transform_to_screen(
        &cell_points(app, CellState::Visited),
        board_width,
        board_height,
    )?;
    let path_screen_coords = transform_to_screen(
        &cell_points(app, CellState::OnPath),
        board_width,
        board_height,
    )?;
    let start_screen_coords = transform_to_screen(
        &[cell_point(app.maze.start())],
        board_width,
        board_height,
    )?;
    let goal_screen_coords =
        transform_to_screen(&[cell_point(app.maze.goal())], board_width, board_height)?;

    let board = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
        });
    let replay = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &visited_screen_coords,
                color: Color::Cyan,
            });
            ctx.draw(&Points {
                coords: &path_screen_coords,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &start_screen_coords,
                color: Color::LightGreen,
            });
            ctx.draw(&Points {
                coords: &goal_screen_coords,
                color: Color::LightRed,
            });
        });

    frame.render_widget(board, space);
    frame.render_widget(replay, space);

    let tooltip_block = Block::bordered()
        .title("(n) new maze / (b) breadth-first / (d) depth-first / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Returns the lattice point of a cell's center.
const fn cell_point(cell: Cell) -> (usize, usize) {
    (2 * cell.col + 1, 2 * cell.row + 1)
}

/// Collects the lattice points occupied by walls.
///
/// This function marks the outer border, every lattice joint, and the midpoint of each wall
/// edge. Corridor midpoints are left empty, which is what makes the passages visible.
fn wall_points(app: &App) -> Vec<(usize, usize)> {
    let width = 2 * app.maze.cols() + 1;
    let height = 2 * app.maze.rows() + 1;
    let mut points = Vec::new();

    for x in 0..width {
        points.push((x, 0));
        points.push((x, height - 1));
    }
    for y in 1..height - 1 {
        points.push((0, y));
        points.push((width - 1, y));
    }
    for x in (2..width - 1).step_by(2) {
        for y in (2..height - 1).step_by(2) {
            points.push((x, y));
        }
    }
    for (first, second) in app.maze.walls() {
        points.push((first.col + second.col + 1, first.row + second.row + 1));
    }

    points
}

/// Collects the center points of every cell currently in the given replay state.
fn cell_points(app: &App, state: CellState) -> Vec<(usize, usize)> {
    let mut points = Vec::new();

    for row in 0..app.maze.rows() {
        for col in 0..app.maze.cols() {
            let cell = Cell { row, col };
            if app.animation_manager.state_of(cell) == state {
                points.push(cell_point(cell));
            }
        }
    }

    points
}

/// Transforms lattice coordinates to screen coordinates for canvas rendering.
///
/// This function converts board coordinates (x, y) to centered screen coordinates using the
/// transformation `screen_x = x - (w - 1) / 2` (ascending left to right) and
/// `screen_y = (h - 1) / 2 - y` (lattice rows grow downward, screen rows grow upward).
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn transform_to_screen(
    points: &[(usize, usize)],
    width: usize,
    height: usize,
) -> Result<Vec<(f64, f64)>> {
    let width_n = f64::from(u16::try_from(width)?);
    let height_n = f64::from(u16::try_from(height)?);

    points
        .iter()
        .map(|&(x, y)| {
            let screen_x = f64::from(u16::try_from(x)?) - (width_n - 1.) / 2.;
            let screen_y = (height_n - 1.) / 2. - f64::from(u16::try_from(y)?);

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{events, Cli, SearchMode};

    /// Creates an application with a deterministic maze for UI testing.
    fn create_test_app() -> App {
        App::new(&Cli {
            rows: 5,
            cols: 5,
            seed: Some(5),
        })
        .expect("dimensions are valid")
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    #[test]
    fn test_draw_fresh_maze() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing a fresh maze should succeed");
    }

    #[test]
    fn test_draw_after_solve() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        events::handle_solve(&mut app, SearchMode::BreadthFirst).expect("the maze is solvable");

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing a solved maze should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_wall_points_cover_the_border() {
        let app = create_test_app();
        let points = wall_points(&app);
        let width = 2 * app.maze.cols() + 1;
        let height = 2 * app.maze.rows() + 1;

        for x in 0..width {
            assert!(points.contains(&(x, 0)), "top border misses ({x}, 0)");
            assert!(
                points.contains(&(x, height - 1)),
                "bottom border misses ({x}, {})",
                height - 1
            );
        }
        for y in 0..height {
            assert!(points.contains(&(0, y)), "left border misses (0, {y})");
            assert!(
                points.contains(&(width - 1, y)),
                "right border misses ({}, {y})",
                width - 1
            );
        }
    }

    #[test]
    fn test_corridor_midpoints_stay_open() {
        let app = create_test_app();
        let points = wall_points(&app);

        for (first, second) in app.maze.corridors() {
            let midpoint = (first.col + second.col + 1, first.row + second.row + 1);

            assert!(
                !points.contains(&midpoint),
                "corridor midpoint {midpoint:?} must stay open"
            );
        }
    }

    #[test]
    fn test_cell_points_follow_the_replay_state() {
        let mut app = create_test_app();

        assert!(cell_points(&app, CellState::Visited).is_empty());
        assert!(cell_points(&app, CellState::OnPath).is_empty());

        events::handle_solve(&mut app, SearchMode::DepthFirst).expect("the maze is solvable");

        // The replay has not advanced yet, so every cell still renders unvisited.
        assert!(cell_points(&app, CellState::OnPath).is_empty());
        assert_eq!(
            cell_points(&app, CellState::Unvisited).len(),
            app.maze.rows() * app.maze.cols()
        );
    }

    #[test]
    fn test_transform_centers_the_board() {
        let points = vec![(0, 0), (2, 2), (4, 4)];
        let transformed =
            transform_to_screen(&points, 5, 5).expect("coordinates fit into u16");

        assert_eq!(transformed, vec![(-2.0, 2.0), (0.0, 0.0), (2.0, -2.0)]);
    }
}
