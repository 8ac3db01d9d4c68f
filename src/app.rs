//! Core application state and logic for the maze viewer.

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    animation::AnimationManager, cli::Cli, error::MazeError, events, solve::Solution,
    spanning::{self, Maze}, ui,
};

/// Application state container for the maze viewer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the maze and Crossterm events will help writing to. The random source
/// lives here so that regenerating with the `n` key keeps drawing from one long-lived stream
/// instead of reseeding on every press.
#[derive(Debug)]
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the
    /// user wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Number of rows of every generated maze.
    pub(crate) rows: usize,
    /// Number of columns of every generated maze.
    pub(crate) cols: usize,
    /// The application-owned random source.
    ///
    /// This field is seeded once, either from the command line or from OS entropy, and every
    /// maze generation draws further values from it.
    pub(crate) rng: StdRng,
    /// The maze currently on screen.
    ///
    /// This field holds the output of the last generation request. It persists until the next
    /// `n` key press replaces it.
    pub(crate) maze: Maze,
    /// The most recent solve result, if any.
    ///
    /// This field is `None` until the user presses `b` or `d` and is cleared again when a new
    /// maze is generated.
    pub(crate) solution: Option<Solution>,
    /// Animation manager for the solve replay.
    ///
    /// This field steps through the visited order and the final path of the current solution at
    /// a fixed cadence.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Creates the application state and generates the first maze.
    ///
    /// # Errors
    ///
    /// - [`MazeError::InvalidDimensions`] if the configured dimensions are zero.
    pub fn new(config: &Cli) -> Result<Self, MazeError> {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let maze = spanning::generate_with_rng(config.rows, config.cols, &mut rng)?;

        Ok(Self {
            exit: false,
            rows: config.rows,
            cols: config.cols,
            rng,
            maze,
            solution: None,
            animation_manager: AnimationManager::new(),
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues
    /// until the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
