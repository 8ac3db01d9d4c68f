//! Command-line configuration.
//!
//! Dimensions and the optional seed are the only external configuration the maze core takes, so
//! the command line is deliberately small. The defaults give a 10x10 launch board.

use clap::Parser;

/// Terminal maze generator and solver.
///
/// Generates a perfect maze with randomized Kruskal and solves it corner to corner with
/// breadth-first or depth-first search, replaying the traversal in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Number of rows in the maze.
    #[arg(long, default_value_t = 10)]
    pub rows: usize,
    /// Number of columns in the maze.
    #[arg(long, default_value_t = 10)]
    pub cols: usize,
    /// Seed for the random source; omit to draw one from OS entropy.
    ///
    /// A fixed seed makes the generated maze fully reproducible.
    #[arg(long)]
    pub seed: Option<u64>,
}
