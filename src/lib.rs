//! Terminal maze generator and solver.
//!
//! This crate generates a perfect maze — every pair of cells joined by exactly one path — by
//! running Kruskal's algorithm over a grid of randomly weighted candidate edges, then solves it
//! corner to corner with breadth-first or depth-first search and replays the traversal in the
//! terminal. The algorithm core ([`generate_maze`] and [`solve_maze`]) is pure and fully
//! deterministic for a fixed seed; the [`App`] wraps it in a Ratatui front-end.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod animation;
mod app;
mod cli;
mod dset;
mod error;
mod events;
mod grid;
mod solve;
mod spanning;
mod ui;

pub use crate::{
    app::App,
    cli::Cli,
    error::MazeError,
    grid::Cell,
    solve::{solve_maze, SearchMode, Solution},
    spanning::{generate_maze, Maze},
};
