//! Spanning-tree builder: Kruskal's algorithm over the grid's weighted edges.
//!
//! This module turns the candidate edge list of a [`Grid`] into a perfect maze: the edges picked
//! into the minimum-weight spanning tree become corridors, every other edge becomes a wall. The
//! result is packaged as a [`Maze`], the long-lived artifact of a generation request that the
//! path finder and the UI both read from.

use rand::{rngs::StdRng, Rng, SeedableRng as _};

use crate::{
    dset::DisjointSet,
    error::MazeError,
    grid::{Cell, Grid},
};

/// A generated maze: the grid plus its corridor/wall partition.
///
/// This structure is immutable once built. Corridors form a spanning tree of the grid, so there
/// is exactly one simple path between any two cells; walls are the complement of that tree within
/// the grid's candidate edge set.
#[derive(Clone, Debug)]
pub struct Maze {
    /// The underlying cell lattice and candidate edge list.
    grid: Grid,
    /// Ids of the edges picked into the spanning tree, in pick order.
    corridors: Vec<usize>,
    /// Ids of the edges excluded from the spanning tree.
    walls: Vec<usize>,
    /// Corridor membership per edge id, for constant-time lookup during traversal.
    corridor_mask: Vec<bool>,
}

impl Maze {
    /// Returns the number of rows in the maze.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Returns the number of columns in the maze.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Returns the conventional start cell, the top-left corner.
    #[must_use]
    pub const fn start(&self) -> Cell {
        Cell { row: 0, col: 0 }
    }

    /// Returns the conventional goal cell, the bottom-right corner.
    #[must_use]
    pub const fn goal(&self) -> Cell {
        Cell {
            row: self.rows() - 1,
            col: self.cols() - 1,
        }
    }

    /// Returns the corridor edges as cell pairs, in the order Kruskal picked them.
    pub fn corridors(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.corridors
            .iter()
            .map(|&edge_id| self.grid.endpoints(edge_id))
    }

    /// Returns the wall edges as cell pairs.
    pub fn walls(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.walls
            .iter()
            .map(|&edge_id| self.grid.endpoints(edge_id))
    }

    /// Returns the number of corridor edges, always `rows * cols - 1`.
    #[must_use]
    pub fn corridor_count(&self) -> usize {
        self.corridors.len()
    }

    /// Returns the number of wall edges.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Returns whether the edge with the given id was picked into the spanning tree.
    pub(crate) fn is_corridor(&self, edge_id: usize) -> bool {
        self.corridor_mask.get(edge_id).copied().unwrap_or(false)
    }

    /// Returns the underlying grid.
    pub(crate) const fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// Partitions the grid's edges into a spanning tree and its complement.
///
/// This function runs Kruskal's algorithm: edge ids are sorted ascending by weight (the sort is
/// stable, so weight ties fall back to edge creation order and the result is deterministic), a
/// fresh disjoint-set starts with every cell as its own component, and each edge in order either
/// joins two components (corridor) or would close a cycle (wall). Iteration stops as soon as the
/// corridor set reaches `cells - 1` edges; every edge not yet examined is a wall by definition.
pub(crate) fn build_spanning_tree(grid: Grid) -> Maze {
    let cell_count = grid.cell_count();
    let edge_count = grid.edges().len();

    let mut order: Vec<usize> = (0..edge_count).collect();
    order.sort_by_key(|&edge_id| grid.edge(edge_id).weight);

    let mut components = DisjointSet::new(cell_count);
    let mut corridors = Vec::with_capacity(cell_count - 1);
    let mut walls = Vec::with_capacity(edge_count - (cell_count - 1));
    let mut corridor_mask = vec![false; edge_count];

    let mut sorted = order.into_iter();
    while components.components() > 1 {
        // The grid graph is connected, so the edge order cannot run out before the components
        // merge into one.
        let Some(edge_id) = sorted.next() else {
            break;
        };
        let edge = grid.edge(edge_id);

        if components.union(edge.first, edge.second) {
            corridors.push(edge_id);
            if let Some(slot) = corridor_mask.get_mut(edge_id) {
                *slot = true;
            }
        } else {
            walls.push(edge_id);
        }
    }
    walls.extend(sorted);

    Maze {
        grid,
        corridors,
        walls,
        corridor_mask,
    }
}

/// Generates a maze with the given dimensions and optional seed.
///
/// This function is the generation entry point of the crate. A fixed seed makes the result fully
/// deterministic: identical `(rows, cols, seed)` triples yield identical edge weights, an
/// identical spanning tree and therefore an identical maze. Without a seed the random source is
/// initialized from OS entropy.
///
/// # Errors
///
/// - [`MazeError::InvalidDimensions`] if either dimension is zero.
pub fn generate_maze(rows: usize, cols: usize, seed: Option<u64>) -> Result<Maze, MazeError> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    generate_with_rng(rows, cols, &mut rng)
}

/// Generates a maze drawing edge weights from the supplied random source.
///
/// This function backs both [`generate_maze`] and the application's `n` key, which keeps drawing
/// from one long-lived random stream across regenerations.
///
/// # Errors
///
/// - [`MazeError::InvalidDimensions`] if either dimension is zero.
pub(crate) fn generate_with_rng(
    rows: usize,
    cols: usize,
    rng: &mut impl Rng,
) -> Result<Maze, MazeError> {
    let grid = Grid::build(rows, cols, rng)?;
    Ok(build_spanning_tree(grid))
}
