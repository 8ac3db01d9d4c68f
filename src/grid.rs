//! Cell lattice and weighted edge model.
//!
//! This module builds the rectangular grid the maze is carved from: a row-major lattice of cells
//! and one candidate edge per adjacent pair, each edge carrying a weight drawn from an injected
//! random source. The grid is created once per generation request and is immutable afterwards;
//! everything downstream (the spanning-tree builder and the path finder) only reads it.

use rand::Rng;

use crate::error::MazeError;

/// Exclusive upper bound of the uniform edge weight distribution.
///
/// This constant bounds the random weights attached to candidate edges. Weights only need to
/// induce a random ordering, so the exact bound is irrelevant to correctness.
pub(crate) const WEIGHT_BOUND: u32 = 100;

/// A unit position in the maze lattice.
///
/// This structure identifies a cell by its zero-based (row, column) pair. Cells carry no behavior
/// beyond identity and position; all per-cell bookkeeping lives in flat vectors indexed by the
/// cell's id (see [`Grid::id_of`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Zero-based row of the cell, counted from the top of the lattice.
    pub row: usize,
    /// Zero-based column of the cell, counted from the left of the lattice.
    pub col: usize,
}

/// An undirected connection between two adjacent cells.
///
/// This structure stores the endpoints as cell ids rather than coordinates so that the
/// disjoint-set and predecessor structures downstream can index flat arrays directly. Whether the
/// edge ends up a corridor or a wall is recorded by the spanning-tree builder, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
    /// Cell id of the first endpoint, always the smaller id of the pair.
    pub(crate) first: usize,
    /// Cell id of the second endpoint.
    pub(crate) second: usize,
    /// Random weight used to order edges during Kruskal's algorithm.
    pub(crate) weight: u32,
}

impl Edge {
    /// Returns the endpoint of this edge that is not the given cell id.
    pub(crate) const fn other(&self, cell_id: usize) -> usize {
        if self.first == cell_id {
            self.second
        } else {
            self.first
        }
    }
}

/// The cell lattice together with its full candidate edge list.
///
/// This structure owns every edge the maze could possibly contain, created in a fixed order:
/// first one edge per vertically adjacent pair, row by row, then one edge per horizontally
/// adjacent pair. Each cell additionally tracks the ids of its incident edges in attachment
/// order, which gives traversal a deterministic neighbor enumeration.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    /// Number of rows in the lattice.
    rows: usize,
    /// Number of columns in the lattice.
    cols: usize,
    /// All candidate edges in creation order.
    edges: Vec<Edge>,
    /// Per cell id, the ids of the edges incident to that cell in attachment order.
    incident: Vec<Vec<usize>>,
}

impl Grid {
    /// Builds a grid with the given dimensions, drawing edge weights from the supplied source.
    ///
    /// This function constructs cells in row-major order and then creates the candidate edges:
    /// vertical neighbors first, horizontal neighbors second, each with a weight drawn uniformly
    /// from `[0, WEIGHT_BOUND)`. The random source is the only external dependency, and injecting
    /// a seeded one makes construction fully deterministic.
    ///
    /// # Errors
    ///
    /// - [`MazeError::InvalidDimensions`] if either dimension is zero.
    pub(crate) fn build(rows: usize, cols: usize, rng: &mut impl Rng) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let cell_count = rows * cols;
        let edge_count = 2 * cell_count - rows - cols;
        let mut grid = Self {
            rows,
            cols,
            edges: Vec::with_capacity(edge_count),
            incident: vec![Vec::new(); cell_count],
        };

        // Vertical pairs first, then horizontal pairs; the order fixes both the edge ids and the
        // per-cell neighbor enumeration.
        for row in 0..rows - 1 {
            for col in 0..cols {
                let top = row * cols + col;
                grid.attach(top, top + cols, rng.random_range(0..WEIGHT_BOUND));
            }
        }
        for row in 0..rows {
            for col in 0..cols - 1 {
                let left = row * cols + col;
                grid.attach(left, left + 1, rng.random_range(0..WEIGHT_BOUND));
            }
        }

        Ok(grid)
    }

    /// Appends an edge and records it on both endpoints' incident lists.
    #[expect(
        clippy::indexing_slicing,
        reason = "Endpoint ids are produced by the construction loops and are always in range."
    )]
    fn attach(&mut self, first: usize, second: usize, weight: u32) {
        let edge_id = self.edges.len();
        self.edges.push(Edge {
            first,
            second,
            weight,
        });
        self.incident[first].push(edge_id);
        self.incident[second].push(edge_id);
    }

    /// Returns the number of rows in the lattice.
    pub(crate) const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in the lattice.
    pub(crate) const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells in the lattice.
    pub(crate) const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the full candidate edge list in creation order.
    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edge with the given id.
    #[expect(
        clippy::indexing_slicing,
        reason = "Edge ids are only minted by this grid and never exceed the edge list."
    )]
    pub(crate) fn edge(&self, edge_id: usize) -> Edge {
        self.edges[edge_id]
    }

    /// Returns the ids of the edges incident to the given cell id, in attachment order.
    #[expect(
        clippy::indexing_slicing,
        reason = "Cell ids are only minted by this grid and never exceed the cell count."
    )]
    pub(crate) fn incident(&self, cell_id: usize) -> &[usize] {
        &self.incident[cell_id]
    }

    /// Returns the flat id of the given cell, or `None` if it lies outside the lattice.
    ///
    /// The id is `row * cols + col`, the row-major position of the cell, and is the index used by
    /// every flat per-cell structure in the crate.
    pub(crate) fn id_of(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }

    /// Returns the cell at the given flat id.
    pub(crate) const fn cell_at(&self, cell_id: usize) -> Cell {
        Cell {
            row: cell_id / self.cols,
            col: cell_id % self.cols,
        }
    }

    /// Returns both endpoints of the given edge as cells.
    pub(crate) fn endpoints(&self, edge_id: usize) -> (Cell, Cell) {
        let edge = self.edge(edge_id);
        (self.cell_at(edge.first), self.cell_at(edge.second))
    }
}
