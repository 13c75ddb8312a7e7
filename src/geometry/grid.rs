// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The n×n grid graph.
//!
//! Cells are indexed row-major, so cell `i` sits at row `i / n` and column
//! `i % n`. The graph is never materialized: neighbours are derived from the
//! index on demand.
//!
//! # Examples
//!
//! ```
//! use lattice_search::geometry::Grid;
//!
//! let grid = Grid::new(4).unwrap();
//! assert_eq!(grid.cell_count(), 16);
//! assert!(grid.is_corner(15));
//! assert!(grid.is_middle(5));
//!
//! // The origin only ever moves down.
//! assert_eq!(grid.neighbors(0).as_slice(), &[4]);
//! ```

use crate::error::{SearchError, MIN_GRID_SIZE};
use smallvec::SmallVec;

/// Row-major index of a cell in an n×n grid.
pub type CellId = usize;

/// The corner every route starts from.
pub const ORIGIN: CellId = 0;

/// Up to four orthogonally adjacent cells, stored inline.
pub type Neighbors = SmallVec<[CellId; 4]>;

/// An n×n grid graph with n >= 3.
///
/// All queries are total for `index < n²`; indices outside the grid are a
/// caller bug and panic on the arithmetic or on the subsequent array access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    n: usize,
}

impl Grid {
    /// Create the grid, rejecting sizes where corners, edges and middle
    /// cells would coincide.
    pub fn new(n: usize) -> Result<Self, SearchError> {
        if n < MIN_GRID_SIZE {
            return Err(SearchError::InvalidGridSize { n });
        }
        Ok(Self { n })
    }

    /// Side length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total number of cells (n²).
    pub fn cell_count(&self) -> usize {
        self.n * self.n
    }

    pub fn row(&self, index: CellId) -> usize {
        index / self.n
    }

    pub fn column(&self, index: CellId) -> usize {
        index % self.n
    }

    /// Cell at the given row and column.
    pub fn cell_at(&self, row: usize, column: usize) -> CellId {
        debug_assert!(row < self.n && column < self.n);
        row * self.n + column
    }

    pub fn is_top_edge(&self, index: CellId) -> bool {
        index < self.n
    }

    pub fn is_bottom_edge(&self, index: CellId) -> bool {
        index + self.n >= self.cell_count()
    }

    pub fn is_left_edge(&self, index: CellId) -> bool {
        self.column(index) == 0
    }

    pub fn is_right_edge(&self, index: CellId) -> bool {
        self.column(index) == self.n - 1
    }

    /// One of the four grid corners (the origin included).
    pub fn is_corner(&self, index: CellId) -> bool {
        let last = self.cell_count() - 1;
        index == ORIGIN || index == self.n - 1 || index == last + 1 - self.n || index == last
    }

    /// On any of the four borders.
    pub fn is_edge(&self, index: CellId) -> bool {
        self.is_top_edge(index)
            || self.is_bottom_edge(index)
            || self.is_left_edge(index)
            || self.is_right_edge(index)
    }

    /// Not on any border.
    pub fn is_middle(&self, index: CellId) -> bool {
        !self.is_edge(index)
    }

    /// Whether a route covering every cell may end here.
    ///
    /// The grid graph is bipartite under the chessboard colouring
    /// `(row + column) % 2`. A route of n² cells starting on the origin
    /// (colour 0) makes n² − 1 moves, so it ends on colour `(n² − 1) % 2`.
    /// Of those cells only middle cells count as valid route ends.
    pub fn is_valid_end(&self, index: CellId) -> bool {
        self.is_middle(index) && self.parity(index) == (self.cell_count() - 1) % 2
    }

    /// Chessboard colour of a cell.
    pub fn parity(&self, index: CellId) -> usize {
        (self.row(index) + self.column(index)) % 2
    }

    /// The three corners other than the origin.
    pub fn other_corners(&self) -> [CellId; 3] {
        let count = self.cell_count();
        [self.n - 1, count - self.n, count - 1]
    }

    /// Cells adjacent to `index`, in the order up, down, left, right.
    ///
    /// The edge from the origin to its right-hand neighbour is removed:
    /// every route that starts by moving right is the mirror image of one
    /// that starts by moving down. The reverse edge is kept, but the origin
    /// is always part of the route, so it is never taken.
    pub fn neighbors(&self, index: CellId) -> Neighbors {
        let mut neighbors = Neighbors::new();
        if !self.is_top_edge(index) {
            neighbors.push(index - self.n);
        }
        if !self.is_bottom_edge(index) {
            neighbors.push(index + self.n);
        }
        if !self.is_left_edge(index) {
            neighbors.push(index - 1);
        }
        if !self.is_right_edge(index) && index != ORIGIN {
            neighbors.push(index + 1);
        }
        neighbors
    }

    /// All cells a complete route may end on, in ascending order.
    pub fn valid_end_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.cell_count()).filter(move |&index| self.is_valid_end(index))
    }
}
