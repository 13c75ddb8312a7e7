// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid topology for the lattice search.
//!
//! This module contains the pure, stateless description of an n×n grid:
//! - CellId: Row-major cell index in 0..n²
//! - Grid: Cell classification and on-demand adjacency
//! - Neighbors: Fixed-capacity list of up to four adjacent cells

pub mod grid;

// Re-export for convenience
pub use grid::{CellId, Grid, Neighbors, ORIGIN};
