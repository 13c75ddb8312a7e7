// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Occupancy and remaining-cell counters.
//!
//! # Invariants
//!
//! Outside of a pruning probe (see [`SearchState::mark_probe`]):
//! - exactly `cell_count - remaining` cells are occupied,
//! - `valid_end_remaining` is the number of unoccupied valid end cells,
//! - `row_remaining[r]` and `column_remaining[c]` count the unoccupied cells
//!   of each row and column.
//!
//! The counters are maintained incrementally by [`SearchState::lock`] and
//! [`SearchState::unlock`] rather than rescanned.

use crate::geometry::{CellId, Grid, Neighbors};
use std::ops::{Deref, DerefMut};

/// Cells occupied by the route under construction, plus derived counts.
#[derive(Debug, Clone)]
pub struct SearchState {
    grid: Grid,
    occupied: Vec<bool>,
    /// Fixed at construction.
    valid_end: Vec<bool>,
    remaining: usize,
    valid_end_remaining: usize,
    row_remaining: Vec<usize>,
    column_remaining: Vec<usize>,
}

impl SearchState {
    /// Create an empty state: every cell unvisited.
    pub fn new(grid: Grid) -> Self {
        let count = grid.cell_count();
        let valid_end: Vec<bool> = (0..count).map(|index| grid.is_valid_end(index)).collect();
        let valid_end_remaining = valid_end.iter().filter(|&&v| v).count();
        Self {
            grid,
            occupied: vec![false; count],
            valid_end,
            remaining: count,
            valid_end_remaining,
            row_remaining: vec![grid.n(); grid.n()],
            column_remaining: vec![grid.n(); grid.n()],
        }
    }

    /// Unlock every cell, restoring the freshly constructed state.
    pub fn reset(&mut self) {
        *self = Self::new(self.grid);
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn is_occupied(&self, index: CellId) -> bool {
        self.occupied[index]
    }

    pub fn is_valid_end(&self, index: CellId) -> bool {
        self.valid_end[index]
    }

    /// Number of unvisited cells.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of unvisited valid end cells.
    pub fn valid_end_remaining(&self) -> usize {
        self.valid_end_remaining
    }

    /// Unvisited cells per row, indexed by row.
    pub fn row_remaining(&self) -> &[usize] {
        &self.row_remaining
    }

    /// Unvisited cells per column, indexed by column.
    pub fn column_remaining(&self) -> &[usize] {
        &self.column_remaining
    }

    /// Add a cell to the route.
    ///
    /// Returns `false`, changing nothing, if the cell was already occupied.
    pub fn lock(&mut self, index: CellId) -> bool {
        if self.occupied[index] {
            return false;
        }
        self.occupied[index] = true;
        self.remaining -= 1;
        if self.valid_end[index] {
            self.valid_end_remaining -= 1;
        }
        self.row_remaining[self.grid.row(index)] -= 1;
        self.column_remaining[self.grid.column(index)] -= 1;
        true
    }

    /// Remove a cell from the route.
    ///
    /// Returns `false`, changing nothing, if the cell was not occupied.
    pub fn unlock(&mut self, index: CellId) -> bool {
        if !self.occupied[index] {
            return false;
        }
        self.occupied[index] = false;
        self.remaining += 1;
        if self.valid_end[index] {
            self.valid_end_remaining += 1;
        }
        self.row_remaining[self.grid.row(index)] += 1;
        self.column_remaining[self.grid.column(index)] += 1;
        true
    }

    /// Lock `index` for as long as the returned guard lives.
    ///
    /// The guard dereferences to the state, so the recursion below it keeps
    /// working on the same value; dropping the guard unlocks the cell on
    /// every exit path. A guard over an already occupied cell unlocks
    /// nothing.
    pub fn lock_guard(&mut self, index: CellId) -> LockGuard<'_> {
        let locked = self.lock(index);
        LockGuard {
            state: self,
            index,
            locked,
        }
    }

    /// Unvisited neighbours of `index`.
    pub fn available_neighbors(&self, index: CellId) -> Neighbors {
        let mut neighbors = self.grid.neighbors(index);
        neighbors.retain(|&mut next| !self.occupied[next]);
        neighbors
    }

    /// Number of unvisited neighbours of `index`.
    pub fn available_count(&self, index: CellId) -> usize {
        self.grid
            .neighbors(index)
            .iter()
            .filter(|&&next| !self.occupied[next])
            .count()
    }

    /// Temporarily mark a cell as occupied without touching any counter.
    ///
    /// Used by lookahead probes that must hide cells from
    /// [`SearchState::available_neighbors`]. Returns `true` if the cell was
    /// unoccupied and is now marked; the caller must then clear it with
    /// [`SearchState::clear_probe`] before handing the state back.
    pub(crate) fn mark_probe(&mut self, index: CellId) -> bool {
        if self.occupied[index] {
            return false;
        }
        self.occupied[index] = true;
        true
    }

    pub(crate) fn clear_probe(&mut self, index: CellId) {
        self.occupied[index] = false;
    }
}

/// Scoped lock on one cell; see [`SearchState::lock_guard`].
#[derive(Debug)]
pub struct LockGuard<'a> {
    state: &'a mut SearchState,
    index: CellId,
    locked: bool,
}

impl Deref for LockGuard<'_> {
    type Target = SearchState;

    fn deref(&self) -> &SearchState {
        self.state
    }
}

impl DerefMut for LockGuard<'_> {
    fn deref_mut(&mut self) -> &mut SearchState {
        self.state
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        if self.locked {
            self.state.unlock(self.index);
        }
    }
}
