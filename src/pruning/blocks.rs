// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row and column blocks.
//!
//! When the candidate is the last unvisited cell of its row, visiting it
//! turns the row into a wall. If unvisited cells remain both above and
//! below, the route can continue into one side only and never cross back.
//! Columns are handled the same way.

use super::{Axis, PruneReason};
use crate::geometry::CellId;
use crate::state::SearchState;

/// Check whether visiting the middle cell `candidate` completes a separating
/// row or column. Edge cells pass unchecked.
pub fn check_blocks(state: &SearchState, candidate: CellId) -> Result<(), PruneReason> {
    let grid = state.grid();
    if !grid.is_middle(candidate) {
        return Ok(());
    }

    let row = grid.row(candidate);
    if splits(state.row_remaining(), row) {
        return Err(PruneReason::RouteBlocked {
            axis: Axis::Row,
            line: row,
        });
    }
    let column = grid.column(candidate);
    if splits(state.column_remaining(), column) {
        return Err(PruneReason::RouteBlocked {
            axis: Axis::Column,
            line: column,
        });
    }
    Ok(())
}

/// Whether taking the last unvisited cell of `line` leaves unvisited cells
/// on both sides of it. `remaining` still counts the candidate.
fn splits(remaining: &[usize], line: usize) -> bool {
    remaining[line] == 1
        && remaining[..line].iter().any(|&count| count > 0)
        && remaining[line + 1..].iter().any(|&count| count > 0)
}
