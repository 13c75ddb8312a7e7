// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Corner accessibility.
//!
//! A corner has two neighbours, both edge cells. Once one of them is on the
//! route, an unvisited corner can only be entered and never left, which
//! makes it the route end. Corners are never valid ends, so the route is
//! dead unless the candidate itself is that last neighbour and is about to
//! step into the corner.

use super::PruneReason;
use crate::geometry::CellId;
use crate::state::SearchState;

/// Check the three non-origin corners before visiting `candidate`.
///
/// Only non-corner edge cells can change a corner's neighbourhood, so other
/// candidates pass unchecked.
pub fn check_corners(
    state: &SearchState,
    corners: &[CellId],
    candidate: CellId,
) -> Result<(), PruneReason> {
    let grid = state.grid();
    if !grid.is_edge(candidate) || grid.is_corner(candidate) {
        return Ok(());
    }

    for &corner in corners {
        if state.is_occupied(corner) {
            continue;
        }
        let exits = state.available_neighbors(corner);
        match exits.as_slice() {
            [] => return Err(PruneReason::InaccessibleCorner { corner }),
            [only] if *only != candidate => return Err(PruneReason::InaccessibleCorner { corner }),
            _ => {}
        }
    }
    Ok(())
}
